use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status
/// lines to stderr so they don't interfere with the summary on stdout.
/// Markers are coloured only when stderr is a terminal.
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn format_line(&self, marker: Marker, message: &str) -> String {
        let tag = marker.tag();
        if !self.colored {
            return format!("{} {}", tag, message);
        }
        match marker {
            Marker::Info => format!("{} {}", tag.blue().bold(), message),
            Marker::Success => format!("{} {}", tag.green().bold(), message),
            Marker::Error => format!("{} {}", tag.red().bold(), message),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Info,
    Success,
    Error,
}

impl Marker {
    fn tag(self) -> &'static str {
        match self {
            Marker::Info => "[*]",
            Marker::Success => "[+]",
            Marker::Error => "[!]",
        }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", self.format_line(Marker::Info, message));
    }

    fn report_success(&self, message: &str) {
        eprintln!("{}", self.format_line(Marker::Success, message));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.format_line(Marker::Error, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        let reporter = StderrProgressReporter { colored: false };
        assert_eq!(
            reporter.format_line(Marker::Info, "Parsing scan.xml"),
            "[*] Parsing scan.xml"
        );
        assert_eq!(reporter.format_line(Marker::Success, "done"), "[+] done");
        assert_eq!(reporter.format_line(Marker::Error, "oops"), "[!] oops");
    }

    #[test]
    fn test_colored_format_keeps_message() {
        let reporter = StderrProgressReporter { colored: true };
        let line = reporter.format_line(Marker::Error, "oops");
        assert!(line.contains("[!]"));
        assert!(line.ends_with(" oops"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_progress_reporter_does_not_panic() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
        reporter.report_success("Test success");
        reporter.report_error("Test error");
    }
}
