use crate::ports::outbound::list_writer::{ALL_IPS_FILE, ALL_PORTS_FILE};
use crate::ports::outbound::{ListSet, ListWriter, ProgressReporter, WriteReport, WrittenList};
use crate::shared::error::ListsError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Which list a file holds; decides the status line printed after writing
#[derive(Debug, Clone, Copy)]
enum ListKind<'n> {
    AllPorts,
    AllIps,
    Category(&'n str),
}

impl ListKind<'_> {
    fn file_name(&self) -> String {
        match self {
            ListKind::AllPorts => ALL_PORTS_FILE.to_string(),
            ListKind::AllIps => ALL_IPS_FILE.to_string(),
            ListKind::Category(name) => format!("{}.txt", name),
        }
    }

    fn success_message(&self, path: &Path, entries: usize) -> String {
        match self {
            ListKind::AllPorts => format!("All ports saved to: {}", path.display()),
            ListKind::AllIps => format!("All IPs saved to: {}", path.display()),
            ListKind::Category(name) => {
                format!("{}: {} hosts saved to {}", name, entries, path.display())
            }
        }
    }

    fn category(&self) -> Option<String> {
        match self {
            ListKind::Category(name) => Some(name.to_string()),
            _ => None,
        }
    }
}

/// FileSystemListWriter adapter for writing list files into a directory
///
/// Each file is written to a temporary file next to its destination and then
/// renamed into place, so an interrupted run never leaves a truncated list.
pub struct FileSystemListWriter<'a, PR> {
    progress_reporter: &'a PR,
}

impl<'a, PR: ProgressReporter> FileSystemListWriter<'a, PR> {
    pub fn new(progress_reporter: &'a PR) -> Self {
        Self { progress_reporter }
    }

    /// Creates `output_dir` (and parents) and checks it is writable
    ///
    /// Falls back to the current working directory if it is not.
    fn prepare_directory(&self, output_dir: &Path) -> (PathBuf, Option<ListsError>) {
        match Self::check_writable(output_dir) {
            Ok(()) => (output_dir.to_path_buf(), None),
            Err(details) => {
                let error = ListsError::OutputDirectory {
                    path: output_dir.to_path_buf(),
                    details,
                };
                self.progress_reporter.report_error(&error.to_string());
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                (cwd, Some(error))
            }
        }
    }

    fn check_writable(dir: &Path) -> std::result::Result<(), String> {
        fs::create_dir_all(dir).map_err(|e| e.to_string())?;

        // Dropping the test file removes it again
        tempfile::Builder::new()
            .prefix(".write_test")
            .tempfile_in(dir)
            .map(drop)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {}", dir.display())
                }
                _ => e.to_string(),
            })
    }

    /// Writes one list; entries are joined by `\n` without a trailing newline
    fn write_list(path: &Path, entries: &[String]) -> std::result::Result<(), ListsError> {
        let to_write_error = |details: String| ListsError::Write {
            path: path.to_path_buf(),
            details,
        };

        if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
            return Err(to_write_error(
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            ));
        }

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut file = NamedTempFile::new_in(dir).map_err(|e| to_write_error(e.to_string()))?;

        file.write_all(entries.join("\n").as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| to_write_error(e.to_string()))?;

        file.persist(path)
            .map_err(|e| to_write_error(e.error.to_string()))?;

        Ok(())
    }

    fn write_and_record(&self, report: &mut WriteReport, kind: ListKind<'_>, entries: &[String]) {
        let path = report.output_dir.join(kind.file_name());

        match Self::write_list(&path, entries) {
            Ok(()) => {
                self.progress_reporter
                    .report_success(&kind.success_message(&path, entries.len()));

                report.written.push(WrittenList {
                    category: kind.category(),
                    path,
                    entries: entries.len(),
                });
            }
            Err(error) => {
                self.progress_reporter.report_error(&error.to_string());
                report.failures.push(error);
            }
        }
    }
}

impl<PR: ProgressReporter> ListWriter for FileSystemListWriter<'_, PR> {
    fn write_lists(&self, output_dir: &Path, lists: &ListSet) -> WriteReport {
        let (dir, fallback) = self.prepare_directory(output_dir);
        let mut report = WriteReport::new(dir);
        report.directory_fallback = fallback;

        self.write_and_record(&mut report, ListKind::AllPorts, &lists.all_ports);
        self.write_and_record(&mut report, ListKind::AllIps, &lists.all_ips);

        for (name, hosts) in &lists.categories {
            if hosts.is_empty() {
                continue;
            }
            self.write_and_record(&mut report, ListKind::Category(name), hosts);
        }

        report
    }
}
