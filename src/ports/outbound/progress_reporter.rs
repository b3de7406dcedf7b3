/// ProgressReporter port for reporting status during a run
///
/// This port abstracts status output (e.g., to stderr) so that the
/// application core never prints directly.
pub trait ProgressReporter {
    /// Reports an informational step, e.g. "Parsing scan.xml"
    fn report(&self, message: &str);

    /// Reports a step that completed successfully, e.g. a saved file
    fn report_success(&self, message: &str);

    /// Reports an error or warning that did not abort the run
    fn report_error(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_success(&self, message: &str) {
        (**self).report_success(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }
}
