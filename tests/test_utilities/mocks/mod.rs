/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_scan_report_reader;

#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_scan_report_reader::MockScanReportReader;
