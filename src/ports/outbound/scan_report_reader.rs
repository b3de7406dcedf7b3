use crate::scan_classification::domain::HostRecord;
use crate::shared::Result;
use std::path::Path;

/// ScanReportReader port for loading host records from a scan report
///
/// This port abstracts both the file system access and the report format.
pub trait ScanReportReader {
    /// Reads the report at `path` and returns every host that is up, has an
    /// IPv4 address and a ports section, with only its open ports kept
    ///
    /// # Errors
    /// Returns a `ListsError` if:
    /// - The report does not exist (`NotFound`)
    /// - The content is not a well-formed report or a port id is not numeric (`MalformedInput`)
    fn read_hosts(&self, path: &Path) -> Result<Vec<HostRecord>>;
}
