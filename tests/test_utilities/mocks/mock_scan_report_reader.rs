use nmap2lists::prelude::*;
use std::path::Path;

/// Mock ScanReportReader that parses in-memory XML instead of reading a file
pub struct MockScanReportReader {
    content: String,
}

impl MockScanReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ScanReportReader for MockScanReportReader {
    fn read_hosts(&self, _path: &Path) -> Result<Vec<HostRecord>> {
        parse_nmap_xml(&self.content)
    }
}
