use crate::scan_classification::domain::ClassificationResult;
use crate::shared::error::ListsError;
use std::path::{Path, PathBuf};

/// Name of the file holding every "address port service" line
pub const ALL_PORTS_FILE: &str = "all_ports.txt";

/// Name of the file holding every address with an open port
pub const ALL_IPS_FILE: &str = "all_ips.txt";

/// The flat text lists derived from one classification, ready to write
///
/// Every list is already sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSet {
    pub all_ports: Vec<String>,
    pub all_ips: Vec<String>,
    /// (category name, sorted addresses), sorted by name; empty categories are omitted
    pub categories: Vec<(String, Vec<String>)>,
}

impl ListSet {
    pub fn from_classification(result: &ClassificationResult) -> Self {
        let all_ips = result
            .all_addresses
            .iter()
            .map(|a| a.as_str().to_string())
            .collect();

        let categories = result
            .categories
            .iter()
            .filter(|(_, hosts)| !hosts.is_empty())
            .map(|(name, hosts)| {
                (
                    name.clone(),
                    hosts.iter().map(|a| a.as_str().to_string()).collect(),
                )
            })
            .collect();

        Self {
            all_ports: result.sorted_port_lines(),
            all_ips,
            categories,
        }
    }
}

/// A list file that was written successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenList {
    /// Category name, or `None` for the two summary files
    pub category: Option<String>,
    pub path: PathBuf,
    pub entries: usize,
}

/// Outcome of writing a `ListSet`
///
/// A write failure on one file never prevents the others from being written,
/// so the report can hold successes and failures at the same time.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Directory the files actually went to
    pub output_dir: PathBuf,
    /// Set when the requested directory was unusable and the working directory was used
    pub directory_fallback: Option<ListsError>,
    pub written: Vec<WrittenList>,
    pub failures: Vec<ListsError>,
}

impl WriteReport {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// ListWriter port for persisting the generated lists
pub trait ListWriter {
    /// Writes `all_ports.txt`, `all_ips.txt` and one `<category>.txt` per
    /// non-empty category into `output_dir`
    ///
    /// Directory and per-file problems are recovered and recorded in the
    /// returned report rather than returned as errors.
    fn write_lists(&self, output_dir: &Path, lists: &ListSet) -> WriteReport;
}

impl<T: ListWriter + ?Sized> ListWriter for &T {
    fn write_lists(&self, output_dir: &Path, lists: &ListSet) -> WriteReport {
        (**self).write_lists(output_dir, lists)
    }
}
