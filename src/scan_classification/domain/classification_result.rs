use super::category::OTHER_CATEGORY;
use super::host_record::HostAddress;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate produced by one classification pass
///
/// Held only for the duration of a run, then serialized to list files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationResult {
    /// One "address port service" line per open port, in report order
    pub port_lines: Vec<String>,
    /// Category name to the addresses in it; only non-empty categories are present
    pub categories: BTreeMap<String, BTreeSet<HostAddress>>,
    /// Every address with at least one open port
    pub all_addresses: BTreeSet<HostAddress>,
}

impl ClassificationResult {
    /// True when no open port was seen at all
    pub fn is_empty(&self) -> bool {
        self.port_lines.is_empty()
    }

    pub fn open_port_count(&self) -> usize {
        self.port_lines.len()
    }

    pub fn host_count(&self) -> usize {
        self.all_addresses.len()
    }

    /// Port lines in lexicographic order, as written to `all_ports.txt`
    pub fn sorted_port_lines(&self) -> Vec<String> {
        let mut lines = self.port_lines.clone();
        lines.sort();
        lines
    }

    pub fn category(&self, name: &str) -> Option<&BTreeSet<HostAddress>> {
        self.categories.get(name)
    }

    /// Hosts whose open ports matched no rule
    pub fn other(&self) -> Option<&BTreeSet<HostAddress>> {
        self.category(OTHER_CATEGORY)
    }
}
