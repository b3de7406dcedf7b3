use crate::scan_classification::domain::{
    CategoryRules, ClassificationResult, HostAddress, HostRecord, PortEntry, OTHER_CATEGORY,
};
use std::collections::BTreeSet;

/// Classifier service that sorts hosts into categories
///
/// This service contains pure business logic: a host lands in every
/// category one of its open ports matches, and in `other` if none do.
pub struct Classifier<'a> {
    rules: &'a CategoryRules,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a CategoryRules) -> Self {
        Self { rules }
    }

    /// Classifies a set of host records
    pub fn classify_hosts(&self, hosts: &[HostRecord]) -> ClassificationResult {
        self.classify(hosts.iter().flat_map(|h| h.port_entries()))
    }

    /// Classifies a flat sequence of (address, port, service) entries
    ///
    /// # Returns
    /// The unsorted line list, the category mapping (including `other` when
    /// non-empty) and the set of all addresses that produced an entry
    pub fn classify<I>(&self, entries: I) -> ClassificationResult
    where
        I: IntoIterator<Item = PortEntry>,
    {
        let mut result = ClassificationResult::default();

        for entry in entries {
            result.port_lines.push(entry.to_string());

            for category in self.rules.matching(entry.port, &entry.service) {
                result
                    .categories
                    .entry(category.name().to_string())
                    .or_default()
                    .insert(entry.address.clone());
            }

            result.all_addresses.insert(entry.address);
        }

        let categorized: BTreeSet<&HostAddress> = result
            .categories
            .iter()
            .filter(|(name, _)| name.as_str() != OTHER_CATEGORY)
            .flat_map(|(_, hosts)| hosts.iter())
            .collect();

        let other: BTreeSet<HostAddress> = result
            .all_addresses
            .iter()
            .filter(|addr| !categorized.contains(addr))
            .cloned()
            .collect();

        if !other.is_empty() {
            result.categories.insert(OTHER_CATEGORY.to_string(), other);
        }

        result
    }
}
