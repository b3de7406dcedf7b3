//! Per-category summary shown at the end of a run

use crate::scan_classification::domain::ClassificationResult;
use std::fmt::Write;

/// One summary row
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub hosts: usize,
    /// Share of all hosts with open ports, 0.0..=100.0
    pub percentage: f64,
}

/// Host counts per category, sorted by category name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySummary {
    pub rows: Vec<CategoryRow>,
    pub total_hosts: usize,
    pub open_ports: usize,
}

impl CategorySummary {
    pub fn from_classification(result: &ClassificationResult) -> Self {
        let total_hosts = result.host_count();

        let rows = result
            .categories
            .iter()
            .filter(|(_, hosts)| !hosts.is_empty())
            .map(|(name, hosts)| CategoryRow {
                name: name.clone(),
                hosts: hosts.len(),
                percentage: if total_hosts == 0 {
                    0.0
                } else {
                    hosts.len() as f64 / total_hosts as f64 * 100.0
                },
            })
            .collect();

        Self {
            rows,
            total_hosts,
            open_ports: result.open_port_count(),
        }
    }

    /// Renders the summary block printed after the lists are written
    pub fn render(&self) -> String {
        let mut out = String::from("\n[*] Summary:\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "    {}: {} hosts ({:.1}%)",
                row.name, row.hosts, row.percentage
            );
        }
        let _ = writeln!(
            out,
            "[+] Done! Processed {} unique hosts.",
            self.total_hosts
        );
        out
    }
}
