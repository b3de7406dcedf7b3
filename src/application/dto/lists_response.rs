use crate::application::read_models::CategorySummary;
use crate::ports::outbound::WriteReport;
use crate::scan_classification::domain::ClassificationResult;

/// ListsResponse - Response DTO from the list generation use case
#[derive(Debug)]
pub struct ListsResponse {
    /// The classification the lists were built from
    pub classification: ClassificationResult,
    /// What was written where, including recovered failures
    pub write_report: WriteReport,
    /// Per-category host counts for the final report
    pub summary: CategorySummary,
}

impl ListsResponse {
    pub fn new(
        classification: ClassificationResult,
        write_report: WriteReport,
        summary: CategorySummary,
    ) -> Self {
        Self {
            classification,
            write_report,
            summary,
        }
    }
}
