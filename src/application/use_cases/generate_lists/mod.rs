use crate::application::dto::{ListsRequest, ListsResponse};
use crate::application::read_models::CategorySummary;
use crate::ports::outbound::{ListSet, ListWriter, ProgressReporter, ScanReportReader};
use crate::scan_classification::domain::{CategoryRules, ClassificationResult};
use crate::scan_classification::services::Classifier;
use crate::shared::error::ListsError;
use crate::shared::Result;

/// GenerateListsUseCase - Core use case turning a scan report into host lists
///
/// This use case orchestrates the Parser → Classifier → Writer pipeline using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - ScanReportReader implementation
/// * `LW` - ListWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateListsUseCase<SR, LW, PR> {
    report_reader: SR,
    list_writer: LW,
    progress_reporter: PR,
    rules: CategoryRules,
}

impl<SR, LW, PR> GenerateListsUseCase<SR, LW, PR>
where
    SR: ScanReportReader,
    LW: ListWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateListsUseCase with injected dependencies
    pub fn new(
        report_reader: SR,
        list_writer: LW,
        progress_reporter: PR,
        rules: CategoryRules,
    ) -> Self {
        Self {
            report_reader,
            list_writer,
            progress_reporter,
            rules,
        }
    }

    /// Executes the list generation use case
    ///
    /// # Errors
    /// Returns an error if the report cannot be read or parsed, or if it
    /// contains no open ports at all (`ListsError::EmptyResult`). In the
    /// latter case nothing is written.
    pub fn execute(&self, request: ListsRequest) -> Result<ListsResponse> {
        // Step 1: Read and parse the report
        let classification = self.read_and_classify(&request)?;

        // Step 2: Refuse to write empty lists
        if classification.is_empty() {
            return Err(ListsError::EmptyResult.into());
        }

        self.progress_reporter.report(&format!(
            "Found {} open ports on {} unique hosts",
            classification.open_port_count(),
            classification.host_count()
        ));

        // Step 3: Write the lists
        self.progress_reporter.report(&format!(
            "Saving results to {}",
            request.output_dir.display()
        ));
        let lists = ListSet::from_classification(&classification);
        let write_report = self.list_writer.write_lists(&request.output_dir, &lists);

        // Step 4: Build the response
        let summary = CategorySummary::from_classification(&classification);
        Ok(ListsResponse::new(classification, write_report, summary))
    }

    fn read_and_classify(&self, request: &ListsRequest) -> Result<ClassificationResult> {
        self.progress_reporter
            .report(&format!("Parsing {}", request.input_path.display()));

        let hosts = self.report_reader.read_hosts(&request.input_path)?;

        Ok(Classifier::new(&self.rules).classify_hosts(&hosts))
    }
}
