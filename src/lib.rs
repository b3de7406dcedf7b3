//! nmap2lists - categorized host lists from Nmap XML reports
//!
//! This library reads an Nmap XML report, sorts every host with open ports
//! into service categories (web, ssh, windows_smb, ...) and writes one flat
//! address list per category, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`scan_classification`): host records, the rule table and the classifier
//! - **Application Layer** (`application`): the list generation use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Nmap XML reader, list file writer, console output
//! - **Shared** (`shared`): Error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use nmap2lists::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = GenerateListsUseCase::new(
//!     NmapXmlReader::new(),
//!     FileSystemListWriter::new(&progress_reporter),
//!     &progress_reporter,
//!     CategoryRules::builtin(),
//! );
//!
//! let request = ListsRequest::new(PathBuf::from("full-sweep.xml"), PathBuf::from("./lists"));
//! let response = use_case.execute(request)?;
//! print!("{}", response.summary.render());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod scan_classification;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::{
        parse_nmap_xml, FileSystemListWriter, NmapXmlReader,
    };
    pub use crate::application::dto::{ListsRequest, ListsResponse};
    pub use crate::application::read_models::{CategoryRow, CategorySummary};
    pub use crate::application::use_cases::GenerateListsUseCase;
    pub use crate::ports::outbound::{
        ListSet, ListWriter, OutputPresenter, ProgressReporter, ScanReportReader, WriteReport,
        WrittenList,
    };
    pub use crate::scan_classification::domain::{
        Category, CategoryRules, ClassificationResult, HostAddress, HostRecord, OpenPort,
        PortEntry, OTHER_CATEGORY,
    };
    pub use crate::scan_classification::services::Classifier;
    pub use crate::shared::error::ListsError;
    pub use crate::shared::Result;
}
