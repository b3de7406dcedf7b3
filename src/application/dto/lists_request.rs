use std::path::PathBuf;

/// Default directory the lists are written to
pub const DEFAULT_OUTPUT_DIR: &str = "./lists";

/// ListsRequest - Request DTO for the list generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListsRequest {
    /// Path to the Nmap XML report
    pub input_path: PathBuf,
    /// Directory the list files are written to
    pub output_dir: PathBuf,
}

impl ListsRequest {
    pub fn new(input_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_path,
            output_dir,
        }
    }
}
