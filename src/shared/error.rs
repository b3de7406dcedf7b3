use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Lists were written, or the run was interrupted by the user
    Success = 0,
    /// Missing/invalid input file, parse failure, or no open ports found
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for list generation.
///
/// `NotFound`, `NotAFile`, `MalformedInput`, `EmptyResult` and `InvalidConfig`
/// abort the run. `OutputDirectory` and `Write` are recovered by the list writer
/// and only reported.
#[derive(Debug, Error)]
pub enum ListsError {
    #[error(
        "File '{path}' does not exist!\n\n💡 Hint: Please verify the path to the Nmap XML report"
    )]
    NotFound { path: PathBuf },

    #[error("'{path}' is not a file!\n\n💡 Hint: Pass the XML report itself, not a directory or special file")]
    NotAFile { path: PathBuf },

    #[error("Error parsing {path} file\nDetails: {details}\n\n💡 Hint: Generate the report with `nmap -oX <file>`")]
    MalformedInput { path: PathBuf, details: String },

    #[error("No open ports found in the scan results!\n\n💡 Hint: Only hosts reported as \"up\" with \"open\" ports are listed")]
    EmptyResult,

    #[error("Failed to create/access {path}: {details}. Using current directory.")]
    OutputDirectory { path: PathBuf, details: String },

    #[error("Error writing to {path}: {details}")]
    Write { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    InvalidConfig { path: PathBuf, details: String },
}
