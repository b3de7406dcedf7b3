mod cli;

use cli::Args;
use nmap2lists::application::dto::DEFAULT_OUTPUT_DIR;
use nmap2lists::config::{self, ConfigFile};
use nmap2lists::prelude::*;
use nmap2lists::shared::error::{ExitCode, ListsError};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    install_interrupt_handler();

    if let Err(e) = run() {
        eprintln!("[!] {}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        process::exit(ExitCode::Failure.as_i32());
    }
}

/// Ctrl-C ends the run quietly with a success status
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        eprintln!("\n[*] Stopped by user. Exiting...");
        process::exit(ExitCode::Success.as_i32());
    });

    if let Err(e) = result {
        eprintln!("[!] Warning: failed to install interrupt handler: {}", e);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    validate_input_path(&args.input_file)?;

    let progress_reporter = StderrProgressReporter::new();

    // Resolve the output directory from CLI, config file and default
    let config = load_config(args.config.as_deref(), &progress_reporter)?;
    let output_dir = config::resolve_output_dir(
        args.dir.as_deref(),
        config.as_ref(),
        Path::new(DEFAULT_OUTPUT_DIR),
    );

    // Create adapters (Dependency Injection)
    let report_reader = NmapXmlReader::new();
    let list_writer = FileSystemListWriter::new(&progress_reporter);

    let use_case = GenerateListsUseCase::new(
        report_reader,
        list_writer,
        &progress_reporter,
        CategoryRules::builtin(),
    );

    let request = ListsRequest::new(args.input_file, output_dir);
    let response = use_case.execute(request)?;

    StdoutPresenter::new().present(&response.summary.render())?;

    if let Some(notice) = failure_notice(&response.write_report) {
        progress_reporter.report_error(&notice);
    }

    Ok(())
}

/// One-line notice for lists that could not be written, if any
fn failure_notice(report: &WriteReport) -> Option<String> {
    match report.failures.len() {
        0 => None,
        n => Some(format!("{} list(s) failed to write", n)),
    }
}

fn load_config(
    explicit: Option<&Path>,
    progress_reporter: &impl ProgressReporter,
) -> Result<Option<ConfigFile>> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::discover_config(&cwd)?
        }
    };

    if let Some(config) = &config {
        for key in config.unknown_keys() {
            progress_reporter.report_error(&format!(
                "Warning: Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }

    Ok(config)
}

fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ListsError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    if !path.is_file() {
        return Err(ListsError::NotAFile {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(())
}
