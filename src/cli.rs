use clap::Parser;
use std::path::PathBuf;

/// Nmap XML parser - Creates categorized IP lists from Nmap scan results
#[derive(Parser, Debug)]
#[command(name = "nmap2lists")]
#[command(version)]
#[command(
    about = "Nmap XML parser - Creates categorized IP lists from Nmap scan results",
    long_about = None,
    after_help = "Example:\n    nmap2lists full-sweep.xml --dir ./output"
)]
pub struct Args {
    /// Path to Nmap XML file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Directory to save results (default: ./lists)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./nmap2lists.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_only() {
        let args = Args::try_parse_from(["nmap2lists", "scan.xml"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("scan.xml"));
        assert!(args.dir.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_short_dir() {
        let args = Args::try_parse_from(["nmap2lists", "scan.xml", "-d", "out"]).unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_long_dir_and_config() {
        let args = Args::try_parse_from([
            "nmap2lists",
            "--dir",
            "./output",
            "scan.xml",
            "--config",
            "cfg.yml",
        ])
        .unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("./output")));
        assert_eq!(args.config, Some(PathBuf::from("cfg.yml")));
        assert_eq!(args.input_file, PathBuf::from("scan.xml"));
    }

    #[test]
    fn test_missing_input_file_is_error() {
        assert!(Args::try_parse_from(["nmap2lists"]).is_err());
    }
}
