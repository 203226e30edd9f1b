use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jotter", version = get_version())]
#[command(about = "Interactive shell for small plain-text notes", long_about = None)]
pub struct Cli {
    /// Directory notes are saved to [default: savedNotes]
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Extension notes are saved with [default: .note]
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// JSON config file with `save_dir` and `file_ext`
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging (to stderr, or to --log-dir)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to rotating files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "jotter",
            "--dir",
            "notes",
            "--ext",
            "md",
            "--config",
            "j.json",
            "-v",
            "--log-dir",
            "logs",
        ]);
        assert_eq!(cli.dir, Some(PathBuf::from("notes")));
        assert_eq!(cli.ext.as_deref(), Some("md"));
        assert_eq!(cli.config, Some(PathBuf::from("j.json")));
        assert!(cli.verbose);
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn no_flags() {
        let cli = Cli::parse_from(["jotter"]);
        assert!(cli.dir.is_none());
        assert!(cli.ext.is_none());
        assert!(!cli.verbose);
    }
}
