use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "photoindex", bin_name = "photoindex", version = get_version())]
#[command(about = "A local photo gallery catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $PHOTOINDEX_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a photo from an image file, or from piped stdin
    #[command(alias = "add")]
    Capture {
        /// Image file; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },

    /// List photos, newest first
    #[command(alias = "ls")]
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a photo by its index
    #[command(alias = "rm")]
    Delete {
        /// Index as shown by `list` (1 is the newest)
        index: usize,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove photo files missing from the catalog and report catalog entries without a file
    Doctor,

    /// Print the file path of a photo, or of every photo
    Path {
        index: Option<usize>,
    },
}
