use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recfile")]
#[command(about = "Line-file record manager with a flat-file user registry", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base directory for record files (defaults to RECFILE_DATA or the
    /// platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the records of a file with their 1-based indexes
    Read {
        /// Record file name, relative to the base directory
        file: String,
    },

    /// Like read, plus a trailing record total
    #[command(alias = "ls")]
    List {
        /// Record file name, relative to the base directory
        file: String,
    },

    /// Append a record to a file (created on first use)
    Create {
        /// Record file name, relative to the base directory
        file: String,

        /// Record text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace the record at an index
    Update {
        /// Record file name, relative to the base directory
        file: String,

        /// 1-based record index
        index: String,

        /// Replacement text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove the record at an index
    Delete {
        /// Record file name, relative to the base directory
        file: String,

        /// 1-based record index
        index: String,
    },

    /// Register a new user
    Register { email: String, password: String },

    /// Check credentials against the registry (exit 0 on success, 1 otherwise)
    Login { email: String, password: String },

    // Unknown commands fall through to the usage text rather than a clap
    // error, matching the tool's fixed-usage contract.
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
