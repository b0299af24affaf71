use clap::{ArgGroup, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
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
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Keep track of the books you are reading and the ones you have read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log what the shelf is doing (to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the shelf
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: String,

        /// Put the book straight on the read shelf
        #[arg(short, long)]
        completed: bool,
    },

    /// Show both shelves
    #[command(alias = "ls")]
    List,

    /// Search books by title (no query lists everything)
    #[command(alias = "s")]
    Search {
        /// Words to look for in titles
        query: Vec<String>,
    },

    /// Edit a book; fields not given keep their current value
    #[command(alias = "e")]
    #[command(group(ArgGroup::new("status").args(["completed", "unread"])))]
    Edit {
        /// Id of the book (shown as #id)
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        /// Mark the book as read
        #[arg(long)]
        completed: bool,

        /// Mark the book as unread
        #[arg(long)]
        unread: bool,
    },

    /// Move a book between the unread and read shelves
    #[command(alias = "t")]
    Toggle {
        /// Id of the book (shown as #id)
        id: String,
    },

    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Id of the book (shown as #id)
        id: String,

        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
