use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "An append-only daily journal for the command line", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Don't open the journal in the editor afterwards
    #[arg(long, global = true)]
    pub no_editor: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the journal, inserting today's heading if needed
    #[command(alias = "o")]
    Open,

    /// Append text to the latest entry (prompts when TEXT is omitted)
    #[command(alias = "a")]
    Append {
        /// Text to append
        #[arg(required = false)]
        text: Option<String>,
    },

    /// Dispatch a journal URL route (journal/open, journal/append?text=...)
    Route {
        /// The route, bare or as a daybook:// URL
        url: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., heading-date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the journal document path
    Path,
}
