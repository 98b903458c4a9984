use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "npc-search", version, about = "Keyword search against a local Q&A service")]
pub struct Cli {
    /// Search service root, e.g. http://127.0.0.1:8000 (overrides SEARCH_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides SEARCH_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search once for the given keyword and print the top answer
    Search {
        /// Keyword words are joined with single spaces
        keyword: Vec<String>,
    },

    /// Treat every stdin line as the new input text and search on each change
    Watch,

    /// Read transcript segments from stdin, then search for the full transcript
    Listen {
        /// Do not echo the in-progress transcript to stderr
        #[arg(long)]
        no_stream: bool,

        /// Do not append the language line to the final transcript
        #[arg(long)]
        no_language: bool,

        /// Language reported by the recognizer
        #[arg(long, default_value = "en")]
        language: String,

        /// Length of the recorded audio; enables the time/rate summary
        #[arg(long)]
        audio_secs: Option<f64>,

        /// Upper bound on buffered transcript characters
        #[arg(long, default_value_t = crate::transcript::DEFAULT_MAX_CHARS)]
        max_chars: usize,
    },
}
