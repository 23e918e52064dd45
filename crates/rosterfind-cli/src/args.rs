use clap::{Parser, Subcommand};
use rosterfind_core::search::{DEFAULT_HIGH_KEY, DEFAULT_LOW_KEY};

/// CLI arguments for rosterfind
#[derive(Debug, Parser)]
#[command(
    name = "rosterfind",
    version,
    about = "Locate a record in a sequentially keyed roster by Arabic name, one probe at a time"
)]
pub struct CliArgs {
    /// Roster lookup form endpoint (required by `find` and `audit`)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Lowest key to consider (inclusive)
    #[arg(long, global = true, default_value_t = DEFAULT_LOW_KEY)]
    pub low: u32,

    /// Highest key to consider (inclusive)
    #[arg(long, global = true, default_value_t = DEFAULT_HIGH_KEY)]
    pub high: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Binary-search the roster for a person by name
    Find {
        /// First (given) name
        first: String,

        /// Second (father's) name
        last: String,

        /// Directory result reports are written to
        #[arg(long, default_value = "results")]
        results_dir: String,

        /// Print the outcome as JSON instead of the text summary
        #[arg(long)]
        json: bool,

        /// Skip writing the report file
        #[arg(long)]
        no_report: bool,

        /// Courtesy pause between probes, in milliseconds
        #[arg(long, default_value_t = 500)]
        pause_ms: u64,

        /// Same-key retries after a failed probe round trip
        #[arg(long, default_value_t = 2)]
        retries: u32,

        /// Per-probe timeout, in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },

    /// Sample the key range and verify records come back in collation order
    Audit {
        /// Number of evenly spaced keys to probe
        #[arg(long, default_value_t = 40)]
        samples: u32,
    },

    /// Show how two names collate relative to each other
    Compare {
        name1: String,
        name2: String,
    },

    /// Print a name's canonical form and match key
    Normalize {
        name: String,
    },
}
