use crate::export::OutputFormat;
use crate::models::time_of_day::Locale;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSerialStats
/// Release statistics and a dated narrative for a serialized publication
#[derive(Parser)]
#[command(
    name = "rserialstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive release cadence, streaks and a dated narrative from a publication's chapter log",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (built-in defaults, no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Build the release narrative of a publication
    Analyze {
        /// JSON input files; each holds one or more batches of release records
        #[arg(long = "input", short = 'i', value_name = "FILE", required = true, num_args = 1..)]
        inputs: Vec<String>,

        #[arg(long, help = "The publication is complete (adds the completion entry)")]
        finished: bool,

        #[arg(long, value_enum, help = "Label/template language (default from config)")]
        locale: Option<Locale>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write to FILE instead of stdout")]
        output: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Show the hour-of-day release distribution
    Distribution {
        #[arg(long = "input", short = 'i', value_name = "FILE", required = true, num_args = 1..)]
        inputs: Vec<String>,

        /// Keep the K busiest hours and fold the rest into one "other" slice (0 = all)
        #[arg(long, short = 'k', value_name = "K")]
        limit: Option<usize>,

        #[arg(long, value_enum)]
        locale: Option<Locale>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
