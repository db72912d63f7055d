use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediatriage")]
#[command(author, version, about = "Media library triage and remediation planning tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a catalog manifest with per-file triage results
    Scan {
        /// Catalog manifest to load (overrides config)
        manifest: Option<PathBuf>,

        /// Rebase catalog paths onto this directory
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show remediation actions and reasons for one catalog entry
    Inspect {
        /// Path (or name) of the entry inside the manifest
        #[arg(required = true)]
        file: PathBuf,

        /// Catalog manifest to load (overrides config)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a remediation plan and print the remux command it freezes
    Plan {
        /// Path (or name) of the entry inside the manifest
        #[arg(required = true)]
        file: PathBuf,

        /// Track language assignment, e.g. --set audio_0=eng (repeatable)
        #[arg(long = "set", value_name = "TRACK=LANG")]
        set: Vec<String>,

        /// Catalog manifest to load (overrides config)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the handoff URL for the external re-encode tool
    Handoff {
        /// Path of the file to open in the tool
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
