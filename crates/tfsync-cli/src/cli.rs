//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tfsync - Bring remote resources under terraform management
#[derive(Parser, Debug)]
#[command(name = "tfsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file applied over tfsync.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Terraform binary to run
    #[arg(long, global = true, env = "TFSYNC_TERRAFORM")]
    pub terraform: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Declare and import remote resources that are not yet in the configuration
    ///
    /// Examples:
    ///   tfsync import onelogin_users --inventory export.json
    ///   tfsync import onelogin_apps --id 42 --auto-approve
    ///   tfsync import aws_iam_user --dry-run
    Import {
        /// Resource type, e.g. onelogin_apps
        resource_type: String,

        #[command(flatten)]
        target: TargetArgs,

        /// Do not ask for confirmation
        #[arg(long)]
        auto_approve: bool,

        /// Show what would be declared and imported without changing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Re-emit the configuration file from the current state snapshot
    Render {
        /// Configuration file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// State snapshot to read
        #[arg(long)]
        state: Option<PathBuf>,

        /// Print a unified diff instead of writing the file
        #[arg(long)]
        diff: bool,
    },

    /// Show which remote resources and providers are not yet declared
    Plan {
        /// Resource type, e.g. onelogin_apps
        resource_type: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// List supported resource types
    ListTypes,
}

/// Which remote resources to look at and where they go.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// A single remote id; all resources of the type when omitted
    #[arg(long)]
    pub id: Option<String>,

    /// Configuration file to synchronize
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Inventory export used as the remote
    #[arg(long)]
    pub inventory: Option<PathBuf>,
}
