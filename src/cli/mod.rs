//! CLI argument parsing

mod common;

use clap::{Args, Parser, Subcommand};

use crate::config::{defaults, endpoint};

pub use common::{DisplayArgs, FilterArgs, FilteredArgs, ListingArgs, OutputFormat};

/// Cloud inventory lister CLI
#[derive(Parser, Debug)]
#[command(name = "cloudls")]
#[command(version)]
#[command(
    about = "List cloud inventory resources as filtered, sorted tables",
    long_about = None
)]
pub struct Cli {
    /// Inventory API endpoint URL
    #[arg(long, global = true, env = endpoint::ENV_VAR, default_value = endpoint::DEFAULT)]
    pub endpoint: String,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Read resources from a JSON/YAML snapshot file instead of the API
    #[arg(long, global = true, env = "CLOUDLS_SNAPSHOT", value_name = "FILE")]
    pub snapshot: Option<std::path::PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Do not show the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource listings
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List compute instances
    #[command(visible_alias = "ls")]
    Instances(FilteredArgs),

    /// List IAM users
    Users(ListingArgs),

    /// List IAM groups
    Groups(ListingArgs),

    /// List IAM roles
    Roles(ListingArgs),

    /// List IAM policies
    Policies(ListingArgs),

    /// List block storage volumes
    Volumes(FilteredArgs),

    /// List volume snapshots owned by the caller's account
    Snapshots(FilteredArgs),

    /// List object storage buckets
    Buckets(FilteredArgs),

    /// List DNS zones and their records
    Zones(ZonesArgs),

    /// List machine images owned by the caller
    Images(FilteredArgs),

    /// List security groups
    SecurityGroups(FilteredArgs),

    /// List log groups and streams
    Logs(LogsArgs),

    /// List container clusters
    Clusters(ListingArgs),

    /// List container tasks across all clusters
    Tasks(ListingArgs),

    /// List SSH key pairs
    KeyPairs(ListingArgs),

    /// List VPC subnets
    Subnets(FilteredArgs),

    /// List database tables
    Tables(ListingArgs),

    /// List spot fleet requests
    #[command(visible_alias = "sfrs")]
    SpotRequests(ListingArgs),

    /// List spot instance requests
    #[command(visible_alias = "sirs")]
    SpotInstanceRequests(ListingArgs),

    /// List shared filesystems, one row per mount target
    Filesystems(FilesystemsArgs),

    /// Show the console output of an instance
    Console(ConsoleArgs),
}

impl Command {
    /// Human-readable resource name for progress messages
    pub fn resource_name(&self) -> &'static str {
        match self {
            Command::Instances(_) => "instances",
            Command::Users(_) => "users",
            Command::Groups(_) => "groups",
            Command::Roles(_) => "roles",
            Command::Policies(_) => "policies",
            Command::Volumes(_) => "volumes",
            Command::Snapshots(_) => "snapshots",
            Command::Buckets(_) => "buckets",
            Command::Zones(_) => "DNS zones",
            Command::Images(_) => "images",
            Command::SecurityGroups(_) => "security groups",
            Command::Logs(_) => "log streams",
            Command::Clusters(_) => "clusters",
            Command::Tasks(_) => "tasks",
            Command::KeyPairs(_) => "key pairs",
            Command::Subnets(_) => "subnets",
            Command::Tables(_) => "tables",
            Command::SpotRequests(_) => "spot fleet requests",
            Command::SpotInstanceRequests(_) => "spot instance requests",
            Command::Filesystems(_) => "filesystems",
            Command::Console(_) => "console output",
        }
    }

    /// Requested output format
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Command::Instances(args)
            | Command::Volumes(args)
            | Command::Snapshots(args)
            | Command::Buckets(args)
            | Command::Images(args)
            | Command::SecurityGroups(args)
            | Command::Subnets(args) => args.listing.display.output,
            Command::Users(args)
            | Command::Groups(args)
            | Command::Roles(args)
            | Command::Policies(args)
            | Command::Clusters(args)
            | Command::Tasks(args)
            | Command::KeyPairs(args)
            | Command::Tables(args)
            | Command::SpotRequests(args)
            | Command::SpotInstanceRequests(args) => args.display.output,
            Command::Filesystems(args) => args.listing.display.output,
            Command::Zones(args) => args.display.output,
            Command::Logs(args) => args.display.output,
            Command::Console(_) => OutputFormat::Table,
        }
    }
}

/// Arguments for 'zones'
#[derive(Args, Debug, Clone)]
pub struct ZonesArgs {
    /// Only show these zones (trailing dot optional)
    pub zones: Vec<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for 'logs'
#[derive(Args, Debug, Clone)]
pub struct LogsArgs {
    /// Print the events of these streams instead of listing streams
    #[arg(value_name = "GROUP.STREAM")]
    pub log_streams: Vec<String>,

    /// Only show streams of this log group
    #[arg(long)]
    pub log_group: Option<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for 'filesystems'
#[derive(Args, Debug, Clone)]
pub struct FilesystemsArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Mount target columns appended after the filesystem columns
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub mount_target_columns: Option<Vec<String>>,
}

/// Arguments for 'console'
#[derive(Args, Debug, Clone)]
pub struct ConsoleArgs {
    /// Instance id, or the value of its Name tag
    pub instance: String,
}
