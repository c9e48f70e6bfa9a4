mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "um-access")]
#[command(about = "Inspect user-management permissions and check access")]
#[command(version)]
struct Cli {
    /// Path to the config directory (default: ~/.um-access)
    #[arg(long, global = true, env = "UM_ACCESS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default access configuration
    Init,

    /// List the well-known permissions
    Permissions {
        /// Only list read-only permissions
        #[arg(long)]
        read_only: bool,
    },

    /// Tell whether a permission is read-only
    Classify {
        /// Permission identifier, e.g. USERS_SEARCH
        permission: String,
    },

    /// List configured groups and what they grant
    Groups,

    /// Decide whether the given grants satisfy a required permission
    Check {
        /// Permission required by the action
        required: String,
        /// Permission held directly (repeatable)
        #[arg(long = "grant")]
        grants: Vec<String>,
        /// Group membership (repeatable)
        #[arg(long = "group")]
        groups: Vec<String>,
        /// Configured principal whose grants are added
        #[arg(long)]
        principal: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("um_access=info".parse()?)
                .add_directive("um_auth=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => um_auth::AccessConfig::default_base_dir()?,
    };

    match cli.command {
        Commands::Init => commands::init::run(&base_dir),
        Commands::Permissions { read_only } => commands::permissions::run(read_only),
        Commands::Classify { ref permission } => commands::classify::run(permission),
        Commands::Groups => commands::groups::run(&base_dir),
        Commands::Check {
            ref required,
            ref grants,
            ref groups,
            ref principal,
        } => commands::check::run(&base_dir, required, grants, groups, principal.as_deref()),
    }
}
