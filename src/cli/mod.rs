//! Command-line front end: parses arguments, drives the workflow and renders
//! the resulting snapshot.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use license_admin::{Config, MutationWorkflow, RegistryService, SyncController};

pub use output::OutputFormat;

#[derive(Parser)]
#[command(name = "license-admin")]
#[command(version)]
#[command(about = "Manage user license records on a remote registry", long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Registry base URL, overrides the configured one
    #[arg(long, env = "LICENSE_ADMIN_URL")]
    base_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "card")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and show every record
    List,
    /// Create a record; omitted fields take the form defaults
    Create {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        hwid: Option<String>,
        #[arg(long)]
        expire_date: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Edit an existing record; omitted fields keep their current value
    Edit {
        user_id: String,
        #[arg(long)]
        hwid: Option<String>,
        #[arg(long)]
        expire_date: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Delete a record after confirmation
    Delete {
        user_id: String,
        /// Answer yes to the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.registry.base_url = base_url;
    }
    tracing::debug!("Using registry at {}", config.registry.base_url);

    let registry = Arc::new(RegistryService::new(config.registry.clone())?);
    let workflow = MutationWorkflow::new(Arc::new(SyncController::new(registry)));

    match cli.command {
        Commands::List => commands::list(&workflow, cli.format).await?,
        Commands::Create { user_id, hwid, expire_date, message } => {
            let edits = commands::FieldEdits { hwid, expire_date, message };
            commands::create(&workflow, &config.form, user_id, edits, cli.format).await?
        }
        Commands::Edit { user_id, hwid, expire_date, message } => {
            let edits = commands::FieldEdits { hwid, expire_date, message };
            commands::edit(&workflow, &user_id, edits, cli.format).await?
        }
        Commands::Delete { user_id, yes } => {
            commands::delete(&workflow, &user_id, yes, cli.format).await?
        }
    }
    Ok(())
}
