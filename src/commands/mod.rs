pub mod decide;
pub mod entries;
pub mod init;
pub mod refresh;
pub mod submit;
pub mod sum;
pub mod warnings;

use crate::{
    api::BackendClient,
    libs::{config::Config, entry::Decision, messages::Message},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Recompute overtime warnings from the backend and cache them")]
    Refresh,
    #[command(about = "Show the cached overtime warnings")]
    Warnings,
    #[command(about = "List time entries awaiting approval")]
    Entries(entries::EntriesArgs),
    #[command(about = "Approve pending time entries")]
    Approve(decide::DecideArgs),
    #[command(about = "Reject pending time entries")]
    Reject(decide::DecideArgs),
    #[command(about = "Submit a new time entry")]
    Submit(submit::SubmitArgs),
    #[command(about = "Get per-day work-time totals")]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Refresh => refresh::cmd().await,
            Commands::Warnings => warnings::cmd(),
            Commands::Entries(args) => entries::cmd(args).await,
            Commands::Approve(args) => decide::cmd(args, Decision::Approve).await,
            Commands::Reject(args) => decide::cmd(args, Decision::Reject).await,
            Commands::Submit(args) => submit::cmd(args).await,
            Commands::Sum(args) => sum::cmd(args).await,
        }
    }
}

/// Builds a backend client from the stored configuration and environment.
pub(crate) fn backend_client() -> Result<BackendClient> {
    let config = Config::read()?.with_env_overrides();
    let backend = config.backend.ok_or_else(|| msg_error_anyhow!(Message::BackendNotConfigured))?;
    Ok(BackendClient::new(&backend)?)
}
