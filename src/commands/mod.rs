//! Command-line interface definition and dispatch.

pub mod add;
pub mod done;
pub mod init;
pub mod list;
pub mod rm;
pub mod voice;

use crate::api::TaskApi;
use crate::libs::config::Config;
use crate::libs::controller::TaskListController;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Rm(rm::RmArgs),
    #[command(about = "Add a task by voice")]
    Voice(voice::VoiceArgs),
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
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args).await,
            Commands::Voice(args) => voice::cmd(args).await,
        }
    }
}

/// Builds a controller over the configured task service.
pub(crate) fn controller() -> Result<TaskListController<TaskApi>> {
    let config = Config::read()?;
    Ok(TaskListController::new(TaskApi::new(&config.api_url()?)))
}
