use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: RmArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let mut controller = super::controller()?;
    controller.remove_task(args.id).await?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
