use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(args: DoneArgs) -> Result<()> {
    let mut controller = super::controller()?;
    controller.refresh().await?;
    controller.toggle(args.id).await?;

    msg_success!(Message::TaskUpdated(args.id));
    View::tasks(controller.tasks(), |id| controller.is_deleting(id));
    Ok(())
}
