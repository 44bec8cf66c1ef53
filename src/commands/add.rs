use crate::libs::messages::Message;
use crate::libs::task::Category;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
    /// Task category
    #[arg(short, long, value_enum, default_value = "personal")]
    category: Category,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut controller = super::controller()?;
    controller.add_task(&args.text, args.category).await?;

    msg_success!(Message::TaskCreated(args.text.trim().to_string()));
    View::tasks(controller.tasks(), |id| controller.is_deleting(id));
    Ok(())
}
