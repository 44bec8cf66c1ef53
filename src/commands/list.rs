use crate::libs::messages::Message;
use crate::libs::task::{Category, CategoryFilter, DateFilter};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks in this category
    #[arg(short, long, value_enum)]
    category: Option<Category>,
    /// Show only tasks in this due-date bucket
    #[arg(short, long, value_enum)]
    date: Option<DateFilter>,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let category = args.category.map(CategoryFilter::Only).unwrap_or_default();
    let date = args.date.unwrap_or_default();

    let mut controller = super::controller()?.with_filters(category, date);
    controller.refresh().await?;

    if controller.tasks().is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(controller.tasks(), |id| controller.is_deleting(id));
    Ok(())
}
