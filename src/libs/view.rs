use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the task collection as a table. Tasks marked
    /// deletion-in-progress show a removing indicator in place of status.
    pub fn tasks(tasks: &[Task], is_deleting: impl Fn(i64) -> bool) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "STATUS", "PRIORITY", "DUE", "CATEGORY"]);
        for task in tasks {
            let status = if is_deleting(task.id) {
                "removing...".to_string()
            } else {
                task.status.to_string()
            };
            let due = task.due_date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".to_string());
            table.add_row(row![task.id, task.text, status, task.priority, due, task.category]);
        }
        table.printstd();
    }
}
