use crate::libs::task::TaskRecord;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[TaskRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "OWNER", "TITLE", "COMPLETED"]);
        for task in tasks {
            table.add_row(row![task.id, task.owner_id, task.title, task.completed]);
        }
        table.printstd();

        Ok(())
    }
}
