use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, help = "Show only tasks belonging to this owner id")]
    owner: Option<i64>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let filter = match list_args.owner {
        Some(owner) => TaskFilter::ByOwner(owner),
        None => TaskFilter::All,
    };

    let tasks = Tasks::new()?.fetch(filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader);
    View::tasks(&tasks)
}
