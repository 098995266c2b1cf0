//! The sync batch job: fetch the feed, store completed tasks.
//!
//! This is the default command and the reason the application exists. The
//! run is one linear pass with two independent fault boundaries: a fetch
//! fault degrades to an explicit empty record set, and a store fault (after
//! the store writer has already rolled the batch back) is logged and
//! swallowed. Either way the process finishes and exits 0 — the log output
//! is the only failure feedback channel.

use crate::api::TodoFeed;
use crate::db::tasks::Tasks;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_error, msg_info};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    msg_info!(Message::SyncStarted);

    let config = Config::read()?;
    let feed = TodoFeed::new(&config.feed.unwrap_or_default());

    // Fetch boundary. The fallback on a transport fault is an explicit
    // empty record set, so the store step always receives a bound input.
    let records = match feed.fetch().await {
        Ok(outcome) => outcome.into_records(),
        Err(e) => {
            msg_error!(Message::FetchFault(e.to_string()));
            msg_info!(Message::ProceedingWithEmptyFetch);
            Vec::new()
        }
    };
    msg_info!(Message::FetchedRecords(records.len()));

    // Store boundary. A fault here means the batch was rolled back in full.
    match Tasks::new().and_then(|mut tasks| tasks.store_completed(&records)) {
        Ok(_) => {}
        Err(e) => msg_error!(Message::StoreFault(e.to_string())),
    }
    msg_info!(Message::SessionClosed);

    msg_info!(Message::SyncFinished(Local::now().format("%B %-d, %Y").to_string()));
    Ok(())
}
