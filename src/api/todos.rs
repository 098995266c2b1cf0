use crate::libs::config::FeedConfig;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Result of one fetch cycle against the task feed.
///
/// A non-success HTTP status is data, not an error: callers can inspect the
/// status or degrade to an empty record set via [`FetchOutcome::into_records`].
/// Only transport-level faults surface as `Err` from [`TodoFeed::fetch`].
#[derive(Debug)]
pub enum FetchOutcome {
    /// Status 200 with a decoded JSON array, in response order.
    Success(Vec<Value>),
    /// Any non-200 status; the body is discarded.
    HttpFailure(StatusCode),
}

impl FetchOutcome {
    /// Unwraps the fetched records, degrading an HTTP failure to an empty set.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            FetchOutcome::Success(records) => records,
            FetchOutcome::HttpFailure(_) => Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// HTTP client for the remote task feed.
#[derive(Debug)]
pub struct TodoFeed {
    client: Client,
    url: String,
}

impl TodoFeed {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
        }
    }

    /// Performs one GET against the feed.
    ///
    /// No retries; the transport default timeout applies. Network faults and
    /// body decode failures propagate to the caller.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        msg_info!(Message::FetchingData(self.url.clone()));

        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        msg_info!(Message::FetchStatus(status.as_u16()));

        if status == StatusCode::OK {
            let records = res.json::<Vec<Value>>().await?;
            msg_info!(Message::FetchSucceeded);
            Ok(FetchOutcome::Success(records))
        } else {
            msg_error!(Message::FetchFailedStatus(status.as_u16()));
            Ok(FetchOutcome::HttpFailure(status))
        }
    }
}
