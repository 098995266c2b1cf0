//! API client for the remote task feed.
//!
//! One outbound interface: a single unauthenticated GET returning a JSON
//! array of task records. The client classifies the response into a tagged
//! [`FetchOutcome`] so callers can distinguish "zero records" from "the
//! endpoint refused us" while still being free to treat both as empty.

pub mod todos;

pub use todos::{FetchOutcome, TodoFeed};
