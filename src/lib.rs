//! # Tsync - Task Synchronization
//!
//! A command-line utility that fetches task records from a remote feed,
//! keeps the completed ones, and merges them into a local SQLite database.
//!
//! ## Features
//!
//! - **Feed Sync**: Single-shot fetch of a JSON task feed over HTTP
//! - **Completeness Filter**: Only records marked completed are persisted
//! - **Merge-Upsert**: Idempotent insert-or-overwrite keyed on the task id
//! - **Transactional Batches**: Each sync commits fully or not at all
//! - **Task Listing**: Table view of the stored records
//! - **Dual Logging**: Every run logs to stdout and an append-mode log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsync::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
