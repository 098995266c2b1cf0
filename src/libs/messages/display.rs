//! Display implementation for application messages.
//!
//! Converts structured [`Message`] values into the human-readable text used
//! for terminal output and log lines. Keeping every user-facing string in
//! one place keeps wording consistent and makes the messages testable.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Sync
            Message::SyncStarted => "Starting task sync".to_string(),
            Message::FetchingData(url) => format!("Fetching tasks from {}", url),
            Message::FetchStatus(status) => format!("HTTP GET response status: {}", status),
            Message::FetchSucceeded => "Data fetched successfully".to_string(),
            Message::FetchFailedStatus(status) => format!("Failed to fetch data: {}", status),
            Message::FetchFault(e) => format!("Error fetching data: {}", e),
            Message::FetchedRecords(count) => format!("Fetched {} records", count),
            Message::ProceedingWithEmptyFetch => "Proceeding with an empty record set".to_string(),
            Message::SyncFinished(date) => format!("Sync finished on {}", date),

            // Store
            Message::StoreStarted => "Starting to store data in the database".to_string(),
            Message::StoredRecord(id, title) => format!("Stored item: {} - {}", id, title),
            Message::StoreCompleted(count) => format!("Data stored successfully ({} records)", count),
            Message::StoreFault(e) => format!("Error while storing data: {}", e),
            Message::SessionClosed => "Database session closed".to_string(),

            // Tasks
            Message::TasksNotFound => "No stored tasks found".to_string(),
            Message::TasksHeader => "Stored tasks".to_string(),

            // Configuration
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptFeedUrl => "Enter the task feed URL".to_string(),

            // Migrations
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
        };
        write!(f, "{}", text)
    }
}
