use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "tsync.db";

/// Core database handle.
///
/// Opening the database applies all pending migrations, so every caller
/// sees the latest schema.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let mut conn = Self::new_without_migrations()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without touching the schema. Used by the
    /// migration inspection command and by tests that drive migrations
    /// themselves.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        // Another process (e.g. a concurrent `list`) may hold the write lock briefly
        conn.busy_timeout(Duration::from_secs(5))?;

        Ok(conn)
    }
}
