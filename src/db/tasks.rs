//! Store writer for synced task records.
//!
//! Persists the completed records of a fetch cycle into the `tasks` table.
//! The whole batch runs inside one transaction with merge-upsert semantics
//! keyed on `id`: an existing row is overwritten, an absent row is inserted,
//! and any fault rolls the entire batch back.

use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{is_completed, TaskFilter, TaskRecord};
use crate::{msg_debug, msg_info};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde_json::Value;

const UPSERT_TASK: &str = "INSERT INTO tasks (id, userId, title, completed) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(id) DO UPDATE SET userId = excluded.userId, title = excluded.title, completed = excluded.completed";
const SELECT_TASKS: &str = "SELECT id, userId, title, completed FROM tasks";
const WHERE_OWNER: &str = "WHERE userId = ?";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;

        Ok(Tasks { conn: db.conn })
    }

    /// Merges the completed records of a fetch cycle into the table.
    ///
    /// Iterates `records` in input order. A record whose `completed` value
    /// is `true` is converted to a [`TaskRecord`] and upserted by `id`;
    /// `false` and `null` records are skipped. The pass runs inside a single
    /// transaction committed at the end, so a fault on any record (missing
    /// key, wrong type, SQL error) discards the whole batch: the transaction
    /// is rolled back when it goes out of scope without a commit. Returns
    /// the number of rows written.
    pub fn store_completed(&mut self, records: &[Value]) -> Result<usize> {
        msg_info!(Message::StoreStarted);

        let tx = self.conn.transaction()?;
        let mut stored = 0;

        for record in records {
            if !is_completed(record)? {
                continue;
            }
            let task = TaskRecord::try_from(record)?;
            tx.execute(UPSERT_TASK, params![task.id, task.owner_id, task.title, task.completed])?;
            msg_debug!(Message::StoredRecord(task.id, task.title.clone()));
            stored += 1;
        }

        tx.commit()?;
        msg_info!(Message::StoreCompleted(stored));

        Ok(stored)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<TaskRecord>> {
        let (sql, params) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_BY_ID), vec![]),
            TaskFilter::ByOwner(owner) => (format!("{} {} {}", SELECT_TASKS, WHERE_OWNER, ORDER_BY_ID), vec![owner]),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(TaskRecord {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                title: row.get(2)?,
                completed: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<TaskRecord>> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?", SELECT_TASKS), params![id], |row| {
                Ok(TaskRecord {
                    id: row.get(0)?,
                    owner_id: row.get(1)?,
                    title: row.get(2)?,
                    completed: row.get(3)?,
                })
            })
            .optional()?;

        Ok(task)
    }
}
