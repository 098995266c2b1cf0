#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsync::db::db::Db;
    use tsync::db::migrations::{get_db_version, needs_migration, MigrationManager};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    // A single sequential test: parallel migration runs against the same
    // fresh database file would race on the version bookkeeping.
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_lifecycle(_ctx: &mut MigrationTestContext) {
        // Opening the database applies all migrations
        let db = Db::new().unwrap();
        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&db.conn).unwrap());

        // The tasks table exists with the synced-record columns
        db.conn
            .execute("INSERT INTO tasks (id, userId, title, completed) VALUES (1, 1, 'probe', 1)", [])
            .unwrap();

        // Re-running migrations is a no-op
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), version);

        // History is recorded in version order
        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }
}
