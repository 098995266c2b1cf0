#[derive(Debug, Clone)]
pub enum Message {
    // === SYNC MESSAGES ===
    SyncStarted,
    FetchingData(String),           // feed url
    FetchStatus(u16),               // http status
    FetchSucceeded,
    FetchFailedStatus(u16),         // http status
    FetchFault(String),             // transport error
    FetchedRecords(usize),          // record count
    ProceedingWithEmptyFetch,
    SyncFinished(String),           // date

    // === STORE MESSAGES ===
    StoreStarted,
    StoredRecord(i64, String),      // id, title
    StoreCompleted(usize),          // stored count
    StoreFault(String),             // error
    SessionClosed,

    // === TASK MESSAGES ===
    TasksNotFound,
    TasksHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptFeedUrl,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
}
