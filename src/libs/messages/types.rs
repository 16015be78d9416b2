#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleBackend,
    BackendNotConfigured,

    // === OVERTIME MESSAGES ===
    OvertimeWarning {
        date: String,
        total_hours: String,
    },
    OvertimeWarningsHeader(usize), // count
    NoOvertimeWarnings,
    WarningsRefreshed(usize), // count
    WorkTimesFetchFailed(String),    // error message
    WarningCacheReadFailed(String),  // error message
    WarningCacheCorrupted(String),   // error message
    WarningCacheWriteFailed(String), // error message

    // === DAILY TOTALS MESSAGES ===
    DailyTotalsHeader,
    DailyTotalsForDate(String, String), // date, total
    NoWorkTimes,

    // === ENTRY MESSAGES ===
    PendingEntriesHeader(usize), // count
    EntriesHeader(usize),        // count
    NoPendingEntries,
    NoEntries,
    NoEntryIdsProvided,
    EntrySubmitted(String), // date
    DuplicateEntryId(String),

    // === APPROVAL MESSAGES ===
    EntryApproved(String), // id
    EntryRejected(String), // id
    TransitionFailed {
        id: String,
        error: String,
    },
    TransitionsFailed(usize), // count
    ReloadAfterTransitionFailed(String),
    ReloadAfterSubmitFailed(String),

    // === MIGRATION MESSAGES ===
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error

    // === PROMPTS ===
    PromptSelectModules,
    PromptBackendApiUrl,
    PromptBackendAuthToken,
    PromptBackendTimeout,
}
