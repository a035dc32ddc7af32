/// Every user-facing text of the application.
///
/// Variants carry the dynamic parts; the wording lives in the `Display`
/// implementation in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === LISTING MESSAGES ===
    NoMatches(String),                   // view noun
    ListingHeader(String, usize, usize), // view noun, visible, total
    ActiveQuery(String),
    ActiveTags(String, String), // tags, mode
    ActiveChannel(String),
    UnknownTag(String, String), // tag, view
    TagsHeader(String),
    NoTagsForView(String),

    // === SELECTION MESSAGES ===
    RecordNotFound(String, String), // view, id
    RecordSelected(String),
    MachineIssuesHeader(String, usize), // machine code, open issues
    SelectionReplaced(String, String), // previous, current
    BrowseHeader(String),
    PromptSearchQuery,
    PromptSelectTags,
    PromptSelectRecord,
    PromptBrowseAgain,
    BrowseNothingToSelect,

    // === STATS MESSAGES ===
    StatsHeader(String),

    // === SOURCE MESSAGES ===
    SourceOpened(String),
    SourceUnavailable(String),

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigModuleData,
    ConfigModuleThresholds,
    PromptSelectModules,
    PromptSourceKind,
    PromptCatalogPath,
    PromptDowntimeCritical,
    PromptDowntimeMajor,
    PromptStockUrgentFactor,
    ThresholdsInvalid(f64, f64), // critical from, major above
    StockFactorInvalid(f64),

    // === IMPORT MESSAGES ===
    RecordsImported(usize, String), // count, view noun
    ImportCompleted(usize, String), // count, database path
    ImportSourceIsStore,
    StoreCleared(usize, String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNothing(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
