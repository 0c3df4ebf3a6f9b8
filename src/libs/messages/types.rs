#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskMoved(String, String), // title, quadrant label
    MoveOutOfDate,
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    EditingTask(String),
    NoChangesDetected,

    // === MATRIX MESSAGES ===
    MatrixHeader,

    // === DAILY PROGRESS MESSAGES ===
    NotADailyTask(String),
    NoDailyTasksFound,
    SubTaskNotFound(String),
    SubTaskChecked(String),
    SubTaskUnchecked(String),
    DayChecked(String),
    DayUnchecked(String),
    ChecklistStillComplete,
    NoteSaved(String),
    DailyHeader(String, String), // title, date

    // === STATS MESSAGES ===
    StatsHeader(String),
    StatsHeaderAll,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,
    ConfigModuleDisplay,
    ConfigModuleExport,

    // === STORAGE MESSAGES ===
    StorageMalformed,
    StorageUnreadable,
    StorageSaveFailed(String),

    // === EXPORT MESSAGES ===
    ExportSuccess(String),
    NoDataToExport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptShowCompleted,
    PromptHeatmapWeeks,
    PromptDefaultExportFormat,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectPriority,
    PromptIsDaily,
    PromptSubTaskTitle,
    PromptDailyNote,
}
