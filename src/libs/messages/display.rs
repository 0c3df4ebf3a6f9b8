//! Display implementation for application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! on the terminal. All user-facing wording lives in this one match so the
//! rest of the code never embeds display strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskNotFound(ident) => format!("Task '{}' not found.", ident),
            Message::TaskCompleted(title) => format!("Task '{}' marked as done.", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened.", title),
            Message::TaskMoved(title, quadrant) => format!("Task '{}' moved to {}.", title, quadrant),
            Message::MoveOutOfDate => "Task positions changed underneath this move, nothing was touched.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === MATRIX MESSAGES ===
            Message::MatrixHeader => "📋 Eisenhower matrix".to_string(),

            // === DAILY PROGRESS MESSAGES ===
            Message::NotADailyTask(title) => format!("Task '{}' is not a daily task.", title),
            Message::NoDailyTasksFound => "No daily tasks found.".to_string(),
            Message::SubTaskNotFound(ident) => format!("Sub-task '{}' not found.", ident),
            Message::SubTaskChecked(title) => format!("Sub-task '{}' checked.", title),
            Message::SubTaskUnchecked(title) => format!("Sub-task '{}' unchecked.", title),
            Message::DayChecked(title) => format!("'{}' checked off for today.", title),
            Message::DayUnchecked(title) => format!("'{}' unchecked for today.", title),
            Message::ChecklistStillComplete => "Every sub-task is still checked, the day stays complete.".to_string(),
            Message::NoteSaved(title) => format!("Note saved for '{}'.", title),
            Message::DailyHeader(title, date) => format!("📅 {} — {}", title, date),

            // === STATS MESSAGES ===
            Message::StatsHeader(title) => format!("🔥 Stats for '{}'", title),
            Message::StatsHeaderAll => "🔥 Daily task stats".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed.".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageMalformed => "Stored task data is malformed, starting with an empty list.".to_string(),
            Message::StorageUnreadable => "Stored task data could not be read, starting with an empty list.".to_string(),
            Message::StorageSaveFailed(error) => format!("Failed to save tasks: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),
            Message::NoDataToExport => "Nothing to export.".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptShowCompleted => "Show completed tasks on the matrix board?".to_string(),
            Message::PromptHeatmapWeeks => "Heatmap window (weeks)".to_string(),
            Message::PromptDefaultExportFormat => "Default export format".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptSelectPriority => "Quadrant".to_string(),
            Message::PromptIsDaily => "Track this task daily?".to_string(),
            Message::PromptSubTaskTitle => "Sub-task title (leave empty to finish)".to_string(),
            Message::PromptDailyNote => "Note for today".to_string(),
        };
        write!(f, "{}", text)
    }
}
