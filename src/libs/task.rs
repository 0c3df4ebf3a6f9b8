//! Task model for the Eisenhower matrix.
//!
//! Defines the core data types shared by the task store, the analytics
//! engine, and the command layer:
//!
//! - [`Priority`]: the four Eisenhower quadrants
//! - [`Task`] / [`SubTask`] / [`DailyProgress`]: the persisted task record
//! - [`TaskInput`] / [`TaskPatch`]: creation drafts and partial updates
//! - [`TaskFilter`]: read projections over the collection
//!
//! Boundary validation (title and description length) lives here as well, in
//! [`TaskInput::validate`]. The store itself never re-validates: any
//! well-typed value that reaches it is accepted.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Minimum task title length in characters.
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum task title length in characters.
pub const TITLE_MAX_LEN: usize = 100;
/// Maximum task description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// The four Eisenhower quadrants.
///
/// Serialized with the same kebab-case tags the CLI accepts, so a priority
/// written to the task blob round-trips through `--priority` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Deadlines and emergencies.
    UrgentImportant,
    /// Interruptions that still have to happen today.
    UrgentUnimportant,
    /// Long-term goals, planning, recovery.
    UnurgentImportant,
    /// Time sinks.
    UnurgentUnimportant,
}

impl Priority {
    /// All quadrants in board display order: the urgent column first, the
    /// important row first.
    pub const ALL: [Priority; 4] = [
        Priority::UrgentImportant,
        Priority::UrgentUnimportant,
        Priority::UnurgentImportant,
        Priority::UnurgentUnimportant,
    ];

    /// Human-readable quadrant name for messages and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::UrgentImportant => "Urgent & Important",
            Priority::UrgentUnimportant => "Urgent & Unimportant",
            Priority::UnurgentImportant => "Not Urgent & Important",
            Priority::UnurgentUnimportant => "Not Urgent & Unimportant",
        }
    }

    /// The classic Eisenhower action for the quadrant.
    pub fn hint(&self) -> &'static str {
        match self {
            Priority::UrgentImportant => "do first",
            Priority::UrgentUnimportant => "delegate",
            Priority::UnurgentImportant => "schedule",
            Priority::UnurgentUnimportant => "eliminate",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Priority::UrgentImportant => "urgent-important",
            Priority::UrgentUnimportant => "urgent-unimportant",
            Priority::UnurgentImportant => "unurgent-important",
            Priority::UnurgentUnimportant => "unurgent-unimportant",
        };
        write!(f, "{}", tag)
    }
}

/// One checklist item of a daily task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
}

impl SubTask {
    pub fn new(title: &str) -> Self {
        SubTask {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
        }
    }
}

/// One calendar day's state for a daily task.
///
/// `is_completed` is either set explicitly or derived as true when
/// `completed_sub_tasks` covers every sub-task of the owning task. Streak and
/// weekly aggregates read only this flag; partial checklists contribute to
/// heatmap shading but never to streaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub completed_sub_tasks: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// One actionable item in the matrix.
///
/// `order` positions the task within its quadrant. Values are rewritten to
/// contiguous indices on every reorder, but gaps (left behind by deletes) are
/// tolerated everywhere: ordering only ever relies on the relative sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
    pub order: i64,
    /// Epoch milliseconds, UTC.
    pub created_at: i64,
    /// Epoch milliseconds, UTC. Refreshed on every mutation.
    pub updated_at: i64,
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_tasks: Vec<SubTask>,
    /// Sparse per-day completion record, keyed by calendar date. Entries are
    /// only ever added or replaced, never removed implicitly.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub daily_progress: BTreeMap<NaiveDate, DailyProgress>,
}

/// Boundary validation errors for task drafts.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("task title must be between {TITLE_MIN_LEN} and {TITLE_MAX_LEN} characters")]
    TitleLength,
    #[error("task description must be at most {DESCRIPTION_MAX_LEN} characters")]
    DescriptionTooLong,
}

/// Validated draft consumed by the store's create operation.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub is_daily: bool,
    /// Checklist item titles; ids are assigned at creation.
    pub sub_tasks: Vec<String>,
}

impl TaskInput {
    /// Enforces the boundary rules before a draft reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.chars().count();
        if title_len < TITLE_MIN_LEN || title_len > TITLE_MAX_LEN {
            return Err(ValidationError::TitleLength);
        }
        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(ValidationError::DescriptionTooLong);
            }
        }
        Ok(())
    }
}

/// Partial update for the store's update operation. `None` fields are left
/// untouched; an empty description clears the stored one.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
    pub is_daily: Option<bool>,
    pub sub_tasks: Option<Vec<SubTask>>,
}

/// Read projections over the task collection.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Priority(Priority),
    Daily,
}
