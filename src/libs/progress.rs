//! Daily progress and streak analytics for habit tasks.
//!
//! This module is the pure half of the habit engine: every function here is a
//! side-effect-free derivation over a task's sparse `date -> DailyProgress`
//! map. The persistence-backed wrappers in [`crate::db::tasks`] delegate to
//! [`record_day`] and [`toggle_sub_task`]; everything else is read-only math
//! used by the stats and matrix views.
//!
//! ## Completion Semantics
//!
//! A day counts toward streaks and weekly totals only when its
//! `is_completed` flag is true. A partially checked checklist produces a
//! nonzero [`heatmap_intensity`] but contributes nothing to streaks; the
//! binary-streak / fractional-heatmap asymmetry is deliberate.
//!
//! Day completion is never cached anywhere: [`derived_completed`] is invoked
//! on every write that can change it, so the flag cannot drift out of sync
//! with the underlying checklist.

use crate::libs::task::{DailyProgress, Task};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Replaces (or inserts) the progress entry for one calendar day.
///
/// Pure function of `(task, date, progress)`: returns a new task and leaves
/// every other day untouched.
pub fn record_day(task: &Task, date: NaiveDate, progress: DailyProgress) -> Task {
    let mut next = task.clone();
    next.daily_progress.insert(date, progress);
    next
}

/// Checks or unchecks one sub-task for a day and re-derives the day's
/// completion flag from the updated set.
pub fn toggle_sub_task(task: &Task, date: NaiveDate, sub_task_id: &str, checked: bool) -> Task {
    let mut progress = task.daily_progress.get(&date).cloned().unwrap_or_default();
    if checked {
        progress.completed_sub_tasks.insert(sub_task_id.to_string());
    } else {
        progress.completed_sub_tasks.remove(sub_task_id);
    }
    progress.is_completed = derived_completed(task, &progress);
    record_day(task, date, progress)
}

/// A day is derived complete when the task has at least one sub-task and the
/// completed set covers every sub-task id.
pub fn derived_completed(task: &Task, progress: &DailyProgress) -> bool {
    !task.sub_tasks.is_empty()
        && task
            .sub_tasks
            .iter()
            .all(|sub| progress.completed_sub_tasks.contains(&sub.id))
}

fn is_completed_on(progress: &BTreeMap<NaiveDate, DailyProgress>, date: NaiveDate) -> bool {
    progress.get(&date).map(|day| day.is_completed).unwrap_or(false)
}

/// Consecutive completed days ending at `today`, walking backward.
///
/// An incomplete "today" does not break a streak ending yesterday, but does
/// not count toward it either: the walk then starts from the previous day.
/// Returns 0 when no applicable day is completed.
pub fn current_streak(progress: &BTreeMap<NaiveDate, DailyProgress>, today: NaiveDate) -> u32 {
    let mut day = if is_completed_on(progress, today) {
        today
    } else {
        match today.pred_opt() {
            Some(previous) => previous,
            None => return 0,
        }
    };
    let mut streak = 0;
    while is_completed_on(progress, day) {
        streak += 1;
        day = match day.pred_opt() {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}

/// Longest run of calendar-consecutive completed days anywhere in the map.
///
/// A gap of exactly one day between sorted neighbors extends the run; any
/// other gap resets it. Returns 0 when no day is completed.
pub fn best_streak(progress: &BTreeMap<NaiveDate, DailyProgress>) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    // BTreeMap iteration is already date-ascending.
    for (&date, day) in progress {
        if !day.is_completed {
            continue;
        }
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }
    best
}

/// Completed days within the Monday–Sunday week containing `today`.
pub fn this_week_count(progress: &BTreeMap<NaiveDate, DailyProgress>, today: NaiveDate) -> u32 {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);
    progress
        .iter()
        .filter(|(&date, day)| date >= monday && date <= sunday && day.is_completed)
        .count() as u32
}

/// Display shading for one day, 0.0–1.0.
///
/// 1.0 for a completed day; otherwise the checked fraction of the checklist;
/// otherwise 0.0. Streak math never reads this value.
pub fn heatmap_intensity(task: &Task, date: NaiveDate) -> f64 {
    let progress = match task.daily_progress.get(&date) {
        Some(progress) => progress,
        None => return 0.0,
    };
    if progress.is_completed {
        return 1.0;
    }
    if task.sub_tasks.is_empty() {
        return 0.0;
    }
    let checked = task
        .sub_tasks
        .iter()
        .filter(|sub| progress.completed_sub_tasks.contains(&sub.id))
        .count();
    checked as f64 / task.sub_tasks.len() as f64
}
