//! Daily habit command: check off progress, attach notes, show today.
//!
//! All mutations here target today's record only. Historical days stay
//! readable through `stats` but are never written from the CLI.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::progress;
use crate::libs::task::{SubTask, Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct DailyArgs {
    #[command(subcommand)]
    command: DailyCommand,
}

#[derive(Debug, Subcommand)]
enum DailyCommand {
    /// Mark today's habit (or one checklist item) as done
    Check {
        /// Task id, unique id prefix, or exact title
        task: String,
        /// Checklist item: 1-based index or title
        #[arg(short, long)]
        subtask: Option<String>,
        /// Uncheck instead
        #[arg(long)]
        undo: bool,
    },
    /// Attach a note to today's record
    Note {
        /// Task id, unique id prefix, or exact title
        task: String,
        /// Note text; prompted when omitted
        text: Option<String>,
    },
    /// Show today's checklist state
    Show {
        /// Task id, unique id prefix, or exact title; all daily tasks when omitted
        task: Option<String>,
    },
}

pub fn cmd(args: DailyArgs) -> Result<()> {
    match args.command {
        DailyCommand::Check { task, subtask, undo } => handle_check(task, subtask, undo),
        DailyCommand::Note { task, text } => handle_note(task, text),
        DailyCommand::Show { task } => handle_show(task),
    }
}

fn handle_check(ident: String, subtask: Option<String>, undo: bool) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match resolve_daily(&tasks, &ident) {
        Some(task) => task,
        None => return Ok(()),
    };
    let today = Local::now().date_naive();

    match subtask {
        Some(sub_ident) => {
            let sub = match resolve_sub_task(&task, &sub_ident) {
                Some(sub) => sub.clone(),
                None => {
                    msg_error!(Message::SubTaskNotFound(sub_ident));
                    return Ok(());
                }
            };
            tasks.toggle_sub_task(&task.id, today, &sub.id, !undo);
            if undo {
                msg_success!(Message::SubTaskUnchecked(sub.title));
            } else {
                msg_success!(Message::SubTaskChecked(sub.title));
            }
        }
        None => {
            let mut day = task.daily_progress.get(&today).cloned().unwrap_or_default();
            // A fully checked checklist keeps the day complete even when the
            // explicit flag is being cleared.
            let completed = !undo || progress::derived_completed(&task, &day);
            day.is_completed = completed;
            tasks.record_day(&task.id, today, day);
            if completed {
                msg_success!(Message::DayChecked(task.title.clone()));
                if undo {
                    msg_info!(Message::ChecklistStillComplete);
                }
            } else {
                msg_success!(Message::DayUnchecked(task.title.clone()));
            }
        }
    }
    Ok(())
}

fn handle_note(ident: String, text: Option<String>) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match resolve_daily(&tasks, &ident) {
        Some(task) => task,
        None => return Ok(()),
    };
    let today = Local::now().date_naive();

    let text = match text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDailyNote.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let mut day = task.daily_progress.get(&today).cloned().unwrap_or_default();
    day.notes = text;
    tasks.record_day(&task.id, today, day);

    msg_success!(Message::NoteSaved(task.title));
    Ok(())
}

fn handle_show(ident: Option<String>) -> Result<()> {
    let tasks = Tasks::new()?;
    let today = Local::now().date_naive();

    match ident {
        Some(ident) => {
            let task = match resolve_daily(&tasks, &ident) {
                Some(task) => task,
                None => return Ok(()),
            };
            msg_print!(Message::DailyHeader(task.title.clone(), today.to_string()), true);
            View::daily(&task, today)?;
        }
        None => {
            let daily = tasks.fetch(TaskFilter::Daily);
            if daily.is_empty() {
                msg_info!(Message::NoDailyTasksFound);
                return Ok(());
            }
            View::tasks(&daily, today)?;
        }
    }
    Ok(())
}

/// Finds a task by reference and rejects non-daily ones with a message.
fn resolve_daily(tasks: &Tasks, ident: &str) -> Option<Task> {
    match tasks.find(ident) {
        Some(task) if task.is_daily => Some(task.clone()),
        Some(task) => {
            msg_error!(Message::NotADailyTask(task.title.clone()));
            None
        }
        None => {
            msg_error!(Message::TaskNotFound(ident.to_string()));
            None
        }
    }
}

/// Resolves a checklist reference: 1-based index, exact title, or id.
fn resolve_sub_task<'a>(task: &'a Task, ident: &str) -> Option<&'a SubTask> {
    if let Ok(index) = ident.parse::<usize>() {
        if index >= 1 {
            return task.sub_tasks.get(index - 1);
        }
        return None;
    }
    task.sub_tasks.iter().find(|sub| sub.title == ident || sub.id == ident)
}
