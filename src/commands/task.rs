//! Task management command: create, list, edit, delete, complete, move.
//!
//! The `move` subcommand is the CLI surface of the reordering engine: it
//! translates a user-facing 1-based target position into the engine's
//! five-argument reorder call, computing the source quadrant and index from
//! the current state.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, TaskFilter, TaskInput, TaskPatch};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Create {
        /// Task title
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Quadrant the task starts in
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Track the task per day instead of with a single completion flag
        #[arg(long)]
        daily: bool,
        /// Checklist item for a daily task (repeatable)
        #[arg(short, long = "subtask")]
        sub_tasks: Vec<String>,
    },
    /// List tasks
    List {
        /// Only tasks of one quadrant
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Only daily tasks
        #[arg(long)]
        daily: bool,
    },
    /// Edit a task interactively
    Edit {
        /// Task id, unique id prefix, or exact title
        task: String,
    },
    /// Delete a task
    Delete {
        /// Task id, unique id prefix, or exact title
        task: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Toggle completion of a one-shot task
    Complete {
        /// Task id, unique id prefix, or exact title
        task: String,
    },
    /// Move a task to a new position or quadrant
    Move {
        /// Task id, unique id prefix, or exact title
        task: String,
        /// Destination quadrant (defaults to the task's current one)
        #[arg(long, value_enum)]
        to: Option<Priority>,
        /// Target position within the destination quadrant (1-based)
        #[arg(short, long)]
        position: usize,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Create {
            title,
            description,
            priority,
            daily,
            sub_tasks,
        } => handle_create(title, description, priority, daily, sub_tasks),
        TaskCommand::List { priority, daily } => handle_list(priority, daily),
        TaskCommand::Edit { task } => handle_edit(task),
        TaskCommand::Delete { task, yes } => handle_delete(task, yes),
        TaskCommand::Complete { task } => handle_complete(task),
        TaskCommand::Move { task, to, position } => handle_move(task, to, position),
    }
}

fn handle_create(
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    daily: bool,
    mut sub_tasks: Vec<String>,
) -> Result<()> {
    // Missing arguments fall back to interactive prompts.
    let interactive = title.is_none();
    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let description = match description {
        Some(description) => Some(description),
        None if interactive => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
        None => None,
    };
    let priority = match priority {
        Some(priority) => priority,
        None => prompt_priority(Priority::UrgentImportant)?,
    };
    let mut is_daily = daily || !sub_tasks.is_empty();
    if interactive && !is_daily {
        is_daily = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIsDaily.to_string())
            .default(false)
            .interact()?;
    }
    if interactive && is_daily && sub_tasks.is_empty() {
        loop {
            let sub_title: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSubTaskTitle.to_string())
                .allow_empty(true)
                .interact_text()?;
            if sub_title.is_empty() {
                break;
            }
            sub_tasks.push(sub_title);
        }
    }

    let input = TaskInput {
        title,
        description,
        priority,
        is_daily,
        sub_tasks,
    };
    input.validate()?;

    let mut tasks = Tasks::new()?;
    let task = tasks.create(input);

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}

fn handle_list(priority: Option<Priority>, daily: bool) -> Result<()> {
    let tasks = Tasks::new()?;
    let filter = if daily {
        TaskFilter::Daily
    } else {
        match priority {
            Some(priority) => TaskFilter::Priority(priority),
            None => TaskFilter::All,
        }
    };
    let list = tasks.fetch(filter);

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&list, Local::now().date_naive())?;
    Ok(())
}

fn handle_edit(ident: String) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.find(&ident) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(ident));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priority = prompt_priority(task.priority)?;

    let unchanged = title == task.title
        && description == task.description.clone().unwrap_or_default()
        && priority == task.priority;
    if unchanged {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    // Edited fields pass the same boundary validation as a fresh draft.
    let draft = TaskInput {
        title: title.clone(),
        description: if description.is_empty() { None } else { Some(description.clone()) },
        priority,
        is_daily: task.is_daily,
        sub_tasks: Vec::new(),
    };
    draft.validate()?;

    let patch = TaskPatch {
        title: Some(title),
        description: Some(description),
        priority: Some(priority),
        ..Default::default()
    };
    match tasks.update(&task.id, patch) {
        Some(updated) => msg_success!(Message::TaskUpdated(updated.title)),
        None => msg_error!(Message::TaskNotFound(task.id)),
    }
    Ok(())
}

fn handle_delete(ident: String, yes: bool) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.find(&ident) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(ident));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    if tasks.delete(&task.id) {
        msg_success!(Message::TaskDeleted(task.title));
    }
    Ok(())
}

fn handle_complete(ident: String) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.find(&ident) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(ident));
            return Ok(());
        }
    };

    match tasks.toggle_completion(&task.id) {
        Some(updated) if updated.is_completed => msg_success!(Message::TaskCompleted(updated.title)),
        Some(updated) => msg_success!(Message::TaskReopened(updated.title)),
        None => msg_error!(Message::TaskNotFound(task.id)),
    }
    Ok(())
}

fn handle_move(ident: String, to: Option<Priority>, position: usize) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.find(&ident) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(ident));
            return Ok(());
        }
    };

    let source_priority = task.priority;
    let dest_priority = to.unwrap_or(source_priority);
    let source_index = match tasks.by_priority(source_priority).iter().position(|t| t.id == task.id) {
        Some(index) => index,
        None => {
            msg_error!(Message::TaskNotFound(task.id));
            return Ok(());
        }
    };
    let dest_index = position.saturating_sub(1);

    if tasks.reorder(&task.id, source_priority, dest_priority, source_index, dest_index) {
        msg_success!(Message::TaskMoved(task.title, dest_priority.label().to_string()));
    } else {
        msg_error!(Message::MoveOutOfDate);
    }
    Ok(())
}

fn prompt_priority(default: Priority) -> Result<Priority> {
    let labels: Vec<String> = Priority::ALL
        .iter()
        .map(|priority| format!("{} ({})", priority.label(), priority.hint()))
        .collect();
    let default_index = Priority::ALL.iter().position(|priority| *priority == default).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectPriority.to_string())
        .items(&labels)
        .default(default_index)
        .interact()?;
    Ok(Priority::ALL[selection])
}
