//! Streak and completion stats command.
//!
//! With a task reference, shows that habit's streak summary plus the
//! completion heatmap; without one, shows the summary table for every daily
//! task.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::progress;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::{StatsRow, View};
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Task id, unique id prefix, or exact title; all daily tasks when omitted
    task: Option<String>,
    /// Heatmap window in weeks (overrides configuration)
    #[arg(short, long)]
    weeks: Option<u16>,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let config = Config::read()?;
    let display = config.display.unwrap_or_default();
    let weeks = args.weeks.unwrap_or(display.heatmap_weeks);

    let tasks = Tasks::new()?;
    let today = Local::now().date_naive();

    match args.task {
        Some(ident) => {
            let task = match tasks.find(&ident) {
                Some(task) => task.clone(),
                None => {
                    msg_error!(Message::TaskNotFound(ident));
                    return Ok(());
                }
            };
            if !task.is_daily {
                msg_error!(Message::NotADailyTask(task.title));
                return Ok(());
            }
            msg_print!(Message::StatsHeader(task.title.clone()), true);
            View::stats(&[stats_row(&task, today)])?;
            View::heatmap(&task, today, weeks)?;
        }
        None => {
            let daily = tasks.fetch(TaskFilter::Daily);
            if daily.is_empty() {
                msg_info!(Message::NoDailyTasksFound);
                return Ok(());
            }
            let rows: Vec<StatsRow> = daily.iter().map(|task| stats_row(task, today)).collect();
            msg_print!(Message::StatsHeaderAll, true);
            View::stats(&rows)?;
        }
    }
    Ok(())
}

fn stats_row(task: &Task, today: NaiveDate) -> StatsRow {
    StatsRow {
        title: task.title.clone(),
        current_streak: progress::current_streak(&task.daily_progress, today),
        best_streak: progress::best_streak(&task.daily_progress),
        this_week: progress::this_week_count(&task.daily_progress, today),
    }
}
