//! Console rendering for tasks, the matrix board, and habit stats.
//!
//! All terminal tables are produced here so commands stay thin: they fetch a
//! projection from the store and hand it to a `View` method. The heatmap is
//! the one non-tabular display — a GitHub-style intensity grid built from
//! [`progress::heatmap_intensity`].

use crate::libs::progress;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use prettytable::{row, Table};

/// One line of the stats table.
#[derive(Debug, Clone)]
pub struct StatsRow {
    pub title: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub this_week: u32,
}

pub struct View {}

impl View {
    /// Flat task list.
    pub fn tasks(tasks: &[Task], today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "QUADRANT", "ORDER", "TYPE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                short_id(&task.id),
                task.title,
                task.priority,
                task.order,
                if task.is_daily { "daily" } else { "one-shot" },
                status(task, today),
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// The 2×2 Eisenhower board. Quadrant lists must come in
    /// `Priority::ALL` order.
    pub fn matrix(quadrants: &[Vec<Task>; 4]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "URGENT", "NOT URGENT"]);
        table.add_row(row!["IMPORTANT", quadrant_cell(&quadrants[0]), quadrant_cell(&quadrants[2])]);
        table.add_row(row!["NOT IMPORTANT", quadrant_cell(&quadrants[1]), quadrant_cell(&quadrants[3])]);
        table.printstd();

        Ok(())
    }

    /// One day's checklist state for a daily task.
    pub fn daily(task: &Task, date: NaiveDate) -> Result<()> {
        let day = task.daily_progress.get(&date);

        let mut table = Table::new();
        table.add_row(row!["#", "SUB-TASK", "DONE"]);
        for (index, sub) in task.sub_tasks.iter().enumerate() {
            let checked = day.map_or(false, |progress| progress.completed_sub_tasks.contains(&sub.id));
            table.add_row(row![index + 1, sub.title, if checked { "x" } else { "" }]);
        }
        table.printstd();

        let completed = day.map_or(false, |progress| progress.is_completed);
        println!("Day complete: {}", if completed { "yes" } else { "no" });
        if let Some(progress) = day {
            if !progress.notes.is_empty() {
                println!("Notes: {}", progress.notes);
            }
        }

        Ok(())
    }

    /// Streak summary, one row per daily task.
    pub fn stats(rows: &[StatsRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "CURRENT STREAK", "BEST STREAK", "THIS WEEK"]);
        for stats in rows {
            table.add_row(row![stats.title, stats.current_streak, stats.best_streak, stats.this_week]);
        }
        table.printstd();

        Ok(())
    }

    /// Intensity grid for the trailing `weeks` weeks: one row per weekday,
    /// one column per week, Monday-based, ending at the week containing
    /// `today`. Future days in the current week are left blank.
    pub fn heatmap(task: &Task, today: NaiveDate, weeks: u16) -> Result<()> {
        const LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

        let weeks = weeks.max(1) as i64;
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let start = monday - Duration::days(7 * (weeks - 1));

        println!();
        for weekday in 0..7 {
            let mut line = String::new();
            for week in 0..weeks {
                let date = start + Duration::days(week * 7 + weekday);
                if date > today {
                    line.push(' ');
                } else {
                    line.push(shade(progress::heatmap_intensity(task, date)));
                }
            }
            println!("{} {}", LABELS[weekday as usize], line);
        }
        println!();

        Ok(())
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn status(task: &Task, today: NaiveDate) -> String {
    if task.is_daily {
        let done = task.daily_progress.get(&today).map_or(false, |day| day.is_completed);
        if done {
            "done today".to_string()
        } else if !task.sub_tasks.is_empty() {
            let checked = task
                .daily_progress
                .get(&today)
                .map_or(0, |day| task.sub_tasks.iter().filter(|sub| day.completed_sub_tasks.contains(&sub.id)).count());
            format!("{}/{} today", checked, task.sub_tasks.len())
        } else {
            "pending".to_string()
        }
    } else if task.is_completed {
        "done".to_string()
    } else {
        "open".to_string()
    }
}

fn quadrant_cell(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "-".to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| format!("{}. {} {}", index + 1, marker(task), task.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn marker(task: &Task) -> &'static str {
    if task.is_daily {
        "↻"
    } else if task.is_completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn shade(intensity: f64) -> char {
    if intensity >= 1.0 {
        '█'
    } else if intensity >= 0.67 {
        '▓'
    } else if intensity >= 0.34 {
        '▒'
    } else if intensity > 0.0 {
        '░'
    } else {
        '·'
    }
}
