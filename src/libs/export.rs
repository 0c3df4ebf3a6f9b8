//! Data export for external analysis and backup.
//!
//! Exports the task collection and the derived habit stats to CSV, JSON, or
//! Excel. Export rows are flat, string-friendly projections of the task
//! model so every format renders the same columns; streak columns are
//! recomputed at export time with the analytics engine rather than read from
//! anywhere cached.

use crate::libs::progress;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving data types.
    Json,
    /// Excel workbook with one worksheet per data set.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Data sets available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// All task records.
    Tasks,
    /// Streak and weekly stats for daily tasks.
    Stats,
    /// Both data sets.
    All,
}

/// Flat task projection shared by all export formats.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub order: i64,
    pub is_daily: bool,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Habit stats projection, one row per daily task.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportStats {
    pub task: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub this_week: u32,
    pub days_completed: u32,
}

/// Export handler: one format, one destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without an explicit output path, a timestamped
    /// file name in the current directory is used.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("eisen_export_{}.{}", timestamp, format.extension()))
        });
        Exporter { format, output_path }
    }

    /// Writes the selected data set(s) and returns the paths produced.
    ///
    /// CSV cannot hold two data sets in one file, so `All` in CSV mode
    /// produces a `_tasks` and a `_stats` sibling file.
    pub fn export(&self, data: ExportData, tasks: &[Task], today: NaiveDate) -> Result<Vec<PathBuf>> {
        let task_rows = task_rows(tasks);
        let stats_rows = stats_rows(tasks, today);

        match (self.format, data) {
            (ExportFormat::Csv, ExportData::Tasks) => {
                write_csv(&self.output_path, &task_rows)?;
                Ok(vec![self.output_path.clone()])
            }
            (ExportFormat::Csv, ExportData::Stats) => {
                write_csv(&self.output_path, &stats_rows)?;
                Ok(vec![self.output_path.clone()])
            }
            (ExportFormat::Csv, ExportData::All) => {
                let tasks_path = self.sibling_path("tasks");
                let stats_path = self.sibling_path("stats");
                write_csv(&tasks_path, &task_rows)?;
                write_csv(&stats_path, &stats_rows)?;
                Ok(vec![tasks_path, stats_path])
            }
            (ExportFormat::Json, ExportData::Tasks) => {
                self.write_json(&json!(task_rows))?;
                Ok(vec![self.output_path.clone()])
            }
            (ExportFormat::Json, ExportData::Stats) => {
                self.write_json(&json!(stats_rows))?;
                Ok(vec![self.output_path.clone()])
            }
            (ExportFormat::Json, ExportData::All) => {
                self.write_json(&json!({ "tasks": task_rows, "stats": stats_rows }))?;
                Ok(vec![self.output_path.clone()])
            }
            (ExportFormat::Excel, data) => {
                self.write_excel(data, &task_rows, &stats_rows)?;
                Ok(vec![self.output_path.clone()])
            }
        }
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "eisen_export".to_string());
        self.output_path.with_file_name(format!("{}_{}.csv", stem, suffix))
    }

    fn write_json(&self, value: &serde_json::Value) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(&file, value)?;
        Ok(())
    }

    fn write_excel(&self, data: ExportData, task_rows: &[ExportTask], stats_rows: &[ExportStats]) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        if matches!(data, ExportData::Tasks | ExportData::All) {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Tasks")?;
            let headers = [
                "ID", "Title", "Description", "Quadrant", "Order", "Daily", "Completed", "Created", "Updated",
            ];
            for (col, header) in headers.iter().enumerate() {
                sheet.write_with_format(0, col as u16, *header, &bold)?;
            }
            for (index, task) in task_rows.iter().enumerate() {
                let row = index as u32 + 1;
                sheet.write(row, 0, task.id.as_str())?;
                sheet.write(row, 1, task.title.as_str())?;
                sheet.write(row, 2, task.description.as_str())?;
                sheet.write(row, 3, task.priority.as_str())?;
                sheet.write(row, 4, task.order)?;
                sheet.write(row, 5, task.is_daily)?;
                sheet.write(row, 6, task.is_completed)?;
                sheet.write(row, 7, task.created_at.as_str())?;
                sheet.write(row, 8, task.updated_at.as_str())?;
            }
        }

        if matches!(data, ExportData::Stats | ExportData::All) {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Stats")?;
            let headers = ["Task", "Current streak", "Best streak", "This week", "Days completed"];
            for (col, header) in headers.iter().enumerate() {
                sheet.write_with_format(0, col as u16, *header, &bold)?;
            }
            for (index, stats) in stats_rows.iter().enumerate() {
                let row = index as u32 + 1;
                sheet.write(row, 0, stats.task.as_str())?;
                sheet.write(row, 1, stats.current_streak)?;
                sheet.write(row, 2, stats.best_streak)?;
                sheet.write(row, 3, stats.this_week)?;
                sheet.write(row, 4, stats.days_completed)?;
            }
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn task_rows(tasks: &[Task]) -> Vec<ExportTask> {
    tasks
        .iter()
        .map(|task| ExportTask {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.to_string(),
            order: task.order,
            is_daily: task.is_daily,
            is_completed: task.is_completed,
            created_at: format_timestamp(task.created_at),
            updated_at: format_timestamp(task.updated_at),
        })
        .collect()
}

fn stats_rows(tasks: &[Task], today: NaiveDate) -> Vec<ExportStats> {
    tasks
        .iter()
        .filter(|task| task.is_daily)
        .map(|task| ExportStats {
            task: task.title.clone(),
            current_streak: progress::current_streak(&task.daily_progress, today),
            best_streak: progress::best_streak(&task.daily_progress),
            this_week: progress::this_week_count(&task.daily_progress, today),
            days_completed: task.daily_progress.values().filter(|day| day.is_completed).count() as u32,
        })
        .collect()
}

fn write_csv<T: Serialize>(path: &PathBuf, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn format_timestamp(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|instant| instant.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
