//! Data export command.
//!
//! Format resolution order: `--format`, then the configured default, then
//! CSV.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
    /// Data set to export
    #[arg(short, long, value_enum, default_value = "tasks")]
    data: ExportData,
    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let format = args
        .format
        .or_else(|| config.export.map(|export| export.default_format))
        .unwrap_or(ExportFormat::Csv);

    let tasks = Tasks::new()?;
    let snapshot = tasks.fetch(TaskFilter::All);
    if snapshot.is_empty() {
        msg_info!(Message::NoDataToExport);
        return Ok(());
    }

    let exporter = Exporter::new(format, args.output);
    let written = exporter.export(args.data, &snapshot, Local::now().date_naive())?;
    for path in written {
        msg_success!(Message::ExportSuccess(path.display().to_string()));
    }
    Ok(())
}
