//! Command-line interface surface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd()` entry point; this module wires them into the top-level parser.
//! Commands are thin: they resolve user references, call the store or the
//! analytics engine, and hand projections to the view layer.

pub mod daily;
pub mod export;
pub mod init;
pub mod matrix;
pub mod stats;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks in the matrix")]
    Task(task::TaskArgs),
    #[command(about = "Display the Eisenhower board")]
    Matrix(matrix::MatrixArgs),
    #[command(about = "Record daily habit progress")]
    Daily(daily::DailyArgs),
    #[command(about = "Show streaks and completion stats")]
    Stats(stats::StatsArgs),
    #[command(about = "Export tasks and stats to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Matrix(args) => matrix::cmd(args),
            Commands::Daily(args) => daily::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
