//! # Eisen - Eisenhower Matrix Task Prioritization
//!
//! A command-line tool for sorting tasks into the four Eisenhower quadrants,
//! reordering them by hand, and tracking daily habits.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, and reorder tasks across quadrants
//! - **The Board**: A 2×2 matrix view of everything on your plate
//! - **Habit Tracking**: Per-day checklists for recurring tasks
//! - **Streak Analytics**: Current streak, best streak, and weekly totals
//! - **Completion Heatmap**: Intensity shading for the trailing weeks
//! - **Data Export**: CSV, JSON, and Excel output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eisen::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
