//! Eisenhower board command.
//!
//! Renders the 2×2 matrix from the store's per-quadrant projections.
//! Whether completed one-shot tasks stay visible is a display setting,
//! overridable with `--all`.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MatrixArgs {
    /// Include completed one-shot tasks regardless of configuration
    #[arg(long)]
    all: bool,
}

pub fn cmd(args: MatrixArgs) -> Result<()> {
    let config = Config::read()?;
    let display = config.display.unwrap_or_default();
    let show_completed = args.all || display.show_completed;

    let tasks = Tasks::new()?;
    let mut quadrants: [Vec<Task>; 4] = Default::default();
    for (slot, priority) in Priority::ALL.iter().enumerate() {
        let mut list = tasks.by_priority(*priority);
        if !show_completed {
            list.retain(|task| task.is_daily || !task.is_completed);
        }
        quadrants[slot] = list;
    }

    msg_print!(Message::MatrixHeader, true);
    View::matrix(&quadrants)?;
    Ok(())
}
