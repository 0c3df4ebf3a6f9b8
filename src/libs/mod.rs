//! Core library modules for the eisen application.
//!
//! Serves as the main entry point for all library components:
//!
//! - **Domain Model**: Task, quadrant, and daily-progress types
//! - **Analytics**: Streak, weekly, and heatmap derivations for habits
//! - **Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console rendering and data export

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod progress;
pub mod task;
pub mod view;
