//! Persistence-backed stores for the application.
//!
//! The task collection lives in a single JSON blob in the platform data
//! directory. [`store`] owns the blob itself (load-once, rewrite-on-change,
//! malformed data degrades to an empty collection); [`tasks`] owns the
//! in-memory collection and every operation that mutates it, with the saver
//! subscribed to its change notifications.

pub mod store;
pub mod tasks;
