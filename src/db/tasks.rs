//! Task store and reordering engine.
//!
//! [`Tasks`] owns the canonical in-memory collection and every mutation that
//! can touch it: create, partial update, delete, completion toggle, daily
//! progress recording, and the drag-style reorder that keeps within-quadrant
//! ordering stable under user control.
//!
//! ## Failure Semantics
//!
//! Every operation is total over well-typed input. Mutations aimed at an
//! unknown id are silent no-ops (a stale reference after a concurrent delete
//! must degrade gracefully, not crash), and the reorder sanity check aborts
//! without touching anything when the caller's indices have gone stale.
//! Validation is the caller's job and never re-checked here.
//!
//! ## Change Notification
//!
//! The store is an explicit object with a subscribe/notify mechanism:
//! listeners registered with [`Tasks::subscribe`] receive the full snapshot
//! after every successful mutation. Persistence is wired in as the first
//! subscriber at construction, so saving is a side effect of notification —
//! fire-and-forget, and a failed save never fails the mutation that caused
//! it.
//!
//! The store is single-writer by design: one operation runs to completion
//! before the next begins. Embedders on multi-threaded platforms must
//! serialize access themselves, because `reorder` reads a full quadrant list
//! and rewrites it as one atomic step.

use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::progress;
use crate::libs::task::{DailyProgress, Priority, SubTask, Task, TaskFilter, TaskInput, TaskPatch};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

type Listener = Box<dyn Fn(&[Task])>;

pub struct Tasks {
    tasks: Vec<Task>,
    listeners: Vec<Listener>,
}

impl Tasks {
    /// Opens the persisted collection and wires the blob saver as the first
    /// change subscriber.
    pub fn new() -> Result<Self> {
        let store = Store::new()?;
        let tasks = store.load();
        let mut tasks = Tasks {
            tasks,
            listeners: Vec::new(),
        };
        tasks.subscribe(move |snapshot| {
            if let Err(err) = store.save(snapshot) {
                msg_error!(Message::StorageSaveFailed(err.to_string()));
            }
        });
        Ok(tasks)
    }

    /// Registers a listener invoked with the full snapshot after every
    /// successful mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[Task]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&self) {
        for listener in &self.listeners {
            listener(&self.tasks);
        }
    }

    /// Read projection over the collection.
    pub fn fetch(&self, filter: TaskFilter) -> Vec<Task> {
        match filter {
            TaskFilter::All => self.tasks.clone(),
            TaskFilter::Priority(priority) => self.by_priority(priority),
            TaskFilter::Daily => self.tasks.iter().filter(|t| t.is_daily).cloned().collect(),
        }
    }

    /// Tasks of one quadrant, ascending by `order`. The sort is stable, so
    /// equal orders keep their collection order.
    pub fn by_priority(&self, priority: Priority) -> Vec<Task> {
        let mut list: Vec<Task> = self.tasks.iter().filter(|t| t.priority == priority).cloned().collect();
        list.sort_by_key(|t| t.order);
        list
    }

    /// Creates a task from a validated draft. The new task lands at the end
    /// of its quadrant: `order` is the quadrant's current maximum plus one,
    /// or 0 for an empty quadrant.
    pub fn create(&mut self, input: TaskInput) -> Task {
        let now = Utc::now().timestamp_millis();
        let order = self
            .tasks
            .iter()
            .filter(|t| t.priority == input.priority)
            .map(|t| t.order)
            .max()
            .map_or(0, |max| max + 1);
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            priority: input.priority,
            is_completed: false,
            order,
            created_at: now,
            updated_at: now,
            is_daily: input.is_daily,
            sub_tasks: input.sub_tasks.iter().map(|title| SubTask::new(title)).collect(),
            daily_progress: BTreeMap::new(),
        };
        self.tasks.push(task.clone());
        self.commit();
        task
    }

    /// Merges the given fields into the matching task and refreshes
    /// `updated_at`. Unknown ids are a silent no-op returning `None`.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Option<Task> {
        let now = Utc::now().timestamp_millis();
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = if description.is_empty() { None } else { Some(description) };
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(is_completed) = patch.is_completed {
            task.is_completed = is_completed;
        }
        if let Some(is_daily) = patch.is_daily {
            task.is_daily = is_daily;
        }
        if let Some(sub_tasks) = patch.sub_tasks {
            task.sub_tasks = sub_tasks;
        }
        task.updated_at = now;
        let updated = task.clone();
        self.commit();
        Some(updated)
    }

    /// Permanently removes the matching task. Sibling orders are left as-is,
    /// sparse but still totally ordered. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Flips `is_completed`. Intended for one-shot tasks; permitted but
    /// meaningless on daily tasks, whose completion lives in
    /// `daily_progress`.
    pub fn toggle_completion(&mut self, id: &str) -> Option<Task> {
        let now = Utc::now().timestamp_millis();
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.is_completed = !task.is_completed;
        task.updated_at = now;
        let updated = task.clone();
        self.commit();
        Some(updated)
    }

    /// Moves a task within or across quadrants.
    ///
    /// The task currently sitting at `source_index` of the source quadrant
    /// must be the one the caller thinks it is; otherwise the gesture was
    /// computed against a stale snapshot and the whole operation aborts as a
    /// no-op. On success every task in the affected quadrant(s) has its
    /// `order` rewritten to its positional index, which also clears any gaps
    /// accumulated from deletes. Quadrants not involved in the move are never
    /// touched.
    ///
    /// A `dest_index` past the end of the destination list is clamped, so an
    /// out-of-range drop degrades to an append.
    pub fn reorder(
        &mut self,
        task_id: &str,
        source_priority: Priority,
        dest_priority: Priority,
        source_index: usize,
        dest_index: usize,
    ) -> bool {
        let source_list = self.by_priority(source_priority);
        match source_list.get(source_index) {
            Some(task) if task.id == task_id => {}
            _ => {
                msg_debug!(format!(
                    "reorder aborted: index {} of {} does not hold task {}",
                    source_index, source_priority, task_id
                ));
                return false;
            }
        }
        let now = Utc::now().timestamp_millis();
        if source_priority == dest_priority {
            let mut list = source_list;
            let task = list.remove(source_index);
            let at = dest_index.min(list.len());
            list.insert(at, task);
            self.renumber(&list, source_priority, now);
        } else {
            let mut source = source_list;
            let mut moved = source.remove(source_index);
            moved.priority = dest_priority;
            let mut dest = self.by_priority(dest_priority);
            let at = dest_index.min(dest.len());
            dest.insert(at, moved);
            self.renumber(&source, source_priority, now);
            self.renumber(&dest, dest_priority, now);
        }
        self.commit();
        true
    }

    /// Rewrites `order` (and quadrant) to positional indices, refreshing
    /// `updated_at` only on tasks that actually changed.
    fn renumber(&mut self, list: &[Task], priority: Priority, now: i64) {
        for (position, entry) in list.iter().enumerate() {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == entry.id) {
                let order = position as i64;
                if task.order != order || task.priority != priority {
                    task.order = order;
                    task.priority = priority;
                    task.updated_at = now;
                }
            }
        }
    }

    /// Replaces (or inserts) one day's progress record for the matching
    /// task. Unknown ids are a silent no-op.
    pub fn record_day(&mut self, id: &str, date: NaiveDate, day: DailyProgress) -> Option<Task> {
        let current = self.tasks.iter().find(|t| t.id == id)?.clone();
        let mut next = progress::record_day(&current, date, day);
        next.updated_at = Utc::now().timestamp_millis();
        self.replace(next)
    }

    /// Checks or unchecks one sub-task for a day, re-deriving the day's
    /// completion flag. Unknown ids are a silent no-op.
    pub fn toggle_sub_task(&mut self, id: &str, date: NaiveDate, sub_task_id: &str, checked: bool) -> Option<Task> {
        let current = self.tasks.iter().find(|t| t.id == id)?.clone();
        let mut next = progress::toggle_sub_task(&current, date, sub_task_id, checked);
        next.updated_at = Utc::now().timestamp_millis();
        self.replace(next)
    }

    fn replace(&mut self, next: Task) -> Option<Task> {
        let slot = self.tasks.iter_mut().find(|t| t.id == next.id)?;
        *slot = next.clone();
        self.commit();
        Some(next)
    }

    /// Resolves a user-supplied reference: exact id, unique id prefix, or
    /// exact title.
    pub fn find(&self, ident: &str) -> Option<&Task> {
        if let Some(task) = self.tasks.iter().find(|t| t.id == ident) {
            return Some(task);
        }
        if !ident.is_empty() {
            let mut by_prefix = self.tasks.iter().filter(|t| t.id.starts_with(ident));
            if let (Some(task), None) = (by_prefix.next(), by_prefix.next()) {
                return Some(task);
            }
        }
        self.tasks.iter().find(|t| t.title == ident)
    }
}
