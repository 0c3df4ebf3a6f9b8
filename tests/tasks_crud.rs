#[cfg(test)]
mod tests {
    use eisen::db::tasks::Tasks;
    use eisen::libs::task::{Priority, TaskFilter, TaskInput, TaskPatch, ValidationError};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME redirection is process-global, so tests touching it run serialized.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn input(title: &str, priority: Priority) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: None,
            priority,
            is_daily: false,
            sub_tasks: Vec::new(),
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_order_and_defaults(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create(input("Write report", Priority::UrgentImportant));
        assert_eq!(first.order, 0);
        assert!(!first.is_completed);
        assert!(!first.is_daily);
        assert_eq!(first.created_at, first.updated_at);

        // Order keeps growing within the quadrant...
        let second = tasks.create(input("Answer mail", Priority::UrgentImportant));
        assert_eq!(second.order, 1);

        // ...while other quadrants start from zero.
        let other = tasks.create(input("Plan quarter", Priority::UnurgentImportant));
        assert_eq!(other.order, 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_daily_with_sub_tasks(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = tasks.create(TaskInput {
            title: "Morning routine".to_string(),
            description: None,
            priority: Priority::UnurgentImportant,
            is_daily: true,
            sub_tasks: vec!["Stretch".to_string(), "Meditate".to_string()],
        });

        assert!(task.is_daily);
        assert_eq!(task.sub_tasks.len(), 2);
        assert_eq!(task.sub_tasks[0].title, "Stretch");
        assert_ne!(task.sub_tasks[0].id, task.sub_tasks[1].id);
        assert!(task.daily_progress.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_merges_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create(input("Original title", Priority::UrgentImportant));

        let updated = tasks
            .update(
                &task.id,
                TaskPatch {
                    title: Some("Updated title".to_string()),
                    description: Some("Now with details".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.description.as_deref(), Some("Now with details"));
        assert_eq!(updated.priority, Priority::UrgentImportant);
        assert!(updated.updated_at >= task.updated_at);

        // An empty description clears the stored one.
        let cleared = tasks
            .update(
                &task.id,
                TaskPatch {
                    description: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.description, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id_is_silent_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(input("Only task", Priority::UrgentImportant));

        let result = tasks.update(
            "missing-id",
            TaskPatch {
                title: Some("Never applied".to_string()),
                ..Default::default()
            },
        );

        assert!(result.is_none());
        let all = tasks.fetch(TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Only task");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_leaves_sibling_orders_sparse(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let _a = tasks.create(input("Task A", Priority::UrgentImportant));
        let b = tasks.create(input("Task B", Priority::UrgentImportant));
        let _c = tasks.create(input("Task C", Priority::UrgentImportant));

        assert!(tasks.delete(&b.id));
        // Second delete of the same id misses silently.
        assert!(!tasks.delete(&b.id));

        // Siblings keep their original (now sparse) orders.
        let remaining = tasks.by_priority(Priority::UrgentImportant);
        let orders: Vec<i64> = remaining.iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![0, 2]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_after_delete_continues_from_max_order(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));
        tasks.delete(&a.id);

        let c = tasks.create(input("Task C", Priority::UrgentImportant));
        assert_eq!(c.order, 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_completion_flips(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create(input("One-shot", Priority::UrgentUnimportant));

        let done = tasks.toggle_completion(&task.id).unwrap();
        assert!(done.is_completed);
        let reopened = tasks.toggle_completion(&task.id).unwrap();
        assert!(!reopened.is_completed);
        assert!(tasks.toggle_completion("missing-id").is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_daily_filter(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(input("One-shot", Priority::UrgentImportant));
        tasks.create(TaskInput {
            title: "Habit".to_string(),
            description: None,
            priority: Priority::UnurgentImportant,
            is_daily: true,
            sub_tasks: Vec::new(),
        });

        let daily = tasks.fetch(TaskFilter::Daily);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].title, "Habit");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_find_by_id_prefix_and_title(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task = tasks.create(input("Pay invoices", Priority::UrgentImportant));
        tasks.create(input("Water plants", Priority::UnurgentUnimportant));

        assert_eq!(tasks.find(&task.id).unwrap().id, task.id);
        assert_eq!(tasks.find(&task.id[..8]).unwrap().id, task.id);
        assert_eq!(tasks.find("Pay invoices").unwrap().id, task.id);
        assert!(tasks.find("nonexistent").is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_subscribers_notified_on_every_mutation(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let notifications = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notifications);
        tasks.subscribe(move |_| counter.set(counter.get() + 1));

        let task = tasks.create(input("Watched task", Priority::UrgentImportant));
        tasks.toggle_completion(&task.id);
        tasks.delete(&task.id);

        assert_eq!(notifications.get(), 3);

        // Silent misses do not notify.
        tasks.delete(&task.id);
        assert_eq!(notifications.get(), 3);
    }

    #[test]
    fn test_validation_bounds() {
        let valid = input("Buy groceries", Priority::UrgentImportant);
        assert!(valid.validate().is_ok());

        let short = input("ab", Priority::UrgentImportant);
        assert_eq!(short.validate(), Err(ValidationError::TitleLength));

        let long = input(&"x".repeat(101), Priority::UrgentImportant);
        assert_eq!(long.validate(), Err(ValidationError::TitleLength));

        let mut described = input("Valid title", Priority::UrgentImportant);
        described.description = Some("d".repeat(501));
        assert_eq!(described.validate(), Err(ValidationError::DescriptionTooLong));
    }
}
