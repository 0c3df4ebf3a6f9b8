#[cfg(test)]
mod tests {
    use eisen::db::tasks::Tasks;
    use eisen::libs::task::{Priority, TaskFilter, TaskInput};
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME redirection is process-global, so tests touching it run serialized.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct ReorderTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ReorderTestContext {
        fn setup() -> Self {
            let guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReorderTestContext {
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

    fn titles(tasks: &Tasks, priority: Priority) -> Vec<String> {
        tasks.by_priority(priority).iter().map(|t| t.title.clone()).collect()
    }

    fn orders(tasks: &Tasks, priority: Priority) -> Vec<i64> {
        tasks.by_priority(priority).iter().map(|t| t.order).collect()
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_same_quadrant_move_rewrites_all_orders(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let _a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));
        let c = tasks.create(input("Task C", Priority::UrgentImportant));

        assert!(tasks.reorder(&c.id, Priority::UrgentImportant, Priority::UrgentImportant, 2, 0));

        assert_eq!(titles(&tasks, Priority::UrgentImportant), vec!["Task C", "Task A", "Task B"]);
        assert_eq!(orders(&tasks, Priority::UrgentImportant), vec![0, 1, 2]);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_same_quadrant_move_compacts_gaps(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let _a = tasks.create(input("Task A", Priority::UrgentImportant));
        let b = tasks.create(input("Task B", Priority::UrgentImportant));
        let c = tasks.create(input("Task C", Priority::UrgentImportant));
        let _d = tasks.create(input("Task D", Priority::UrgentImportant));

        // Deleting B leaves a gap (orders 0, 2, 3)...
        tasks.delete(&b.id);
        assert_eq!(orders(&tasks, Priority::UrgentImportant), vec![0, 2, 3]);

        // ...and any reorder in the quadrant renumbers everything contiguously.
        assert!(tasks.reorder(&c.id, Priority::UrgentImportant, Priority::UrgentImportant, 1, 2));
        assert_eq!(titles(&tasks, Priority::UrgentImportant), vec!["Task A", "Task D", "Task C"]);
        assert_eq!(orders(&tasks, Priority::UrgentImportant), vec![0, 1, 2]);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_cross_quadrant_move_end_to_end(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let b = tasks.create(input("Task B", Priority::UrgentUnimportant));
        let c = tasks.create(input("Task C", Priority::UnurgentImportant));
        let d = tasks.create(input("Task D", Priority::UnurgentUnimportant));

        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UnurgentImportant, 0, 0));

        // The moved task owns position 0 of its new quadrant; the former
        // sole occupant shifted down.
        let dest = tasks.by_priority(Priority::UnurgentImportant);
        assert_eq!(dest.len(), 2);
        assert_eq!(dest[0].id, a.id);
        assert_eq!(dest[0].order, 0);
        assert_eq!(dest[0].priority, Priority::UnurgentImportant);
        assert_eq!(dest[1].id, c.id);
        assert_eq!(dest[1].order, 1);

        // Exactly one task changed priority; bystander quadrants are intact.
        assert!(tasks.by_priority(Priority::UrgentImportant).is_empty());
        let bystander_b = tasks.find(&b.id).unwrap();
        assert_eq!(bystander_b.priority, Priority::UrgentUnimportant);
        assert_eq!(bystander_b.order, 0);
        let bystander_d = tasks.find(&d.id).unwrap();
        assert_eq!(bystander_d.priority, Priority::UnurgentUnimportant);
        assert_eq!(bystander_d.order, 0);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_untouched_quadrants_keep_timestamps(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let _a = tasks.create(input("Task A", Priority::UrgentImportant));
        let b = tasks.create(input("Task B", Priority::UrgentImportant));
        let bystander = tasks.create(input("Bystander", Priority::UnurgentUnimportant));

        assert!(tasks.reorder(&b.id, Priority::UrgentImportant, Priority::UrgentImportant, 1, 0));

        let untouched = tasks.find(&bystander.id).unwrap();
        assert_eq!(untouched.updated_at, bystander.updated_at);
        assert_eq!(untouched.order, bystander.order);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_stale_identity_aborts_as_noop(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));

        let before = tasks.fetch(TaskFilter::All);

        // Index 1 does not hold task A: the gesture is stale.
        assert!(!tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, 1, 0));
        // Out-of-bounds source index is equally stale.
        assert!(!tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, 5, 0));

        assert_eq!(tasks.fetch(TaskFilter::All), before);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_reorder_after_delete_is_noop_not_crash(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));

        // A pending gesture computed against the old snapshot...
        let stale_index = 0;
        tasks.delete(&a.id);

        // ...lands after the delete and must be absorbed.
        assert!(!tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, stale_index, 1));
        assert_eq!(titles(&tasks, Priority::UrgentImportant), vec!["Task B"]);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_out_of_range_dest_index_appends(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));
        let _c = tasks.create(input("Task C", Priority::UrgentImportant));
        let _x = tasks.create(input("Task X", Priority::UnurgentImportant));

        // Same quadrant: dropping past the end appends.
        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, 0, 99));
        assert_eq!(titles(&tasks, Priority::UrgentImportant), vec!["Task B", "Task C", "Task A"]);

        // Cross quadrant: same clamping.
        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UnurgentImportant, 2, 7));
        assert_eq!(titles(&tasks, Priority::UnurgentImportant), vec!["Task X", "Task A"]);
        assert_eq!(orders(&tasks, Priority::UnurgentImportant), vec![0, 1]);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_inverse_moves_restore_id_sequence(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let _b = tasks.create(input("Task B", Priority::UrgentImportant));
        let _c = tasks.create(input("Task C", Priority::UrgentImportant));

        let original: Vec<String> = tasks.by_priority(Priority::UrgentImportant).iter().map(|t| t.id.clone()).collect();

        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, 0, 2));
        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UrgentImportant, 2, 0));

        let restored: Vec<String> = tasks.by_priority(Priority::UrgentImportant).iter().map(|t| t.id.clone()).collect();
        assert_eq!(restored, original);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_orders_strictly_increasing_after_mixed_operations(_ctx: &mut ReorderTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let a = tasks.create(input("Task A", Priority::UrgentImportant));
        let b = tasks.create(input("Task B", Priority::UrgentImportant));
        let _c = tasks.create(input("Task C", Priority::UrgentUnimportant));
        let d = tasks.create(input("Task D", Priority::UnurgentImportant));
        let _e = tasks.create(input("Task E", Priority::UrgentImportant));

        tasks.delete(&b.id);
        assert!(tasks.reorder(&a.id, Priority::UrgentImportant, Priority::UnurgentImportant, 0, 1));
        assert!(tasks.reorder(&d.id, Priority::UnurgentImportant, Priority::UnurgentImportant, 0, 1));
        tasks.create(input("Task F", Priority::UnurgentImportant));

        for priority in Priority::ALL {
            let list = tasks.by_priority(priority);
            for pair in list.windows(2) {
                assert!(
                    pair[0].order < pair[1].order,
                    "orders not strictly increasing in {}",
                    priority
                );
            }
        }
    }
}
