#[cfg(test)]
mod tests {
    use chrono::Local;
    use eisen::db::tasks::Tasks;
    use eisen::libs::export::{ExportData, ExportFormat, Exporter};
    use eisen::libs::task::{Priority, TaskFilter, TaskInput};
    use std::fs;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME redirection is process-global, so tests touching it run serialized.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext {
                _guard: guard,
                temp_dir,
            }
        }
    }

    fn seed() -> Vec<eisen::libs::task::Task> {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(TaskInput {
            title: "Ship release".to_string(),
            description: Some("Cut the final build".to_string()),
            priority: Priority::UrgentImportant,
            is_daily: false,
            sub_tasks: Vec::new(),
        });
        let habit = tasks.create(TaskInput {
            title: "Morning run".to_string(),
            description: None,
            priority: Priority::UnurgentImportant,
            is_daily: true,
            sub_tasks: vec!["Warm up".to_string(), "5k".to_string()],
        });
        let today = Local::now().date_naive();
        let sub_id = habit.sub_tasks[0].id.clone();
        tasks.toggle_sub_task(&habit.id, today, &sub_id, true);
        tasks.fetch(TaskFilter::All)
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_writes_task_rows(ctx: &mut ExportTestContext) {
        let snapshot = seed();
        let output = ctx.temp_dir.path().join("tasks.csv");
        let today = Local::now().date_naive();

        let written = Exporter::new(ExportFormat::Csv, Some(output.clone()))
            .export(ExportData::Tasks, &snapshot, today)
            .unwrap();

        assert_eq!(written, vec![output.clone()]);
        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("Ship release"));
        assert!(contents.contains("Morning run"));
        assert!(contents.contains("urgent-important"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_parses_back(ctx: &mut ExportTestContext) {
        let snapshot = seed();
        let output = ctx.temp_dir.path().join("tasks.json");
        let today = Local::now().date_naive();

        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export(ExportData::Tasks, &snapshot, today)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_all_includes_stats(ctx: &mut ExportTestContext) {
        let snapshot = seed();
        let output = ctx.temp_dir.path().join("all.json");
        let today = Local::now().date_naive();

        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export(ExportData::All, &snapshot, today)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed["tasks"].as_array().unwrap().len(), 2);
        // Stats cover daily tasks only.
        let stats = parsed["stats"].as_array().unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0]["task"], "Morning run");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_all_writes_sibling_files(ctx: &mut ExportTestContext) {
        let snapshot = seed();
        let output = ctx.temp_dir.path().join("export.csv");
        let today = Local::now().date_naive();

        let written = Exporter::new(ExportFormat::Csv, Some(output))
            .export(ExportData::All, &snapshot, today)
            .unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[0].file_name().unwrap().to_string_lossy().contains("tasks"));
        assert!(written[1].file_name().unwrap().to_string_lossy().contains("stats"));
        for path in &written {
            assert!(path.exists());
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export_creates_workbook(ctx: &mut ExportTestContext) {
        let snapshot = seed();
        let output = ctx.temp_dir.path().join("export.xlsx");
        let today = Local::now().date_naive();

        Exporter::new(ExportFormat::Excel, Some(output.clone()))
            .export(ExportData::All, &snapshot, today)
            .unwrap();

        let metadata = fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0);
    }
}
