#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todl::db::tasks::Tasks;
    use todl::libs::task::Task;

    // Store paths resolve through HOME/LOCALAPPDATA; tests in this binary
    // are serialized so their sandboxes stay apart.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StoreTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str) -> Task {
        Task::new(title, "", date(2024, 1, 10), 1)
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_empty_store_loads_nothing(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_replace_all_stores_exact_contents(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        store.replace_all(&[task("Task A"), task("Task B")]).unwrap();

        let mut titles: Vec<String> = store.load_all().unwrap().into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["Task A", "Task B"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_replace_all_overwrites_previous_contents(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        store.replace_all(&[task("Task A"), task("Task B")]).unwrap();
        store.replace_all(&[task("Task C")]).unwrap();

        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Task C");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_by_title(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        store.replace_all(&[task("Task A"), task("Task B")]).unwrap();
        store.delete_by_title("Task A").unwrap();

        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Task B");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_missing_title_is_noop(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        store.replace_all(&[task("Task A")]).unwrap();
        store.delete_by_title("Task X").unwrap();

        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_schema_creation_is_idempotent(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        store.replace_all(&[task("Task A")]).unwrap();
        drop(store);

        // Reopening against the existing database keeps its contents.
        let mut store = Tasks::new().unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_preserves_fields(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();
        let mut original = Task::new("Write report", "Quarterly numbers", date(2024, 3, 1), 2);
        original.completed = true;
        store.replace_all(std::slice::from_ref(&original)).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![original]);
    }
}
