#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todl::db::db::StoreError;
    use todl::db::tasks::Tasks;
    use todl::libs::task::Task;
    use todl::libs::task_list::TaskList;

    // Store paths resolve through HOME/LOCALAPPDATA; tests in this binary
    // are serialized so their sandboxes stay apart.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ListTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ListTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ListTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, priority: i32, due: NaiveDate) -> Task {
        Task::new(title, "", due, priority)
    }

    fn load_list() -> TaskList {
        TaskList::load(Tasks::new().unwrap()).unwrap()
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.snapshot().iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_syncs_store(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();
        list.add(task("Task B", 2, date(2024, 1, 11))).unwrap();

        // A fresh collection built from the same store sees both tasks.
        let reloaded = load_list();
        let mut reloaded_titles: Vec<&str> = titles(&reloaded);
        reloaded_titles.sort();
        assert_eq!(reloaded_titles, vec!["Task A", "Task B"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_preserves_insertion_order(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task C", 3, date(2024, 1, 12))).unwrap();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();
        list.add(task("Task B", 2, date(2024, 1, 11))).unwrap();

        assert_eq!(titles(&list), vec!["Task C", "Task A", "Task B"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_remove_then_find_is_empty(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();

        assert!(list.remove("Task A").unwrap());
        assert!(list.find("Task A").is_none());
        assert!(list.snapshot().is_empty());

        // The removal is durable.
        assert!(load_list().snapshot().is_empty());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_remove_missing_is_noop(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();

        assert!(!list.remove("Task X").unwrap());
        assert_eq!(list.len(), 1);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_mark_complete_is_durable(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();

        assert!(list.mark_complete("Task A").unwrap());
        assert!(list.find("Task A").unwrap().completed);

        let reloaded = load_list();
        assert!(reloaded.find("Task A").unwrap().completed);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_mark_complete_missing_is_noop(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();

        assert!(!list.mark_complete("Task X").unwrap());
        assert!(!list.find("Task A").unwrap().completed);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_sort_by_priority_is_stable(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task X", 2, date(2024, 1, 10))).unwrap();
        list.add(task("Task Y", 1, date(2024, 1, 11))).unwrap();
        list.add(task("Task Z", 2, date(2024, 1, 12))).unwrap();

        list.sort_by_priority();

        // Equal priorities keep their relative order.
        assert_eq!(titles(&list), vec!["Task Y", "Task X", "Task Z"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_sort_by_due_date_is_idempotent(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 2, 1))).unwrap();
        list.add(task("Task B", 2, date(2024, 1, 5))).unwrap();
        list.add(task("Task C", 3, date(2024, 1, 20))).unwrap();

        list.sort_by_due_date();
        assert_eq!(titles(&list), vec!["Task B", "Task C", "Task A"]);

        list.sort_by_due_date();
        assert_eq!(titles(&list), vec!["Task B", "Task C", "Task A"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_sort_orders_match_on_both_keys(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 2, date(2024, 1, 10))).unwrap();
        list.add(task("Task B", 1, date(2024, 1, 5))).unwrap();

        list.sort_by_priority();
        assert_eq!(titles(&list), vec!["Task B", "Task A"]);

        list.sort_by_due_date();
        assert_eq!(titles(&list), vec!["Task B", "Task A"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_duplicate_title_add_rolls_back(_ctx: &mut ListTestContext) {
        let mut list = load_list();
        list.add(task("Task A", 1, date(2024, 1, 10))).unwrap();

        // The title column is the primary key; the sync fails and the
        // append is rolled back, leaving memory and store in step.
        let err = list.add(task("Task A", 2, date(2024, 1, 11))).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.find("Task A").unwrap().priority, 1);
        assert_eq!(load_list().len(), 1);
    }
}
