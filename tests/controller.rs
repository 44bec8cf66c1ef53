#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use std::path::Path;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use voxdo::api::{ApiError, TaskTransport};
    use voxdo::libs::controller::TaskListController;
    use voxdo::libs::task::{Category, CategoryFilter, DateFilter, Priority, Status, Task, TaskPatch, TaskQuery};

    /// Scripted stand-in for the task service. Keeps its own "server-side"
    /// collection and records every call so tests can assert on traffic.
    #[derive(Default)]
    struct MockTransport {
        tasks: Mutex<Vec<Task>>,
        next_id: Mutex<i64>,
        queries: Mutex<Vec<TaskQuery>>,
        created: Mutex<Vec<(String, Category)>>,
        deleted: Mutex<Vec<i64>>,
        fail_list: AtomicBool,
        fail_update: AtomicBool,
        fail_delete: AtomicBool,
    }

    impl MockTransport {
        fn new() -> Arc<Self> {
            let transport = Self::default();
            *transport.next_id.lock() = 1;
            Arc::new(transport)
        }

        fn seed(&self, tasks: Vec<Task>) {
            let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
            *self.next_id.lock() = max_id + 1;
            *self.tasks.lock() = tasks;
        }

        fn server_error() -> ApiError {
            ApiError::Server {
                status: 500,
                detail: "internal error".to_string(),
            }
        }
    }

    fn task(id: i64, text: &str) -> Task {
        Task {
            id,
            text: text.to_string(),
            status: Status::Pending,
            priority: Priority::None,
            due_date: None,
            category: "Personal".to_string(),
        }
    }

    /// Handle given to the controller; the test keeps the other `Arc` clone
    /// to inspect recorded traffic.
    struct SharedTransport(Arc<MockTransport>);

    impl TaskTransport for SharedTransport {
        async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
            self.0.queries.lock().push(query.clone());
            if self.0.fail_list.load(Ordering::SeqCst) {
                return Err(MockTransport::server_error());
            }
            Ok(self.0.tasks.lock().clone())
        }

        async fn create_task(&self, text: &str, category: Category) -> Result<Task, ApiError> {
            self.0.created.lock().push((text.to_string(), category));
            let id = {
                let mut next_id = self.0.next_id.lock();
                let id = *next_id;
                *next_id += 1;
                id
            };
            let record = Task {
                id,
                text: text.to_string(),
                status: Status::Pending,
                // The server derives priority on create; the client only sees
                // it through the refetch.
                priority: Priority::Medium,
                due_date: None,
                category: category.to_string(),
            };
            self.0.tasks.lock().push(record.clone());
            Ok(record)
        }

        async fn create_task_from_audio(&self, _audio: &Path, category: Category) -> Result<Task, ApiError> {
            self.create_task("transcribed from audio", category).await
        }

        async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
            if self.0.fail_update.load(Ordering::SeqCst) {
                return Err(MockTransport::server_error());
            }
            let mut tasks = self.0.tasks.lock();
            let record = tasks.iter_mut().find(|task| task.id == id).ok_or(ApiError::Server {
                status: 404,
                detail: "Not found.".to_string(),
            })?;
            if let Some(text) = &patch.text {
                record.text = text.clone();
            }
            if let Some(status) = patch.status {
                record.status = status;
            }
            Ok(record.clone())
        }

        async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
            if self.0.fail_delete.load(Ordering::SeqCst) {
                return Err(MockTransport::server_error());
            }
            self.0.deleted.lock().push(id);
            self.0.tasks.lock().retain(|task| task.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_add_task_creates_then_refetches() {
        let transport = MockTransport::new();
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));

        controller.add_task("buy milk", Category::Work).await.unwrap();

        assert_eq!(*transport.created.lock(), vec![("buy milk".to_string(), Category::Work)]);
        // Exactly one list call: the refetch after create.
        assert_eq!(transport.queries.lock().len(), 1);
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].text, "buy milk");
        assert_eq!(controller.tasks()[0].category, "Work");
        // Server-derived field arrives via the refetch.
        assert_eq!(controller.tasks()[0].priority, Priority::Medium);
        assert!(controller.last_error().is_none());
    }

    #[tokio::test]
    async fn test_add_task_trims_text() {
        let transport = MockTransport::new();
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));

        controller.add_task("  buy milk  ", Category::Personal).await.unwrap();

        assert_eq!(*transport.created.lock(), vec![("buy milk".to_string(), Category::Personal)]);
    }

    #[tokio::test]
    async fn test_add_task_rejects_empty_text_without_transport_call() {
        let transport = MockTransport::new();
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));

        let result = controller.add_task("   ", Category::Personal).await;

        assert!(result.is_err());
        assert!(transport.created.lock().is_empty());
        assert!(transport.queries.lock().is_empty());
        assert!(controller.tasks().is_empty());
        assert!(controller.last_error().is_some());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_collection_untouched() {
        let transport = MockTransport::new();
        transport.seed(vec![task(1, "write report")]);
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));
        controller.refresh().await.unwrap();
        transport.fail_update.store(true, Ordering::SeqCst);

        let result = controller.toggle(1).await;

        assert!(result.is_err());
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].status, Status::Pending);
        assert!(controller.last_error().is_some());
        // No refetch happened after the failed update.
        assert_eq!(transport.queries.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_flips_status_and_refetches() {
        let transport = MockTransport::new();
        transport.seed(vec![task(1, "write report")]);
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));
        controller.refresh().await.unwrap();

        controller.toggle(1).await.unwrap();
        assert_eq!(controller.tasks()[0].status, Status::Completed);

        controller.toggle(1).await.unwrap();
        assert_eq!(controller.tasks()[0].status, Status::Pending);
    }

    #[tokio::test]
    async fn test_remove_task_drops_locally_without_refetch() {
        let transport = MockTransport::new();
        transport.seed(vec![task(1, "one"), task(2, "two")]);
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport))).with_removal_grace(Duration::from_millis(50));
        controller.refresh().await.unwrap();

        controller.remove_task(1).await.unwrap();

        // Gone from the local collection immediately, independent of the
        // deletion-in-progress marker.
        let ids: Vec<i64> = controller.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(*transport.deleted.lock(), vec![1]);
        // No refetch on delete.
        assert_eq!(transport.queries.lock().len(), 1);
        // Marker still set right after the call settles, cleared after grace.
        assert!(controller.is_deleting(1));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!controller.is_deleting(1));
    }

    #[tokio::test]
    async fn test_remove_task_failure_keeps_task_and_clears_marker() {
        let transport = MockTransport::new();
        transport.seed(vec![task(1, "one")]);
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport))).with_removal_grace(Duration::from_millis(50));
        controller.refresh().await.unwrap();
        transport.fail_delete.store(true, Ordering::SeqCst);

        let result = controller.remove_task(1).await;

        assert!(result.is_err());
        assert_eq!(controller.tasks().len(), 1);
        assert!(controller.last_error().is_some());
        assert!(controller.is_deleting(1));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!controller.is_deleting(1));
    }

    #[tokio::test]
    async fn test_filter_change_triggers_exactly_one_refresh() {
        let transport = MockTransport::new();
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));
        controller.refresh().await.unwrap();

        controller.set_category_filter(CategoryFilter::Only(Category::Work)).await.unwrap();
        {
            let queries = transport.queries.lock();
            assert_eq!(queries.len(), 2);
            assert_eq!(queries[1].category, Some(Category::Work));
            assert_eq!(queries[1].date_filter, None);
        }

        controller.set_date_filter(DateFilter::Today).await.unwrap();
        {
            let queries = transport.queries.lock();
            assert_eq!(queries.len(), 3);
            assert_eq!(queries[2].category, Some(Category::Work));
            assert_eq!(queries[2].date_filter, Some(DateFilter::Today));
        }
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_collection() {
        let transport = MockTransport::new();
        transport.seed(vec![task(1, "one"), task(2, "two")]);
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));
        controller.refresh().await.unwrap();
        assert_eq!(controller.tasks().len(), 2);

        transport.fail_list.store(true, Ordering::SeqCst);
        let result = controller.refresh().await;

        assert!(result.is_err());
        assert_eq!(controller.tasks().len(), 2);
        assert!(controller.last_error().is_some());

        // Recovery clears the surfaced error.
        transport.fail_list.store(false, Ordering::SeqCst);
        controller.refresh().await.unwrap();
        assert!(controller.last_error().is_none());
    }

    #[tokio::test]
    async fn test_add_task_from_audio_refetches() {
        let transport = MockTransport::new();
        let mut controller = TaskListController::new(SharedTransport(Arc::clone(&transport)));

        controller.add_task_from_audio(Path::new("clip.wav"), Category::Study).await.unwrap();

        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].text, "transcribed from audio");
        assert_eq!(controller.tasks()[0].category, "Study");
    }
}
