//! In-memory task collection and mutation orchestration.
//!
//! [`TaskListController`] owns the authoritative client-side task collection
//! and the active filters. Mutations follow a refetch-after-mutation strategy:
//! create and update are followed by an unconditional refresh so the
//! collection always reflects server-side ordering and derived fields (for
//! example the assigned priority). Deletion removes the task locally on
//! success instead of refetching.
//!
//! Calls are serialized through `&mut self`; there is no sequence-number or
//! cancellation guard for refreshes, and an in-flight request cannot be
//! aborted once issued.

use crate::api::{ApiError, TaskTransport};
use crate::libs::messages::Message;
use crate::libs::task::{Category, CategoryFilter, DateFilter, Task, TaskPatch, TaskQuery};
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow};
use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// How long a deleted task keeps its deletion-in-progress marker after the
/// delete call settles, leaving time for exit presentation.
pub const REMOVAL_GRACE: Duration = Duration::from_millis(500);

pub struct TaskListController<T> {
    transport: T,
    tasks: Vec<Task>,
    category_filter: CategoryFilter,
    date_filter: DateFilter,
    /// Ids currently mid-delete. Drives exit presentation only; shared with
    /// the background tasks that clear markers after the grace period.
    deleting: Arc<Mutex<HashSet<i64>>>,
    error: Option<String>,
    removal_grace: Duration,
}

impl<T: TaskTransport> TaskListController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            tasks: Vec::new(),
            category_filter: CategoryFilter::default(),
            date_filter: DateFilter::default(),
            deleting: Arc::new(Mutex::new(HashSet::new())),
            error: None,
            removal_grace: REMOVAL_GRACE,
        }
    }

    /// Sets both filters without triggering a fetch. Intended for initial
    /// setup before the first [`refresh`](Self::refresh).
    pub fn with_filters(mut self, category: CategoryFilter, date: DateFilter) -> Self {
        self.category_filter = category;
        self.date_filter = date;
        self
    }

    /// Overrides the deletion marker grace period. Tests use short periods.
    pub fn with_removal_grace(mut self, grace: Duration) -> Self {
        self.removal_grace = grace;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn date_filter(&self) -> DateFilter {
        self.date_filter
    }

    /// Last surfaced error message, cleared by the next successful refresh.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the task is marked deletion-in-progress.
    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.lock().contains(&id)
    }

    /// Refetches the collection with the current filters.
    ///
    /// On success the whole collection is replaced and any error is cleared.
    /// On failure the previous collection stays visible (stale but available)
    /// and the error message is recorded. Never a partial merge.
    pub async fn refresh(&mut self) -> Result<()> {
        let query = TaskQuery::new(self.category_filter, self.date_filter);
        match self.transport.list_tasks(&query).await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
                msg_debug!(Message::DebugTasksRefreshed(self.tasks.len()));
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Creates a task and refetches the collection.
    ///
    /// Empty trimmed text is rejected before any request is made. The created
    /// record is picked up by the refetch rather than taken from the create
    /// response, so server ordering and derived fields are reflected.
    pub async fn add_task(&mut self, text: &str, category: Category) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            self.error = Some(Message::TaskTextEmpty.to_string());
            msg_bail_anyhow!(Message::TaskTextEmpty);
        }
        if let Err(err) = self.transport.create_task(text, category).await {
            return self.fail(err);
        }
        self.refresh().await
    }

    /// Uploads an audio recording for server-side transcription, then
    /// refetches the collection.
    pub async fn add_task_from_audio(&mut self, audio: &Path, category: Category) -> Result<()> {
        if let Err(err) = self.transport.create_task_from_audio(audio, category).await {
            return self.fail(err);
        }
        self.refresh().await
    }

    /// Applies a partial update and refetches the collection.
    pub async fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<()> {
        if let Err(err) = self.transport.update_task(id, patch).await {
            return self.fail(err);
        }
        self.refresh().await
    }

    /// Toggles completion for a task currently in the collection.
    pub async fn toggle(&mut self, id: i64) -> Result<()> {
        let status = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.status)
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;
        let patch = TaskPatch {
            status: Some(status.toggled()),
            ..TaskPatch::default()
        };
        self.update_task(id, &patch).await
    }

    /// Deletes a task.
    ///
    /// The id is marked deletion-in-progress for the duration of the call.
    /// On success the task is dropped from the local collection directly, no
    /// refetch. On failure the task stays and the error is recorded. Either
    /// way the marker is cleared a grace period after the call settles, so a
    /// slow delete can no longer outlive its own marker.
    pub async fn remove_task(&mut self, id: i64) -> Result<()> {
        self.deleting.lock().insert(id);
        let result = self.transport.delete_task(id).await;
        self.schedule_marker_cleanup(id);
        match result {
            Ok(()) => {
                self.tasks.retain(|task| task.id != id);
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Narrows or widens the category constraint; triggers one refresh.
    pub async fn set_category_filter(&mut self, filter: CategoryFilter) -> Result<()> {
        self.category_filter = filter;
        self.refresh().await
    }

    /// Narrows or widens the due-date constraint; triggers one refresh.
    pub async fn set_date_filter(&mut self, filter: DateFilter) -> Result<()> {
        self.date_filter = filter;
        self.refresh().await
    }

    fn fail(&mut self, err: ApiError) -> Result<()> {
        self.error = Some(err.to_string());
        Err(err.into())
    }

    fn schedule_marker_cleanup(&self, id: i64) {
        let deleting = Arc::clone(&self.deleting);
        let grace = self.removal_grace;
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            deleting.lock().remove(&id);
            msg_debug!(Message::DebugRemovalMarkerCleared(id));
        });
    }
}
