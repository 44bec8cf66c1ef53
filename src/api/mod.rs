//! Transport client for the remote task service.
//!
//! Wraps the HTTP API behind the [`TaskTransport`] trait so the list
//! controller can be driven by the real [`TaskApi`] client in the binary and
//! by scripted implementations in tests. All transport failures normalize
//! into a single [`ApiError`] value; call sites own the user-facing wording.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxdo::api::{TaskApi, TaskTransport};
//! use voxdo::libs::task::TaskQuery;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = TaskApi::new("http://localhost:5000/api");
//! let tasks = api.list_tasks(&TaskQuery::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Category, Task, TaskPatch, TaskQuery};
use reqwest::StatusCode;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod tasks;

pub use tasks::TaskApi;

/// Uniform error shape for all transport failures.
///
/// Non-2xx responses become [`ApiError::Server`] carrying the server's
/// structured payload when one is present; connection-level failures become
/// [`ApiError::Network`]. No retries happen at this layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to read audio file: {0}")]
    Audio(#[from] std::io::Error),
}

/// Error body shape used by the task service (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    detail: String,
}

/// Normalizes a non-success response into an [`ApiError`].
///
/// The server's `detail` field is used verbatim when the body parses;
/// otherwise a generic message carrying the status code is produced.
pub fn normalize_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorPayload>(body)
        .map(|payload| payload.detail)
        .unwrap_or_else(|_| format!("server returned {}", status));
    ApiError::Server {
        status: status.as_u16(),
        detail,
    }
}

/// Task service operations, one HTTP round trip each.
#[allow(async_fn_in_trait)]
pub trait TaskTransport {
    /// Lists tasks matching the query. Returns the server's list verbatim,
    /// in server-determined order, with no client-side filtering.
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, ApiError>;

    /// Creates a task from text and returns the created record.
    async fn create_task(&self, text: &str, category: Category) -> Result<Task, ApiError>;

    /// Uploads an audio recording; the server transcribes it and creates the
    /// task from the transcript.
    async fn create_task_from_audio(&self, audio: &Path, category: Category) -> Result<Task, ApiError>;

    /// Applies a partial update. Fields absent from the patch are left
    /// untouched server-side.
    async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// Deletes a task. Expects an empty success response.
    async fn delete_task(&self, id: i64) -> Result<(), ApiError>;
}
