use super::{ApiError, TaskTransport};
use crate::libs::messages::Message;
use crate::libs::task::{Category, Task, TaskPatch, TaskQuery};
use crate::msg_debug;
use reqwest::{multipart, Client, Response};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

const TASKS_URL: &str = "tasks/";

#[derive(Serialize, Debug)]
struct CreateTaskBody<'a> {
    text: &'a str,
    category: Category,
}

/// HTTP client for the task service.
///
/// One instance per configured base URL; holds a pooled [`reqwest::Client`].
pub struct TaskApi {
    client: Client,
    base_url: String,
}

impl TaskApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, TASKS_URL)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}{}/", self.base_url, TASKS_URL, id)
    }

    /// Consumes a non-success response and normalizes it.
    async fn into_error(res: Response) -> ApiError {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        super::normalize_error(status, &body)
    }

    fn mime_for(audio: &Path) -> &'static str {
        match audio.extension().and_then(|ext| ext.to_str()) {
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("ogg") => "audio/ogg",
            Some("webm") => "audio/webm",
            _ => "application/octet-stream",
        }
    }
}

impl TaskTransport for TaskApi {
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url();
        msg_debug!(Message::DebugRequest("GET".to_string(), url.clone()));
        let res = self.client.get(url).query(query).send().await?;
        if !res.status().is_success() {
            return Err(Self::into_error(res).await);
        }
        Ok(res.json::<Vec<Task>>().await?)
    }

    async fn create_task(&self, text: &str, category: Category) -> Result<Task, ApiError> {
        let url = self.collection_url();
        msg_debug!(Message::DebugRequest("POST".to_string(), url.clone()));
        let body = CreateTaskBody { text, category };
        let res = self.client.post(url).json(&body).send().await?;
        if !res.status().is_success() {
            return Err(Self::into_error(res).await);
        }
        Ok(res.json::<Task>().await?)
    }

    async fn create_task_from_audio(&self, audio: &Path, category: Category) -> Result<Task, ApiError> {
        let bytes = fs::read(audio).await?;
        let file_name = audio
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("recording")
            .to_string();
        let part = multipart::Part::bytes(bytes).file_name(file_name).mime_str(Self::mime_for(audio))?;
        let form = multipart::Form::new().part("audio", part).text("category", category.to_string());

        let url = self.collection_url();
        msg_debug!(Message::DebugRequest("POST".to_string(), url.clone()));
        let res = self.client.post(url).multipart(form).send().await?;
        if !res.status().is_success() {
            return Err(Self::into_error(res).await);
        }
        Ok(res.json::<Task>().await?)
    }

    async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        msg_debug!(Message::DebugRequest("PATCH".to_string(), url.clone()));
        let res = self.client.patch(url).json(patch).send().await?;
        if !res.status().is_success() {
            return Err(Self::into_error(res).await);
        }
        Ok(res.json::<Task>().await?)
    }

    async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let url = self.item_url(id);
        msg_debug!(Message::DebugRequest("DELETE".to_string(), url.clone()));
        let res = self.client.delete(url).send().await?;
        if !res.status().is_success() {
            return Err(Self::into_error(res).await);
        }
        Ok(())
    }
}
