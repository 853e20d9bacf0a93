//! Todo Commands
//!
//! HTTP bindings for the `/todos` resource.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use super::TaskStore;
use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskDraft, TaskPatch};

/// `TaskStore` backed by the REST API at `AppConfig::api_url`
#[derive(Debug, Clone)]
pub struct RestTaskStore {
    client: Client,
    base_url: String,
    owner_id: u32,
}

impl RestTaskStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            owner_id: config.owner_id,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn task_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Any non-2xx answer is a failed request
fn status_result(status: StatusCode) -> StoreResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status(status.as_u16()))
    }
}

fn check_status(response: Response) -> StoreResult<Response> {
    status_result(response.status()).map(|()| response)
}

#[async_trait(?Send)]
impl TaskStore for RestTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let tasks = self
            .client
            .get(self.collection_url())
            .query(&[("ownerId", self.owner_id)])
            .send()
            .await
            .map_err(StoreError::from)
            .and_then(check_status)?
            .json::<Vec<Task>>()
            .await?;
        Ok(tasks)
    }

    async fn create(&self, draft: &TaskDraft) -> StoreResult<Task> {
        let task = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(StoreError::from)
            .and_then(check_status)?
            .json::<Task>()
            .await?;
        Ok(task)
    }

    async fn update(&self, id: u32, patch: &TaskPatch) -> StoreResult<Task> {
        let task = self
            .client
            .patch(self.task_url(id))
            .json(patch)
            .send()
            .await
            .map_err(StoreError::from)
            .and_then(check_status)?
            .json::<Task>()
            .await?;
        Ok(task)
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        self.client
            .delete(self.task_url(id))
            .send()
            .await
            .map_err(StoreError::from)
            .and_then(check_status)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let config = AppConfig {
            api_url: "https://api.example.com/v1/".to_string(),
            ..AppConfig::default()
        };
        let store = RestTaskStore::new(&config);
        assert_eq!(store.collection_url(), "https://api.example.com/v1/todos");
        assert_eq!(store.task_url(12), "https://api.example.com/v1/todos/12");
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        assert!(status_result(StatusCode::OK).is_ok());
        assert!(status_result(StatusCode::CREATED).is_ok());

        let err = status_result(StatusCode::NOT_FOUND).unwrap_err();
        assert!(matches!(err, StoreError::Status(404)));
        assert_eq!(err.to_string(), "server answered with status 404");
    }
}
