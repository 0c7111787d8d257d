//! HTTP Client
//!
//! `reqwest` implementation of [`KanbanApi`]. Creates must answer
//! `201 Created`, everything else `200 OK`; any other status is an error.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::{
    board_path, column_path, create_column_path, create_task_path, rename_column_path,
    task_column_path, task_description_path, task_path, ApiError, ApiResult, CreateColumnArgs,
    CreateTaskArgs, KanbanApi, RenameColumnArgs, UpdateColumnIdArgs, UpdateDescriptionArgs,
    API_PREFIX,
};
use crate::config::BoardConfig;
use crate::models::{BoardSnapshot, ColumnId, Created, TaskId};

#[derive(Debug, Clone)]
pub struct HttpKanbanApi {
    http: Client,
    base_url: String,
}

impl HttpKanbanApi {
    pub fn new(config: &BoardConfig) -> ApiResult<Self> {
        let parsed = reqwest::Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{} ({})", config.api_base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = if config.request_timeout_secs > 0 {
            builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        } else {
            builder
        };
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Send and return the body text when the status is `expected`
    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            return Err(ApiError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> ApiResult<T> {
        let body = self.send(operation, request, expected).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl KanbanApi for HttpKanbanApi {
    async fn create_column(&self, user_id: u32) -> ApiResult<ColumnId> {
        let request = self
            .http
            .post(self.url(&create_column_path()))
            .json(&CreateColumnArgs { user_id });
        let created: Created<ColumnId> = self
            .send_json("create_column", request, StatusCode::CREATED)
            .await?;
        Ok(created.id)
    }

    async fn rename_column(&self, id: ColumnId, user_id: u32, name: &str) -> ApiResult<()> {
        let request = self
            .http
            .patch(self.url(&rename_column_path(id)))
            .json(&RenameColumnArgs { user_id, name });
        self.send("rename_column", request, StatusCode::OK).await?;
        Ok(())
    }

    async fn delete_column(&self, id: ColumnId) -> ApiResult<()> {
        let request = self.http.delete(self.url(&column_path(id)));
        self.send("delete_column", request, StatusCode::OK).await?;
        Ok(())
    }

    async fn create_task(&self, column_id: ColumnId, description: &str) -> ApiResult<TaskId> {
        let request = self
            .http
            .post(self.url(&create_task_path()))
            .json(&CreateTaskArgs { column_id, description });
        let created: Created<TaskId> = self
            .send_json("create_task", request, StatusCode::CREATED)
            .await?;
        Ok(created.id)
    }

    async fn update_task_description(&self, id: TaskId, description: &str) -> ApiResult<()> {
        let request = self
            .http
            .patch(self.url(&task_description_path(id)))
            .json(&UpdateDescriptionArgs { description });
        self.send("update_task_description", request, StatusCode::OK).await?;
        Ok(())
    }

    async fn update_task_column(&self, id: TaskId, column_id: ColumnId) -> ApiResult<()> {
        let request = self
            .http
            .patch(self.url(&task_column_path(id)))
            .json(&UpdateColumnIdArgs { column_id });
        self.send("update_task_column", request, StatusCode::OK).await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        let request = self.http.delete(self.url(&task_path(id)));
        self.send("delete_task", request, StatusCode::OK).await?;
        Ok(())
    }

    async fn load_board(&self, user_id: u32) -> ApiResult<BoardSnapshot> {
        let request = self.http.get(self.url(&board_path(user_id)));
        self.send_json("load_board", request, StatusCode::OK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> BoardConfig {
        BoardConfig {
            api_base_url: url.to_string(),
            ..BoardConfig::default()
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpKanbanApi::new(&config("http://localhost:5007/")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5007");
        assert_eq!(api.url("/task/1"), "http://localhost:5007/api/v1/task/1");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpKanbanApi::new(&config("not a url")),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpKanbanApi::new(&config("ftp://example.com")),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
