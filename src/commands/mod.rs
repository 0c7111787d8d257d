//! Remote Service Commands
//!
//! Bindings to the board's REST service, organized by domain. The service
//! assigns every id; the client never invents one.

mod board;
mod client;
mod column;
mod task;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BoardSnapshot, ColumnId, TaskId};

pub use board::*;
pub use client::HttpKanbanApi;
pub use column::*;
pub use task::*;

/// Common result type for remote calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} returned status {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// The remote operations a board relies on.
///
/// Futures are not `Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait KanbanApi {
    /// `POST /column/create`, returns the new column's id
    async fn create_column(&self, user_id: u32) -> ApiResult<ColumnId>;

    /// `PATCH /column/{id}/update_name`
    async fn rename_column(&self, id: ColumnId, user_id: u32, name: &str) -> ApiResult<()>;

    /// `DELETE /column/{id}`; the service removes the column's tasks too
    async fn delete_column(&self, id: ColumnId) -> ApiResult<()>;

    /// `POST /task/create`, returns the new task's id
    async fn create_task(&self, column_id: ColumnId, description: &str) -> ApiResult<TaskId>;

    /// `PATCH /task/{id}/update_description`
    async fn update_task_description(&self, id: TaskId, description: &str) -> ApiResult<()>;

    /// `PATCH /task/{id}/update_column_id`
    async fn update_task_column(&self, id: TaskId, column_id: ColumnId) -> ApiResult<()>;

    /// `DELETE /task/{id}`
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;

    /// `GET /board/{user_id}`
    async fn load_board(&self, user_id: u32) -> ApiResult<BoardSnapshot>;
}
