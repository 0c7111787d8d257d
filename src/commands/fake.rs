//! In-memory [`KanbanApi`] that records every call, for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, KanbanApi};
use crate::models::{BoardSnapshot, ColumnId, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CreateColumn { user_id: u32 },
    RenameColumn { id: ColumnId, user_id: u32, name: String },
    DeleteColumn { id: ColumnId },
    CreateTask { column_id: ColumnId, description: String },
    UpdateTaskDescription { id: TaskId, description: String },
    UpdateTaskColumn { id: TaskId, column_id: ColumnId },
    DeleteTask { id: TaskId },
    LoadBoard { user_id: u32 },
}

#[derive(Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<ApiCall>>,
    next_id: Cell<u32>,
    failing: Cell<bool>,
    snapshot: RefCell<BoardSnapshot>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    /// Every subsequent call answers with a 500
    pub fn failing() -> Self {
        let api = Self::new();
        api.failing.set(true);
        api
    }

    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        let api = Self::new();
        *api.snapshot.borrow_mut() = snapshot;
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall, operation: &'static str) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            return Err(ApiError::UnexpectedStatus {
                operation,
                status: 500,
                body: "internal error".to_string(),
            });
        }
        Ok(())
    }

    fn allocate_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[async_trait(?Send)]
impl KanbanApi for RecordingApi {
    async fn create_column(&self, user_id: u32) -> ApiResult<ColumnId> {
        self.record(ApiCall::CreateColumn { user_id }, "create_column")?;
        Ok(ColumnId(self.allocate_id()))
    }

    async fn rename_column(&self, id: ColumnId, user_id: u32, name: &str) -> ApiResult<()> {
        self.record(
            ApiCall::RenameColumn {
                id,
                user_id,
                name: name.to_string(),
            },
            "rename_column",
        )
    }

    async fn delete_column(&self, id: ColumnId) -> ApiResult<()> {
        self.record(ApiCall::DeleteColumn { id }, "delete_column")
    }

    async fn create_task(&self, column_id: ColumnId, description: &str) -> ApiResult<TaskId> {
        self.record(
            ApiCall::CreateTask {
                column_id,
                description: description.to_string(),
            },
            "create_task",
        )?;
        Ok(TaskId(self.allocate_id()))
    }

    async fn update_task_description(&self, id: TaskId, description: &str) -> ApiResult<()> {
        self.record(
            ApiCall::UpdateTaskDescription {
                id,
                description: description.to_string(),
            },
            "update_task_description",
        )
    }

    async fn update_task_column(&self, id: TaskId, column_id: ColumnId) -> ApiResult<()> {
        self.record(ApiCall::UpdateTaskColumn { id, column_id }, "update_task_column")
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.record(ApiCall::DeleteTask { id }, "delete_task")
    }

    async fn load_board(&self, user_id: u32) -> ApiResult<BoardSnapshot> {
        self.record(ApiCall::LoadBoard { user_id }, "load_board")?;
        Ok(self.snapshot.borrow().clone())
    }
}
