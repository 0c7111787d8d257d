//! Board Commands
//!
//! Paths of the board service, relative to `{base}/api/v1`.

use crate::models::{ColumnId, TaskId};

pub const API_PREFIX: &str = "/api/v1";

pub fn create_column_path() -> String {
    "/column/create".to_string()
}

pub fn column_path(id: ColumnId) -> String {
    format!("/column/{}", id)
}

pub fn rename_column_path(id: ColumnId) -> String {
    format!("/column/{}/update_name", id)
}

pub fn create_task_path() -> String {
    "/task/create".to_string()
}

pub fn task_path(id: TaskId) -> String {
    format!("/task/{}", id)
}

pub fn task_description_path(id: TaskId) -> String {
    format!("/task/{}/update_description", id)
}

pub fn task_column_path(id: TaskId) -> String {
    format!("/task/{}/update_column_id", id)
}

pub fn board_path(user_id: u32) -> String {
    format!("/board/{}", user_id)
}
