//! Task Commands
//!
//! Request bodies for task endpoints.

use serde::Serialize;

use crate::models::ColumnId;

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub column_id: ColumnId,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateDescriptionArgs<'a> {
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateColumnIdArgs {
    pub column_id: ColumnId,
}
