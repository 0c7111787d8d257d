//! Column Commands
//!
//! Request bodies for column endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateColumnArgs {
    pub user_id: u32,
}

#[derive(Debug, Serialize)]
pub struct RenameColumnArgs<'a> {
    pub user_id: u32,
    pub name: &'a str,
}
