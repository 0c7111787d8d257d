//! Kanban Board Engine
//!
//! Columns holding tasks, reordered by drag-and-drop, persisted by a remote
//! REST service.
//!
//! - models: columns, tasks and their service-assigned ids
//! - store: the local board state and its mutation primitives
//! - commands: the remote service's API
//! - sync: applies mutations locally and mirrors them remotely
//! - dnd: interprets drag gestures into board mutations

pub mod commands;
pub mod config;
pub mod dnd;
pub mod logging;
pub mod models;
pub mod store;
pub mod sync;

pub use commands::{ApiError, ApiResult, HttpKanbanApi, KanbanApi};
pub use config::{BoardConfig, ConfigError};
pub use dnd::{BoardDragEvent, BoardOverlay, DragInterpreter, GestureState};
pub use models::{BoardItem, BoardSnapshot, Column, ColumnId, Task, TaskId};
pub use store::{create_board_handle, BoardHandle, BoardState};
pub use sync::{BoardSync, LocalSpawner, Spawn};

/// Wire up a board against the configured service.
///
/// Background remote calls run on `spawner`. Inside a mounted Leptos app that
/// is [`LocalSpawner`]; other hosts bring a spawner for their own executor.
pub fn connect(
    config: &BoardConfig,
    spawner: impl Spawn + 'static,
) -> ApiResult<DragInterpreter<HttpKanbanApi>> {
    let api = HttpKanbanApi::new(config)?;
    let sync = BoardSync::new(api, create_board_handle(), spawner, config.user_id);
    Ok(DragInterpreter::new(sync))
}
