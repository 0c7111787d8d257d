//! Remote Sync Adapter
//!
//! Bridges each board mutation to exactly one remote call.
//!
//! - Creates wait for the service: the entity is added locally only once the
//!   service has answered with its id.
//! - Renames, deletes, content edits and column reassignment apply locally
//!   first and fire the remote call in the background. A failed call is
//!   logged and never rolled back.
//!
//! Calls are not sequenced per entity, so two quick edits of one task may
//! reach the service in either order.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use tracing::{debug, error, info, warn};

use crate::commands::{ApiResult, KanbanApi};
use crate::models::{Column, ColumnId, Task, TaskId};
use crate::store::BoardHandle;

/// Runs background remote calls on the UI thread's executor
pub trait Spawn {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawns onto Leptos' local executor.
///
/// The executor must already be initialized: a mounted Leptos app does this,
/// as does one of `any_spawner::Executor::init_*`. Spawning before that
/// panics in debug builds and silently drops the call in release builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSpawner;

impl Spawn for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

pub struct BoardSync<A> {
    api: Rc<A>,
    board: BoardHandle,
    spawner: Rc<dyn Spawn>,
    user_id: u32,
}

impl<A> Clone for BoardSync<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            board: self.board,
            spawner: Rc::clone(&self.spawner),
            user_id: self.user_id,
        }
    }
}

impl<A: KanbanApi + 'static> BoardSync<A> {
    pub fn new(api: A, board: BoardHandle, spawner: impl Spawn + 'static, user_id: u32) -> Self {
        Self {
            api: Rc::new(api),
            board,
            spawner: Rc::new(spawner),
            user_id,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn board(&self) -> BoardHandle {
        self.board
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    /// Replace the local board with the service's copy. On failure nothing changes.
    pub async fn load_board(&self) -> ApiResult<()> {
        let snapshot = self.api.load_board(self.user_id).await.map_err(|e| {
            error!(
                operation = "load_board",
                user_id = self.user_id,
                error = %e,
                "remote call failed"
            );
            e
        })?;
        info!(columns = snapshot.columns.len(), "board loaded");
        self.board.update(|board| board.replace_from_snapshot(snapshot));
        Ok(())
    }

    // ========================
    // Creates (confirmed)
    // ========================

    /// Create a column remotely, then append it locally under the returned id.
    /// The title is the caller's, not derived from how many columns exist.
    pub async fn create_column(&self, title: impl Into<String>) -> ApiResult<ColumnId> {
        let title = title.into();
        let id = self.api.create_column(self.user_id).await.map_err(|e| {
            error!(operation = "create_column", error = %e, "remote call failed");
            e
        })?;

        info!(column_id = %id, "column created");
        self.board.update(|board| board.add_column(Column::new(id, title)));
        Ok(id)
    }

    /// Create a task remotely, then append it locally under the returned id.
    ///
    /// If the column was deleted while the call was in flight the task is not
    /// added locally.
    pub async fn create_task(
        &self,
        column_id: ColumnId,
        content: impl Into<String>,
    ) -> ApiResult<TaskId> {
        let content = content.into();
        let id = self.api.create_task(column_id, &content).await.map_err(|e| {
            error!(
                operation = "create_task",
                column_id = %column_id,
                error = %e,
                "remote call failed"
            );
            e
        })?;

        if self.board.with_untracked(|board| board.contains_column(column_id)) {
            info!(task_id = %id, column_id = %column_id, "task created");
            self.board
                .update(|board| board.add_task(Task::new(id, column_id, content)));
        } else {
            warn!(
                task_id = %id,
                column_id = %column_id,
                "task created for a column no longer on the board"
            );
        }
        Ok(id)
    }

    // ========================
    // Optimistic Mutations
    // ========================

    pub fn rename_column(&self, id: ColumnId, title: impl Into<String>) {
        let title = title.into();
        let local_title = title.clone();
        self.board.update(|board| board.rename_column(id, local_title));

        let api = Rc::clone(&self.api);
        let user_id = self.user_id;
        self.fire("rename_column", id, async move {
            api.rename_column(id, user_id, &title).await
        });
    }

    /// Removes the column and its tasks locally; the service cascades on its side
    pub fn delete_column(&self, id: ColumnId) {
        self.board.update(|board| board.remove_column(id));

        let api = Rc::clone(&self.api);
        self.fire("delete_column", id, async move { api.delete_column(id).await });
    }

    pub fn delete_task(&self, id: TaskId) {
        self.board.update(|board| board.remove_task(id));

        let api = Rc::clone(&self.api);
        self.fire("delete_task", id, async move { api.delete_task(id).await });
    }

    pub fn update_task_content(&self, id: TaskId, content: impl Into<String>) {
        let content = content.into();
        let local_content = content.clone();
        self.board
            .update(|board| board.update_task_content(id, local_content));

        let api = Rc::clone(&self.api);
        self.fire("update_task_description", id, async move {
            api.update_task_description(id, &content).await
        });
    }

    /// Move a task to another column without changing its position
    pub fn reassign_task_column(&self, id: TaskId, column_id: ColumnId) {
        self.board.update(|board| {
            if let Some(index) = board.task_index(id) {
                board.reassign_and_reorder_task(id, column_id, index);
            }
        });

        let api = Rc::clone(&self.api);
        self.fire("update_task_column", id, async move {
            api.update_task_column(id, column_id).await
        });
    }

    fn fire<F>(&self, operation: &'static str, entity: impl fmt::Display, call: F)
    where
        F: Future<Output = ApiResult<()>> + 'static,
    {
        let entity = entity.to_string();
        debug!(operation, entity = %entity, "remote call queued");
        self.spawner.spawn(Box::pin(async move {
            if let Err(e) = call.await {
                error!(
                    operation,
                    entity = %entity,
                    error = %e,
                    "remote call failed; local state kept"
                );
            }
        }));
    }
}
