//! Local Board State
//!
//! The single in-memory store of columns and tasks. Every operation is
//! synchronous and total: unknown ids are ignored rather than reported, so the
//! board stays eventually consistent with the remote service.

use leptos::prelude::*;

use crate::models::{BoardSnapshot, Column, ColumnId, Task, TaskId};

/// Ordered columns plus all tasks in display order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

/// Reactive handle shared by the sync adapter, the drag interpreter and the views
pub type BoardHandle = RwSignal<BoardState>;

pub fn create_board_handle() -> BoardHandle {
    RwSignal::new(BoardState::new())
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Reads
    // ========================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn contains_column(&self, id: ColumnId) -> bool {
        self.column_index(id).is_some()
    }

    pub fn contains_task(&self, id: TaskId) -> bool {
        self.task_index(id).is_some()
    }

    /// Tasks of one column, in global display order
    pub fn tasks_in_column(&self, id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.column_id == id)
    }

    // ========================
    // Columns
    // ========================

    /// Append to the end of the column sequence
    pub fn add_column(&mut self, column: Column) {
        if self.contains_column(column.id) {
            return;
        }
        self.columns.push(column);
    }

    /// Remove a column and every task that belongs to it
    pub fn remove_column(&mut self, id: ColumnId) {
        self.columns.retain(|col| col.id != id);
        self.tasks.retain(|task| task.column_id != id);
    }

    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) {
        if let Some(col) = self.columns.iter_mut().find(|col| col.id == id) {
            col.title = title.into();
        }
    }

    /// Move the column at `from` to `to`, shifting the ones in between
    pub fn reorder_columns(&mut self, from: usize, to: usize) {
        move_to_index(&mut self.columns, from, to);
    }

    // ========================
    // Tasks
    // ========================

    /// Append a task. Tasks for a column that is not on the board are dropped.
    pub fn add_task(&mut self, task: Task) {
        if !self.contains_column(task.column_id) || self.contains_task(task.id) {
            return;
        }
        self.tasks.push(task);
    }

    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    pub fn update_task_content(&mut self, id: TaskId, content: impl Into<String>) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.content = content.into();
        }
    }

    /// Give a task a new column and move it to `target_index` in the global task order.
    ///
    /// `target_index` is an index into the order *before* the move, so moving
    /// onto a hovered task's index lands the task where the hovered one was.
    pub fn reassign_and_reorder_task(
        &mut self,
        id: TaskId,
        new_column_id: ColumnId,
        target_index: usize,
    ) {
        if !self.contains_column(new_column_id) {
            return;
        }
        let Some(from) = self.task_index(id) else {
            return;
        };

        let mut moved = self.tasks.remove(from);
        moved.column_id = new_column_id;
        let to = target_index.min(self.tasks.len());
        self.tasks.insert(to, moved);
    }

    // ========================
    // Hydration
    // ========================

    /// Replace the whole board with a remote snapshot, keeping its order
    pub fn replace_from_snapshot(&mut self, snapshot: BoardSnapshot) {
        let mut board = BoardState::new();
        for col in snapshot.columns {
            board.add_column(Column::new(col.id, col.name));
            for task in col.tasks {
                // A task is listed under the column that owns it
                board.add_task(Task::new(task.id, col.id, task.description));
            }
        }
        *self = board;
    }
}

/// Remove the element at `from` and reinsert it at `to`.
/// Out-of-range `from` is a no-op; `to` is clamped to the end.
fn move_to_index<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}
