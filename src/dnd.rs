//! Drag Gesture Interpreter
//!
//! Turns drag lifecycle events into board mutations.
//!
//! | event | dragged | hovered        | effect                                         |
//! |-------|---------|----------------|------------------------------------------------|
//! | over  | task    | task           | adopt hovered task's column, move to its index |
//! | over  | task    | column         | adopt column, keep index, remote reassign      |
//! | over  | column  | anything       | nothing until the drop                         |
//! | end   | column  | column or task | move column to the hovered column's position   |
//!
//! Nothing happens when the pointer is over no target or over the dragged
//! entity itself. Mutations made during `over` are not reverted when the
//! drop lands nowhere. Over and end events must name the entity the session
//! started with; anything else is ignored.
//!
//! Hosts either feed lifecycle events directly ([`DragInterpreter::handle`])
//! or raw pointer input ([`DragInterpreter::pointer_down`] and friends), in
//! which case a press only becomes a drag once the pointer has moved
//! [`ACTIVATION_DISTANCE_PX`].

use leptos::prelude::*;
use leptos_dragdrop::{ActiveDrag, DragEvent, PointerSensor};
use tracing::debug;

use crate::commands::KanbanApi;
use crate::models::{BoardItem, Column, ColumnId, Task};
use crate::sync::BoardSync;

pub use leptos_dragdrop::ACTIVATION_DISTANCE_PX;

pub type BoardDragEvent = DragEvent<Column, Task>;

/// Overlay state for the board's drag preview
pub type BoardOverlay = ActiveDrag<Column, Task>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(BoardItem),
}

pub struct DragInterpreter<A> {
    sync: BoardSync<A>,
    overlay: BoardOverlay,
    state: GestureState,
    sensor: PointerSensor,
    pressed: Option<BoardItem>,
}

impl<A: KanbanApi + 'static> DragInterpreter<A> {
    pub fn new(sync: BoardSync<A>) -> Self {
        Self {
            sync,
            overlay: ActiveDrag::new(),
            state: GestureState::Idle,
            sensor: PointerSensor::default(),
            pressed: None,
        }
    }

    pub fn overlay(&self) -> BoardOverlay {
        self.overlay
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn sync(&self) -> &BoardSync<A> {
        &self.sync
    }

    pub fn handle(&mut self, event: BoardDragEvent) {
        match event {
            DragEvent::Start { active } => self.drag_start(active),
            DragEvent::Over { active, over } => self.drag_over(&active, over.as_ref()),
            DragEvent::End { active, over } => self.drag_end(&active, over.as_ref()),
        }
    }

    /// Idle -> Dragging. A new start replaces any unfinished session.
    pub fn drag_start(&mut self, active: BoardItem) {
        debug!(?active, "drag start");
        self.overlay.start(active.clone());
        self.state = GestureState::Dragging(active);
    }

    pub fn drag_over(&mut self, active: &BoardItem, over: Option<&BoardItem>) {
        if !self.in_session("over", active) {
            return;
        }
        let Some(over) = over else {
            return;
        };
        if active.is_same(over) {
            return;
        }

        match (active, over) {
            (BoardItem::Task(task), BoardItem::Task(hovered)) => {
                self.sync.board().update(|board| {
                    let Some(over_index) = board.task_index(hovered.id) else {
                        return;
                    };
                    let column_id = board.tasks()[over_index].column_id;
                    board.reassign_and_reorder_task(task.id, column_id, over_index);
                });
            }
            (BoardItem::Task(task), BoardItem::Column(column)) => {
                // Dropping on empty column space never hovers a task, so this
                // case persists the new column right away.
                self.sync.reassign_task_column(task.id, column.id);
            }
            (BoardItem::Column(_), _) => {}
        }
    }

    /// Dragging -> Idle. Only column drags mutate on drop.
    pub fn drag_end(&mut self, active: &BoardItem, over: Option<&BoardItem>) {
        if !self.in_session("end", active) {
            return;
        }
        self.overlay.clear();
        self.state = GestureState::Idle;

        let Some(over) = over else {
            debug!("dropped outside any target");
            return;
        };
        if active.is_same(over) {
            return;
        }

        let BoardItem::Column(dragged) = active else {
            return;
        };

        self.sync.board().update(|board| {
            let target: Option<ColumnId> = match over {
                BoardItem::Column(column) => Some(column.id),
                BoardItem::Task(task) => board.task(task.id).map(|t| t.column_id),
            };
            let from = board.column_index(dragged.id);
            let to = target.and_then(|id| board.column_index(id));
            if let (Some(from), Some(to)) = (from, to) {
                debug!(column_id = %dragged.id, from, to, "column dropped");
                board.reorder_columns(from, to);
            }
        });
    }

    fn in_session(&self, event: &'static str, active: &BoardItem) -> bool {
        match &self.state {
            GestureState::Idle => {
                debug!(event, "no active drag session; ignored");
                false
            }
            GestureState::Dragging(started) if !started.is_same(active) => {
                debug!(event, ?started, ?active, "event for an entity not being dragged; ignored");
                false
            }
            GestureState::Dragging(_) => true,
        }
    }

    // ========================
    // Pointer Input
    // ========================

    /// Primary button pressed on `item`. Nothing is dragged until the pointer moves.
    pub fn pointer_down(&mut self, item: BoardItem, x: i32, y: i32) {
        self.sensor.press(x, y);
        self.pressed = Some(item);
    }

    /// Pointer moved while `over` is the drop target under it.
    ///
    /// The move that crosses the activation distance starts the drag; every
    /// move from then on is a drag-over.
    pub fn pointer_move(&mut self, x: i32, y: i32, over: Option<&BoardItem>) {
        if self.sensor.movement(x, y) {
            if let Some(item) = self.pressed.clone() {
                self.drag_start(item);
            }
        }
        if !self.sensor.is_dragging() {
            return;
        }
        if let GestureState::Dragging(active) = self.state.clone() {
            self.drag_over(&active, over);
        }
    }

    /// Button released over `over`. Returns `false` when the press never became
    /// a drag, so the host can treat it as a click.
    pub fn pointer_up(&mut self, over: Option<&BoardItem>) -> bool {
        self.pressed = None;
        if !self.sensor.release() {
            return false;
        }
        if let GestureState::Dragging(active) = self.state.clone() {
            self.drag_end(&active, over);
        }
        true
    }
}
