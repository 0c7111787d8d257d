//! Board Models
//!
//! Entities held by the board plus the wire shapes of the remote service.

use std::fmt;

use leptos_dragdrop::{DragId, DragItem};
use serde::{Deserialize, Deserializer, Serialize};

/// Column identifier, assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub u32);

/// Task identifier, assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(id: TaskId, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }
}

impl DragId for Column {
    type Id = ColumnId;

    fn drag_id(&self) -> ColumnId {
        self.id
    }
}

impl DragId for Task {
    type Id = TaskId;

    fn drag_id(&self) -> TaskId {
        self.id
    }
}

/// Drag payload tagged with its entity kind
pub type BoardItem = DragItem<Column, Task>;

// ========================
// Wire Shapes
// ========================

/// Body of a `201 Created` response; only the id is used
#[derive(Debug, Clone, Deserialize)]
pub struct Created<I> {
    pub id: I,
}

/// `GET /board/{user_id}` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub columns: Vec<ColumnSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub id: ColumnId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<TaskSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub column_id: ColumnId,
    #[serde(default)]
    pub description: String,
}

/// The backend encodes empty lists as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let task = Task::new(TaskId(3), ColumnId(9), "Write docs");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["column_id"], 9);
    }

    #[test]
    fn test_created_response_ignores_extra_fields() {
        let created: Created<ColumnId> =
            serde_json::from_str(r#"{"id":12,"user_id":1,"name":""}"#).unwrap();
        assert_eq!(created.id, ColumnId(12));
    }

    #[test]
    fn test_snapshot_accepts_null_task_list() {
        let json = r#"{"columns":[
            {"id":1,"name":"Todo","tasks":null},
            {"id":2,"name":"Done","tasks":[{"id":5,"column_id":2,"description":"ship"}]}
        ]}"#;
        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.columns.len(), 2);
        assert!(snapshot.columns[0].tasks.is_empty());
        assert_eq!(snapshot.columns[1].tasks[0].description, "ship");
    }

    #[test]
    fn test_snapshot_accepts_null_columns() {
        let snapshot: BoardSnapshot = serde_json::from_str(r#"{"columns":null}"#).unwrap();
        assert!(snapshot.columns.is_empty());
    }

    #[test]
    fn test_board_item_identity_is_kind_aware() {
        let column = BoardItem::Column(Column::new(ColumnId(1), "A"));
        let task = BoardItem::Task(Task::new(TaskId(1), ColumnId(1), "t"));
        assert!(!column.is_same(&task));
        assert!(column.is_same(&column.clone()));
    }
}
