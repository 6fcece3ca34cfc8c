use serde::{Deserialize, Serialize};

use crate::ids::TodoId;

/// A single todo record. The backing store owns the record lifetime;
/// everything in-process holds transient copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    pub completed: bool,
    /// RFC 3339 creation timestamp, set by the store on insert.
    pub created_at: String,
}

impl Todo {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Partial update for a todo. `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serde_shape() {
        let todo = Todo {
            id: TodoId::from_raw("todo_1"),
            content: "Buy milk".into(),
            completed: false,
            created_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "todo_1");
        assert_eq!(json["content"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["created_at"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn pending_is_not_completed() {
        let mut todo = Todo {
            id: TodoId::new(),
            content: "x".into(),
            completed: false,
            created_at: String::new(),
        };
        assert!(todo.is_pending());
        todo.completed = true;
        assert!(!todo.is_pending());
    }

    #[test]
    fn patch_empty_detection() {
        assert!(TodoPatch::default().is_empty());
        let patch = TodoPatch {
            completed: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_deserializes_partial_bodies() {
        let patch: TodoPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert_eq!(patch.completed, Some(true));
        assert!(patch.content.is_none());
    }
}
