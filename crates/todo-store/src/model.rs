//! Todo Entities
//!
//! A todo is a freeform note sitting in one of three fixed lanes.

use serde::{Deserialize, Serialize};

/// Identifier of a todo, drawn from `0..1_000_000`
pub type TodoId = u32;

/// Lane determines which column a todo is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lane {
    #[default]
    #[serde(rename = "to-do")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl Lane {
    /// All lanes in display order
    pub const ALL: [Lane; 3] = [Lane::Todo, Lane::InProgress, Lane::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Todo => "to-do",
            Lane::InProgress => "in-progress",
            Lane::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "to-do" => Some(Lane::Todo),
            "in-progress" => Some(Lane::InProgress),
            "completed" => Some(Lane::Completed),
            _ => None,
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Lane::Todo => "To-do",
            Lane::InProgress => "In progress",
            Lane::Completed => "Complete",
        }
    }

    /// Lanes a todo in this lane can be moved to, in display order
    pub fn others(self) -> impl Iterator<Item = Lane> {
        Lane::ALL.into_iter().filter(move |lane| *lane != self)
    }
}

/// A single note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Note text; empty only until the user first types into it
    pub content: String,
    #[serde(rename = "type")]
    pub lane: Lane,
}

impl TodoItem {
    /// A fresh, empty todo
    pub fn new(id: TodoId, lane: Lane) -> Self {
        Self {
            id,
            content: String::new(),
            lane,
        }
    }

    /// Freshly created todos have no content yet and want keyboard focus
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// A field assignment accepted by `TodoStore::edit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoField {
    Content(String),
    Lane(Lane),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_blank() {
        let item = TodoItem::new(7, Lane::InProgress);
        assert_eq!(item.id, 7);
        assert!(item.is_blank());
        assert_eq!(item.lane, Lane::InProgress);
    }

    #[test]
    fn test_lane_names() {
        assert_eq!(Lane::InProgress.as_str(), "in-progress");
        assert_eq!(Lane::from_str("completed"), Some(Lane::Completed));
        assert_eq!(Lane::from_str("done"), None);
        for lane in Lane::ALL {
            assert_eq!(Lane::from_str(lane.as_str()), Some(lane));
        }
    }

    #[test]
    fn test_lane_others() {
        let others: Vec<_> = Lane::InProgress.others().collect();
        assert_eq!(others, vec![Lane::Todo, Lane::Completed]);
        assert_eq!(Lane::Todo.others().count(), 2);
    }

    #[test]
    fn test_wire_format() {
        let item = TodoItem {
            id: 42,
            content: "buy milk".to_string(),
            lane: Lane::InProgress,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":42,"content":"buy milk","type":"in-progress"}"#);

        let parsed: TodoItem =
            serde_json::from_str(r#"{"id":3,"content":"","type":"to-do"}"#).unwrap();
        assert_eq!(parsed, TodoItem::new(3, Lane::Todo));
    }
}
