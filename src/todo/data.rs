use log::debug;
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

pub type TodoID = i64;

pub const STATUS_INCOMPLETE: &str = "Incomplete";
pub const STATUS_COMPLETE: &str = "Complete";

/// Priority flags of a todo. Labels missing from the input default to `false`, other labels
/// are dropped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(from = "PriorityLabels")]
pub struct Priority {
    pub extreme: bool,
    pub moderate: bool,
    pub low: bool,
}

#[derive(Deserialize)]
struct PriorityLabels(BTreeMap<String, bool>);

impl From<PriorityLabels> for Priority {
    fn from(PriorityLabels(mut labels): PriorityLabels) -> Self {
        let priority = Priority {
            extreme: labels.remove("extreme").unwrap_or(false),
            moderate: labels.remove("moderate").unwrap_or(false),
            low: labels.remove("low").unwrap_or(false),
        };
        if !labels.is_empty() {
            debug!(
                "dropping unknown priority labels: {}",
                labels.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }
        priority
    }
}

impl Priority {
    pub fn any(&self) -> bool {
        self.extreme || self.moderate || self.low
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoID,
    pub title: String,
    /// `YYYY-MM-DD`, stored as given.
    pub date: String,
    pub priority: Priority,
    pub description: String,
    pub status: String,
}

fn default_status() -> String {
    STATUS_INCOMPLETE.to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub date: String,
    pub priority: Priority,
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl NewTodo {
    pub fn into_todo(self, id: TodoID) -> Todo {
        Todo {
            id,
            title: self.title,
            date: self.date,
            priority: self.priority,
            description: self.description,
            status: self.status,
        }
    }
}

/// Fields the client wants to change. `None` means the field was absent (or `null`) and is
/// left alone; `Some("")` clears it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl Todo {
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResponse {
    pub message: String,
    pub id: TodoID,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompleteResponse {
    pub message: String,
    pub id: TodoID,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateResponse {
    pub message: String,
    pub todo: Todo,
}
