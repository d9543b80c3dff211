// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};

/// Task priority. Serialized as its numeric level (1 = highest) because
/// that is the form the record consumer speaks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn level(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("priority level out of range: {}", other)),
        }
    }
}

/// One extracted task line, before adaptation into a creation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub task: String,
    pub study_time_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// A titled group of tasks, one per markdown heading (or the synthetic
/// default when no heading precedes the first task).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub tasks: Vec<ParsedTask>,
    pub total_time_hours: f64,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tasks: Vec::new(),
            total_time_hours: 0.0,
        }
    }

    /// Appends a task. The only mutation path, so `total_time_hours`
    /// always equals the live sum of the task durations.
    pub fn push(&mut self, task: ParsedTask) {
        self.total_time_hours += task.study_time_hours;
        self.tasks.push(task);
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
}

/// The payload shape the record store accepts for a new TODO item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRecord {
    pub task: String,
    pub study_time_hours: f64,
    pub status: RecordStatus,
}
