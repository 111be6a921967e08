//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::board::{Card, Identified};

use super::{Priority, TaskStatus};

/// A follow-up task, optionally linked to a lead.
///
/// Tasks carry no audit trail; status changes are plain field updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the backend at creation
    pub id: String,

    /// Short description of the task
    pub title: String,

    /// Completion status; determines column membership on the task board
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority of the task
    #[serde(default)]
    pub priority: Priority,

    /// Due instant, if scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Timestamp>,

    /// Name of the agent this task is assigned to
    pub assigned_to: String,

    /// Id of the lead this task relates to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_lead: Option<String>,
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Card for Task {
    type Column = TaskStatus;

    fn column(&self) -> TaskStatus {
        self.status
    }

    // Tasks have no activity log, so a transition is just the field update.
    fn transition(&mut self, column: TaskStatus, _actor: &str, _now: Timestamp) {
        self.status = column;
    }

    /// Matches on title, case-insensitive.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}
