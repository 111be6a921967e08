//! Lead model definition and board integration.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::board::{Card, ColumnId, Identified};

use super::{ActivityKind, ActivityRecord, LeadStatus, Priority};

/// Represents a sales lead moving through the Leads pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier, assigned by the backend at creation, immutable
    pub id: String,

    /// Contact name
    pub name: String,

    /// Company the lead belongs to
    pub company: String,

    /// Deal value in minor currency units, non-negative
    pub deal_value: u64,

    /// Pipeline status; determines column membership on the board
    pub status: LeadStatus,

    /// Priority of the lead
    #[serde(default)]
    pub priority: Priority,

    /// Where the lead came from (referral, web form, cold call, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Name of the agent this lead is assigned to
    pub assigned_to: String,

    /// Avatar URL, assigned by the backend
    #[serde(default)]
    pub avatar: String,

    /// Scheduled follow-up instant, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<Timestamp>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Audit trail, newest first, append-only
    #[serde(default)]
    pub activity: Vec<ActivityRecord>,
}

impl Lead {
    /// Prepends an activity record, keeping `activity[0]` the newest entry.
    pub fn log_activity(&mut self, record: ActivityRecord) {
        self.activity.insert(0, record);
    }

    /// Whether the invariant "every lead has at least one Created record"
    /// holds for this value.
    pub fn has_created_record(&self) -> bool {
        self.activity
            .iter()
            .any(|r| r.kind == ActivityKind::Created)
    }

}

impl Identified for Lead {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Card for Lead {
    type Column = LeadStatus;

    fn column(&self) -> LeadStatus {
        self.status
    }

    fn transition(&mut self, column: LeadStatus, actor: &str, now: Timestamp) {
        let old = self.status;
        self.status = column;
        self.log_activity(ActivityRecord::status_change(
            old.as_str(),
            column.as_str(),
            actor,
            now,
        ));
    }

    /// Matches on name or company, case-insensitive.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.company.to_lowercase().contains(&term)
    }
}
