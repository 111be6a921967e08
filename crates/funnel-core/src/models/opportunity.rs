//! Opportunity model definition and board integration.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::board::{Card, ColumnId, Identified};

use super::{ActivityRecord, OpportunityStage};

/// Represents a deal moving through the sales pipeline.
///
/// Structurally parallel to [`super::Lead`]; the notable difference is
/// `probability`, which is never set directly: every stage transition
/// overwrites it from the fixed stage-to-probability table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Unique identifier, assigned by the backend at creation, immutable
    pub id: String,

    /// Deal name
    pub name: String,

    /// Company the deal is with
    pub company: String,

    /// Deal value in minor currency units, non-negative
    pub deal_value: u64,

    /// Pipeline stage; determines column membership on the board
    pub stage: OpportunityStage,

    /// Win probability in percent, derived from the stage
    pub probability: u8,

    /// Expected close instant, if forecast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_close: Option<Timestamp>,

    /// Name of the agent this deal is assigned to
    pub assigned_to: String,

    /// Avatar URL, assigned by the backend
    #[serde(default)]
    pub avatar: String,

    /// Audit trail, newest first, append-only
    #[serde(default)]
    pub activity: Vec<ActivityRecord>,
}

impl Opportunity {
    /// Prepends an activity record, keeping `activity[0]` the newest entry.
    pub fn log_activity(&mut self, record: ActivityRecord) {
        self.activity.insert(0, record);
    }

}

impl Identified for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Card for Opportunity {
    type Column = OpportunityStage;

    fn column(&self) -> OpportunityStage {
        self.stage
    }

    fn transition(&mut self, column: OpportunityStage, actor: &str, now: Timestamp) {
        let old = self.stage;
        self.stage = column;
        self.probability = column.probability();
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
