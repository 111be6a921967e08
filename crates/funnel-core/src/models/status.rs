//! Status and stage enumerations partitioning entities into board columns.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;

/// Type-safe enumeration of lead pipeline statuses.
///
/// The declaration order is the fixed column order of the Leads board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeadStatus {
    /// Lead has just entered the pipeline
    #[default]
    #[serde(rename = "New")]
    New,

    /// First contact has been made
    #[serde(rename = "Contacted")]
    Contacted,

    /// Lead is qualified and actively worked
    #[serde(rename = "Qualified")]
    Qualified,

    /// Deal closed successfully
    #[serde(rename = "Closed Won")]
    ClosedWon,

    /// Deal lost
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl LeadStatus {
    /// All statuses in board column order.
    pub const COLUMNS: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::ClosedWon,
        LeadStatus::ClosedLost,
    ];
}

impl ColumnId for LeadStatus {
    fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::ClosedWon => "Closed Won",
            LeadStatus::ClosedLost => "Closed Lost",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "closed won" | "won" => Ok(LeadStatus::ClosedWon),
            "closed lost" | "lost" => Ok(LeadStatus::ClosedLost),
            _ => Err(format!("Invalid lead status: {s}")),
        }
    }
}

/// Type-safe enumeration of opportunity pipeline stages.
///
/// The declaration order is the fixed column order of the Opportunities
/// board. Every stage carries a fixed win probability; moving an opportunity
/// into a stage overwrites its probability from [`OpportunityStage::probability`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OpportunityStage {
    #[default]
    #[serde(rename = "Prospecting")]
    Prospecting,

    #[serde(rename = "Qualification")]
    Qualification,

    #[serde(rename = "Needs Analysis")]
    NeedsAnalysis,

    #[serde(rename = "Proposal")]
    Proposal,

    #[serde(rename = "Negotiation")]
    Negotiation,

    #[serde(rename = "Closed Won")]
    ClosedWon,

    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl OpportunityStage {
    /// All stages in board column order.
    pub const COLUMNS: [OpportunityStage; 7] = [
        OpportunityStage::Prospecting,
        OpportunityStage::Qualification,
        OpportunityStage::NeedsAnalysis,
        OpportunityStage::Proposal,
        OpportunityStage::Negotiation,
        OpportunityStage::ClosedWon,
        OpportunityStage::ClosedLost,
    ];

    /// Fixed stage-to-probability lookup (percent).
    pub fn probability(&self) -> u8 {
        match self {
            OpportunityStage::Prospecting => 10,
            OpportunityStage::Qualification => 25,
            OpportunityStage::NeedsAnalysis => 40,
            OpportunityStage::Proposal => 60,
            OpportunityStage::Negotiation => 80,
            OpportunityStage::ClosedWon => 100,
            OpportunityStage::ClosedLost => 0,
        }
    }
}

impl ColumnId for OpportunityStage {
    fn as_str(&self) -> &'static str {
        match self {
            OpportunityStage::Prospecting => "Prospecting",
            OpportunityStage::Qualification => "Qualification",
            OpportunityStage::NeedsAnalysis => "Needs Analysis",
            OpportunityStage::Proposal => "Proposal",
            OpportunityStage::Negotiation => "Negotiation",
            OpportunityStage::ClosedWon => "Closed Won",
            OpportunityStage::ClosedLost => "Closed Lost",
        }
    }
}

impl FromStr for OpportunityStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prospecting" => Ok(OpportunityStage::Prospecting),
            "qualification" => Ok(OpportunityStage::Qualification),
            "needs analysis" | "needs_analysis" => Ok(OpportunityStage::NeedsAnalysis),
            "proposal" => Ok(OpportunityStage::Proposal),
            "negotiation" => Ok(OpportunityStage::Negotiation),
            "closed won" | "won" => Ok(OpportunityStage::ClosedWon),
            "closed lost" | "lost" => Ok(OpportunityStage::ClosedLost),
            _ => Err(format!("Invalid opportunity stage: {s}")),
        }
    }
}

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,

    #[serde(rename = "In Progress")]
    InProgress,

    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const COLUMNS: [TaskStatus; 3] =
        [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];
}

impl ColumnId for TaskStatus {
    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to do" | "todo" => Ok(TaskStatus::ToDo),
            "in progress" | "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

/// Priority level shared by leads and tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    #[serde(rename = "High")]
    High,

    #[default]
    #[serde(rename = "Medium")]
    Medium,

    #[serde(rename = "Low")]
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Access role of a signed-in user.
///
/// Admins see every record; agents see only records assigned to them. The
/// backend pre-filters list responses by role, the client never widens them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
    }
}
