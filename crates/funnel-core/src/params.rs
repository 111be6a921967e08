//! Parameter structures shared across interfaces.
//!
//! These structures carry user input between the interface layers (CLI
//! today) and the core stores without framework-specific derives. Interface
//! layers wrap them with their own derive-carrying argument structs and
//! convert via `From`/`Into`, keeping clap concerns out of the domain.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{CrmError, Result};
use crate::models::{Agent, Lead, Opportunity, Priority, Role, Task};

/// Query string of a list request: the backend pre-filters by role.
///
/// Admins receive every record; agents receive only records assigned to
/// their own name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    pub role: Role,
    pub name: String,
}

impl ListQuery {
    /// Whether a record assigned to `assigned_to` is visible under this query.
    pub fn permits(&self, assigned_to: &str) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Agent => assigned_to == self.name,
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrmError::invalid_input(field, "must not be empty"));
    }
    Ok(())
}

/// Parameters for creating a new lead.
///
/// The backend assigns the id, avatar, and initial Created activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub company: String,
    pub deal_value: u64,
    pub priority: Priority,
    pub source: Option<String>,
    pub assigned_to: String,
    pub follow_up: Option<Timestamp>,
    pub notes: Option<String>,
}

impl CreateLead {
    /// Validates required fields, then builds the draft sent to the backend.
    pub fn into_draft(self) -> Result<Lead> {
        require("name", &self.name)?;
        require("company", &self.company)?;
        require("assignedTo", &self.assigned_to)?;
        Ok(Lead {
            id: String::new(),
            name: self.name,
            company: self.company,
            deal_value: self.deal_value,
            status: Default::default(),
            priority: self.priority,
            source: self.source,
            assigned_to: self.assigned_to,
            avatar: String::new(),
            follow_up: self.follow_up,
            notes: self.notes,
            activity: Vec::new(),
        })
    }
}

/// Parameters for creating a new opportunity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOpportunity {
    pub name: String,
    pub company: String,
    pub deal_value: u64,
    pub assigned_to: String,
    pub expected_close: Option<Timestamp>,
}

impl CreateOpportunity {
    /// Validates required fields, then builds the draft sent to the backend.
    pub fn into_draft(self) -> Result<Opportunity> {
        require("name", &self.name)?;
        require("company", &self.company)?;
        require("assignedTo", &self.assigned_to)?;
        let stage = crate::models::OpportunityStage::default();
        Ok(Opportunity {
            id: String::new(),
            name: self.name,
            company: self.company,
            deal_value: self.deal_value,
            stage,
            probability: stage.probability(),
            expected_close: self.expected_close,
            assigned_to: self.assigned_to,
            avatar: String::new(),
            activity: Vec::new(),
        })
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub priority: Priority,
    pub due: Option<Timestamp>,
    pub assigned_to: String,
    pub related_lead: Option<String>,
}

impl CreateTask {
    pub fn into_draft(self) -> Result<Task> {
        require("title", &self.title)?;
        require("assignedTo", &self.assigned_to)?;
        Ok(Task {
            id: String::new(),
            title: self.title,
            status: Default::default(),
            priority: self.priority,
            due: self.due,
            assigned_to: self.assigned_to,
            related_lead: self.related_lead,
        })
    }
}

/// Parameters for creating a new agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAgent {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl CreateAgent {
    pub fn into_draft(self) -> Result<Agent> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        Ok(Agent {
            id: String::new(),
            name: self.name,
            email: self.email,
            avatar: self.avatar.unwrap_or_default(),
            role: self.role,
        })
    }
}
