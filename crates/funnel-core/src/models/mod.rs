//! Data models for the CRM pipelines.
//!
//! This module contains the core domain models: board entities ([`Lead`],
//! [`Opportunity`], [`Task`]), the people around them ([`Agent`], [`User`]),
//! and the audit trail ([`ActivityRecord`]). Status enumerations double as
//! board column identifiers via [`crate::board::ColumnId`], so column
//! membership is always a total, type-checked property.
//!
//! Serialized forms use camelCase field names matching the REST wire format
//! of the simulated backend.

pub mod activity;
pub mod agent;
pub mod lead;
pub mod opportunity;
pub mod status;
pub mod task;


pub use activity::{ActivityKind, ActivityRecord};
pub use agent::{Agent, User};
pub use lead::Lead;
pub use opportunity::Opportunity;
pub use status::{LeadStatus, OpportunityStage, Priority, Role, TaskStatus};
pub use task::Task;
