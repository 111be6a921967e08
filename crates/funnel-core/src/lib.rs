//! Core library for the Funnel CRM pipeline application.
//!
//! This crate provides the domain logic behind the kanban-style sales
//! pipelines: the drag-end resolver and column grouping ([`board`]), the
//! optimistic entity stores ([`store`]), the activity audit trail
//! ([`activity`]), and a simulated REST backend ([`service`]) that the
//! stores talk to through service traits.
//!
//! # Display Architecture
//!
//! Output formatting is Display-based: domain models implement
//! [`std::fmt::Display`] for detail views, and [`display`] provides wrapper
//! types for contextual formatting (boards, rosters, timestamps). The CLI
//! feeds the resulting Markdown to its terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use funnel_core::models::{Lead, LeadStatus};
//! use funnel_core::service::{ApiClient, InMemoryBackend};
//! use funnel_core::store::{BoardStore, NullNotifier};
//!
//! # async fn example() -> funnel_core::Result<()> {
//! // Bring up the simulated backend and sign in.
//! let backend = InMemoryBackend::seeded();
//! let session = backend.login("admin@funnelcrm.io").await?;
//! let client = ApiClient::new(backend, &session);
//!
//! // Load the leads board.
//! let mut leads: BoardStore<Lead, _> = BoardStore::new(
//!     client,
//!     Arc::new(NullNotifier),
//!     "lead",
//!     &session,
//!     LeadStatus::COLUMNS.to_vec(),
//! );
//! leads.refresh().await?;
//!
//! // Drop a card onto the Qualified column header.
//! leads.handle_drag_end("lead-1", Some("Qualified")).await?;
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod board;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use board::{
    apply_outcome, group_by_column, resolve_drag_end, Card, ColumnId, DragOutcome, Identified,
};
pub use display::{AgentList, LeadBoard, LocalDateTime, Money, OpportunityBoard, TaskBoard};
pub use error::{CrmError, Result};
pub use models::{
    ActivityKind, ActivityRecord, Agent, Lead, LeadStatus, Opportunity, OpportunityStage,
    Priority, Role, Task, TaskStatus, User,
};
pub use params::{CreateAgent, CreateLead, CreateOpportunity, CreateTask, ListQuery};
pub use service::{ApiClient, AuthSession, EntityApi, InMemoryBackend, LeadNoteApi, SeedData};
pub use store::{BoardStore, Notifier, NullNotifier, RosterStore, ToastLevel};
