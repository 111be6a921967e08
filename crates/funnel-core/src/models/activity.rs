//! Immutable audit-trail records attached to leads and opportunities.

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Kind of change an activity record describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    #[serde(rename = "Created")]
    Created,

    #[serde(rename = "Status Change")]
    StatusChange,

    #[serde(rename = "Edited")]
    Edited,

    #[serde(rename = "Note Added")]
    NoteAdded,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Created => "Created",
            ActivityKind::StatusChange => "Status Change",
            ActivityKind::Edited => "Edited",
            ActivityKind::NoteAdded => "Note Added",
        }
    }
}

/// One immutable audit-trail entry.
///
/// Records are prepended to an entity's activity list and never mutated,
/// reordered, or removed: `activity[0]` is always the most recent change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Unique identifier for the record
    pub id: String,

    /// What kind of change happened
    #[serde(rename = "type")]
    pub kind: ActivityKind,

    /// Name of the actor who made the change
    pub user: String,

    /// When the change happened (UTC instant)
    pub timestamp: Timestamp,

    /// Human-readable description of the change
    pub details: String,
}

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates a process-unique activity record id.
///
/// Both the client-side drag path and the in-memory backend stamp records
/// through this counter, so ids never collide within one process. Seeded
/// records use a distinct `act-{entity}-{seq}` shape.
pub(crate) fn next_record_id() -> String {
    format!("act-{}", NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
}

impl ActivityRecord {
    /// Creates a record with a freshly allocated id.
    pub fn new(
        kind: ActivityKind,
        user: impl Into<String>,
        timestamp: Timestamp,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            kind,
            user: user.into(),
            timestamp,
            details: details.into(),
        }
    }

    /// The record describing a status/stage transition.
    ///
    /// `old` and `new` are the display names of the source and target columns.
    pub fn status_change(old: &str, new: &str, user: &str, timestamp: Timestamp) -> Self {
        Self::new(
            ActivityKind::StatusChange,
            user,
            timestamp,
            format!("Status changed from {old} to {new}."),
        )
    }
}
