//! Declarative activity diffing for entity edits.
//!
//! Whenever the backend accepts an update it compares the stored entity with
//! the incoming one and prepends one activity record per changed trackable
//! field. The set of tracked fields and their human-readable messages is a
//! single table per entity type, so what gets audited is centrally
//! verifiable instead of being buried in a chain of conditionals.

use jiff::Timestamp;

use crate::board::ColumnId;
use crate::models::{ActivityKind, ActivityRecord, Lead, Opportunity};

/// One tracked field: a diff function producing the record message when the
/// field changed between the old and new entity state.
pub struct TrackedField<E> {
    /// Field name, for diagnostics and tests
    pub name: &'static str,
    /// Kind stamped on the produced record
    pub kind: ActivityKind,
    /// Returns the record details when the field differs, `None` otherwise
    pub diff: fn(&E, &E) -> Option<String>,
}

fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

/// Tracked lead fields, in the order their records are prepended.
pub const LEAD_FIELDS: &[TrackedField<Lead>] = &[
    TrackedField {
        name: "name",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.name != new.name)
                .then(|| format!("Name changed from {} to {}.", old.name, new.name))
        },
    },
    TrackedField {
        name: "company",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.company != new.company)
                .then(|| format!("Company changed from {} to {}.", old.company, new.company))
        },
    },
    TrackedField {
        name: "status",
        kind: ActivityKind::StatusChange,
        diff: |old, new| {
            (old.status != new.status).then(|| {
                format!(
                    "Status changed from {} to {}.",
                    old.status.as_str(),
                    new.status.as_str()
                )
            })
        },
    },
    TrackedField {
        name: "priority",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.priority != new.priority).then(|| {
                format!(
                    "Priority changed from {} to {}.",
                    old.priority.as_str(),
                    new.priority.as_str()
                )
            })
        },
    },
    TrackedField {
        name: "dealValue",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.deal_value != new.deal_value).then(|| {
                format!(
                    "Deal value changed from {} to {}.",
                    old.deal_value, new.deal_value
                )
            })
        },
    },
    TrackedField {
        name: "assignedTo",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.assigned_to != new.assigned_to).then(|| {
                format!(
                    "Reassigned from {} to {}.",
                    old.assigned_to, new.assigned_to
                )
            })
        },
    },
    TrackedField {
        name: "source",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.source != new.source).then(|| {
                format!(
                    "Source changed from {} to {}.",
                    fmt_opt(&old.source),
                    fmt_opt(&new.source)
                )
            })
        },
    },
    TrackedField {
        name: "followUp",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.follow_up != new.follow_up).then(|| {
                format!(
                    "Follow-up rescheduled from {} to {}.",
                    fmt_opt(&old.follow_up),
                    fmt_opt(&new.follow_up)
                )
            })
        },
    },
    TrackedField {
        name: "notes",
        kind: ActivityKind::Edited,
        diff: |old, new| (old.notes != new.notes).then(|| "Notes were updated.".to_string()),
    },
];

/// Tracked opportunity fields.
pub const OPPORTUNITY_FIELDS: &[TrackedField<Opportunity>] = &[
    TrackedField {
        name: "name",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.name != new.name)
                .then(|| format!("Name changed from {} to {}.", old.name, new.name))
        },
    },
    TrackedField {
        name: "company",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.company != new.company)
                .then(|| format!("Company changed from {} to {}.", old.company, new.company))
        },
    },
    TrackedField {
        name: "stage",
        kind: ActivityKind::StatusChange,
        diff: |old, new| {
            (old.stage != new.stage).then(|| {
                format!(
                    "Status changed from {} to {}.",
                    old.stage.as_str(),
                    new.stage.as_str()
                )
            })
        },
    },
    TrackedField {
        name: "dealValue",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.deal_value != new.deal_value).then(|| {
                format!(
                    "Deal value changed from {} to {}.",
                    old.deal_value, new.deal_value
                )
            })
        },
    },
    TrackedField {
        name: "assignedTo",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.assigned_to != new.assigned_to).then(|| {
                format!(
                    "Reassigned from {} to {}.",
                    old.assigned_to, new.assigned_to
                )
            })
        },
    },
    TrackedField {
        name: "expectedClose",
        kind: ActivityKind::Edited,
        diff: |old, new| {
            (old.expected_close != new.expected_close).then(|| {
                format!(
                    "Expected close moved from {} to {}.",
                    fmt_opt(&old.expected_close),
                    fmt_opt(&new.expected_close)
                )
            })
        },
    },
];

/// Runs a tracked-field table over an old/new pair.
///
/// Returns one record per changed field, in table order; the update path
/// prepends them in reverse so the first table entry's record ends up
/// newest. When `skip_status` is set, entries of kind
/// [`ActivityKind::StatusChange`] are suppressed; the update path uses this
/// when the client already authored a status-change record for the same
/// transition, so a move never produces two of them.
pub fn diff_records<E>(
    fields: &[TrackedField<E>],
    old: &E,
    new: &E,
    actor: &str,
    now: Timestamp,
    skip_status: bool,
) -> Vec<ActivityRecord> {
    fields
        .iter()
        .filter(|f| !(skip_status && f.kind == ActivityKind::StatusChange))
        .filter_map(|f| (f.diff)(old, new).map(|details| ActivityRecord::new(f.kind, actor, now, details)))
        .collect()
}
