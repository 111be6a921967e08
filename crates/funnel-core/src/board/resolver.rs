//! Drag-end resolution: mapping a drag gesture to a list/column mutation.
//!
//! A drop event carries the dragged card's id (`active_id`) and the drop
//! target's id (`over_id`), where the target is either a column identifier
//! (drop on a column's empty area) or another card's id, or absent when the
//! drag was cancelled. [`resolve_drag_end`] classifies the gesture without
//! touching the list; [`apply_outcome`] performs the mutation and hands back
//! the moved card when a transition needs to be persisted.

use jiff::Timestamp;

use super::{Card, ColumnId};

/// Classification of one drag gesture against the current card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome<C> {
    /// Nothing to do: no target, dropped on itself, or unknown ids
    Noop,

    /// Move within one column: remove at `from`, insert at `to`
    Reorder { from: usize, to: usize },

    /// Cross-column move: remove at `from`, switch to `column`, insert at
    /// `insert_at` (an index into the list with the active card removed)
    Transition {
        from: usize,
        insert_at: usize,
        column: C,
    },
}

/// Classifies a drag gesture.
///
/// The column order is an explicit parameter: it both decides which strings
/// in `over_id` name a column and fixes the ordering used to place a card
/// dropped onto a column's empty area.
pub fn resolve_drag_end<E: Card>(
    cards: &[E],
    columns: &[E::Column],
    active_id: &str,
    over_id: Option<&str>,
) -> DragOutcome<E::Column> {
    let Some(over_id) = over_id else {
        return DragOutcome::Noop;
    };
    if active_id == over_id {
        return DragOutcome::Noop;
    }
    let Some(from) = cards.iter().position(|c| c.id() == active_id) else {
        return DragOutcome::Noop;
    };
    let active_column = cards[from].column();

    if let Some(column) = columns.iter().copied().find(|c| c.as_str() == over_id) {
        if column == active_column {
            return DragOutcome::Noop;
        }
        return DragOutcome::Transition {
            from,
            insert_at: column_drop_index(cards, columns, column, from),
            column,
        };
    }

    let Some(over_index) = cards.iter().position(|c| c.id() == over_id) else {
        return DragOutcome::Noop;
    };
    let over_column = cards[over_index].column();

    if over_column == active_column {
        DragOutcome::Reorder {
            from,
            to: over_index,
        }
    } else {
        // The active card takes the target card's slot in the reduced list,
        // pushing the target and everything after it down by one.
        let insert_at = if from < over_index {
            over_index - 1
        } else {
            over_index
        };
        DragOutcome::Transition {
            from,
            insert_at,
            column: over_column,
        }
    }
}

/// Insertion index for a drop onto a column's general area.
///
/// In the list with the active card removed, the card lands immediately
/// after the last card that belongs to the target column or to any column
/// ordered before it, so it becomes the tail of its new column's block. If
/// no such card remains the index is 0. Cards whose column is not in
/// `columns` never count.
fn column_drop_index<E: Card>(
    cards: &[E],
    columns: &[E::Column],
    target: E::Column,
    active_index: usize,
) -> usize {
    let Some(target_rank) = columns.iter().position(|c| *c == target) else {
        return 0;
    };

    let mut insert_at = 0;
    let mut reduced_index = 0;
    for (index, card) in cards.iter().enumerate() {
        if index == active_index {
            continue;
        }
        if let Some(rank) = columns.iter().position(|c| *c == card.column()) {
            if rank <= target_rank {
                insert_at = reduced_index + 1;
            }
        }
        reduced_index += 1;
    }
    insert_at
}

/// Applies a resolved outcome to the card list.
///
/// Returns a clone of the moved card when the outcome was a transition: that
/// card carries the new column, any column-derived fields, and the prepended
/// status-change record, and is what the store persists. Reorders and no-ops
/// return `None`; pure reorders are ephemeral client state.
pub fn apply_outcome<E: Card>(
    cards: &mut Vec<E>,
    outcome: &DragOutcome<E::Column>,
    actor: &str,
    now: Timestamp,
) -> Option<E> {
    match *outcome {
        DragOutcome::Noop => None,
        DragOutcome::Reorder { from, to } => {
            let card = cards.remove(from);
            cards.insert(to, card);
            None
        }
        DragOutcome::Transition {
            from,
            insert_at,
            column,
        } => {
            let mut card = cards.remove(from);
            card.transition(column, actor, now);
            cards.insert(insert_at, card.clone());
            Some(card)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, Lead, LeadStatus, Opportunity, OpportunityStage, Priority};

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: format!("Lead {id}"),
            company: "Acme Inc.".to_string(),
            deal_value: 1000,
            status,
            priority: Priority::Medium,
            source: None,
            assigned_to: "Alice".to_string(),
            avatar: String::new(),
            follow_up: None,
            notes: None,
            activity: Vec::new(),
        }
    }

    fn opportunity(id: &str, stage: OpportunityStage) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            name: format!("Deal {id}"),
            company: "Globex Corp.".to_string(),
            deal_value: 5000,
            stage,
            probability: stage.probability(),
            expected_close: None,
            assigned_to: "Bob".to_string(),
            avatar: String::new(),
            activity: Vec::new(),
        }
    }

    /// Four-card board: A(New), B(New), C(Contacted), D(Qualified).
    fn fixture() -> Vec<Lead> {
        vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::New),
            lead("c", LeadStatus::Contacted),
            lead("d", LeadStatus::Qualified),
        ]
    }

    fn ids(cards: &[Lead]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_missing_target_is_noop() {
        let cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", None);
        assert_eq!(outcome, DragOutcome::Noop);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("a"));
        assert_eq!(outcome, DragOutcome::Noop);

        let mut mutated = cards.clone();
        apply_outcome(&mut mutated, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(mutated, cards, "no-op drag must leave the list unchanged");
    }

    #[test]
    fn test_unknown_active_id_is_noop() {
        let cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "ghost", Some("a"));
        assert_eq!(outcome, DragOutcome::Noop);
    }

    #[test]
    fn test_unknown_over_id_is_noop() {
        let cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("ghost"));
        assert_eq!(outcome, DragOutcome::Noop);
    }

    #[test]
    fn test_drop_on_own_column_is_noop() {
        let cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("New"));
        assert_eq!(outcome, DragOutcome::Noop);
    }

    #[test]
    fn test_same_column_reorder_moves_only_position() {
        let mut cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("b"));
        assert_eq!(outcome, DragOutcome::Reorder { from: 0, to: 1 });

        let moved = apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert!(moved.is_none(), "reorders are not persisted");
        assert_eq!(ids(&cards), ["b", "a", "c", "d"]);
        let a = cards.iter().find(|c| c.id == "a").unwrap();
        assert_eq!(a.status, LeadStatus::New);
        assert!(a.activity.is_empty(), "reorder must not log activity");
    }

    #[test]
    fn test_column_drop_lands_at_end_of_target_block() {
        // Dragging A onto column "Qualified" yields [B, C, D, A] with A
        // qualified.
        let mut cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("Qualified"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 0,
                insert_at: 3,
                column: LeadStatus::Qualified
            }
        );

        let moved = apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH)
            .expect("transition returns the moved card");
        assert_eq!(ids(&cards), ["b", "c", "d", "a"]);
        assert_eq!(moved.status, LeadStatus::Qualified);
    }

    #[test]
    fn test_card_drop_takes_target_slot() {
        // Dragging A onto C (a Contacted card) yields [B, A, C, D] with A
        // contacted.
        let mut cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("c"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 0,
                insert_at: 1,
                column: LeadStatus::Contacted
            }
        );

        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["b", "a", "c", "d"]);
        assert_eq!(
            cards.iter().find(|c| c.id == "a").unwrap().status,
            LeadStatus::Contacted
        );
    }

    #[test]
    fn test_drop_onto_empty_column() {
        let mut cards = vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::Qualified),
        ];
        // Contacted is empty; A should land between the New block and the
        // Qualified block.
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "b", Some("Contacted"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 1,
                insert_at: 1,
                column: LeadStatus::Contacted
            }
        );
        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["a", "b"]);
        assert_eq!(cards[1].status, LeadStatus::Contacted);
    }

    #[test]
    fn test_drop_onto_empty_first_column_inserts_at_zero() {
        let mut cards = vec![
            lead("c", LeadStatus::Contacted),
            lead("d", LeadStatus::Qualified),
        ];
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "d", Some("New"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 1,
                insert_at: 0,
                column: LeadStatus::New
            }
        );
        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["d", "c"]);
    }

    #[test]
    fn test_drop_from_last_column_onto_first_column() {
        let mut cards = vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::Contacted),
            lead("x", LeadStatus::ClosedLost),
        ];
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "x", Some("New"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 2,
                insert_at: 1,
                column: LeadStatus::New
            }
        );
        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["a", "x", "b"]);
        assert_eq!(cards[1].status, LeadStatus::New);
    }

    #[test]
    fn test_drop_onto_first_card_of_a_column() {
        let mut cards = fixture();
        // C is the first (and only) card of Contacted; B drops onto it.
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "b", Some("c"));
        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["a", "b", "c", "d"]);
        assert_eq!(
            cards.iter().find(|c| c.id == "b").unwrap().status,
            LeadStatus::Contacted
        );
    }

    #[test]
    fn test_drop_onto_last_card_of_a_column() {
        let mut cards = vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::Contacted),
            lead("c", LeadStatus::Contacted),
            lead("d", LeadStatus::Qualified),
        ];
        // D drops onto C, the last Contacted card; D takes C's slot.
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "d", Some("c"));
        assert_eq!(
            outcome,
            DragOutcome::Transition {
                from: 3,
                insert_at: 2,
                column: LeadStatus::Contacted
            }
        );
        apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH);
        assert_eq!(ids(&cards), ["a", "b", "d", "c"]);
    }

    #[test]
    fn test_transition_prepends_exactly_one_status_change() {
        let mut cards = fixture();
        let outcome = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("Qualified"));
        let moved =
            apply_outcome(&mut cards, &outcome, "Alice", Timestamp::UNIX_EPOCH).unwrap();

        let changes: Vec<_> = moved
            .activity
            .iter()
            .filter(|r| r.kind == ActivityKind::StatusChange)
            .collect();
        assert_eq!(changes.len(), 1);
        assert_eq!(moved.activity[0].kind, ActivityKind::StatusChange);
        assert_eq!(
            moved.activity[0].details,
            "Status changed from New to Qualified."
        );
        assert_eq!(moved.activity[0].user, "Alice");
    }

    #[test]
    fn test_opportunity_transition_overwrites_probability() {
        let mut cards = vec![
            opportunity("o1", OpportunityStage::Prospecting),
            opportunity("o2", OpportunityStage::Proposal),
        ];
        cards[0].probability = 55; // stale value; must be overwritten
        let outcome =
            resolve_drag_end(&cards, &OpportunityStage::COLUMNS, "o1", Some("Negotiation"));
        let moved =
            apply_outcome(&mut cards, &outcome, "Bob", Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(moved.stage, OpportunityStage::Negotiation);
        assert_eq!(moved.probability, 80);
    }

    #[test]
    fn test_column_order_is_an_explicit_parameter() {
        // Reversing the column order flips which cards count as "earlier".
        let reversed: Vec<LeadStatus> =
            LeadStatus::COLUMNS.iter().rev().copied().collect();
        let cards = fixture();

        let natural = resolve_drag_end(&cards, &LeadStatus::COLUMNS, "a", Some("Contacted"));
        assert_eq!(
            natural,
            DragOutcome::Transition {
                from: 0,
                insert_at: 2,
                column: LeadStatus::Contacted
            }
        );

        // Under the reversed order Qualified precedes Contacted, so D also
        // counts as an earlier-column card and A lands one slot later.
        let flipped = resolve_drag_end(&cards, &reversed, "a", Some("Contacted"));
        assert_eq!(
            flipped,
            DragOutcome::Transition {
                from: 0,
                insert_at: 3,
                column: LeadStatus::Contacted
            }
        );
    }
}
