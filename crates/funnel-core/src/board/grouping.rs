//! Column-grouping projection consumed by board renderers.

use super::Card;

/// Groups cards into board columns, preserving list order within each column.
///
/// For each column in `columns` (in the given order), the matching cards are
/// collected in their current relative order. A card whose column is not in
/// `columns` belongs to no rendered column; with the closed status
/// enumerations this only happens when a caller renders a subset of columns,
/// and it is handled by omission rather than by panicking.
pub fn group_by_column<'a, E: Card>(
    cards: &'a [E],
    columns: &[E::Column],
) -> Vec<(E::Column, Vec<&'a E>)> {
    columns
        .iter()
        .map(|&column| {
            let members = cards.iter().filter(|c| c.column() == column).collect();
            (column, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Identified;
    use crate::models::{Lead, LeadStatus, Priority};

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: id.to_uppercase(),
            company: "Initech".to_string(),
            deal_value: 100,
            status,
            priority: Priority::Low,
            source: None,
            assigned_to: "Diana".to_string(),
            avatar: String::new(),
            follow_up: None,
            notes: None,
            activity: Vec::new(),
        }
    }

    #[test]
    fn test_every_card_lands_in_exactly_one_column() {
        let cards = vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::Qualified),
            lead("c", LeadStatus::New),
            lead("d", LeadStatus::ClosedLost),
        ];
        let board = group_by_column(&cards, &LeadStatus::COLUMNS);

        let mut seen: Vec<&str> = board
            .iter()
            .flat_map(|(_, members)| members.iter().map(|c| c.id()))
            .collect();
        assert_eq!(seen.len(), cards.len(), "no card duplicated or dropped");
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_column_order_and_internal_order_preserved() {
        let cards = vec![
            lead("q2", LeadStatus::Qualified),
            lead("n1", LeadStatus::New),
            lead("q1", LeadStatus::Qualified),
        ];
        let board = group_by_column(&cards, &LeadStatus::COLUMNS);

        assert_eq!(board[0].0, LeadStatus::New);
        assert_eq!(board[0].1.len(), 1);
        let qualified = &board[2];
        assert_eq!(qualified.0, LeadStatus::Qualified);
        let ids: Vec<&str> = qualified.1.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["q2", "q1"], "relative list order preserved");
    }

    #[test]
    fn test_card_outside_rendered_columns_is_omitted() {
        let cards = vec![lead("a", LeadStatus::New), lead("x", LeadStatus::ClosedLost)];
        let open_columns = [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
        ];
        let board = group_by_column(&cards, &open_columns);
        let total: usize = board.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, 1, "closed-lost card belongs to no rendered column");
    }
}
