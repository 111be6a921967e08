//! Kanban board logic shared by the Leads, Opportunities, and Tasks pipelines.
//!
//! The board is a projection over one ordered entity list: grouping by
//! status/stage yields the columns, and list order encodes each column's
//! internal card order. The modules here hold the only non-trivial logic in
//! the system:
//!
//! - [`resolver`]: classifies a drag gesture into a no-op, a same-column
//!   reorder, or a cross-column transition, and computes the insertion index
//! - [`grouping`]: the pure column-grouping projection consumed by renderers
//!
//! Both are generic over [`Card`] so the identical algorithm serves every
//! pipeline, and both take the column order as an explicit parameter rather
//! than reading an ambient constant.

use std::fmt;

use jiff::Timestamp;

pub mod grouping;
pub mod resolver;

pub use grouping::group_by_column;
pub use resolver::{apply_outcome, resolve_drag_end, DragOutcome};

/// A column identifier: one value of a small closed status/stage enumeration.
///
/// Drop targets arrive as strings from the UI layer, so every column must
/// expose a stable display name used both for rendering and for matching
/// `over_id` against column identifiers.
pub trait ColumnId: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Stable display name, e.g. `"Closed Won"`.
    fn as_str(&self) -> &'static str;
}

/// Anything with a stable unique string identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// An entity that appears as a card on a kanban board.
///
/// `transition` is the single mutation hook the resolver uses for
/// cross-column moves: implementations set the new column, overwrite any
/// column-derived fields (an opportunity's probability), and prepend exactly
/// one status-change activity record.
pub trait Card: Identified + Clone + Send + Sync {
    type Column: ColumnId;

    /// The column this card currently belongs to.
    fn column(&self) -> Self::Column;

    /// Moves the card into `column`, stamping the change with `actor`/`now`.
    fn transition(&mut self, column: Self::Column, actor: &str, now: Timestamp);

    /// Whether this card matches a client-side search term.
    ///
    /// An empty term matches everything. The filter is a render-time
    /// projection: it never affects the underlying list order.
    fn matches_search(&self, _term: &str) -> bool {
        true
    }
}
