//! Client-side entity stores with optimistic mutation.
//!
//! A store owns the authoritative ordered list one board renders from and
//! performs every mutation in the optimistic pattern: snapshot the list,
//! apply the change synchronously, persist asynchronously, then either
//! replace the optimistic entry with the server's canonical copy or restore
//! the snapshot exactly. Persistence failures never escape a store method;
//! they surface through the [`Notifier`] so one failed request cannot tear
//! down the caller.
//!
//! [`BoardStore`] serves the kanban pipelines (leads, opportunities, tasks);
//! [`RosterStore`] serves flat lists without board semantics (agents).

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, warn};

use crate::board::{apply_outcome, group_by_column, resolve_drag_end, Card, ColumnId, DragOutcome};
use crate::error::Result;
use crate::models::Lead;
use crate::params::ListQuery;
use crate::service::{AuthSession, EntityApi, LeadNoteApi};

pub mod roster;

pub use roster::RosterStore;

/// Severity of a user-facing toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

/// Sink for user-facing notifications.
///
/// Stores report mutation outcomes here instead of returning errors, so the
/// interface layer decides how failures look (a terminal line today, a toast
/// in a richer front end).
pub trait Notifier: Send + Sync {
    fn notify(&self, level: ToastLevel, message: &str);
}

/// Discards every notification. Useful in tests that assert on state only.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: ToastLevel, _message: &str) {}
}

/// Ordered card list behind one kanban board, with drag handling.
///
/// The list order is the board order: grouping by column yields each
/// column's cards in their relative order. All mutations go through
/// `&mut self`, so overlapping mutations on one board cannot interleave.
pub struct BoardStore<E: Card, S: EntityApi<E> + ?Sized> {
    service: Arc<S>,
    notifier: Arc<dyn Notifier>,
    /// Noun used in toast messages, e.g. `"lead"`.
    label: &'static str,
    actor: String,
    query: ListQuery,
    columns: Vec<E::Column>,
    cards: Vec<E>,
    search_term: String,
}

impl<E: Card, S: EntityApi<E> + ?Sized> BoardStore<E, S> {
    /// Creates an empty store; call [`BoardStore::refresh`] to load it.
    pub fn new(
        service: Arc<S>,
        notifier: Arc<dyn Notifier>,
        label: &'static str,
        session: &AuthSession,
        columns: Vec<E::Column>,
    ) -> Self {
        Self {
            service,
            notifier,
            label,
            actor: session.user.name.clone(),
            query: ListQuery {
                role: session.user.role,
                name: session.user.name.clone(),
            },
            columns,
            cards: Vec::new(),
            search_term: String::new(),
        }
    }

    /// Replaces the card list with a fresh role-filtered fetch.
    pub async fn refresh(&mut self) -> Result<()> {
        self.cards = self.service.list(&self.query).await?;
        debug!("refreshed {} {}s", self.cards.len(), self.label);
        Ok(())
    }

    /// The full ordered card list, unfiltered.
    pub fn cards(&self) -> &[E] {
        &self.cards
    }

    /// The rendered column order.
    pub fn columns(&self) -> &[E::Column] {
        &self.columns
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Sets the search term applied by [`BoardStore::board`].
    ///
    /// Filtering is a projection over the rendered board only; the
    /// underlying list and its order are untouched.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The board projection: cards matching the search term, grouped by
    /// column in rendered order.
    pub fn board(&self) -> Vec<(E::Column, Vec<E>)> {
        let visible: Vec<E> = self
            .cards
            .iter()
            .filter(|c| c.matches_search(&self.search_term))
            .cloned()
            .collect();
        group_by_column(&visible, &self.columns)
            .into_iter()
            .map(|(column, cards)| (column, cards.into_iter().cloned().collect()))
            .collect()
    }

    /// Handles the end of a drag gesture.
    ///
    /// No-ops and same-column reorders resolve entirely client side; a
    /// reorder is presentation state and is never persisted. Cross-column
    /// transitions are applied optimistically, persisted, and rolled back to
    /// the pre-drag snapshot if persistence fails.
    pub async fn handle_drag_end(&mut self, active_id: &str, over_id: Option<&str>) -> Result<()> {
        let outcome = resolve_drag_end(&self.cards, &self.columns, active_id, over_id);
        if matches!(outcome, DragOutcome::Noop) {
            return Ok(());
        }

        let snapshot = self.cards.clone();
        let moved = apply_outcome(&mut self.cards, &outcome, &self.actor, Timestamp::now());
        let Some(moved) = moved else {
            // Same-column reorder: local state only.
            return Ok(());
        };

        let column = moved.column();
        match self.service.update(moved).await {
            Ok(canonical) => {
                self.adopt(canonical);
                self.notifier.notify(
                    ToastLevel::Success,
                    &format!("Moved {} to {}.", self.label, column.as_str()),
                );
            }
            Err(err) => {
                warn!("failed to persist {} move: {err}", self.label);
                self.cards = snapshot;
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to move {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }

    /// Creates a new card at the top of the list.
    ///
    /// The draft comes from a validated parameter struct; the backend
    /// assigns id, avatar, and initial activity.
    pub async fn add(&mut self, draft: E) -> Result<()> {
        match self.service.create(draft).await {
            Ok(created) => {
                self.notifier.notify(
                    ToastLevel::Success,
                    &format!("Created {} {}.", self.label, created.id()),
                );
                self.cards.insert(0, created);
            }
            Err(err) => {
                warn!("failed to create {}: {err}", self.label);
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to create {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }

    /// Replaces a card with an edited copy, optimistically.
    pub async fn edit(&mut self, updated: E) -> Result<()> {
        let Some(index) = self.cards.iter().position(|c| c.id() == updated.id()) else {
            self.notifier.notify(
                ToastLevel::Error,
                &format!("No such {}: {}", self.label, updated.id()),
            );
            return Ok(());
        };

        let snapshot = self.cards.clone();
        self.cards[index] = updated.clone();
        match self.service.update(updated).await {
            Ok(canonical) => {
                self.adopt(canonical);
                self.notifier
                    .notify(ToastLevel::Success, &format!("Updated {}.", self.label));
            }
            Err(err) => {
                warn!("failed to update {}: {err}", self.label);
                self.cards = snapshot;
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to update {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }

    /// Deletes a card, optimistically.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.cards.iter().position(|c| c.id() == id) else {
            self.notifier
                .notify(ToastLevel::Error, &format!("No such {}: {id}", self.label));
            return Ok(());
        };

        let snapshot = self.cards.clone();
        self.cards.remove(index);
        match self.service.delete(id).await {
            Ok(()) => {
                self.notifier
                    .notify(ToastLevel::Success, &format!("Deleted {} {id}.", self.label));
            }
            Err(err) => {
                warn!("failed to delete {}: {err}", self.label);
                self.cards = snapshot;
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to delete {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }

    /// Swaps the server's canonical copy in over the optimistic one.
    fn adopt(&mut self, canonical: E) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id() == canonical.id()) {
            *card = canonical;
        }
    }
}

impl<S: EntityApi<Lead> + LeadNoteApi + ?Sized> BoardStore<Lead, S> {
    /// Attaches a note to a lead.
    ///
    /// Not optimistic: the server generates the activity record, so the
    /// local lead is only replaced once the server responds.
    pub async fn add_note(&mut self, lead_id: &str, note: &str) -> Result<()> {
        match self.service.add_note(lead_id, note).await {
            Ok(canonical) => {
                self.adopt(canonical);
                self.notifier
                    .notify(ToastLevel::Success, "Note added.");
            }
            Err(err) => {
                warn!("failed to add note: {err}");
                self.notifier
                    .notify(ToastLevel::Error, &format!("Failed to add note: {err}"));
            }
        }
        Ok(())
    }
}
