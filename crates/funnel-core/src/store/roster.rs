//! Flat list store for entities without board semantics.

use std::sync::Arc;

use log::warn;

use crate::board::Identified;
use crate::error::Result;
use crate::params::ListQuery;
use crate::service::{AuthSession, EntityApi};

use super::{Notifier, ToastLevel};

/// Ordered list of non-board entities (the agent roster).
///
/// Same optimistic discipline as the board store, minus drag handling and
/// column projections.
pub struct RosterStore<E: Identified + Clone + Send + Sync, S: EntityApi<E> + ?Sized> {
    service: Arc<S>,
    notifier: Arc<dyn Notifier>,
    label: &'static str,
    query: ListQuery,
    items: Vec<E>,
}

impl<E: Identified + Clone + Send + Sync, S: EntityApi<E> + ?Sized> RosterStore<E, S> {
    pub fn new(
        service: Arc<S>,
        notifier: Arc<dyn Notifier>,
        label: &'static str,
        session: &AuthSession,
    ) -> Self {
        Self {
            service,
            notifier,
            label,
            query: ListQuery {
                role: session.user.role,
                name: session.user.name.clone(),
            },
            items: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.items = self.service.list(&self.query).await?;
        Ok(())
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub async fn add(&mut self, draft: E) -> Result<()> {
        match self.service.create(draft).await {
            Ok(created) => {
                self.notifier.notify(
                    ToastLevel::Success,
                    &format!("Created {} {}.", self.label, created.id()),
                );
                self.items.push(created);
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

    pub async fn edit(&mut self, updated: E) -> Result<()> {
        let Some(index) = self.items.iter().position(|i| i.id() == updated.id()) else {
            self.notifier.notify(
                ToastLevel::Error,
                &format!("No such {}: {}", self.label, updated.id()),
            );
            return Ok(());
        };

        let snapshot = self.items.clone();
        self.items[index] = updated.clone();
        match self.service.update(updated).await {
            Ok(canonical) => {
                self.items[index] = canonical;
                self.notifier
                    .notify(ToastLevel::Success, &format!("Updated {}.", self.label));
            }
            Err(err) => {
                warn!("failed to update {}: {err}", self.label);
                self.items = snapshot;
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to update {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            self.notifier
                .notify(ToastLevel::Error, &format!("No such {}: {id}", self.label));
            return Ok(());
        };

        let snapshot = self.items.clone();
        self.items.remove(index);
        match self.service.delete(id).await {
            Ok(()) => {
                self.notifier
                    .notify(ToastLevel::Success, &format!("Deleted {} {id}.", self.label));
            }
            Err(err) => {
                warn!("failed to delete {}: {err}", self.label);
                self.items = snapshot;
                self.notifier.notify(
                    ToastLevel::Error,
                    &format!("Failed to delete {}: {err}", self.label),
                );
            }
        }
        Ok(())
    }
}
