//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use funnel_core::service::{ApiClient, AuthSession, EntityApi, InMemoryBackend, LeadNoteApi};
use funnel_core::store::{Notifier, ToastLevel};
use funnel_core::{CrmError, Lead, ListQuery, Result};

/// Seeded backend plus an authenticated client for the given email.
pub async fn client_for(email: &str) -> (Arc<InMemoryBackend>, AuthSession, Arc<ApiClient>) {
    let backend = InMemoryBackend::seeded();
    let session = backend
        .login(email)
        .await
        .expect("seed user should exist");
    let client = ApiClient::new(Arc::clone(&backend), &session);
    (backend, session, client)
}

pub async fn admin_client() -> (Arc<InMemoryBackend>, AuthSession, Arc<ApiClient>) {
    client_for("admin@funnelcrm.io").await
}

/// Notifier that records every toast for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(ToastLevel, String)> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn has_error(&self) -> bool {
        self.messages()
            .iter()
            .any(|(level, _)| *level == ToastLevel::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.toasts.lock().unwrap().push((level, message.to_string()));
    }
}

/// Service wrapper that counts calls and injects transport failures.
pub struct FlakyApi<S> {
    inner: Arc<S>,
    pub fail_updates: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub update_calls: AtomicUsize,
}

impl<S> FlakyApi<S> {
    pub fn new(inner: Arc<S>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            fail_updates: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            update_calls: AtomicUsize::new(0),
        })
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E, S> EntityApi<E> for FlakyApi<S>
where
    E: Send + 'static,
    S: EntityApi<E>,
{
    async fn list(&self, query: &ListQuery) -> Result<Vec<E>> {
        self.inner.list(query).await
    }

    async fn create(&self, draft: E) -> Result<E> {
        self.inner.create(draft).await
    }

    async fn update(&self, entity: E) -> Result<E> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(CrmError::transport("injected update failure"));
        }
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CrmError::transport("injected delete failure"));
        }
        self.inner.delete(id).await
    }
}

#[async_trait]
impl<S: LeadNoteApi> LeadNoteApi for FlakyApi<S> {
    async fn add_note(&self, lead_id: &str, note: &str) -> Result<Lead> {
        self.inner.add_note(lead_id, note).await
    }
}
