//! Backend service interfaces and the in-memory implementation.
//!
//! The stores talk to the backend only through the traits in this module, so
//! tests can substitute failing implementations and a future HTTP client can
//! slot in without touching board logic. The bundled implementation is
//! [`InMemoryBackend`] plus [`ApiClient`]: a simulated REST service holding
//! its collections behind a mutex, with requests authenticated by a bearer
//! token resolved to an actor identity.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Lead;
use crate::params::ListQuery;

pub mod memory;
pub mod seed;

pub use memory::{ApiClient, AuthSession, InMemoryBackend};
pub use seed::SeedData;

/// CRUD interface exposed per entity type.
///
/// Mirrors the REST surface: `list` is pre-filtered by role on the server
/// side; `create` assigns the id, avatar, and initial activity, ignoring any
/// client-supplied values for them; `update` replaces the stored entity
/// wholesale and prepends the server-computed activity diff; `delete` is a
/// hard delete with no tombstone. Missing ids surface as
/// [`crate::CrmError::NotFound`].
#[async_trait]
pub trait EntityApi<E>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Vec<E>>;
    async fn create(&self, draft: E) -> Result<E>;
    async fn update(&self, entity: E) -> Result<E>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// The lead-only note endpoint.
///
/// Appends a NoteAdded activity record whose details are the note text
/// verbatim, and returns the updated lead.
#[async_trait]
pub trait LeadNoteApi: Send + Sync {
    async fn add_note(&self, lead_id: &str, note: &str) -> Result<Lead>;
}
