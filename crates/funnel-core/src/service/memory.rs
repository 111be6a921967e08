//! In-memory simulated REST backend.
//!
//! Re-architected from "module-level arrays mutated by a dispatch function"
//! into an injected repository: state lives in one [`InMemoryBackend`]
//! constructed from seed data, and every request goes through an
//! [`ApiClient`] that carries a bearer token. The token is resolved to an
//! actor identity on each call and stamped onto server-side activity
//! records, mirroring how a real service would attribute changes.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use log::debug;
use tokio::sync::Mutex;

use crate::activity::{diff_records, TrackedField, LEAD_FIELDS, OPPORTUNITY_FIELDS};
use crate::board::Identified;
use crate::error::{CrmError, Result};
use crate::models::{
    ActivityKind, ActivityRecord, Agent, Lead, Opportunity, Task, User,
};
use crate::params::ListQuery;

use super::{EntityApi, LeadNoteApi, SeedData};

/// A successful login: the bearer token plus the resolved user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

const TOKEN_PREFIX: &str = "dummy-jwt-for-";

struct BackendState {
    users: Vec<User>,
    leads: Vec<Lead>,
    opportunities: Vec<Opportunity>,
    tasks: Vec<Task>,
    agents: Vec<Agent>,
    next_lead: u64,
    next_opportunity: u64,
    next_task: u64,
    next_agent: u64,
}

/// Highest numeric suffix among ids shaped `{prefix}-{n}`, plus one.
fn next_counter<I: Identified>(items: &[I], prefix: &str) -> u64 {
    items
        .iter()
        .filter_map(|item| item.id().strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}

/// The simulated backend service. Construct once, share behind [`Arc`].
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    /// Builds a backend from explicit seed data.
    pub fn with_seed(seed: SeedData) -> Arc<Self> {
        let state = BackendState {
            next_lead: next_counter(&seed.leads, "lead-"),
            next_opportunity: next_counter(&seed.opportunities, "opp-"),
            next_task: next_counter(&seed.tasks, "task-"),
            next_agent: next_counter(&seed.agents, "agent-"),
            users: seed.users,
            leads: seed.leads,
            opportunities: seed.opportunities,
            tasks: seed.tasks,
            agents: seed.agents,
        };
        Arc::new(Self {
            state: Mutex::new(state),
        })
    }

    /// Builds a backend loaded with the default seed dataset.
    pub fn seeded() -> Arc<Self> {
        Self::with_seed(SeedData::default())
    }

    /// Authenticates by email against the user directory.
    pub async fn login(&self, email: &str) -> Result<AuthSession> {
        let state = self.state.lock().await;
        let user = state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(|| CrmError::not_found("User", email))?;
        debug!("login: {} ({})", user.name, user.role.as_str());
        Ok(AuthSession {
            token: format!("{TOKEN_PREFIX}{}", user.name.to_lowercase()),
            user,
        })
    }
}

fn resolve_actor(state: &BackendState, token: &str) -> Result<User> {
    let name = token
        .strip_prefix(TOKEN_PREFIX)
        .ok_or_else(|| CrmError::Unauthorized {
            reason: "malformed bearer token".to_string(),
        })?;
    state
        .users
        .iter()
        .find(|u| u.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| CrmError::Unauthorized {
            reason: "token does not resolve to a known user".to_string(),
        })
}

/// Prepends the server-computed activity diff onto an updated entity.
///
/// The incoming entity may already carry client-authored records on top of
/// the activity it was fetched with (the drag path prepends its own
/// status-change record before persisting). Those are counted by comparing
/// activity lengths, and when one of them is a status change the diff
/// suppresses its own status record so a single move never produces two.
fn stamp_update<E>(
    fields: &[TrackedField<E>],
    stored: &E,
    mut incoming: E,
    stored_len: usize,
    activity: fn(&mut E) -> &mut Vec<ActivityRecord>,
    actor: &str,
    now: Timestamp,
) -> E {
    let client_logged_status = {
        let log = activity(&mut incoming);
        let client_added = log.len().saturating_sub(stored_len);
        log[..client_added]
            .iter()
            .any(|r| r.kind == ActivityKind::StatusChange)
    };

    let records = diff_records(fields, stored, &incoming, actor, now, client_logged_status);
    let log = activity(&mut incoming);
    for record in records.into_iter().rev() {
        log.insert(0, record);
    }
    incoming
}

/// Authenticated handle to the backend; this is what stores are given.
///
/// Cheap to clone conceptually, but held behind [`Arc`] by callers since the
/// service traits take `&self`.
pub struct ApiClient {
    backend: Arc<InMemoryBackend>,
    token: String,
}

impl ApiClient {
    pub fn new(backend: Arc<InMemoryBackend>, session: &AuthSession) -> Arc<Self> {
        Arc::new(Self {
            backend,
            token: session.token.clone(),
        })
    }
}

#[async_trait]
impl EntityApi<Lead> for ApiClient {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Lead>> {
        let state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        Ok(state
            .leads
            .iter()
            .filter(|l| query.permits(&l.assigned_to))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: Lead) -> Result<Lead> {
        let mut state = self.backend.state.lock().await;
        let actor = resolve_actor(&state, &self.token)?;
        let id = format!("lead-{}", state.next_lead);
        state.next_lead += 1;

        let lead = Lead {
            id: id.clone(),
            avatar: format!("https://picsum.photos/seed/{id}/40/40"),
            activity: vec![ActivityRecord::new(
                ActivityKind::Created,
                &actor.name,
                Timestamp::now(),
                "Lead was created.",
            )],
            ..draft
        };
        state.leads.insert(0, lead.clone());
        debug!("created {id}");
        Ok(lead)
    }

    async fn update(&self, entity: Lead) -> Result<Lead> {
        let mut state = self.backend.state.lock().await;
        let actor = resolve_actor(&state, &self.token)?;
        let index = state
            .leads
            .iter()
            .position(|l| l.id == entity.id)
            .ok_or_else(|| CrmError::not_found("Lead", &entity.id))?;

        let stored = state.leads[index].clone();
        let updated = stamp_update(
            LEAD_FIELDS,
            &stored,
            entity,
            stored.activity.len(),
            |l| &mut l.activity,
            &actor.name,
            Timestamp::now(),
        );
        state.leads[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let before = state.leads.len();
        state.leads.retain(|l| l.id != id);
        if state.leads.len() == before {
            return Err(CrmError::not_found("Lead", id));
        }
        Ok(())
    }
}

#[async_trait]
impl LeadNoteApi for ApiClient {
    async fn add_note(&self, lead_id: &str, note: &str) -> Result<Lead> {
        let mut state = self.backend.state.lock().await;
        let actor = resolve_actor(&state, &self.token)?;
        let lead = state
            .leads
            .iter_mut()
            .find(|l| l.id == lead_id)
            .ok_or_else(|| CrmError::not_found("Lead", lead_id))?;
        lead.log_activity(ActivityRecord::new(
            ActivityKind::NoteAdded,
            &actor.name,
            Timestamp::now(),
            note,
        ));
        Ok(lead.clone())
    }
}

#[async_trait]
impl EntityApi<Opportunity> for ApiClient {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Opportunity>> {
        let state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        Ok(state
            .opportunities
            .iter()
            .filter(|o| query.permits(&o.assigned_to))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: Opportunity) -> Result<Opportunity> {
        let mut state = self.backend.state.lock().await;
        let actor = resolve_actor(&state, &self.token)?;
        let id = format!("opp-{}", state.next_opportunity);
        state.next_opportunity += 1;

        let opportunity = Opportunity {
            id: id.clone(),
            avatar: format!("https://picsum.photos/seed/{id}/40/40"),
            activity: vec![ActivityRecord::new(
                ActivityKind::Created,
                &actor.name,
                Timestamp::now(),
                "Opportunity was created.",
            )],
            ..draft
        };
        state.opportunities.insert(0, opportunity.clone());
        debug!("created {id}");
        Ok(opportunity)
    }

    async fn update(&self, entity: Opportunity) -> Result<Opportunity> {
        let mut state = self.backend.state.lock().await;
        let actor = resolve_actor(&state, &self.token)?;
        let index = state
            .opportunities
            .iter()
            .position(|o| o.id == entity.id)
            .ok_or_else(|| CrmError::not_found("Opportunity", &entity.id))?;

        let stored = state.opportunities[index].clone();
        let updated = stamp_update(
            OPPORTUNITY_FIELDS,
            &stored,
            entity,
            stored.activity.len(),
            |o| &mut o.activity,
            &actor.name,
            Timestamp::now(),
        );
        state.opportunities[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let before = state.opportunities.len();
        state.opportunities.retain(|o| o.id != id);
        if state.opportunities.len() == before {
            return Err(CrmError::not_found("Opportunity", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityApi<Task> for ApiClient {
    // Tasks list in due-date order, undated ones last.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Task>> {
        let state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|t| query.permits(&t.assigned_to))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| match (a.due, b.due) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(tasks)
    }

    async fn create(&self, draft: Task) -> Result<Task> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let id = format!("task-{}", state.next_task);
        state.next_task += 1;

        let task = Task { id, ..draft };
        state.tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update(&self, entity: Task) -> Result<Task> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == entity.id)
            .ok_or_else(|| CrmError::not_found("Task", &entity.id))?;
        *task = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(CrmError::not_found("Task", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityApi<Agent> for ApiClient {
    // The agent roster is not role-scoped; every signed-in user sees it.
    async fn list(&self, _query: &ListQuery) -> Result<Vec<Agent>> {
        let state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        Ok(state.agents.clone())
    }

    async fn create(&self, draft: Agent) -> Result<Agent> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let id = format!("agent-{}", state.next_agent);
        state.next_agent += 1;

        let avatar = if draft.avatar.is_empty() {
            format!("https://i.pravatar.cc/150?u={}", draft.name)
        } else {
            draft.avatar.clone()
        };
        let agent = Agent { id, avatar, ..draft };
        state.agents.push(agent.clone());
        Ok(agent)
    }

    async fn update(&self, entity: Agent) -> Result<Agent> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let agent = state
            .agents
            .iter_mut()
            .find(|a| a.id == entity.id)
            .ok_or_else(|| CrmError::not_found("Agent", &entity.id))?;
        *agent = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.backend.state.lock().await;
        resolve_actor(&state, &self.token)?;
        let before = state.agents.len();
        state.agents.retain(|a| a.id != id);
        if state.agents.len() == before {
            return Err(CrmError::not_found("Agent", id));
        }
        Ok(())
    }
}
