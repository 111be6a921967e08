//! Integration tests for the simulated REST backend.

mod common;

use std::sync::Arc;

use funnel_core::models::{ActivityKind, Agent, Lead, LeadStatus, Priority, Role};
use funnel_core::service::{ApiClient, AuthSession, EntityApi, InMemoryBackend, LeadNoteApi};
use funnel_core::{CrmError, ListQuery};

use common::admin_client;

fn admin_query() -> ListQuery {
    ListQuery {
        role: Role::Admin,
        name: "Admin".to_string(),
    }
}

#[tokio::test]
async fn test_login_resolves_seeded_users() {
    let backend = InMemoryBackend::seeded();

    let session = backend.login("alice@funnelcrm.io").await.unwrap();
    assert_eq!(session.user.name, "Alice");
    assert_eq!(session.user.role, Role::Agent);
    assert_eq!(session.token, "dummy-jwt-for-alice");

    let admin = backend.login("ADMIN@funnelcrm.io").await.unwrap();
    assert_eq!(admin.user.role, Role::Admin);

    let err = backend.login("nobody@funnelcrm.io").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_requests_with_a_bad_token_are_unauthorized() {
    let backend = InMemoryBackend::seeded();
    let session = AuthSession {
        token: "dummy-jwt-for-mallory".to_string(),
        user: backend.login("admin@funnelcrm.io").await.unwrap().user,
    };
    let client = ApiClient::new(backend, &session);

    let err = EntityApi::<Lead>::list(&*client, &admin_query())
        .await
        .unwrap_err();
    assert!(matches!(err, CrmError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_list_is_role_filtered_on_the_server() {
    let (_backend, _session, client) = admin_client().await;

    let all: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    assert_eq!(all.len(), 8);

    let bob_query = ListQuery {
        role: Role::Agent,
        name: "Bob".to_string(),
    };
    let bobs: Vec<Lead> = client.list(&bob_query).await.unwrap();
    assert_eq!(bobs.len(), 2);
    assert!(bobs.iter().all(|l| l.assigned_to == "Bob"));

    // Agents are a shared roster, never scoped down.
    let agents: Vec<Agent> = client.list(&bob_query).await.unwrap();
    assert_eq!(agents.len(), 4);
}

#[tokio::test]
async fn test_create_assigns_server_owned_fields() {
    let (_backend, _session, client) = admin_client().await;

    let mut draft = funnel_core::params::CreateLead {
        name: "Eve Adams".to_string(),
        company: "Initech".to_string(),
        deal_value: 50_000,
        priority: Priority::Low,
        assigned_to: "Diana".to_string(),
        ..Default::default()
    }
    .into_draft()
    .unwrap();
    // Client-supplied identity and history must be ignored.
    draft.id = "lead-999".to_string();
    draft.activity.push(funnel_core::ActivityRecord::new(
        ActivityKind::Edited,
        "Mallory",
        jiff::Timestamp::UNIX_EPOCH,
        "forged",
    ));

    let created = client.create(draft).await.unwrap();
    assert_eq!(created.id, "lead-9");
    assert!(created.avatar.contains("lead-9"));
    assert_eq!(created.activity.len(), 1);
    assert_eq!(created.activity[0].kind, ActivityKind::Created);
    assert_eq!(created.activity[0].details, "Lead was created.");
    assert_eq!(created.activity[0].user, "Admin");

    // The new lead lists first.
    let all: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    assert_eq!(all[0].id, "lead-9");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (_backend, _session, client) = admin_client().await;
    let leads: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    let mut lead = leads[0].clone();
    lead.id = "lead-404".to_string();

    let err = client.update(lead).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_prepends_one_record_per_changed_field() {
    let (_backend, _session, client) = admin_client().await;
    let leads: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    let mut lead = leads.iter().find(|l| l.id == "lead-1").unwrap().clone();
    let before = lead.activity.len();

    lead.priority = Priority::Low;
    lead.deal_value = 600_000;

    let updated = client.update(lead).await.unwrap();
    assert_eq!(updated.activity.len(), before + 2);
    assert_eq!(updated.activity[0].details, "Priority changed from High to Low.");
    assert_eq!(
        updated.activity[1].details,
        "Deal value changed from 500000 to 600000."
    );
    assert!(updated.activity[..2]
        .iter()
        .all(|r| r.kind == ActivityKind::Edited && r.user == "Admin"));
}

#[tokio::test]
async fn test_update_skips_status_record_when_client_already_logged_one() {
    let (_backend, _session, client) = admin_client().await;
    let leads: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    let mut lead = leads.iter().find(|l| l.id == "lead-1").unwrap().clone();
    let before = lead.activity.len();

    // The drag path stamps the transition client-side before persisting.
    use funnel_core::Card;
    lead.transition(LeadStatus::Contacted, "Admin", jiff::Timestamp::now());

    let updated = client.update(lead).await.unwrap();
    let status_changes = updated
        .activity
        .iter()
        .filter(|r| r.kind == ActivityKind::StatusChange)
        .count();
    assert_eq!(status_changes, 1);
    assert_eq!(updated.activity.len(), before + 1);
}

#[tokio::test]
async fn test_update_without_client_record_still_audits_the_status() {
    let (_backend, _session, client) = admin_client().await;
    let leads: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    let mut lead = leads.iter().find(|l| l.id == "lead-1").unwrap().clone();

    // A plain edit that happens to change the status.
    lead.status = LeadStatus::Contacted;

    let updated = client.update(lead).await.unwrap();
    assert_eq!(updated.activity[0].kind, ActivityKind::StatusChange);
    assert_eq!(
        updated.activity[0].details,
        "Status changed from New to Contacted."
    );
}

#[tokio::test]
async fn test_delete_removes_and_further_deletes_fail() {
    let (_backend, _session, client) = admin_client().await;

    EntityApi::<Lead>::delete(&*client, "lead-5").await.unwrap();
    let all: Vec<Lead> = client.list(&admin_query()).await.unwrap();
    assert_eq!(all.len(), 7);
    assert!(all.iter().all(|l| l.id != "lead-5"));

    let err = EntityApi::<Lead>::delete(&*client, "lead-5")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_note_actor_comes_from_the_token() {
    let backend = InMemoryBackend::seeded();
    let session = backend.login("alice@funnelcrm.io").await.unwrap();
    let client = ApiClient::new(backend, &session);

    let lead = client.add_note("lead-1", "Met at the trade show.").await.unwrap();
    assert_eq!(lead.activity[0].kind, ActivityKind::NoteAdded);
    assert_eq!(lead.activity[0].details, "Met at the trade show.");
    assert_eq!(lead.activity[0].user, "Alice");
}

#[tokio::test]
async fn test_created_agents_get_a_default_avatar() {
    let (_backend, _session, client) = admin_client().await;

    let draft = funnel_core::params::CreateAgent {
        name: "Erin".to_string(),
        email: "erin@funnelcrm.io".to_string(),
        role: "Sales Associate".to_string(),
        avatar: None,
    }
    .into_draft()
    .unwrap();

    let agent = client.create(draft).await.unwrap();
    assert_eq!(agent.id, "agent-5");
    assert_eq!(agent.avatar, "https://i.pravatar.cc/150?u=Erin");
}

#[tokio::test]
async fn test_id_counters_survive_deletions() {
    let (_backend, _session, client) = admin_client().await;

    EntityApi::<Lead>::delete(&*client, "lead-8").await.unwrap();
    let draft = funnel_core::params::CreateLead {
        name: "Frank Castle".to_string(),
        company: "Hudson Freight".to_string(),
        assigned_to: "Bob".to_string(),
        ..Default::default()
    }
    .into_draft()
    .unwrap();

    let created = client.create(draft).await.unwrap();
    // lead-8 was deleted, but its id is never reused.
    assert_eq!(created.id, "lead-9");
}

#[tokio::test]
async fn test_clients_share_one_backend() {
    let backend = InMemoryBackend::seeded();
    let admin = backend.login("admin@funnelcrm.io").await.unwrap();
    let alice = backend.login("alice@funnelcrm.io").await.unwrap();
    let admin_client = ApiClient::new(Arc::clone(&backend), &admin);
    let alice_client = ApiClient::new(backend, &alice);

    let mut lead = EntityApi::<Lead>::list(&*admin_client, &admin_query())
        .await
        .unwrap()
        .iter()
        .find(|l| l.id == "lead-1")
        .cloned()
        .unwrap();
    lead.notes = Some("Escalated to senior team.".to_string());
    admin_client.update(lead).await.unwrap();

    let alice_query = ListQuery {
        role: Role::Agent,
        name: "Alice".to_string(),
    };
    let visible: Vec<Lead> = alice_client.list(&alice_query).await.unwrap();
    let lead = visible.iter().find(|l| l.id == "lead-1").unwrap();
    assert_eq!(lead.notes.as_deref(), Some("Escalated to senior team."));
    assert_eq!(lead.activity[0].details, "Notes were updated.");
}
