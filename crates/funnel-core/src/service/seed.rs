//! Seed data for the in-memory backend.
//!
//! A small, deterministic dataset covering every board column and both
//! access roles, so a freshly started process has something to render and
//! tests have known fixtures. Seeded activity ids use the
//! `act-{entity}-{seq}` shape to stay clear of generated ids.

use jiff::Timestamp;

use crate::models::{
    ActivityKind, ActivityRecord, Agent, Lead, LeadStatus, Opportunity, OpportunityStage,
    Priority, Role, Task, TaskStatus, User,
};

/// Initial backend contents.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub leads: Vec<Lead>,
    pub opportunities: Vec<Opportunity>,
    pub tasks: Vec<Task>,
    pub agents: Vec<Agent>,
}

fn ts(s: &str) -> Timestamp {
    // Seed literals are fixed and well-formed.
    s.parse().expect("invalid seed timestamp")
}

fn record(id: &str, kind: ActivityKind, user: &str, at: &str, details: &str) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        kind,
        user: user.to_string(),
        timestamp: ts(at),
        details: details.to_string(),
    }
}

fn created(id: &str, user: &str, at: &str, what: &str) -> ActivityRecord {
    record(id, ActivityKind::Created, user, at, what)
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    company: &str,
    deal_value: u64,
    status: LeadStatus,
    priority: Priority,
    assigned_to: &str,
    activity: Vec<ActivityRecord>,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        deal_value,
        status,
        priority,
        source: None,
        assigned_to: assigned_to.to_string(),
        avatar: format!("https://picsum.photos/seed/{id}/40/40"),
        follow_up: None,
        notes: None,
        activity,
    }
}

fn opportunity(
    id: &str,
    name: &str,
    company: &str,
    deal_value: u64,
    stage: OpportunityStage,
    assigned_to: &str,
    activity: Vec<ActivityRecord>,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        deal_value,
        stage,
        probability: stage.probability(),
        expected_close: None,
        assigned_to: assigned_to.to_string(),
        avatar: format!("https://picsum.photos/seed/{id}/40/40"),
        activity,
    }
}

fn agent(id: &str, name: &str, email: &str, role: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: format!("https://i.pravatar.cc/150?u={name}"),
        role: role.to_string(),
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let agents = vec![
            agent("agent-1", "Alice", "alice@funnelcrm.io", "Sales Executive"),
            agent("agent-2", "Bob", "bob@funnelcrm.io", "Sales Executive"),
            agent(
                "agent-3",
                "Charlie",
                "charlie@funnelcrm.io",
                "Senior Sales Executive",
            ),
            agent("agent-4", "Diana", "diana@funnelcrm.io", "Sales Associate"),
        ];

        let mut users = vec![User {
            id: "admin-1".to_string(),
            name: "Admin".to_string(),
            email: "admin@funnelcrm.io".to_string(),
            avatar: "https://i.pravatar.cc/150?u=Admin".to_string(),
            role: Role::Admin,
        }];
        users.extend(agents.iter().map(|a| User {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
            avatar: a.avatar.clone(),
            role: Role::Agent,
        }));

        let leads = vec![
            lead(
                "lead-1",
                "John Doe",
                "Acme Inc.",
                500_000,
                LeadStatus::New,
                Priority::High,
                "Alice",
                vec![created(
                    "act-1-1",
                    "Admin",
                    "2023-10-01T10:00:00Z",
                    "Lead was created.",
                )],
            ),
            lead(
                "lead-2",
                "Jane Smith",
                "Globex Corp.",
                1_200_000,
                LeadStatus::Contacted,
                Priority::Medium,
                "Bob",
                vec![
                    record(
                        "act-2-2",
                        ActivityKind::StatusChange,
                        "Bob",
                        "2023-09-29T15:00:00Z",
                        "Status changed from New to Contacted.",
                    ),
                    created("act-2-1", "Admin", "2023-09-28T11:30:00Z", "Lead was created."),
                ],
            ),
            lead(
                "lead-3",
                "Peter Jones",
                "Stark Industries",
                750_000,
                LeadStatus::Qualified,
                Priority::High,
                "Alice",
                vec![
                    record(
                        "act-3-2",
                        ActivityKind::StatusChange,
                        "Alice",
                        "2023-09-30T10:00:00Z",
                        "Status changed from Contacted to Qualified.",
                    ),
                    created("act-3-1", "Admin", "2023-09-25T09:00:00Z", "Lead was created."),
                ],
            ),
            lead(
                "lead-4",
                "Mary Williams",
                "Wayne Enterprises",
                2_500_000,
                LeadStatus::Qualified,
                Priority::Low,
                "Charlie",
                vec![created(
                    "act-4-1",
                    "Admin",
                    "2023-09-20T16:00:00Z",
                    "Lead was created.",
                )],
            ),
            lead(
                "lead-5",
                "David Brown",
                "Cyberdyne Systems",
                1_500_000,
                LeadStatus::ClosedWon,
                Priority::Medium,
                "Bob",
                vec![
                    record(
                        "act-5-2",
                        ActivityKind::StatusChange,
                        "Bob",
                        "2023-09-01T18:00:00Z",
                        "Status changed from Qualified to Closed Won.",
                    ),
                    created("act-5-1", "Admin", "2023-08-15T12:00:00Z", "Lead was created."),
                ],
            ),
            lead(
                "lead-6",
                "Susan Miller",
                "Ollivanders",
                300_000,
                LeadStatus::ClosedLost,
                Priority::Low,
                "Alice",
                vec![created(
                    "act-6-1",
                    "Admin",
                    "2023-09-18T13:45:00Z",
                    "Lead was created.",
                )],
            ),
            lead(
                "lead-7",
                "Michael Clark",
                "Buy n Large",
                900_000,
                LeadStatus::New,
                Priority::High,
                "Charlie",
                vec![created(
                    "act-7-1",
                    "Admin",
                    "2023-10-02T09:30:00Z",
                    "Lead was created.",
                )],
            ),
            lead(
                "lead-8",
                "Linda Martinez",
                "Gekko & Co",
                1_800_000,
                LeadStatus::Contacted,
                Priority::Medium,
                "Diana",
                vec![created(
                    "act-8-1",
                    "Admin",
                    "2023-09-30T14:00:00Z",
                    "Lead was created.",
                )],
            ),
        ];

        let opportunities = vec![
            opportunity(
                "opp-1",
                "Acme Expansion",
                "Acme Inc.",
                2_000_000,
                OpportunityStage::Prospecting,
                "Alice",
                vec![created(
                    "act-o1-1",
                    "Admin",
                    "2023-10-02T10:00:00Z",
                    "Opportunity was created.",
                )],
            ),
            opportunity(
                "opp-2",
                "Globex Renewal",
                "Globex Corp.",
                950_000,
                OpportunityStage::Qualification,
                "Bob",
                vec![created(
                    "act-o2-1",
                    "Admin",
                    "2023-10-03T11:00:00Z",
                    "Opportunity was created.",
                )],
            ),
            opportunity(
                "opp-3",
                "Stark Retrofit",
                "Stark Industries",
                4_200_000,
                OpportunityStage::Proposal,
                "Alice",
                vec![created(
                    "act-o3-1",
                    "Admin",
                    "2023-09-21T09:00:00Z",
                    "Opportunity was created.",
                )],
            ),
            opportunity(
                "opp-4",
                "Wayne Rollout",
                "Wayne Enterprises",
                3_100_000,
                OpportunityStage::Negotiation,
                "Charlie",
                vec![created(
                    "act-o4-1",
                    "Admin",
                    "2023-09-12T15:30:00Z",
                    "Opportunity was created.",
                )],
            ),
        ];

        let tasks = vec![
            Task {
                id: "task-1".to_string(),
                title: "Call John Doe about premium package".to_string(),
                status: TaskStatus::ToDo,
                priority: Priority::High,
                due: Some(ts("2023-10-15T09:00:00Z")),
                assigned_to: "Alice".to_string(),
                related_lead: Some("lead-1".to_string()),
            },
            Task {
                id: "task-2".to_string(),
                title: "Prepare Globex renewal quote".to_string(),
                status: TaskStatus::InProgress,
                priority: Priority::Medium,
                due: Some(ts("2023-10-12T17:00:00Z")),
                assigned_to: "Bob".to_string(),
                related_lead: Some("lead-2".to_string()),
            },
            Task {
                id: "task-3".to_string(),
                title: "Archive Q3 pipeline report".to_string(),
                status: TaskStatus::Done,
                priority: Priority::Low,
                due: None,
                assigned_to: "Diana".to_string(),
                related_lead: None,
            },
        ];

        Self {
            users,
            leads,
            opportunities,
            tasks,
            agents,
        }
    }
}

impl SeedData {
    /// An empty dataset with only the user directory, for tests that want to
    /// build their own fixtures.
    pub fn users_only() -> Self {
        let mut seed = Self::default();
        seed.leads.clear();
        seed.opportunities.clear();
        seed.tasks.clear();
        seed.agents.clear();
        seed
    }
}
