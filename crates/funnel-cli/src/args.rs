//! Command-line argument definitions using clap
//!
//! This module implements the parameter wrapper pattern: each mutating
//! command gets a clap-derived argument struct plus a conversion into the
//! corresponding core parameter type, so clap attributes never leak into
//! funnel-core and the mapping between the two layers is explicit.

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::Timestamp;

use funnel_core::models::{LeadStatus, OpportunityStage, Priority};
use funnel_core::params::{CreateAgent, CreateLead, CreateOpportunity, CreateTask};

/// Command-line interface for the Funnel CRM pipeline tool
///
/// Funnel manages kanban-style sales pipelines (leads, opportunities, tasks)
/// backed by a simulated in-memory REST service. Every invocation signs in
/// as a user, loads the role-filtered data, and renders boards as rich
/// Markdown in the terminal.
#[derive(Parser)]
#[command(version, about, name = "funnel")]
pub struct Args {
    /// Email address to sign in with
    #[arg(long, global = true, default_value = "admin@funnelcrm.io")]
    pub user: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands, one per pipeline plus the agent roster
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the leads pipeline
    #[command(alias = "l")]
    Lead {
        #[command(subcommand)]
        command: LeadCommands,
    },
    /// Manage the opportunities pipeline
    #[command(alias = "opp")]
    Opportunity {
        #[command(subcommand)]
        command: OpportunityCommands,
    },
    /// Manage follow-up tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage the agent roster
    #[command(alias = "a")]
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },
}

#[derive(Subcommand)]
pub enum LeadCommands {
    /// Render the leads board
    Board(BoardArgs),
    /// Show one lead with its activity history
    Show { id: String },
    /// Create a new lead
    Add(AddLeadArgs),
    /// Move a lead to another column or drop slot
    Move(MoveArgs),
    /// Attach a note to a lead
    Note { id: String, text: String },
    /// Edit lead fields
    Edit(EditLeadArgs),
    /// Delete a lead
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum OpportunityCommands {
    /// Render the opportunities board
    Board(BoardArgs),
    /// Show one opportunity with its activity history
    Show { id: String },
    /// Create a new opportunity
    Add(AddOpportunityArgs),
    /// Move an opportunity to another stage or drop slot
    Move(MoveArgs),
    /// Edit opportunity fields
    Edit(EditOpportunityArgs),
    /// Delete an opportunity
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Render the tasks board
    Board(BoardArgs),
    /// Create a new task
    Add(AddTaskArgs),
    /// Move a task to another column or drop slot
    Move(MoveArgs),
    /// Delete a task
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List all agents
    List,
    /// Add an agent to the roster
    Add(AddAgentArgs),
    /// Remove an agent from the roster
    Delete { id: String },
}

/// Board rendering options
#[derive(ClapArgs)]
pub struct BoardArgs {
    /// Only show cards matching this term (name/company/title)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// A drag gesture expressed as a command
#[derive(ClapArgs)]
pub struct MoveArgs {
    /// Id of the card being moved
    pub id: String,
    /// Drop target: a column name (e.g. "Qualified") or another card's id
    pub target: String,
}

#[derive(ClapArgs)]
pub struct AddLeadArgs {
    /// Contact name
    pub name: String,
    #[arg(short, long)]
    pub company: String,
    /// Deal value in dollars
    #[arg(short = 'v', long, default_value_t = 0)]
    pub deal_value: u64,
    #[arg(short, long, default_value = "medium")]
    pub priority: Priority,
    /// Where the lead came from
    #[arg(short, long)]
    pub source: Option<String>,
    /// Agent name the lead is assigned to
    #[arg(short, long)]
    pub assigned_to: String,
    /// Follow-up instant, RFC 3339 (e.g. 2026-09-15T09:00:00Z)
    #[arg(long)]
    pub follow_up: Option<Timestamp>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddLeadArgs> for CreateLead {
    fn from(val: AddLeadArgs) -> Self {
        CreateLead {
            name: val.name,
            company: val.company,
            deal_value: val.deal_value,
            priority: val.priority,
            source: val.source,
            assigned_to: val.assigned_to,
            follow_up: val.follow_up,
            notes: val.notes,
        }
    }
}

#[derive(ClapArgs)]
pub struct EditLeadArgs {
    /// Id of the lead to edit
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(short = 'v', long)]
    pub deal_value: Option<u64>,
    #[arg(long)]
    pub status: Option<LeadStatus>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub assigned_to: Option<String>,
    #[arg(long)]
    pub follow_up: Option<Timestamp>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(ClapArgs)]
pub struct AddOpportunityArgs {
    /// Deal name
    pub name: String,
    #[arg(short, long)]
    pub company: String,
    /// Deal value in dollars
    #[arg(short = 'v', long, default_value_t = 0)]
    pub deal_value: u64,
    /// Agent name the deal is assigned to
    #[arg(short, long)]
    pub assigned_to: String,
    /// Expected close instant, RFC 3339
    #[arg(long)]
    pub expected_close: Option<Timestamp>,
}

impl From<AddOpportunityArgs> for CreateOpportunity {
    fn from(val: AddOpportunityArgs) -> Self {
        CreateOpportunity {
            name: val.name,
            company: val.company,
            deal_value: val.deal_value,
            assigned_to: val.assigned_to,
            expected_close: val.expected_close,
        }
    }
}

#[derive(ClapArgs)]
pub struct EditOpportunityArgs {
    /// Id of the opportunity to edit
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(short = 'v', long)]
    pub deal_value: Option<u64>,
    #[arg(long)]
    pub stage: Option<OpportunityStage>,
    #[arg(long)]
    pub assigned_to: Option<String>,
    #[arg(long)]
    pub expected_close: Option<Timestamp>,
}

#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Short description of the task
    pub title: String,
    #[arg(long, default_value = "medium")]
    pub priority: Priority,
    /// Due instant, RFC 3339
    #[arg(long)]
    pub due: Option<Timestamp>,
    /// Agent name the task is assigned to
    #[arg(short, long)]
    pub assigned_to: String,
    /// Id of a related lead
    #[arg(long)]
    pub related_lead: Option<String>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            priority: val.priority,
            due: val.due,
            assigned_to: val.assigned_to,
            related_lead: val.related_lead,
        }
    }
}

#[derive(ClapArgs)]
pub struct AddAgentArgs {
    /// Agent name
    pub name: String,
    #[arg(short, long)]
    pub email: String,
    /// Job title shown on the roster
    #[arg(short, long, default_value = "Sales Executive")]
    pub role: String,
    /// Avatar URL; generated when omitted
    #[arg(long)]
    pub avatar: Option<String>,
}

impl From<AddAgentArgs> for CreateAgent {
    fn from(val: AddAgentArgs) -> Self {
        CreateAgent {
            name: val.name,
            email: val.email,
            role: val.role,
            avatar: val.avatar,
        }
    }
}
