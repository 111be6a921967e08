//! Command handlers wiring the stores to the terminal.
//!
//! Each handler builds the relevant store for the signed-in user, performs
//! the operation, and renders the result as Markdown. Store-level failures
//! (rollbacks) surface through the terminal notifier; handler-level failures
//! (unknown ids, invalid input) abort the command with a nonzero exit.

use std::sync::Arc;

use anyhow::{bail, Result};
use funnel_core::display::{AgentList, LeadBoard, OpportunityBoard, TaskBoard};
use funnel_core::models::{Agent, Lead, Opportunity, Task};
use funnel_core::params::{CreateAgent, CreateLead, CreateOpportunity, CreateTask};
use funnel_core::service::{ApiClient, AuthSession, InMemoryBackend};
use funnel_core::store::{BoardStore, Notifier, RosterStore, ToastLevel};
use funnel_core::{LeadStatus, OpportunityStage, TaskStatus};

use crate::args::{
    AgentCommands, BoardArgs, LeadCommands, MoveArgs, OpportunityCommands, TaskCommands,
};
use crate::renderer::TerminalRenderer;

/// Prints store notifications as terminal lines.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Error => eprintln!("error: {message}"),
            ToastLevel::Success | ToastLevel::Info => println!("{message}"),
        }
    }
}

pub struct Cli {
    session: AuthSession,
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(backend: Arc<InMemoryBackend>, session: AuthSession, renderer: TerminalRenderer) -> Self {
        let client = ApiClient::new(backend, &session);
        Self {
            session,
            client,
            notifier: Arc::new(TermNotifier),
            renderer,
        }
    }

    async fn lead_store(&self) -> Result<BoardStore<Lead, ApiClient>> {
        let mut store = BoardStore::new(
            Arc::clone(&self.client),
            Arc::clone(&self.notifier),
            "lead",
            &self.session,
            LeadStatus::COLUMNS.to_vec(),
        );
        store.refresh().await?;
        Ok(store)
    }

    async fn opportunity_store(&self) -> Result<BoardStore<Opportunity, ApiClient>> {
        let mut store = BoardStore::new(
            Arc::clone(&self.client),
            Arc::clone(&self.notifier),
            "opportunity",
            &self.session,
            OpportunityStage::COLUMNS.to_vec(),
        );
        store.refresh().await?;
        Ok(store)
    }

    async fn task_store(&self) -> Result<BoardStore<Task, ApiClient>> {
        let mut store = BoardStore::new(
            Arc::clone(&self.client),
            Arc::clone(&self.notifier),
            "task",
            &self.session,
            TaskStatus::COLUMNS.to_vec(),
        );
        store.refresh().await?;
        Ok(store)
    }

    pub async fn handle_lead_command(&self, command: LeadCommands) -> Result<()> {
        let mut store = self.lead_store().await?;
        match command {
            LeadCommands::Board(BoardArgs { search }) => {
                store.set_search_term(search.unwrap_or_default());
                self.renderer.render(&LeadBoard(&store.board()).to_string())
            }
            LeadCommands::Show { id } => {
                let Some(lead) = store.find(&id) else {
                    bail!("No such lead: {id}");
                };
                self.renderer.render(&lead.to_string())
            }
            LeadCommands::Add(args) => {
                let draft = CreateLead::from(args).into_draft()?;
                store.add(draft).await?;
                match store.cards().first() {
                    Some(lead) => self.renderer.render(&lead.to_string()),
                    None => Ok(()),
                }
            }
            LeadCommands::Move(MoveArgs { id, target }) => {
                if store.find(&id).is_none() {
                    bail!("No such lead: {id}");
                }
                store.handle_drag_end(&id, Some(&target)).await?;
                self.renderer.render(&LeadBoard(&store.board()).to_string())
            }
            LeadCommands::Note { id, text } => {
                if store.find(&id).is_none() {
                    bail!("No such lead: {id}");
                }
                store.add_note(&id, &text).await?;
                match store.find(&id) {
                    Some(lead) => self.renderer.render(&lead.to_string()),
                    None => Ok(()),
                }
            }
            LeadCommands::Edit(args) => {
                let Some(lead) = store.find(&args.id) else {
                    bail!("No such lead: {}", args.id);
                };
                let mut updated = lead.clone();
                if let Some(name) = args.name {
                    updated.name = name;
                }
                if let Some(company) = args.company {
                    updated.company = company;
                }
                if let Some(value) = args.deal_value {
                    updated.deal_value = value;
                }
                if let Some(status) = args.status {
                    updated.status = status;
                }
                if let Some(priority) = args.priority {
                    updated.priority = priority;
                }
                if let Some(source) = args.source {
                    updated.source = Some(source);
                }
                if let Some(assigned_to) = args.assigned_to {
                    updated.assigned_to = assigned_to;
                }
                if let Some(follow_up) = args.follow_up {
                    updated.follow_up = Some(follow_up);
                }
                if let Some(notes) = args.notes {
                    updated.notes = Some(notes);
                }
                let id = updated.id.clone();
                store.edit(updated).await?;
                match store.find(&id) {
                    Some(lead) => self.renderer.render(&lead.to_string()),
                    None => Ok(()),
                }
            }
            LeadCommands::Delete { id } => {
                if store.find(&id).is_none() {
                    bail!("No such lead: {id}");
                }
                store.delete(&id).await?;
                Ok(())
            }
        }
    }

    pub async fn handle_opportunity_command(&self, command: OpportunityCommands) -> Result<()> {
        let mut store = self.opportunity_store().await?;
        match command {
            OpportunityCommands::Board(BoardArgs { search }) => {
                store.set_search_term(search.unwrap_or_default());
                self.renderer
                    .render(&OpportunityBoard(&store.board()).to_string())
            }
            OpportunityCommands::Show { id } => {
                let Some(opp) = store.find(&id) else {
                    bail!("No such opportunity: {id}");
                };
                self.renderer.render(&opp.to_string())
            }
            OpportunityCommands::Add(args) => {
                let draft = CreateOpportunity::from(args).into_draft()?;
                store.add(draft).await?;
                match store.cards().first() {
                    Some(opp) => self.renderer.render(&opp.to_string()),
                    None => Ok(()),
                }
            }
            OpportunityCommands::Move(MoveArgs { id, target }) => {
                if store.find(&id).is_none() {
                    bail!("No such opportunity: {id}");
                }
                store.handle_drag_end(&id, Some(&target)).await?;
                self.renderer
                    .render(&OpportunityBoard(&store.board()).to_string())
            }
            OpportunityCommands::Edit(args) => {
                let Some(opp) = store.find(&args.id) else {
                    bail!("No such opportunity: {}", args.id);
                };
                let mut updated = opp.clone();
                if let Some(name) = args.name {
                    updated.name = name;
                }
                if let Some(company) = args.company {
                    updated.company = company;
                }
                if let Some(value) = args.deal_value {
                    updated.deal_value = value;
                }
                if let Some(stage) = args.stage {
                    updated.stage = stage;
                    updated.probability = stage.probability();
                }
                if let Some(assigned_to) = args.assigned_to {
                    updated.assigned_to = assigned_to;
                }
                if let Some(close) = args.expected_close {
                    updated.expected_close = Some(close);
                }
                let id = updated.id.clone();
                store.edit(updated).await?;
                match store.find(&id) {
                    Some(opp) => self.renderer.render(&opp.to_string()),
                    None => Ok(()),
                }
            }
            OpportunityCommands::Delete { id } => {
                if store.find(&id).is_none() {
                    bail!("No such opportunity: {id}");
                }
                store.delete(&id).await?;
                Ok(())
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let mut store = self.task_store().await?;
        match command {
            TaskCommands::Board(BoardArgs { search }) => {
                store.set_search_term(search.unwrap_or_default());
                self.renderer.render(&TaskBoard(&store.board()).to_string())
            }
            TaskCommands::Add(args) => {
                let draft = CreateTask::from(args).into_draft()?;
                store.add(draft).await?;
                match store.cards().first() {
                    Some(task) => self.renderer.render(&task.to_string()),
                    None => Ok(()),
                }
            }
            TaskCommands::Move(MoveArgs { id, target }) => {
                if store.find(&id).is_none() {
                    bail!("No such task: {id}");
                }
                store.handle_drag_end(&id, Some(&target)).await?;
                self.renderer.render(&TaskBoard(&store.board()).to_string())
            }
            TaskCommands::Delete { id } => {
                if store.find(&id).is_none() {
                    bail!("No such task: {id}");
                }
                store.delete(&id).await?;
                Ok(())
            }
        }
    }

    pub async fn handle_agent_command(&self, command: AgentCommands) -> Result<()> {
        let mut store: RosterStore<Agent, ApiClient> = RosterStore::new(
            Arc::clone(&self.client),
            Arc::clone(&self.notifier),
            "agent",
            &self.session,
        );
        store.refresh().await?;
        match command {
            AgentCommands::List => self.renderer.render(&AgentList(store.items()).to_string()),
            AgentCommands::Add(args) => {
                let draft = CreateAgent::from(args).into_draft()?;
                store.add(draft).await?;
                self.renderer.render(&AgentList(store.items()).to_string())
            }
            AgentCommands::Delete { id } => {
                if store.find(&id).is_none() {
                    bail!("No such agent: {id}");
                }
                store.delete(&id).await?;
                Ok(())
            }
        }
    }
}
