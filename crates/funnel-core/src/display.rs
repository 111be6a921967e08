//! Display wrapper types for terminal output.
//!
//! Presentation stays out of the domain models: boards, detail views, and
//! audit trails are formatted through wrapper types that emit Markdown, which
//! the CLI feeds to its terminal renderer. The same data can appear as a
//! one-line card on a board or a full detail view depending on the wrapper.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::board::ColumnId;
use crate::models::{
    ActivityRecord, Agent, Lead, LeadStatus, Opportunity, OpportunityStage, Task, TaskStatus,
};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Currency amount with thousands separators, e.g. `$1,250,000`.
pub struct Money(pub u64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        write!(f, "${out}")
    }
}

fn fmt_activity(f: &mut fmt::Formatter<'_>, activity: &[ActivityRecord]) -> fmt::Result {
    writeln!(f, "\n## Activity")?;
    writeln!(f)?;
    for record in activity {
        write!(f, "{record}")?;
    }
    Ok(())
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {} — {} ({})",
            self.kind.as_str(),
            self.details,
            self.user,
            LocalDateTime(&self.timestamp)
        )
    }
}

/// Full detail view of a lead, including the audit trail.
impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Company: {}", self.company)?;
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Priority: {}", self.priority.as_str())?;
        writeln!(f, "- Deal value: {}", Money(self.deal_value))?;
        writeln!(f, "- Assigned to: {}", self.assigned_to)?;
        if let Some(source) = &self.source {
            writeln!(f, "- Source: {source}")?;
        }
        if let Some(follow_up) = &self.follow_up {
            writeln!(f, "- Follow-up: {}", LocalDateTime(follow_up))?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        fmt_activity(f, &self.activity)
    }
}

/// Full detail view of an opportunity, including the audit trail.
impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Company: {}", self.company)?;
        writeln!(f, "- Stage: {}", self.stage.as_str())?;
        writeln!(f, "- Probability: {}%", self.probability)?;
        writeln!(f, "- Deal value: {}", Money(self.deal_value))?;
        writeln!(f, "- Assigned to: {}", self.assigned_to)?;
        if let Some(close) = &self.expected_close {
            writeln!(f, "- Expected close: {}", LocalDateTime(close))?;
        }
        fmt_activity(f, &self.activity)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Priority: {}", self.priority.as_str())?;
        if let Some(due) = &self.due {
            writeln!(f, "- Due: {}", LocalDateTime(due))?;
        }
        writeln!(f, "- Assigned to: {}", self.assigned_to)?;
        if let Some(lead) = &self.related_lead {
            writeln!(f, "- Related lead: {lead}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} ({}) — {}, {}",
            self.name, self.id, self.role, self.email
        )
    }
}

/// The agent roster as a Markdown list.
pub struct AgentList<'a>(pub &'a [Agent]);

impl fmt::Display for AgentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No agents found.");
        }
        writeln!(f, "# Agents")?;
        writeln!(f)?;
        for agent in self.0 {
            write!(f, "{agent}")?;
        }
        Ok(())
    }
}

fn fmt_column_header(
    f: &mut fmt::Formatter<'_>,
    column: &impl ColumnId,
    count: usize,
) -> fmt::Result {
    writeln!(f, "## {} ({count})", column.as_str())?;
    writeln!(f)
}

/// The leads board: one section per status column, cards in board order.
pub struct LeadBoard<'a>(pub &'a [(LeadStatus, Vec<Lead>)]);

impl fmt::Display for LeadBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Leads")?;
        writeln!(f)?;
        for (column, cards) in self.0 {
            fmt_column_header(f, column, cards.len())?;
            for lead in cards {
                writeln!(
                    f,
                    "- **{}** ({}) — {}, {}, {} priority",
                    lead.name,
                    lead.id,
                    lead.company,
                    Money(lead.deal_value),
                    lead.priority.as_str(),
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The opportunities board: one section per stage column.
pub struct OpportunityBoard<'a>(pub &'a [(OpportunityStage, Vec<Opportunity>)]);

impl fmt::Display for OpportunityBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Opportunities")?;
        writeln!(f)?;
        for (column, cards) in self.0 {
            fmt_column_header(f, column, cards.len())?;
            for opp in cards {
                writeln!(
                    f,
                    "- **{}** ({}) — {}, {}, {}%",
                    opp.name,
                    opp.id,
                    opp.company,
                    Money(opp.deal_value),
                    opp.probability,
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The tasks board: one section per status column.
pub struct TaskBoard<'a>(pub &'a [(TaskStatus, Vec<Task>)]);

impl fmt::Display for TaskBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Tasks")?;
        writeln!(f)?;
        for (column, cards) in self.0 {
            fmt_column_header(f, column, cards.len())?;
            for task in cards {
                write!(f, "- **{}** ({})", task.title, task.id)?;
                if let Some(due) = &task.due {
                    write!(f, " — due {}", LocalDateTime(due))?;
                }
                writeln!(f, " — {}", task.assigned_to)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_groups_thousands() {
        assert_eq!(Money(0).to_string(), "$0");
        assert_eq!(Money(950).to_string(), "$950");
        assert_eq!(Money(1_000).to_string(), "$1,000");
        assert_eq!(Money(2_500_000).to_string(), "$2,500,000");
    }

    #[test]
    fn test_lead_board_renders_every_column_header() {
        let groups: Vec<(LeadStatus, Vec<Lead>)> = LeadStatus::COLUMNS
            .iter()
            .map(|&c| (c, Vec::new()))
            .collect();
        let out = LeadBoard(&groups).to_string();
        for column in LeadStatus::COLUMNS {
            assert!(out.contains(&format!("## {} (0)", column.as_str())));
        }
    }
}
