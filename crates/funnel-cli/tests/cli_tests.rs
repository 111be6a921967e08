use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn funnel_cmd() -> Command {
    let mut cmd = Command::cargo_bin("funnel").expect("Failed to find funnel binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_lead_board_renders_seeded_columns() {
    funnel_cmd()
        .args(["lead", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Leads"))
        .stdout(predicate::str::contains("## New (2)"))
        .stdout(predicate::str::contains("## Contacted (2)"))
        .stdout(predicate::str::contains("## Qualified (2)"))
        .stdout(predicate::str::contains("## Closed Won (1)"))
        .stdout(predicate::str::contains("## Closed Lost (1)"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("$1,200,000"));
}

#[test]
fn test_cli_lead_move_to_column() {
    funnel_cmd()
        .args(["lead", "move", "lead-1", "Qualified"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved lead to Qualified."))
        .stdout(predicate::str::contains("## New (1)"))
        .stdout(predicate::str::contains("## Qualified (3)"));
}

#[test]
fn test_cli_lead_move_unknown_id_fails() {
    funnel_cmd()
        .args(["lead", "move", "lead-99", "Qualified"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such lead: lead-99"));
}

#[test]
fn test_cli_lead_add_prints_the_created_lead() {
    funnel_cmd()
        .args([
            "lead",
            "add",
            "Eve Adams",
            "--company",
            "Initech",
            "--assigned-to",
            "Alice",
            "-v",
            "50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Eve Adams (lead-9)"))
        .stdout(predicate::str::contains("Lead was created."));
}

#[test]
fn test_cli_lead_add_rejects_empty_name() {
    funnel_cmd()
        .args([
            "lead",
            "add",
            "  ",
            "--company",
            "Initech",
            "--assigned-to",
            "Alice",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'name'"));
}

#[test]
fn test_cli_lead_note_shows_verbatim_text() {
    funnel_cmd()
        .args(["lead", "note", "lead-1", "Call back Thursday."])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Note Added] Call back Thursday."))
        .stdout(predicate::str::contains("Admin"));
}

#[test]
fn test_cli_lead_show_includes_activity() {
    funnel_cmd()
        .args(["lead", "show", "lead-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Jane Smith (lead-2)"))
        .stdout(predicate::str::contains(
            "Status changed from New to Contacted.",
        ));
}

#[test]
fn test_cli_agent_sees_only_their_own_leads() {
    funnel_cmd()
        .args(["--user", "alice@funnelcrm.io", "lead", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Peter Jones"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn test_cli_unknown_user_cannot_sign_in() {
    funnel_cmd()
        .args(["--user", "nobody@funnelcrm.io", "lead", "board"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to sign in"));
}

#[test]
fn test_cli_lead_board_search_filter() {
    funnel_cmd()
        .args(["lead", "board", "--search", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn test_cli_opportunity_move_updates_probability() {
    funnel_cmd()
        .args(["opp", "move", "opp-1", "Negotiation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved opportunity to Negotiation."))
        .stdout(predicate::str::contains("## Negotiation (2)"))
        .stdout(predicate::str::contains("Acme Expansion"));
}

#[test]
fn test_cli_opportunity_show_probability_after_edit() {
    funnel_cmd()
        .args(["opp", "edit", "opp-1", "--stage", "negotiation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Stage: Negotiation"))
        .stdout(predicate::str::contains("- Probability: 80%"));
}

#[test]
fn test_cli_task_board_renders_columns() {
    funnel_cmd()
        .args(["task", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## To Do (1)"))
        .stdout(predicate::str::contains("## In Progress (1)"))
        .stdout(predicate::str::contains("## Done (1)"));
}

#[test]
fn test_cli_agent_list() {
    funnel_cmd()
        .args(["agent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Agents"))
        .stdout(predicate::str::contains("Alice (agent-1)"))
        .stdout(predicate::str::contains("diana@funnelcrm.io"));
}

#[test]
fn test_cli_lead_delete() {
    funnel_cmd()
        .args(["lead", "delete", "lead-6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted lead lead-6."));
}
