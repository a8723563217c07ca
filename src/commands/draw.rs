//! `teamdraw draw` command - draw teams and write the results
//!
//! Also what runs when no subcommand is given.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::debug;

use crate::cli::DrawArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use teamdraw_core::config::resolve_path;
use teamdraw_core::draw::Team;
use teamdraw_core::error::Result;
use teamdraw_core::format::escape_quotes;
use teamdraw_core::participant::Participant;
use teamdraw_core::pipeline::{run_draw, DrawOutcome, DrawPlan};

/// Execute the draw command
pub fn execute(ctx: &CommandContext, args: &DrawArgs) -> Result<()> {
    let (config, source) = ctx.load_config()?;
    debug!(config = ?source, "config_loaded");

    let plan = apply_overrides(DrawPlan::from_config(ctx.root(), config), ctx, args);
    let outcome = run_draw(&plan, !args.dry_run)?;
    debug!(elapsed = ?ctx.start.elapsed(), teams = outcome.team_count(), "draw_complete");

    output_by_format_result!(ctx.cli.format,
        json => output_json(&outcome, args.dry_run),
        human => {
            if !ctx.cli.quiet {
                output_human(&outcome, args.dry_run);
            }
        },
        records => {
            output_records(&outcome, args.dry_run);
        }
    )
}

fn apply_overrides(mut plan: DrawPlan, ctx: &CommandContext, args: &DrawArgs) -> DrawPlan {
    let root = ctx.root();
    if let Some(path) = &args.registrations {
        plan.registrations = resolve_path(root, path);
    }
    if let Some(path) = &args.grading {
        plan.grading = resolve_path(root, path);
        // the grading sheet is updated in place unless told otherwise
        if plan.config.files.grading_output.is_none() {
            plan.grading_output = plan.grading.clone();
        }
    }
    if let Some(path) = &args.teams_out {
        plan.teams = resolve_path(root, path);
    }
    if let Some(path) = &args.grading_out {
        plan.grading_output = resolve_path(root, path);
    }
    plan
}

fn member_line(member: &Participant) -> String {
    if member.committee {
        format!("{} {} [{}, committee]", member.first_name, member.surname, member.grade)
    } else {
        format!("{} {} [{}]", member.first_name, member.surname, member.grade)
    }
}

fn output_human(outcome: &DrawOutcome, dry_run: bool) {
    println!(
        "Drew {} participants into {} teams",
        outcome.roster.len(),
        outcome.team_count()
    );
    for team in &outcome.teams {
        let members: Vec<String> = team.members.iter().map(member_line).collect();
        println!("{} ({}): {}", team.label(), team.len(), members.join(", "));
    }

    if dry_run {
        println!();
        println!("Dry run: no files written");
    } else if !outcome.written.is_empty() {
        println!();
        for path in &outcome.written {
            println!("Wrote {}", path.display());
        }
    }
}

fn team_json(team: &Team) -> serde_json::Value {
    json!({
        "team": team.index,
        "label": team.label(),
        "committee": team.committee_count(),
        "members": team.members.iter().map(|m| json!({
            "first_name": m.first_name,
            "surname": m.surname,
            "committee": m.committee,
            "grade": m.grade.as_str(),
        })).collect::<Vec<_>>(),
    })
}

/// Participants per grade, keyed by the grade code
fn grade_counts(outcome: &DrawOutcome) -> BTreeMap<String, usize> {
    outcome
        .roster
        .grade_counts()
        .into_iter()
        .map(|(grade, count)| (grade.to_string(), count))
        .collect()
}

fn output_json(outcome: &DrawOutcome, dry_run: bool) -> Result<()> {
    let output = json!({
        "status": "ok",
        "dry_run": dry_run,
        "participants": outcome.roster.len(),
        "committee": outcome.roster.committee_count(),
        "grades": grade_counts(outcome),
        "team_count": outcome.team_count(),
        "teams": outcome.teams.iter().map(team_json).collect::<Vec<_>>(),
        "written": outcome
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(outcome: &DrawOutcome, dry_run: bool) {
    println!(
        "H teamdraw=1 records=1 mode=draw participants={} teams={} dry_run={}",
        outcome.roster.len(),
        outcome.team_count(),
        dry_run
    );
    let grades: Vec<String> = grade_counts(outcome)
        .iter()
        .map(|(grade, count)| format!("{}={}", grade, count))
        .collect();
    if !grades.is_empty() {
        println!("G {}", grades.join(" "));
    }
    for team in &outcome.teams {
        println!(
            "T {} members={} committee={}",
            team.index,
            team.len(),
            team.committee_count()
        );
        for member in &team.members {
            println!(
                "M {} \"{}\" \"{}\" committee={} grade={}",
                team.index,
                escape_quotes(&member.first_name),
                escape_quotes(&member.surname),
                member.committee,
                member.grade
            );
        }
    }
    for path in &outcome.written {
        println!("W {}", path.display());
    }
}
