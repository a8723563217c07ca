//! End-to-end draw: read, merge, sort, size, distribute, write

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::config::{resolve_path, DrawConfig};
use crate::draw::{select_team_count, Distributor, Team};
use crate::error::Result;
use crate::roster::Roster;
use crate::table;
use crate::trace_time;

/// Resolved locations and settings for one draw
#[derive(Debug, Clone)]
pub struct DrawPlan {
    pub registrations: PathBuf,
    pub grading: PathBuf,
    pub teams: PathBuf,
    pub grading_output: PathBuf,
    pub config: DrawConfig,
}

impl DrawPlan {
    /// Resolve the configured file locations against `root`
    pub fn from_config(root: &Path, config: DrawConfig) -> Self {
        Self {
            registrations: resolve_path(root, &config.files.registrations),
            grading: resolve_path(root, &config.files.grading),
            teams: resolve_path(root, &config.files.teams),
            grading_output: resolve_path(root, config.grading_output()),
            config,
        }
    }
}

/// Result of a draw
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub roster: Roster,
    pub teams: Vec<Team>,
    /// Files written, in write order; empty on a dry run
    pub written: Vec<PathBuf>,
}

impl DrawOutcome {
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

/// Run a draw; with `write` unset nothing is written to disk
pub fn run_draw(plan: &DrawPlan, write: bool) -> Result<DrawOutcome> {
    let start = Instant::now();
    let config = &plan.config;

    let registrants = table::read_registrations(&plan.registrations, &config.registrations)?;
    let sheet = table::read_grading(&plan.grading)?;
    trace_time!(start, "read_sources");

    let roster = Roster::merge(
        &registrants,
        sheet.header,
        &sheet.entries,
        &config.default_grade(),
    );

    let team_count = select_team_count(roster.len(), &config.sizing);
    info!(
        participants = roster.len(),
        committee = roster.committee_count(),
        team_count,
        "roster_ready"
    );

    let teams = match NonZeroUsize::new(team_count) {
        Some(count) => {
            let distributor =
                Distributor::new(config.sizing.members_per_team, config.grade_order());
            distributor.distribute(roster.draw_order(), count)
        }
        None => {
            debug!("empty roster, no teams drawn");
            Vec::new()
        }
    };
    trace_time!(start, "distribute", teams = teams.len());

    let mut written = Vec::new();
    if write {
        table::write_teams(&plan.teams, &teams)?;
        written.push(plan.teams.clone());
        table::write_grading(&plan.grading_output, &roster)?;
        written.push(plan.grading_output.clone());
        trace_time!(start, "write_outputs");
    }

    Ok(DrawOutcome {
        roster,
        teams,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const REGISTRATIONS: &str = "Order,Date,Email,First Name,Last Name\n\
        1,d,e,Jane,Doe\n\
        2,d,e,John,Smith\n\
        3,d,e,Amy,Lee\n";

    const GRADING: &str = "First,Last,Committee,Grade\n\
        Jane,Doe,true,A\n\
        Ghost,Person,true,a\n";

    fn plan_in(dir: &Path) -> DrawPlan {
        fs::write(dir.join("eventbrite.csv"), REGISTRATIONS).unwrap();
        fs::write(dir.join("spikersgrading.csv"), GRADING).unwrap();
        DrawPlan::from_config(dir, DrawConfig::default())
    }

    #[test]
    fn test_from_config_resolves_paths() {
        let plan = DrawPlan::from_config(Path::new("/event"), DrawConfig::default());
        assert_eq!(plan.registrations, PathBuf::from("/event/eventbrite.csv"));
        assert_eq!(plan.grading_output, PathBuf::from("/event/spikersgrading.csv"));
        assert_eq!(plan.teams, PathBuf::from("/event/teams.csv"));
    }

    #[test]
    fn test_run_draw_writes_both_files() {
        let dir = tempdir().unwrap();
        let plan = plan_in(dir.path());

        let outcome = run_draw(&plan, true).unwrap();

        assert_eq!(outcome.team_count(), 1);
        assert_eq!(outcome.roster.len(), 3);
        assert_eq!(outcome.written, vec![plan.teams.clone(), plan.grading_output.clone()]);

        let teams = fs::read_to_string(&plan.teams).unwrap();
        assert_eq!(
            teams,
            "Team 1\nJane,Doe,true,a\nAmy,Lee,false,c\nJohn,Smith,false,c\n"
        );

        let grading = fs::read_to_string(&plan.grading_output).unwrap();
        assert_eq!(
            grading,
            "First,Last,Committee,Grade\nAmy,Lee,false,C\nJane,Doe,true,A\nJohn,Smith,false,C\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = tempdir().unwrap();
        let plan = plan_in(dir.path());

        let outcome = run_draw(&plan, false).unwrap();

        assert!(outcome.written.is_empty());
        assert!(!plan.teams.exists());
        assert_eq!(fs::read_to_string(&plan.grading).unwrap(), GRADING);
    }

    #[test]
    fn test_empty_roster_writes_header_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("eventbrite.csv"), "header\n").unwrap();
        fs::write(dir.path().join("spikersgrading.csv"), GRADING).unwrap();
        let plan = DrawPlan::from_config(dir.path(), DrawConfig::default());

        let outcome = run_draw(&plan, true).unwrap();

        assert_eq!(outcome.team_count(), 0);
        assert_eq!(fs::read_to_string(&plan.teams).unwrap(), "");
        assert_eq!(
            fs::read_to_string(&plan.grading_output).unwrap(),
            "First,Last,Committee,Grade\n"
        );
    }

    #[test]
    fn test_malformed_registration_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("eventbrite.csv"), "a,b,c,d,e\n1,2,3\n").unwrap();
        fs::write(dir.path().join("spikersgrading.csv"), GRADING).unwrap();
        let plan = DrawPlan::from_config(dir.path(), DrawConfig::default());

        assert!(run_draw(&plan, true).is_err());
        assert!(!plan.teams.exists());
        assert_eq!(fs::read_to_string(&plan.grading).unwrap(), GRADING);
    }
}
