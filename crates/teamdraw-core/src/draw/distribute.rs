//! Team distribution
//!
//! Three phases over an already-sorted roster:
//!
//! 1. Committee seeding: each team, in order, takes the first remaining
//!    committee member. Teams after the supply runs out get none.
//! 2. Grade fill: for each grade in priority order, sweep the teams
//!    round-robin, giving every team under capacity the first remaining
//!    participant of that grade, until a sweep places nobody.
//! 3. Overflow rotation: whatever is left goes round-robin from team 1,
//!    ignoring capacity and grade.
//!
//! Each phase takes the *first* match, so the input order fully determines
//! the outcome.

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use super::team::Team;
use crate::participant::{Grade, Participant};

/// Splits a sorted roster into a fixed number of teams
#[derive(Debug, Clone)]
pub struct Distributor {
    members_per_team: usize,
    grade_order: Vec<Grade>,
}

impl Distributor {
    pub fn new(members_per_team: usize, grade_order: Vec<Grade>) -> Self {
        Self {
            members_per_team,
            grade_order,
        }
    }

    /// Place every participant of `roster` into exactly one of `team_count` teams
    pub fn distribute(&self, roster: Vec<Participant>, team_count: NonZeroUsize) -> Vec<Team> {
        let mut teams: Vec<Team> = (1..=team_count.get()).map(Team::new).collect();
        let mut remaining = roster;

        let seeded = self.seed_committee(&mut teams, &mut remaining);
        debug!(seeded, remaining = remaining.len(), "committee_seeded");

        let filled = self.fill_by_grade(&mut teams, &mut remaining);
        debug!(filled, remaining = remaining.len(), "grades_filled");

        let overflow = remaining.len();
        rotate_overflow(&mut teams, remaining);
        debug!(overflow, "overflow_rotated");

        teams
    }

    fn seed_committee(&self, teams: &mut [Team], remaining: &mut Vec<Participant>) -> usize {
        let mut seeded = 0;
        for team in teams.iter_mut() {
            match take_first(remaining, |p| p.committee) {
                Some(member) => {
                    trace!(team = team.index, name = %member.full_name(), "seed_committee");
                    team.push(member);
                    seeded += 1;
                }
                None => break,
            }
        }
        seeded
    }

    fn fill_by_grade(&self, teams: &mut [Team], remaining: &mut Vec<Participant>) -> usize {
        let mut filled = 0;
        for grade in &self.grade_order {
            while !remaining.is_empty() {
                let mut placed_this_sweep = false;
                for team in teams.iter_mut() {
                    if team.len() >= self.members_per_team {
                        continue;
                    }
                    if let Some(member) = take_first(remaining, |p| p.is_grade(grade)) {
                        trace!(team = team.index, grade = %grade, name = %member.full_name(), "fill");
                        team.push(member);
                        placed_this_sweep = true;
                        filled += 1;
                    }
                    if remaining.is_empty() {
                        break;
                    }
                }
                if !placed_this_sweep {
                    break;
                }
            }
        }
        filled
    }
}

/// Round-robin the leftovers from the first team, capacity ignored
fn rotate_overflow(teams: &mut [Team], remaining: Vec<Participant>) {
    let team_count = teams.len();
    for (i, member) in remaining.into_iter().enumerate() {
        teams[i % team_count].push(member);
    }
}

/// Remove and return the first participant matching `predicate`
fn take_first<F>(remaining: &mut Vec<Participant>, predicate: F) -> Option<Participant>
where
    F: Fn(&Participant) -> bool,
{
    let position = remaining.iter().position(predicate)?;
    Some(remaining.remove(position))
}
