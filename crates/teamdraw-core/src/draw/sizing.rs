//! Team-count selection
//!
//! Large rosters get a fixed number of teams, medium rosters a smaller fixed
//! number, and anything below that is split into as few teams as capacity
//! allows. The thresholds are not monotonic in team size: 24-29 people on
//! four teams makes bigger teams than 30 people on six.

use serde::{Deserialize, Serialize};

/// Sizing parameters for the team-count policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSizing {
    /// Capacity of a team before overflow rotation
    #[serde(default = "default_members_per_team")]
    pub members_per_team: usize,

    /// Roster size at which `large_roster_teams` is used
    #[serde(default = "default_large_roster_threshold")]
    pub large_roster_threshold: usize,

    #[serde(default = "default_large_roster_teams")]
    pub large_roster_teams: usize,

    /// Roster size at which `medium_roster_teams` is used
    #[serde(default = "default_medium_roster_threshold")]
    pub medium_roster_threshold: usize,

    #[serde(default = "default_medium_roster_teams")]
    pub medium_roster_teams: usize,
}

fn default_members_per_team() -> usize {
    5
}

fn default_large_roster_threshold() -> usize {
    30
}

fn default_large_roster_teams() -> usize {
    6
}

fn default_medium_roster_threshold() -> usize {
    24
}

fn default_medium_roster_teams() -> usize {
    4
}

impl Default for TeamSizing {
    fn default() -> Self {
        Self {
            members_per_team: default_members_per_team(),
            large_roster_threshold: default_large_roster_threshold(),
            large_roster_teams: default_large_roster_teams(),
            medium_roster_threshold: default_medium_roster_threshold(),
            medium_roster_teams: default_medium_roster_teams(),
        }
    }
}

/// Number of teams to draw for a roster of `roster_size` participants
pub fn select_team_count(roster_size: usize, sizing: &TeamSizing) -> usize {
    if roster_size >= sizing.large_roster_threshold {
        sizing.large_roster_teams
    } else if roster_size >= sizing.medium_roster_threshold {
        sizing.medium_roster_teams
    } else {
        roster_size.div_ceil(sizing.members_per_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let sizing = TeamSizing::default();
        assert_eq!(select_team_count(29, &sizing), 4);
        assert_eq!(select_team_count(30, &sizing), 6);
        assert_eq!(select_team_count(24, &sizing), 4);
        assert_eq!(select_team_count(100, &sizing), 6);
    }

    #[test]
    fn test_small_rosters_round_up() {
        let sizing = TeamSizing::default();
        assert_eq!(select_team_count(10, &sizing), 2);
        assert_eq!(select_team_count(11, &sizing), 3);
        assert_eq!(select_team_count(23, &sizing), 5);
        assert_eq!(select_team_count(1, &sizing), 1);
        assert_eq!(select_team_count(0, &sizing), 0);
    }

    #[test]
    fn test_custom_capacity() {
        let sizing = TeamSizing {
            members_per_team: 3,
            ..TeamSizing::default()
        };
        assert_eq!(select_team_count(7, &sizing), 3);
        assert_eq!(select_team_count(9, &sizing), 3);
    }
}
