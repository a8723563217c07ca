//! Team drawing: how many teams, and who goes where

pub mod distribute;
pub mod sizing;
pub mod team;

pub use distribute::Distributor;
pub use sizing::{select_team_count, TeamSizing};
pub use team::Team;
