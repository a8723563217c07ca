//! Teamdraw Core Library
//!
//! Merges a registration export with a grading sheet and draws balanced
//! teams: one committee member per team where possible, grades spread
//! round-robin, and every participant placed exactly once.

pub mod config;
pub mod draw;
pub mod error;
pub mod format;
pub mod logging;
pub mod participant;
pub mod pipeline;
pub mod roster;
pub mod table;
