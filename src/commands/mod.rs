//! CLI commands for teamdraw

pub mod config;
pub mod dispatch;
pub mod draw;
