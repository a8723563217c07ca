//! Comma-separated input and output
//!
//! Readers: the registration export and the grading sheet.
//! Writers: the drawn teams and the updated grading sheet.

pub mod read;
pub mod write;

pub use read::{read_grading, read_registrations, read_rows, GradingSheet, Row};
pub use write::{write_grading, write_teams};
