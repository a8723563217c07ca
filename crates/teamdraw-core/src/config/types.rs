//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::draw::TeamSizing;

/// Draw configuration, loaded from `teamdraw.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Team capacity and team-count thresholds
    #[serde(default)]
    pub sizing: TeamSizing,

    /// Grade priority and fallback grade
    #[serde(default)]
    pub grades: GradeConfig,

    /// Input and output file locations
    #[serde(default)]
    pub files: FileConfig,

    /// Column layout of the registration export
    #[serde(default)]
    pub registrations: RegistrationColumns,
}

/// Grade handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeConfig {
    /// Grades in fill priority order
    #[serde(default = "default_grade_order")]
    pub order: Vec<String>,

    /// Grade given to registrants without a grading record
    #[serde(default = "default_grade")]
    pub default: String,
}

/// File locations, relative paths resolve against the root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Registration export (first row is a header)
    #[serde(default = "default_registrations_file")]
    pub registrations: PathBuf,

    /// Prior grading sheet (first row is a header, preserved on output)
    #[serde(default = "default_grading_file")]
    pub grading: PathBuf,

    /// Where the drawn teams are written
    #[serde(default = "default_teams_file")]
    pub teams: PathBuf,

    /// Where the updated grading sheet is written (defaults to `grading`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_output: Option<PathBuf>,
}

/// Zero-based name columns in the registration export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationColumns {
    #[serde(default = "default_first_name_column")]
    pub first_name_column: usize,

    #[serde(default = "default_surname_column")]
    pub surname_column: usize,
}

impl RegistrationColumns {
    /// Shortest row that still carries both name columns
    pub fn min_columns(&self) -> usize {
        self.first_name_column.max(self.surname_column) + 1
    }
}

fn default_grade_order() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

fn default_grade() -> String {
    crate::participant::DEFAULT_GRADE.to_string()
}

fn default_registrations_file() -> PathBuf {
    PathBuf::from("eventbrite.csv")
}

fn default_grading_file() -> PathBuf {
    PathBuf::from("spikersgrading.csv")
}

fn default_teams_file() -> PathBuf {
    PathBuf::from("teams.csv")
}

fn default_first_name_column() -> usize {
    3
}

fn default_surname_column() -> usize {
    4
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            order: default_grade_order(),
            default: default_grade(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            registrations: default_registrations_file(),
            grading: default_grading_file(),
            teams: default_teams_file(),
            grading_output: None,
        }
    }
}

impl Default for RegistrationColumns {
    fn default() -> Self {
        Self {
            first_name_column: default_first_name_column(),
            surname_column: default_surname_column(),
        }
    }
}
