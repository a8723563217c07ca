//! Participant and grade types
//!
//! A participant is keyed by its full name (`"<first> <surname>"`). Grades
//! are short letter codes compared as ordered text after normalization, so
//! `"A"` and `" a"` are the same grade and `"a" < "b" < "c"`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grade assigned to participants with no grading record
pub const DEFAULT_GRADE: &str = "c";

/// A normalized (trimmed, lowercase) grade code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    /// Normalize a grade cell, falling back to `default` for blank cells
    pub fn parse(text: &str, default: &Grade) -> Grade {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            default.clone()
        } else {
            Grade(normalized)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased code, as written back to the grading sheet
    pub fn as_upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl Default for Grade {
    fn default() -> Self {
        Grade(DEFAULT_GRADE.to_string())
    }
}

impl From<&str> for Grade {
    fn from(text: &str) -> Self {
        Grade(text.trim().to_lowercase())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub surname: String,
    pub committee: bool,
    pub grade: Grade,
}

impl Participant {
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        committee: bool,
        grade: Grade,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            committee,
            grade,
        }
    }

    /// A freshly registered participant: not on the committee, default grade
    pub fn registrant(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        default_grade: &Grade,
    ) -> Self {
        Self::new(first_name, surname, false, default_grade.clone())
    }

    /// Merge key shared by the registration and grading sources
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.surname)
    }

    pub fn is_grade(&self, grade: &Grade) -> bool {
        &self.grade == grade
    }
}

pub fn full_name(first_name: &str, surname: &str) -> String {
    format!("{} {}", first_name, surname)
}

/// Parse a committee cell: case-insensitive `true`, anything else is false
pub fn parse_committee(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

/// Order used to feed the distributor: grade ascending, committee first
fn draw_order(a: &Participant, b: &Participant) -> Ordering {
    a.grade
        .cmp(&b.grade)
        .then_with(|| b.committee.cmp(&a.committee))
}

/// Stable sort into draw order; equal participants keep their input order
pub fn sort_for_draw(participants: &mut [Participant]) {
    participants.sort_by(draw_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, committee: bool, grade: &str) -> Participant {
        Participant::new(name, "Test", committee, Grade::from(grade))
    }

    #[test]
    fn test_grade_parse_normalizes_case_and_whitespace() {
        let default = Grade::default();
        assert_eq!(Grade::parse("A", &default).as_str(), "a");
        assert_eq!(Grade::parse("  b ", &default).as_str(), "b");
    }

    #[test]
    fn test_grade_parse_blank_uses_default() {
        let default = Grade::from("c");
        assert_eq!(Grade::parse("", &default), default);
        assert_eq!(Grade::parse("   ", &default), default);
    }

    #[test]
    fn test_grade_ordering_is_textual() {
        assert!(Grade::from("a") < Grade::from("b"));
        assert!(Grade::from("b") < Grade::from("c"));
        assert_eq!(Grade::from("a").as_upper(), "A");
    }

    #[test]
    fn test_parse_committee() {
        assert!(parse_committee("true"));
        assert!(parse_committee("TRUE"));
        assert!(parse_committee(" True "));
        assert!(!parse_committee("false"));
        assert!(!parse_committee("yes"));
        assert!(!parse_committee(""));
    }

    #[test]
    fn test_full_name() {
        let p = Participant::registrant("Jane", "Doe", &Grade::default());
        assert_eq!(p.full_name(), "Jane Doe");
        assert!(!p.committee);
        assert_eq!(p.grade.as_str(), "c");
    }

    #[test]
    fn test_sort_for_draw_grade_then_committee_first() {
        let mut roster = vec![
            person("c1", false, "c"),
            person("a1", false, "a"),
            person("c2", true, "c"),
            person("b1", false, "b"),
            person("a2", true, "a"),
        ];
        sort_for_draw(&mut roster);

        let order: Vec<&str> = roster.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(order, vec!["a2", "a1", "b1", "c2", "c1"]);
    }

    #[test]
    fn test_sort_for_draw_is_stable_for_ties() {
        let mut roster = vec![
            person("first", false, "b"),
            person("second", false, "b"),
            person("third", false, "b"),
        ];
        sort_for_draw(&mut roster);

        let order: Vec<&str> = roster.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
