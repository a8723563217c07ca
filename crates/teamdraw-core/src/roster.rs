//! Roster merge
//!
//! Every registrant becomes a participant with default committee/grade.
//! Grading entries only update participants that registered; unmatched
//! entries are dropped. Later grading entries win over earlier ones.

use std::collections::BTreeMap;

use tracing::debug;

use crate::participant::{full_name, parse_committee, sort_for_draw, Grade, Participant};

/// A registration row reduced to the name columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub first_name: String,
    pub surname: String,
}

/// A grading row as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingEntry {
    pub first_name: String,
    pub surname: String,
    pub committee: String,
    pub grade: String,
}

/// Merged participants keyed by full name, plus the grading header
#[derive(Debug, Clone, Default)]
pub struct Roster {
    header: Vec<String>,
    participants: BTreeMap<String, Participant>,
}

impl Roster {
    pub fn merge(
        registrants: &[Registrant],
        grading_header: Vec<String>,
        gradings: &[GradingEntry],
        default_grade: &Grade,
    ) -> Self {
        let mut participants = BTreeMap::new();
        for registrant in registrants {
            let participant =
                Participant::registrant(&registrant.first_name, &registrant.surname, default_grade);
            participants.insert(participant.full_name(), participant);
        }

        let mut matched = 0usize;
        for entry in gradings {
            let key = full_name(&entry.first_name, &entry.surname);
            if let Some(participant) = participants.get_mut(&key) {
                participant.committee = parse_committee(&entry.committee);
                participant.grade = Grade::parse(&entry.grade, default_grade);
                matched += 1;
            }
        }

        debug!(
            registrants = registrants.len(),
            participants = participants.len(),
            grading_rows = gradings.len(),
            matched,
            dropped = gradings.len() - matched,
            "roster_merged"
        );

        Self {
            header: grading_header,
            participants,
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// The grading source's header row, verbatim
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn get(&self, full_name: &str) -> Option<&Participant> {
        self.participants.get(full_name)
    }

    /// Participants in full-name order
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn committee_count(&self) -> usize {
        self.participants().filter(|p| p.committee).count()
    }

    /// Number of participants per grade, in grade order
    pub fn grade_counts(&self) -> BTreeMap<Grade, usize> {
        let mut counts = BTreeMap::new();
        for participant in self.participants() {
            *counts.entry(participant.grade.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Participants sorted for distribution
    pub fn draw_order(&self) -> Vec<Participant> {
        let mut participants: Vec<Participant> = self.participants().cloned().collect();
        sort_for_draw(&mut participants);
        participants
    }
}
