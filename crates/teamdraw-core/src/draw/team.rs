use serde::Serialize;

use crate::participant::Participant;

/// A team in the draw, identified only by its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub index: usize,
    pub members: Vec<Participant>,
}

impl Team {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Label row written above the members, e.g. `Team 3`
    pub fn label(&self) -> String {
        format!("Team {}", self.index)
    }

    pub fn committee_count(&self) -> usize {
        self.members.iter().filter(|p| p.committee).count()
    }

    pub(crate) fn push(&mut self, participant: Participant) {
        self.members.push(participant);
    }
}
