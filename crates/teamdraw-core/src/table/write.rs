use std::path::Path;

use tracing::debug;

use crate::draw::Team;
use crate::error::{Result, TeamdrawError};
use crate::roster::Roster;

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|source| TeamdrawError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

fn finish(path: &Path, mut writer: csv::Writer<std::fs::File>) -> Result<()> {
    writer.flush().map_err(|e| TeamdrawError::FileWrite {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Write each team as a `Team <N>` label row followed by its members
pub fn write_teams(path: &Path, teams: &[Team]) -> Result<()> {
    let mut writer = open_writer(path)?;
    let write_error = |source| TeamdrawError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    for team in teams {
        writer.write_record([team.label()]).map_err(write_error)?;
        for member in &team.members {
            writer
                .write_record([
                    member.first_name.as_str(),
                    member.surname.as_str(),
                    if member.committee { "true" } else { "false" },
                    member.grade.as_str(),
                ])
                .map_err(write_error)?;
        }
    }

    finish(path, writer)?;
    debug!(path = %path.display(), teams = teams.len(), "write_teams");
    Ok(())
}

/// Write the grading header then every participant, grades upper-cased
pub fn write_grading(path: &Path, roster: &Roster) -> Result<()> {
    let mut writer = open_writer(path)?;
    let write_error = |source| TeamdrawError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(roster.header()).map_err(write_error)?;
    for participant in roster.participants() {
        writer
            .write_record([
                participant.first_name.clone(),
                participant.surname.clone(),
                participant.committee.to_string(),
                participant.grade.as_upper(),
            ])
            .map_err(write_error)?;
    }

    finish(path, writer)?;
    debug!(path = %path.display(), participants = roster.len(), "write_grading");
    Ok(())
}
