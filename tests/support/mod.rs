use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

pub const REGISTRATION_HEADER: &str = "Order #,Order Date,Email,First Name,Last Name";
pub const GRADING_HEADER: &str = "First Name,Surname,Committee,Grade";

/// Get a Command for teamdraw
pub fn teamdraw() -> Command {
    cargo_bin_cmd!("teamdraw")
}

/// teamdraw running inside `dir`, isolated from any user-level config
pub fn teamdraw_in(dir: &TempDir) -> Command {
    let mut cmd = teamdraw();
    cmd.current_dir(dir.path())
        .env("TEAMDRAW_CONFIG_DIR", dir.path().join(".no-global-config"))
        .env_remove("TEAMDRAW_LOG");
    cmd
}

/// Write `eventbrite.csv` with one row per (first, last) name
pub fn write_registrations(dir: &TempDir, names: &[(&str, &str)]) {
    let mut content = format!("{}\n", REGISTRATION_HEADER);
    for (i, (first, last)) in names.iter().enumerate() {
        content.push_str(&format!(
            "{},2024-05-01,p{}@example.com,{},{}\n",
            1000 + i,
            i,
            first,
            last
        ));
    }
    fs::write(dir.path().join("eventbrite.csv"), content).unwrap();
}

/// Write `spikersgrading.csv` with (first, last, committee, grade) rows
pub fn write_grading(dir: &TempDir, rows: &[(&str, &str, &str, &str)]) {
    let mut content = format!("{}\n", GRADING_HEADER);
    for (first, last, committee, grade) in rows {
        content.push_str(&format!("{},{},{},{}\n", first, last, committee, grade));
    }
    fs::write(dir.path().join("spikersgrading.csv"), content).unwrap();
}

/// Read a file from the test directory
pub fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

/// A 24-person event: 8 per grade, two committee members per grade
pub fn write_full_event(dir: &TempDir) {
    let names: Vec<(String, String)> = (0..24)
        .map(|i| (format!("Player{:02}", i), format!("Surname{:02}", i)))
        .collect();
    let name_refs: Vec<(&str, &str)> = names
        .iter()
        .map(|(f, l)| (f.as_str(), l.as_str()))
        .collect();
    write_registrations(dir, &name_refs);

    let grades = ["A", "B", "C"];
    let rows: Vec<(&str, &str, &str, &str)> = name_refs
        .iter()
        .enumerate()
        .map(|(i, (f, l))| {
            let committee = if i % 8 < 2 { "true" } else { "false" };
            (*f, *l, committee, grades[i / 8])
        })
        .collect();
    write_grading(dir, &rows);
}

/// Member rows of a teams file, grouped under their labels
pub fn parse_teams(content: &str) -> Vec<(String, Vec<String>)> {
    let mut teams: Vec<(String, Vec<String>)> = Vec::new();
    for line in content.lines() {
        if line.starts_with("Team ") {
            teams.push((line.to_string(), Vec::new()));
        } else if let Some((_, members)) = teams.last_mut() {
            members.push(line.to_string());
        }
    }
    teams
}
