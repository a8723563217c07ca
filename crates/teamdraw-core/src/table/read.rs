use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::RegistrationColumns;
use crate::error::{Result, TeamdrawError};
use crate::roster::{GradingEntry, Registrant};

/// Columns a grading row must carry: first, surname, committee, grade
pub const GRADING_COLUMNS: usize = 4;

/// One parsed row, with the source line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    pub fields: Vec<String>,
}

impl Row {
    fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or_default()
    }

    fn require(&self, path: &Path, columns: usize) -> Result<()> {
        if self.fields.len() < columns {
            return Err(TeamdrawError::malformed(
                path,
                self.line,
                columns,
                self.fields.len(),
            ));
        }
        Ok(())
    }
}

/// The grading sheet: its header row verbatim plus the data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingSheet {
    pub header: Vec<String>,
    pub entries: Vec<GradingEntry>,
}

/// Drop whitespace at the start of every field, before any quote is parsed
///
/// The csv reader only honours a quote that opens a field, so ` "Doe, Jr"`
/// must lose its space first. Quoted sections pass through untouched. Lines
/// starting with `#` are blanked; a `#` after leading whitespace is data.
/// Newlines are kept so line numbers still line up.
fn trim_leading_space(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut field_start = true;
    let mut line_start = true;
    let mut in_quotes = false;
    let mut in_comment = false;
    let mut closed_quote = false;

    for c in input.chars() {
        if in_comment {
            if c == '\n' {
                out.push(c);
                in_comment = false;
                field_start = true;
                line_start = true;
            }
            continue;
        }
        if in_quotes {
            out.push(c);
            if c == '"' {
                in_quotes = false;
                closed_quote = true;
            }
            continue;
        }
        if field_start && c != '\n' && c != '\r' && c.is_whitespace() {
            line_start = false;
            continue;
        }

        match c {
            '#' if line_start => {
                in_comment = true;
                continue;
            }
            // `""` inside a quoted field reopens the quote
            '"' if field_start || closed_quote => in_quotes = true,
            _ => {}
        }
        closed_quote = false;
        field_start = c == ',' || c == '\n';
        line_start = c == '\n';
        out.push(c);
    }
    out
}

/// Read every row of a comma-separated file
///
/// Lines starting with `#` are comments; leading whitespace of each field
/// is dropped. Rows may differ in width.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file_error = |source| TeamdrawError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(|e| file_error(csv::Error::from(e)))?;
    let content = trim_leading_space(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(file_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields = record.iter().map(str::to_string).collect();
        rows.push(Row { line, fields });
    }

    debug!(path = %path.display(), rows = rows.len(), "read_rows");
    Ok(rows)
}

/// Split off the header row, failing when the file has none
fn split_header(path: &Path, mut rows: Vec<Row>) -> Result<(Row, Vec<Row>)> {
    if rows.is_empty() {
        return Err(TeamdrawError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let header = rows.remove(0);
    Ok((header, rows))
}

/// Read the registration export; the header row is discarded
pub fn read_registrations(path: &Path, columns: &RegistrationColumns) -> Result<Vec<Registrant>> {
    let (_, rows) = split_header(path, read_rows(path)?)?;
    let min_columns = columns.min_columns();

    rows.iter()
        .map(|row| -> Result<Registrant> {
            row.require(path, min_columns)?;
            Ok(Registrant {
                first_name: row.field(columns.first_name_column).to_string(),
                surname: row.field(columns.surname_column).to_string(),
            })
        })
        .collect()
}

/// Read the grading sheet, keeping its header for the rewrite
pub fn read_grading(path: &Path) -> Result<GradingSheet> {
    let (header, rows) = split_header(path, read_rows(path)?)?;

    let entries = rows
        .iter()
        .map(|row| -> Result<GradingEntry> {
            row.require(path, GRADING_COLUMNS)?;
            Ok(GradingEntry {
                first_name: row.field(0).to_string(),
                surname: row.field(1).to_string(),
                committee: row.field(2).to_string(),
                grade: row.field(3).to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GradingSheet {
        header: header.fields,
        entries,
    })
}
