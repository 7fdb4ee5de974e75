//! Textual process records: `pid, arrival, burst, priority`.

use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Process;

const FIELDS: [&str; 4] = ["pid", "arrival time", "burst time", "priority"];

/// The reasons a process record cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseProcessError {
    /// The record stops before this field.
    MissingField(&'static str),

    /// The record has more than four fields.
    TrailingField(String),

    /// A numeric field does not hold a valid number.
    InvalidNumber { field: &'static str, value: String },

    /// A record of a process table failed to parse.
    Line {
        /// 1-based line number.
        line: usize,
        error: Box<ParseProcessError>,
    },
}

impl Display for ParseProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseProcessError::MissingField(field) => write!(f, "missing {}", field),
            ParseProcessError::TrailingField(value) => {
                write!(f, "unexpected field \"{}\" after priority", value)
            }
            ParseProcessError::InvalidNumber { field, value } => {
                write!(f, "{} \"{}\" is not a valid number", field, value)
            }
            ParseProcessError::Line { line, error } => write!(f, "line {}: {}", line, error),
        }
    }
}

impl Error for ParseProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseProcessError::Line { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}

fn number<T: FromStr>(field: &'static str, value: Option<&str>) -> Result<T, ParseProcessError> {
    let value = value.ok_or(ParseProcessError::MissingField(field))?;
    value.parse().map_err(|_| ParseProcessError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

impl FromStr for Process {
    type Err = ParseProcessError;

    /// Fields may be separated by commas, whitespace or both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());

        let pid = fields
            .next()
            .ok_or(ParseProcessError::MissingField(FIELDS[0]))?;
        let arrival_time = number(FIELDS[1], fields.next())?;
        let burst_time = number(FIELDS[2], fields.next())?;
        let priority = number(FIELDS[3], fields.next())?;

        if let Some(extra) = fields.next() {
            return Err(ParseProcessError::TrailingField(extra.to_owned()));
        }

        Ok(Process::new(pid, arrival_time, burst_time, priority))
    }
}

/// Reads a process table, one record per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_process_table(text: &str) -> Result<Vec<Process>, ParseProcessError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, record)| {
            record.parse::<Process>().map_err(|error| ParseProcessError::Line {
                line,
                error: Box::new(error),
            })
        })
        .collect()
}
