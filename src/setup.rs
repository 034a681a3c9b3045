//! Initial-configuration parsing
//!
//! A session is configured by a single line in `[Title] [Rows] [SeatsPerRow]`
//! format, e.g. `Inception 8 10`.  This module validates that line and
//! produces a [`Setup`]; the core assumes valid dimensions and is never
//! constructed from a line that fails here.

use std::fmt;

/// Largest supported row count ('A' through 'Z' row labels).
pub const MAX_ROWS: usize = 26;
/// Largest supported seats-per-row count (two-digit seat codes).
pub const MAX_SEATS_PER_ROW: usize = 50;

/// Validated initial configuration for one screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub title: String,
    pub rows: usize,
    pub seats_per_row: usize,
}

/// Rejection reasons for a setup line.
///
/// All of these are fatal to session startup; they are reported to the user
/// and the process exits before any booking state exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The line did not split into exactly three fields
    WrongFieldCount { got: usize },

    /// Rows or seats-per-row did not parse as an integer
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    /// Row count outside 1..=26
    RowsOutOfRange { rows: usize },

    /// Seats-per-row outside 1..=50
    SeatsOutOfRange { seats: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::WrongFieldCount { got } => {
                write!(
                    f,
                    "expected format: [Title] [Rows] [SeatsPerRow], got {} field{}",
                    got,
                    if *got == 1 { "" } else { "s" }
                )
            }
            SetupError::InvalidNumber { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            SetupError::RowsOutOfRange { rows } => {
                write!(f, "rows must be between 1 and {}, got {}", MAX_ROWS, rows)
            }
            SetupError::SeatsOutOfRange { seats } => {
                write!(
                    f,
                    "seats per row must be between 1 and {}, got {}",
                    MAX_SEATS_PER_ROW, seats
                )
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Parse and validate a `[Title] [Rows] [SeatsPerRow]` line.
///
/// The title is a single whitespace-free token; it cannot be empty because
/// `split_whitespace` never yields empty fields.
pub fn parse_setup_line(line: &str) -> Result<Setup, SetupError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(SetupError::WrongFieldCount { got: parts.len() });
    }

    let rows: usize = parts[1].parse().map_err(|_| SetupError::InvalidNumber {
        field: "rows",
        value: parts[1].to_string(),
    })?;
    let seats_per_row: usize = parts[2].parse().map_err(|_| SetupError::InvalidNumber {
        field: "seats per row",
        value: parts[2].to_string(),
    })?;

    if rows == 0 || rows > MAX_ROWS {
        return Err(SetupError::RowsOutOfRange { rows });
    }
    if seats_per_row == 0 || seats_per_row > MAX_SEATS_PER_ROW {
        return Err(SetupError::SeatsOutOfRange {
            seats: seats_per_row,
        });
    }

    Ok(Setup {
        title: parts[0].to_string(),
        rows,
        seats_per_row,
    })
}
