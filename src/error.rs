// src/error.rs
//
// Every failure the pipeline and the front ends can surface.
// Fetch/parse/coerce errors are fatal for the load; lookup errors are shown
// to the user and the session keeps going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("No table found in page")]
    NoTable,

    #[error("Table has no header cells")]
    NoHeaders,

    #[error("Row {row} has {got} cells, expected {expected}")]
    RowShape { row: usize, got: usize, expected: usize },

    #[error("Column '{0}' missing from table")]
    MissingColumn(String),

    #[error("Cannot read '{raw}' as a number in column '{column}' (row {row})")]
    Coerce { column: String, row: usize, raw: String },

    #[error("No matching row for '{0}'")]
    NoMatchingRow(String),

    #[error("'{company}' matches {count} rows")]
    AmbiguousCompany { company: String, count: usize },

    #[error("Select two companies first")]
    NoPick,

    #[error("Constituents table is not loaded")]
    NotLoaded,

    #[error("Pick two different companies to compare ('{0}' chosen twice)")]
    SameCompany(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Lookup failures are recoverable: the UI reports them and moves on.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::NoMatchingRow(_)
                | Error::AmbiguousCompany { .. }
                | Error::SameCompany(_)
                | Error::NoPick
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_is_not_a_page_error() {
        assert_ne!(Error::NotLoaded.to_string(), Error::NoTable.to_string());
        assert!(!Error::NotLoaded.is_lookup());
        assert!(Error::NoPick.is_lookup());
    }
}
