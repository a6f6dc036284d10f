//! Единый тип ошибок публичного API.

use thiserror::Error;

/// Какой из балансов выписки не удалось определить.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSide {
    Start,
    End,
}

impl std::fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceSide::Start => f.write_str("start"),
            BalanceSide::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CamtError {
    #[error("XML error: {0}")]
    Xml(String),

    #[error("Unexpected document structure: expected tag '{expected}', got '{actual}'")]
    Structure { expected: String, actual: String },

    #[error("Statement #{statement}: no balance satisfies the {side} balance precedence")]
    MissingBalance { statement: usize, side: BalanceSide },

    #[error("Statement #{}{}: missing required field {}", .statement, entry_suffix(.entry), .field)]
    MissingField {
        statement: usize,
        entry: Option<usize>,
        field: &'static str,
    },

    #[error("Statement #{}{}: invalid amount '{}'", .statement, entry_suffix(.entry), .value)]
    InvalidAmount {
        statement: usize,
        entry: Option<usize>,
        value: String,
    },

    #[error("Statement #{statement}, entry #{entry}: invalid date '{value}'")]
    InvalidDate {
        statement: usize,
        entry: usize,
        value: String,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn entry_suffix(entry: &Option<usize>) -> String {
    entry.map(|e| format!(", entry #{e}")).unwrap_or_default()
}

impl From<quick_xml::Error> for CamtError {
    fn from(e: quick_xml::Error) -> Self {
        CamtError::Xml(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CamtError>;
