//! Error types for RFP Assist.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Checklist error: {0}")]
    Checklist(#[from] ChecklistError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Answer bank error: {0}")]
    Bank(#[from] BankError),
}

/// Checklist board errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("No checklist item with id {id}")]
    NotFound { id: String },

    #[error("Duplicate checklist item id {id}")]
    DuplicateId { id: String },
}

/// Query submission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("A question is already awaiting its answer")]
    AnswerPending,
}

/// Answer bank construction errors.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Answer bank needs at least one answer")]
    Empty,

    #[error("Invalid keyword pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {pattern:?} points at answer {index}, but the bank holds {len}")]
    AnswerOutOfRange {
        pattern: String,
        index: usize,
        len: usize,
    },
}
