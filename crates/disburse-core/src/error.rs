use std::path::PathBuf;

use thiserror::Error;

use crate::board::Endpoint;
use crate::http_client::HttpError;

/// Validation and parse errors exposed by `disburse-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("card id '{value}' must start with 8 hex characters")]
    InvalidCardId { value: String },

    #[error("description line {line} has no ':' separator: '{text}'")]
    MalformedDescriptionLine { line: usize, text: String },

    #[error("action date must be RFC3339: '{value}'")]
    InvalidActionDate { value: String },

    #[error("date {value} cannot be shown in the configured utc offset")]
    UnrepresentableDate { value: String },

    #[error("utc offset must look like +HH:MM or UTC: '{value}'")]
    InvalidUtcOffset { value: String },

    #[error("api base must be an http(s) URL: '{value}'")]
    InvalidApiBase { value: String },
}

/// Failure of a single rate-limited GET.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("retry limit exceeded after {attempts} rate-limited attempts")]
    RetryLimitExceeded { attempts: u32 },
}

/// Failure of a board API call: either the fetch itself or its JSON body.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{endpoint} request failed: {source}")]
    Fetch {
        endpoint: Endpoint,
        #[source]
        source: FetchError,
    },

    #[error("failed to parse {endpoint} response (status {status}): {source}")]
    Json {
        endpoint: Endpoint,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Enrichment failure for one card.
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("{title} is missing an amount paid value")]
    MissingAmountPaid { title: String },

    #[error("{title} has a non-integer amount paid value '{value}'")]
    InvalidAmountPaid { title: String, value: String },
}

/// Top-level error type for an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("list {list} contains no cards")]
    NoCards { list: String },

    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("card '{title}' ({id}): {source}")]
    Card {
        id: String,
        title: String,
        #[source]
        source: CardError,
    },
}
