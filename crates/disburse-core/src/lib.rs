//! # Disburse Core
//!
//! Exports the "payment completed" list of the disbursement board as CSV.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`board`] | Board API client (list cards, custom fields, card actions) |
//! | [`config`] | Export configuration and credentials |
//! | [`domain`] | Card model, description parsing, id timestamp decoding |
//! | [`enrich`] | `Card::inflate`, the per-card enrichment steps |
//! | [`error`] | Core error types |
//! | [`export`] | CSV export pipeline |
//! | [`fetcher`] | GET with bounded retries on rate limiting |
//! | [`http_client`] | HTTP client abstraction |
//! | [`retry`] | Retry and backoff policy |
//!
//! ## Flow
//!
//! ```text
//! list cards ──▶ for each card: parse description
//!                               ──▶ custom field items  (amount paid)
//!                               ──▶ card actions        (fund transfer date)
//!                               ──▶ id prefix           (request date)
//!                               ──▶ CSV row
//! ```
//!
//! Every request goes through [`RateLimitedFetcher`], which waits `2^attempt` seconds
//! after each `429` and gives up after ten attempts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use disburse_core::{export_csv, ApiCredentials, ExportConfig, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExportConfig::new(ApiCredentials::new("key", "token"));
//!     let summary = export_csv(&config, Arc::new(ReqwestHttpClient::new())).await?;
//!     println!("{} rows", summary.rows_written);
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod http_client;
pub mod retry;

pub use board::{BoardClient, Endpoint};

pub use config::{
    ApiCredentials, ExportConfig, API_KEY_ENV, COMPLETED_LIST_ID, DEFAULT_API_BASE,
    DEFAULT_OUTPUT_PATH, TOKEN_ENV,
};

pub use domain::{
    decode_timestamp, last_move_into, parse_utc_offset, ApplicantDetails, Card, CardAction,
    CardActionData, CardId, CustomFieldItem, DisplayClock, ListRef,
};

pub use error::{BoardError, CardError, ExportError, FetchError, ValidationError};

pub use export::{export_csv, write_cards, ExportSummary};

pub use fetcher::RateLimitedFetcher;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use retry::{Backoff, RetryConfig};
