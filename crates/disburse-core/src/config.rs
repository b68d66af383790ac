//! Export configuration, built once at startup and passed by reference.

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use crate::domain::DisplayClock;
use crate::http_client::HttpRequest;
use crate::retry::RetryConfig;
use crate::ValidationError;

pub const DEFAULT_API_BASE: &str = "https://api.trello.com";

/// The "payment completed" list on the disbursement board.
pub const COMPLETED_LIST_ID: &str = "5e7d45a393cb705078c08e5b";

pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

pub const API_KEY_ENV: &str = "DISBURSE_TRELLO_API_KEY";
pub const TOKEN_ENV: &str = "DISBURSE_TRELLO_TOKEN";

/// Key and token pair sent as query parameters on every board request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key: String,
    token: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
        }
    }

    /// Uses the given values, falling back to the environment for whichever is missing.
    pub fn from_args_or_env(api_key: Option<String>, token: Option<String>) -> Self {
        Self {
            api_key: api_key
                .or_else(|| std::env::var(API_KEY_ENV).ok())
                .unwrap_or_default(),
            token: token
                .or_else(|| std::env::var(TOKEN_ENV).ok())
                .unwrap_or_default(),
        }
    }

    pub fn apply(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_query("key", &self.api_key)
            .with_query("token", &self.token)
    }
}

impl Debug for ApiCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub credentials: ApiCredentials,
    pub api_base: String,
    pub terminal_list: String,
    pub output_path: PathBuf,
    pub display: DisplayClock,
    /// Per-request timeout. `None` waits for the service however long it takes.
    pub request_timeout_ms: Option<u64>,
    pub retry: RetryConfig,
}

impl ExportConfig {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            credentials,
            api_base: String::from(DEFAULT_API_BASE),
            terminal_list: String::from(COMPLETED_LIST_ID),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            display: DisplayClock::utc(),
            request_timeout_ms: None,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Result<Self, ValidationError> {
        let api_base = api_base.into();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ValidationError::InvalidApiBase { value: api_base });
        }
        self.api_base = api_base.trim_end_matches('/').to_owned();
        Ok(self)
    }

    pub fn with_terminal_list(mut self, list_id: impl Into<String>) -> Self {
        self.terminal_list = list_id.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_display(mut self, display: DisplayClock) -> Self {
        self.display = display;
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
