//! Read-only client for the three board endpoints the export needs.
//!
//! | Endpoint | Path | Response |
//! |----------|------|----------|
//! | [`Endpoint::ListCards`] | `/1/lists/{list}/cards` | `[Card]` |
//! | [`Endpoint::CustomFieldItems`] | `/1/cards/{card}/customFieldItems` | `[CustomFieldItem]` |
//! | [`Endpoint::CardActions`] | `/1/cards/{card}/actions?filter=updateCard:idList` | `[CardAction]` |

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ApiCredentials, ExportConfig};
use crate::domain::{Card, CardAction, CardId, CustomFieldItem};
use crate::error::BoardError;
use crate::fetcher::RateLimitedFetcher;
use crate::http_client::{HttpClient, HttpRequest};

/// Board API endpoint, used for error context and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListCards,
    CustomFieldItems,
    CardActions,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListCards => "list cards",
            Self::CustomFieldItems => "custom field items",
            Self::CardActions => "card actions",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct BoardClient {
    fetcher: RateLimitedFetcher,
    credentials: ApiCredentials,
    api_base: String,
    timeout_ms: Option<u64>,
}

impl BoardClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &ExportConfig) -> Self {
        Self {
            fetcher: RateLimitedFetcher::new(http_client, config.retry.clone()),
            credentials: config.credentials.clone(),
            api_base: config.api_base.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>, BoardError> {
        let url = format!(
            "{}/1/lists/{}/cards",
            self.api_base,
            urlencoding::encode(list_id)
        );
        self.get_json(Endpoint::ListCards, HttpRequest::get(url))
            .await
    }

    pub async fn custom_field_items(
        &self,
        card_id: &CardId,
    ) -> Result<Vec<CustomFieldItem>, BoardError> {
        let url = format!(
            "{}/1/cards/{}/customFieldItems",
            self.api_base,
            urlencoding::encode(card_id.as_str())
        );
        self.get_json(Endpoint::CustomFieldItems, HttpRequest::get(url))
            .await
    }

    /// List-membership changes recorded for the card, in the order the service returns them.
    pub async fn list_move_actions(&self, card_id: &CardId) -> Result<Vec<CardAction>, BoardError> {
        let url = format!(
            "{}/1/cards/{}/actions",
            self.api_base,
            urlencoding::encode(card_id.as_str())
        );
        let request = HttpRequest::get(url).with_query("filter", "updateCard:idList");
        self.get_json(Endpoint::CardActions, request).await
    }

    /// The status code is not checked: an error page fails here as unparseable JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: HttpRequest,
    ) -> Result<T, BoardError> {
        let mut request = self
            .credentials
            .apply(request)
            .with_header("accept", "application/json");
        if let Some(timeout_ms) = self.timeout_ms {
            request = request.with_timeout_ms(timeout_ms);
        }

        let response = self
            .fetcher
            .get(request)
            .await
            .map_err(|source| BoardError::Fetch { endpoint, source })?;

        debug!(%endpoint, status = response.status, bytes = response.body.len(), "response");

        serde_json::from_str(&response.body).map_err(|source| BoardError::Json {
            endpoint,
            status: response.status,
            source,
        })
    }
}
