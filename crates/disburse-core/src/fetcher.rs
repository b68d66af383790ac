//! GET with bounded retries on rate limiting.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::retry::RetryConfig;

/// Issues GET requests and backs off while the service answers with a rate-limit status.
///
/// Transport errors are returned on the first occurrence. Any response whose status is
/// not in [`RetryConfig::retry_on_status`] is handed back untouched, success or not.
#[derive(Clone)]
pub struct RateLimitedFetcher {
    http_client: Arc<dyn HttpClient>,
    retry: RetryConfig,
}

impl RateLimitedFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, retry: RetryConfig) -> Self {
        Self { http_client, retry }
    }

    pub async fn get(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            debug!(url = request.redacted_url(), attempt, "GET");
            let response = self.http_client.execute(request.clone()).await?;

            if !self.retry.should_retry_status(response.status) {
                return Ok(response);
            }

            attempt += 1;
            if attempt >= self.retry.max_attempts {
                return Err(FetchError::RetryLimitExceeded { attempts: attempt });
            }

            let delay = self.retry.delay_for_attempt(attempt);
            warn!(
                url = request.redacted_url(),
                status = response.status,
                attempt,
                delay_secs = delay.as_secs_f64(),
                "rate limited"
            );
            println!(
                "Being ratelimited, waiting {} and trying again",
                delay.as_secs()
            );
            tokio::time::sleep(delay).await;
        }
    }
}
