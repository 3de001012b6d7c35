//! Request execution: one logical call with retry, backoff and error mapping.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::{Error, Result};

use super::core::ClientCore;
use super::error_classification::{classify_status, Disposition};

impl ClientCore {
    /// Executes `request`, retrying transient failures.
    ///
    /// Returns `Ok(None)` for a 2xx response with an empty body. The call ends
    /// with [`Error::Cancelled`] as soon as `cancel` fires, whether the loop is
    /// waiting out a backoff or waiting on the network.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        request: ApiRequest,
    ) -> Result<Option<T>> {
        let policy = self.retry_policy;
        let mut attempt: u32 = 0;

        loop {
            if attempt > 0 {
                let delay = policy.backoff_delay(attempt);
                if self.debug {
                    debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        path = request.path(),
                        "intasend retrying request"
                    );
                }
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(Error::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }

            if self.debug {
                let body = request
                    .body()
                    .map(|b| String::from_utf8_lossy(b).into_owned())
                    .unwrap_or_default();
                debug!(
                    method = %request.method(),
                    url = %self.transport.url(request.path()),
                    attempt,
                    body = %body,
                    "intasend request"
                );
            }

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                outcome = self.transport.send(&request) => outcome,
            };

            let error = match outcome {
                Err(err) => {
                    if self.debug {
                        debug!(attempt, error = %err, "intasend network error");
                    }
                    Error::Network(err)
                }
                Ok((status, body)) => {
                    if self.debug {
                        debug!(
                            status,
                            body = %String::from_utf8_lossy(&body),
                            "intasend response"
                        );
                    }
                    match classify_status(status) {
                        Disposition::Success => return decode_body(status, &body),
                        Disposition::Terminal => {
                            return Err(ApiError::from_response(status, &body).into())
                        }
                        Disposition::Retryable => ApiError::from_response(status, &body).into(),
                    }
                }
            };

            if attempt >= policy.max_retries {
                return Err(error);
            }
            attempt += 1;
        }
    }

    /// Executes `request` and substitutes `T::default()` for an empty body.
    pub(crate) async fn execute_json<T: DeserializeOwned + Default>(
        &self,
        cancel: &CancellationToken,
        request: ApiRequest,
    ) -> Result<T> {
        Ok(self.execute(cancel, request).await?.unwrap_or_default())
    }
}

fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Option<T>> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|source| Error::Decode { status, source })
}
