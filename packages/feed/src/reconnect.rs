//! Exponential-backoff reconnection for the feed socket.
//!
//! When the connection drops, [`run_feed`](crate::run_feed) calls
//! [`reconnect_loop`] to keep retrying with increasing delays until
//! either the connection is restored or the [`CancellationToken`] is
//! triggered. Each failed attempt is reported through
//! [`FeedEvent::ReconnectFailed`] so the store can flag it.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::client::{FeedClient, FeedConnection};
use crate::events::FeedEvent;

/// Tunable parameters for the exponential-backoff strategy.
pub struct ReconnectConfig {
    /// Delay before the first reconnection attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }
}

/// Calculate the next backoff delay from the current delay and config.
///
/// The result is clamped to [`ReconnectConfig::max_delay`].
pub fn next_delay(current: Duration, config: &ReconnectConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms).min(config.max_delay)
}

/// Attempt to reconnect to the feed with exponential backoff.
///
/// Returns `Some(connection)` once a connection succeeds, or `None` if
/// the `cancel` token is triggered before a successful connection.
pub async fn reconnect_loop<F>(
    client: &FeedClient,
    config: &ReconnectConfig,
    cancel: &CancellationToken,
    emit: &F,
) -> Option<FeedConnection>
where
    F: Fn(FeedEvent),
{
    let mut delay = config.initial_delay;
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        tracing::info!(
            url = client.url(),
            attempt,
            delay_ms = delay.as_millis() as u64,
            "Reconnecting to queue feed",
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(url = client.url(), "Reconnect cancelled");
                return None;
            }
            result = client.connect() => {
                match result {
                    Ok(conn) => {
                        tracing::info!(url = client.url(), attempt, "Reconnected to queue feed");
                        return Some(conn);
                    }
                    Err(e) => {
                        tracing::warn!(
                            url = client.url(),
                            error = %e,
                            "Reconnect attempt {attempt} failed",
                        );
                        emit(FeedEvent::ReconnectFailed);
                    }
                }
            }
        }

        // Wait before the next attempt, respecting cancellation.
        tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(delay) => {}
        }

        delay = next_delay(delay, config);
    }
}
