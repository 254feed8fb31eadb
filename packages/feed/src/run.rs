//! Feed task: connect, subscribe, process, reconnect.

use tokio_util::sync::CancellationToken;

use crate::client::FeedClient;
use crate::events::FeedEvent;
use crate::processor::process_messages;
use crate::reconnect::{reconnect_loop, ReconnectConfig};

/// Drive the feed socket until the token is cancelled.
///
/// Every lifecycle transition and every incoming snapshot is reported
/// through `emit`. The sequence per connection is: `Opened`, zero or
/// more `Snapshot`s, then `Closed`; failed reconnect attempts emit
/// `ReconnectFailed` in between.
pub async fn run_feed<F>(
    client: FeedClient,
    reconnect: ReconnectConfig,
    cancel: CancellationToken,
    emit: F,
) where
    F: Fn(FeedEvent),
{
    let mut conn = match client.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(error = %e, "Initial feed connect failed");
            emit(FeedEvent::ReconnectFailed);
            match reconnect_loop(&client, &reconnect, &cancel, &emit).await {
                Some(conn) => conn,
                None => return,
            }
        }
    };

    loop {
        emit(FeedEvent::Opened);
        if let Err(e) = conn.subscribe().await {
            tracing::warn!(error = %e, "Queue interest subscription failed");
        }

        let error = tokio::select! {
            _ = cancel.cancelled() => {
                emit(FeedEvent::Closed { error: false });
                return;
            }
            error = process_messages(&mut conn.ws_stream, &emit) => error,
        };
        emit(FeedEvent::Closed { error });

        if cancel.is_cancelled() {
            return;
        }

        conn = match reconnect_loop(&client, &reconnect, &cancel, &emit).await {
            Some(conn) => conn,
            None => return,
        };
    }
}
