//! Inbound message processing loop.

use futures_util::StreamExt;
use tokio_tungstenite::tungstenite::Message;

use crate::client::WsStream;
use crate::events::FeedEvent;
use crate::messages::parse_message;

/// Read frames until the socket closes, errors, or is exhausted.
///
/// Each parsed summary is delivered through `emit` as a
/// [`FeedEvent::Snapshot`]. Unparseable text frames are logged and
/// skipped. Returns `true` when the loop ended because of a receive
/// error, `false` on a clean close.
pub async fn process_messages<F>(ws_stream: &mut WsStream, emit: &F) -> bool
where
    F: Fn(FeedEvent),
{
    while let Some(msg_result) = ws_stream.next().await {
        match msg_result {
            Ok(Message::Text(text)) => match parse_message(&text) {
                Ok(msg) => emit(FeedEvent::Snapshot(msg.into_snapshot())),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        raw_message = %text,
                        "Failed to parse feed message",
                    );
                }
            },
            Ok(Message::Binary(_)) => {
                tracing::trace!("Ignoring binary frame");
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {
                // Handled automatically by tungstenite.
            }
            Ok(Message::Close(frame)) => {
                tracing::info!(?frame, "Queue feed closed");
                return false;
            }
            Ok(Message::Frame(_)) => {}
            Err(e) => {
                tracing::error!(error = %e, "Feed receive error");
                return true;
            }
        }
    }
    false
}
