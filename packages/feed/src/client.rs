//! WebSocket client for the framework event socket.
//!
//! [`FeedClient`] holds the endpoint configuration. Call
//! [`FeedClient::connect`] to establish a live [`FeedConnection`], then
//! [`FeedConnection::subscribe`] to register interest in the queue
//! channel.

use futures_util::SinkExt;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::messages::InterestMessage;

/// The underlying socket stream type.
pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Errors raised by the feed client.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Failed to establish the WebSocket connection.
    #[error("connection error: {0}")]
    Connection(String),

    /// Failed to send a frame on an established connection.
    #[error("send error: {0}")]
    Send(String),

    /// Failed to encode an outbound message.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration handle for the framework event socket.
pub struct FeedClient {
    url: String,
}

impl FeedClient {
    /// Create a new client targeting the given `ws://` endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connect to the event socket endpoint.
    pub async fn connect(&self) -> Result<FeedConnection, FeedError> {
        let (ws_stream, _response) = connect_async(self.url.as_str()).await.map_err(|e| {
            FeedError::Connection(format!("failed to connect to {}: {e}", self.url))
        })?;

        tracing::info!(url = %self.url, "Connected to queue feed");

        Ok(FeedConnection { ws_stream })
    }
}

/// A live socket connection to the queue feed.
pub struct FeedConnection {
    /// The raw WebSocket stream for reading/writing frames.
    pub ws_stream: WsStream,
}

impl FeedConnection {
    /// Register interest in the queue summary channel.
    ///
    /// Must be sent once per (re)connection before the server starts
    /// pushing summaries.
    pub async fn subscribe(&mut self) -> Result<(), FeedError> {
        let msg = serde_json::to_string(&InterestMessage::queue())?;
        self.ws_stream
            .send(Message::Text(msg))
            .await
            .map_err(|e| FeedError::Send(e.to_string()))?;
        tracing::debug!("Registered interest in the queue channel");
        Ok(())
    }
}
