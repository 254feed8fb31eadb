//! Store actor holding the dashboard view model.

use chrono::Utc;
use monitor_core::{ConnectionStatus, GroupConfig, GroupedView, StoreEvent};
use ractor::{Actor, ActorProcessingErr, ActorRef};
use tokio::sync::broadcast;

use crate::messages::StoreMessage;

/// State for the store actor.
pub struct StoreActorState {
    /// Grouping rules applied to incoming snapshots.
    config: GroupConfig,
    /// Socket connection flags.
    connection: ConnectionStatus,
    /// Current grouped view; replaced wholesale on every snapshot.
    view: GroupedView,
    /// Event broadcaster.
    event_tx: Option<broadcast::Sender<StoreEvent>>,
}

impl StoreActorState {
    /// Create a new store state with the given grouping config.
    pub fn new(config: GroupConfig) -> Self {
        Self {
            config,
            connection: ConnectionStatus::default(),
            view: GroupedView::default(),
            event_tx: None,
        }
    }

    /// Set the event broadcaster.
    pub fn with_event_tx(mut self, tx: broadcast::Sender<StoreEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Broadcast an event.
    fn broadcast(&self, event: StoreEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }
}

/// Actor that maintains the queue dashboard state.
pub struct StoreActor;

impl Actor for StoreActor {
    type Msg = StoreMessage;
    type State = StoreActorState;
    type Arguments = StoreActorState;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        tracing::info!("Starting store actor");
        Ok(args)
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::SocketOpened => {
                state.connection.connected = true;
                state.connection.reconnect_error = false;
                state.broadcast(StoreEvent::Connected {
                    timestamp: Utc::now(),
                });
            }

            StoreMessage::SocketClosed { error } => {
                state.connection.connected = false;
                state.broadcast(StoreEvent::Disconnected {
                    error,
                    timestamp: Utc::now(),
                });
            }

            StoreMessage::ReconnectFailed => {
                state.connection.reconnect_error = true;
                state.broadcast(StoreEvent::ReconnectFailed {
                    timestamp: Utc::now(),
                });
            }

            StoreMessage::ApplySnapshot(snapshot) => {
                let snapshot = *snapshot;
                state.view = GroupedView::from_snapshot(&state.config, &snapshot);
                tracing::debug!(
                    total = state.view.total,
                    created = %snapshot.created,
                    "Applied queue snapshot",
                );
                state.broadcast(StoreEvent::SnapshotApplied {
                    created: snapshot.created,
                    total_jobs: state.view.total,
                    timestamp: Utc::now(),
                });
            }

            StoreMessage::GetView { reply } => {
                let _ = reply.send(state.view.clone());
            }

            StoreMessage::GetConnection { reply } => {
                let _ = reply.send(state.connection);
            }

            StoreMessage::Shutdown => {
                tracing::info!("Stopping store actor");
                myself.stop(None);
            }
        }

        Ok(())
    }
}

/// Spawn the store actor with the given grouping config.
pub async fn start_store(
    config: GroupConfig,
    event_tx: Option<broadcast::Sender<StoreEvent>>,
) -> Result<(ActorRef<StoreMessage>, ractor::concurrency::JoinHandle<()>), ractor::SpawnErr> {
    let mut state = StoreActorState::new(config);
    if let Some(tx) = event_tx {
        state = state.with_event_tx(tx);
    }
    Actor::spawn(None, StoreActor, state).await
}
