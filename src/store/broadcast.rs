use std::{
    pin::Pin,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    task::{Context, Poll},
};

use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    task::JoinHandle,
};
use tokio_stream::Stream;

use crate::core::SettingsError;

use super::changes::SettingChange;

/// Checks whether a change's field matches a subscription pattern.
///
/// Field names are flat, so a pattern is either the wildcard `"*"` (all
/// fields) or an exact field name.
pub(super) fn field_matches(field: &str, pattern: &str) -> bool {
    pattern == "*" || pattern == field
}

/// Commands sent to the broadcast actor task
enum BroadcastCommand {
    /// Subscribe to settings changes matching a pattern
    Subscribe {
        id: usize,
        pattern: String,
        sender: Sender<SettingChange>,
    },
    /// Remove a subscription by ID
    Unsubscribe { id: usize },
    /// Broadcast a settings change to all matching subscribers
    Broadcast(SettingChange),
}

/// Internal subscription data stored in the actor
struct ActorSubscription {
    id: usize,
    pattern: String,
    sender: Sender<SettingChange>,
}

/// A subscription handle that automatically cleans up when dropped.
///
/// Uses RAII so subscriptions are removed when the observing UI component
/// goes away. Implements [`Stream`], so subscribers can consume changes with
/// the usual stream combinators.
pub struct Subscription {
    id: usize,
    service: BroadcastService,
    receiver: Receiver<SettingChange>,
}

/// Handle to the broadcast service
///
/// A dedicated actor task owns all subscriber state and processes commands
/// via message passing, so the mutating side never contends on subscriber
/// bookkeeping.
#[derive(Clone)]
pub struct BroadcastService {
    command_tx: Sender<BroadcastCommand>,
    next_id: Arc<AtomicUsize>,
    _handle: Arc<JoinHandle<()>>,
}

impl BroadcastService {
    /// Creates a new broadcast service with its own dedicated actor task.
    ///
    /// The actor task runs until the last clone of the service is dropped.
    pub fn new() -> Self {
        let (command_tx, mut command_rx) = mpsc::channel(100);

        let handle = tokio::spawn(async move {
            broadcast_actor_loop(&mut command_rx).await;
        });

        Self {
            command_tx,
            next_id: Arc::new(AtomicUsize::new(1)),
            _handle: Arc::new(handle),
        }
    }

    /// Subscribe to settings changes matching the given pattern.
    ///
    /// Returns a subscription handle that includes the receiver for changes.
    /// The subscription cleans itself up when the handle is dropped.
    ///
    /// # Arguments
    /// * `pattern` - `"*"` for all fields, or an exact field name such as
    ///   `"centerMode"`
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the broadcast service
    /// is not running.
    pub async fn subscribe(&self, pattern: &str) -> Result<Subscription, SettingsError> {
        let (tx, rx) = mpsc::channel(100);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.command_tx
            .send(BroadcastCommand::Subscribe {
                id,
                pattern: pattern.to_string(),
                sender: tx,
            })
            .await
            .map_err(|_| SettingsError::ServiceUnavailable {
                service: "broadcast".to_string(),
                details: "Broadcast service is not running".to_string(),
            })?;

        Ok(Subscription {
            id,
            service: self.clone(),
            receiver: rx,
        })
    }

    /// Broadcast a settings change to all matching subscribers.
    ///
    /// The change is filtered at the source and delivered only to
    /// subscribers whose pattern matches the changed field.
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the broadcast service
    /// is not running.
    pub async fn broadcast(&self, change: SettingChange) -> Result<(), SettingsError> {
        self.command_tx
            .send(BroadcastCommand::Broadcast(change))
            .await
            .map_err(|_| SettingsError::ServiceUnavailable {
                service: "broadcast".to_string(),
                details: "Broadcast service is not running".to_string(),
            })
    }
}

impl Default for BroadcastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscription {
    /// Receives the next matching settings change.
    ///
    /// Returns `None` when the broadcast service has shut down.
    pub async fn recv(&mut self) -> Option<SettingChange> {
        self.receiver.recv().await
    }

    /// Get a mutable reference to the underlying change receiver.
    pub fn receiver_mut(&mut self) -> &mut Receiver<SettingChange> {
        &mut self.receiver
    }
}

impl Stream for Subscription {
    type Item = SettingChange;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .service
            .command_tx
            .try_send(BroadcastCommand::Unsubscribe { id: self.id });
    }
}

/// The main actor loop that processes broadcast commands.
///
/// Runs in a dedicated task and owns all subscriber state. Subscribers that
/// have gone away (or whose channel is full) are pruned on delivery so a
/// slow observer never blocks the mutating side.
async fn broadcast_actor_loop(command_rx: &mut Receiver<BroadcastCommand>) {
    let mut subscriptions = Vec::new();

    while let Some(command) = command_rx.recv().await {
        match command {
            BroadcastCommand::Subscribe {
                id,
                pattern,
                sender,
            } => {
                subscriptions.push(ActorSubscription {
                    id,
                    pattern,
                    sender,
                });
            }

            BroadcastCommand::Unsubscribe { id } => {
                subscriptions.retain(|sub| sub.id != id);
            }

            BroadcastCommand::Broadcast(change) => {
                subscriptions.retain(|sub| {
                    if field_matches(&change.field, &sub.pattern) {
                        sub.sender.try_send(change.clone()).is_ok()
                    } else {
                        true
                    }
                });
            }
        }
    }
}
