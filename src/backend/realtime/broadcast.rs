/**
 * Real-time Event Broadcasting
 *
 * The [`Broadcaster`] owns the lifecycle of every event-stream subscriber and
 * the fan-out of events to all of them.
 *
 * # Lifecycle
 *
 * - `connect` requires a verified session, registers a fresh channel and
 *   queues the greeting into it.
 * - The returned [`Subscription`] is the payload stream handed to the
 *   transport. Dropping it (peer closed the connection, server shut down)
 *   runs `disconnect` exactly once.
 * - `broadcast` serializes an event once and writes the same payload to
 *   every registered channel. A closed channel is pruned on the spot; a full
 *   one misses this event but stays registered. Delivery continues with the
 *   rest either way.
 *
 * # Delivery
 *
 * Best effort, at most once. There is no acknowledgement, no replay for
 * subscribers that connect later and no catch-up for a subscriber whose
 * queue was full. Events broadcast by one caller in sequence
 * arrive at each open channel in that order.
 */

use crate::backend::auth::sessions::Session;
use crate::backend::error::BackendError;
use crate::backend::realtime::payload::{encode_payload, greeting, Payload};
use crate::backend::realtime::registry::{
    registry, Channel, ChannelId, PayloadReceiver, Registry, WriteError,
};
use axum::http::StatusCode;
use futures_util::Stream;
use serde::Serialize;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Connects subscribers and fans out events to them
///
/// Cheap to clone; every clone shares the same registry.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    registry: Arc<Registry>,
}

impl Broadcaster {
    /// Broadcaster over the process-wide registry
    pub fn global() -> Self {
        Self {
            registry: registry(),
        }
    }

    pub(crate) fn with_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Number of live subscribers, for diagnostics
    pub fn subscriber_count(&self) -> usize {
        self.registry.size()
    }

    /// Open a stream for an authenticated caller
    ///
    /// # Errors
    ///
    /// * `BackendError::Unauthorized` - no verified session; nothing is registered
    /// * `BackendError::HandlerError` (500) - the greeting could not be queued;
    ///   the channel is unregistered again
    pub fn connect(&self, session: Option<&Session>) -> Result<Subscription, BackendError> {
        let session = session.ok_or_else(|| {
            tracing::warn!("[Realtime] Rejected stream without a verified session");
            BackendError::Unauthorized
        })?;

        let (channel, payloads) = Channel::open();
        let id = channel.id();
        // Armed before registration so an early drop still unregisters.
        let guard = DisconnectGuard {
            broadcaster: self.clone(),
            id,
        };

        self.registry.register(channel.clone());
        // The receiver is still held here, so only a full queue can refuse.
        channel.write(greeting()).map_err(|e| {
            tracing::error!("[Realtime] Failed to queue greeting: {}", e);
            BackendError::handler(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to open event stream",
            )
        })?;

        tracing::info!(
            "[Realtime] {} connected for user {} ({} subscribers)",
            id,
            session.user_id,
            self.registry.size()
        );

        Ok(Subscription {
            id,
            payloads,
            _guard: guard,
        })
    }

    /// Remove a subscriber; safe to call for channels already gone
    pub fn disconnect(&self, id: ChannelId) {
        self.registry.unregister(id);
        tracing::info!(
            "[Realtime] {} disconnected ({} subscribers)",
            id,
            self.registry.size()
        );
    }

    /// Fan an event out to every live subscriber
    ///
    /// Returns how many channels accepted the event. Serialization failures
    /// are logged and the event is dropped.
    pub fn broadcast<T: Serialize + ?Sized>(&self, event: &T) -> usize {
        if self.registry.is_empty() {
            tracing::debug!("[Realtime] No subscribers, skipping broadcast");
            return 0;
        }

        let payload = match encode_payload(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                return 0;
            }
        };

        self.broadcast_payload(payload)
    }

    /// Write an already serialized event to every live subscriber
    pub fn broadcast_payload(&self, payload: Payload) -> usize {
        let mut delivered = 0;

        for channel in self.registry.snapshot() {
            match channel.write(Arc::clone(&payload)) {
                Ok(()) => delivered += 1,
                Err(WriteError::Full(id)) => {
                    tracing::warn!("[Realtime] {} is not keeping up, event dropped", id);
                }
                Err(e @ WriteError::Closed(_)) => {
                    tracing::warn!("[Realtime] Pruning subscriber: {}", e);
                    self.registry.unregister(channel.id());
                }
            }
        }

        tracing::info!("[Realtime] Event broadcast to {} subscribers", delivered);
        delivered
    }
}

/// Unregisters its channel when dropped
#[derive(Debug)]
struct DisconnectGuard {
    broadcaster: Broadcaster,
    id: ChannelId,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        self.broadcaster.disconnect(self.id);
    }
}

/// Payloads queued for one subscriber
///
/// Yields the greeting first, then every broadcast payload in order. The
/// stream stays pending between events and never polls on a timer.
#[derive(Debug)]
pub struct Subscription {
    id: ChannelId,
    payloads: PayloadReceiver,
    _guard: DisconnectGuard,
}

impl Subscription {
    pub fn id(&self) -> ChannelId {
        self.id
    }
}

impl Stream for Subscription {
    type Item = Payload;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.payloads.poll_recv(cx)
    }
}
