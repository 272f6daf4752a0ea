/**
 * Subscriber Registry
 *
 * The process-wide set of live event-stream channels. Every request handler
 * reaches the same instance through [`registry()`], which is created lazily on
 * first access and lives until the process exits. Reconstructing it would
 * silently drop every connected subscriber, so construction is crate-private.
 *
 * # Channels
 *
 * A [`Channel`] is the sending half of one subscriber's payload queue. The
 * receiving half is owned by the HTTP response body; once the client goes
 * away the body is dropped and any further write to the channel fails with
 * [`WriteError::Closed`].
 *
 * Queues hold at most [`CHANNEL_CAPACITY`] payloads. A subscriber that stops
 * reading gets [`WriteError::Full`] for new events instead of growing its
 * queue; it stays registered and resumes receiving once it drains.
 *
 * # Thread Safety
 *
 * The set is a `DashMap` keyed by [`ChannelId`], so register, unregister and
 * pruning are safe from any task without external locking.
 */

use crate::backend::realtime::payload::Payload;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Payloads a subscriber may have queued before new events are dropped for it
pub const CHANNEL_CAPACITY: usize = 1000;

static NEXT_CHANNEL_ID: AtomicU64 = AtomicU64::new(1);

static REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| {
    tracing::debug!("[Realtime] Subscriber registry created");
    Arc::new(Registry::new())
});

/// Process-unique channel identifier, used for diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(u64);

impl ChannelId {
    fn next() -> Self {
        Self(NEXT_CHANNEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch-{}", self.0)
    }
}

/// Receiving half of a channel, consumed by the transport
pub type PayloadReceiver = mpsc::Receiver<Payload>;

/// Why a payload was not queued
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    /// The subscriber is not draining its queue
    #[error("channel {0} is full")]
    Full(ChannelId),
    /// The subscriber is gone
    #[error("channel {0} is closed")]
    Closed(ChannelId),
}

/// One subscriber's outbound payload queue
#[derive(Debug, Clone)]
pub struct Channel {
    id: ChannelId,
    tx: mpsc::Sender<Payload>,
}

impl Channel {
    /// Open a channel with the default capacity
    pub fn open() -> (Self, PayloadReceiver) {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Open a channel holding at most `capacity` queued payloads (minimum 1)
    pub fn with_capacity(capacity: usize) -> (Self, PayloadReceiver) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { id: ChannelId::next(), tx }, rx)
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Queue a payload for delivery without waiting
    ///
    /// Payloads queued on the same channel are delivered in the order written.
    pub fn write(&self, payload: Payload) -> Result<(), WriteError> {
        self.tx.try_send(payload).map_err(|e| match e {
            TrySendError::Full(_) => WriteError::Full(self.id),
            TrySendError::Closed(_) => WriteError::Closed(self.id),
        })
    }
}

/// Concurrent set of live channels
#[derive(Debug)]
pub struct Registry {
    channels: DashMap<ChannelId, Channel>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Add a channel; registering the same channel twice is a no-op
    pub fn register(&self, channel: Channel) {
        self.channels.entry(channel.id).or_insert(channel);
    }

    /// Remove a channel; removing an absent channel is a no-op
    pub fn unregister(&self, id: ChannelId) {
        self.channels.remove(&id);
    }

    /// Number of live channels
    pub fn size(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn contains(&self, id: ChannelId) -> bool {
        self.channels.contains_key(&id)
    }

    /// Copy of the live channels for a fan-out pass
    ///
    /// Returned by value so no shard lock is held while payloads are written
    /// and failed channels are pruned.
    pub(crate) fn snapshot(&self) -> Vec<Channel> {
        self.channels.iter().map(|entry| entry.value().clone()).collect()
    }
}

/// The process-wide registry
pub fn registry() -> Arc<Registry> {
    Arc::clone(&REGISTRY)
}
