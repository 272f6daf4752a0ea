//! Real-time Update Module
//!
//! Server-push notifications for connected staff clients. Every subscriber
//! holds one long-lived `text/event-stream` response; events produced
//! anywhere in the process are fanned out to all of them.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── registry.rs     - Process-wide set of live channels
//! ├── payload.rs      - Serialize-once payloads and their SSE events
//! ├── broadcast.rs    - Connect, disconnect and fan-out
//! └── subscription.rs - GET /api/events handler
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use courtdesk::backend::realtime::Broadcaster;
//! use courtdesk::shared::StreamEvent;
//!
//! let broadcaster = Broadcaster::global();
//! let delivered = broadcaster.broadcast(&StreamEvent::notification("Court 4 is closed"));
//! println!("delivered to {} subscribers", delivered);
//! ```

/// Process-wide subscriber registry
pub mod registry;

/// Serialized event payloads
pub mod payload;

/// Connect, disconnect and fan-out
pub mod broadcast;

/// Event stream subscription handler
pub mod subscription;

pub use broadcast::{Broadcaster, Subscription};
pub use payload::Payload;
pub use registry::{registry, Channel, ChannelId, Registry, WriteError, CHANNEL_CAPACITY};
pub use subscription::handle_event_stream;
