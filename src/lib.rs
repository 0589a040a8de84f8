//! In-memory priority queue of fixed-format messages.
//!
//! Messages are kept in a binary min-heap keyed on their 8-bit priority, so the
//! smallest priority value is always popped first.

pub mod config;
pub mod driver;
pub mod error;
pub mod message;
pub mod queue;

pub use error::{ConfigError, QueueError};
pub use message::{Message, MessageMeta, MAX_PAYLOAD};
pub use queue::PriorityMessageQueue;
