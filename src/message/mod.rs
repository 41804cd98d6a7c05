//! Message module for splitflap-motion.
//!
//! Pending-message queue consumed by the scheduler, and the source seam the
//! host loop pulls new messages from.

mod queue;
mod source;

pub use queue::MessageQueue;
pub use source::{MessageSource, Playlist};
