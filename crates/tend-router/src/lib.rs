//! Tend Notification Router
//!
//! Maps `(tier, fidelity)` to a delivery priority and maintains the
//! notification inbox. The one deliberate override of a tier's default
//! is the bridging rule for core and inner friends: high-fidelity events
//! always go immediate, and likes are always batched: depth of
//! interaction is rewarded, raw engagement volume is not.
//!
//! Also builds the primary feed: a pure filter and a stable
//! chronological sort. Engagement counts never influence order or
//! inclusion.

#![warn(missing_docs)]

mod feed;
mod inbox;
mod route;

pub use feed::primary_feed;
pub use inbox::{NotificationInbox, RouterError};
pub use route::{priority_for_content, priority_for_interaction, route};
