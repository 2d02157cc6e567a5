//! Tend Exchange
//!
//! The social-graph portability contract: a versioned, lossless snapshot
//! of friends, posts, interactions and settings that can be serialized
//! to plain JSON, carried to another account or device, and imported.
//!
//! Wire types are deliberately separate from domain types: tiers travel
//! as strings so an unknown tier is a validation error the importer can
//! report, not a deserialization failure. Import validates everything
//! before touching the local store; a failed import changes nothing.

#![warn(missing_docs)]

mod error;
mod export;
mod import;
mod types;

pub use error::ExchangeError;
pub use export::export_graph;
pub use import::{import_graph, ImportMode, ImportOutcome};
pub use types::{
    SocialGraphExport, WireFriend, WireInteraction, WirePost, FORMAT_VERSION, SUPPORTED_MAJOR,
};
