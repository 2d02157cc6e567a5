//! Tend Gatekeeper
//!
//! Contextual privacy projection: given a viewer's tier and a content
//! item, returns only what that tier is permitted to see.
//!
//! Two gates apply in order. The post's `visibility` set decides whether
//! the viewer sees the post at all; the tier's capability matrix then
//! decides which gated *fields* of a visible post are included. The
//! always-visible core (id, author identity, content type, text,
//! timestamp) is never redacted on a visible post.
//!
//! # Examples
//!
//! ```no_run
//! use tend_gatekeeper::project;
//! use tend_domain::{PrivacySettings, Tier};
//!
//! let settings = PrivacySettings::default();
//! // let view = project(Tier::Outer, &post, &author, &settings);
//! ```

#![warn(missing_docs)]

mod projector;

pub use projector::{project, AuthorProfile, PostView};
