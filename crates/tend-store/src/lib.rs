//! Tend Storage Layer
//!
//! Owns the friend roster and enforces the one true invariant: for every
//! bounded tier, `friends + reserved <= limit`, checked and applied in a
//! single step for every mutation.
//!
//! # Architecture
//!
//! - [`Roster`]: in-memory, synchronous store; all mutations are atomic
//!   with respect to the capacity invariant and return typed results
//! - [`SqliteStore`]: durable snapshot persistence behind the
//!   `RosterPersistence` trait
//! - [`PersistenceHandle`]: a background writer that debounces rapid
//!   successive mutations into one durable write, last writer wins
//!
//! # Examples
//!
//! ```
//! use tend_store::Roster;
//! use tend_domain::{NewFriend, Tier};
//! use chrono::Utc;
//!
//! let mut roster = Roster::new();
//! let friend = roster
//!     .add_friend(Tier::Core, NewFriend { name: "Ada".into(), ..Default::default() }, Utc::now())
//!     .unwrap();
//! assert_eq!(friend.tier, Tier::Core);
//! ```

#![warn(missing_docs)]

mod persist;
mod roster;

pub use persist::{PersistenceError, PersistenceHandle, SqliteStore};
pub use roster::{Roster, StoreError, TierCapacity};
