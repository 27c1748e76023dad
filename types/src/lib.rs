//! Fundamental types for the Agora poll ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: storage addresses, identity keys, the poll/vote data model,
//! and deployment limits.

pub mod address;
pub mod keys;
pub mod params;
pub mod poll;

pub use address::StorageAddress;
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use params::PollLimits;
pub use poll::{Poll, PollOption, PollStatus, VoterRecord};
