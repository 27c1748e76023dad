//! LMDB storage backend for the Agora poll ledger.
//!
//! Implements the storage traits from `agora-store` using the `heed` LMDB
//! bindings. Both record databases live in a single environment, so the
//! vote commit can cover them with one write transaction.

pub mod environment;
pub mod error;
pub mod poll;
pub mod voter_record;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
