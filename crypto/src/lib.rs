//! Cryptographic primitives for the Agora poll ledger.
//!
//! Blake2b-256 hashing, deterministic storage-address derivation, and
//! Ed25519 identity key helpers. Signature verification itself is the
//! surrounding environment's job; this crate only mints and derives.

pub mod derive;
pub mod hash;
pub mod keys;

pub use derive::{derive_poll_address, derive_voter_record_address};
pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_seed, public_from_private};
