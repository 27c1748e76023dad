//! Deterministic storage address derivation.
//!
//! Addresses are pure functions of a record's identifying fields, hashed
//! with a domain-separation prefix:
//!
//! - Poll:        Blake2b-256( "poll" ‖ authority ‖ poll_id_le )
//! - VoterRecord: Blake2b-256( "vote" ‖ voter ‖ poll_address )
//!
//! The same function allocates and looks up, so any party can locate a poll
//! or voter record without a central index, and "at most one record per key
//! tuple" holds as a storage-level collision instead of a read-then-write
//! race.

use agora_types::{PublicKey, StorageAddress};

/// Domain prefix for poll addresses.
const POLL_PREFIX: &[u8] = b"poll";
/// Domain prefix for voter record addresses.
const VOTE_PREFIX: &[u8] = b"vote";

/// Derive the storage address of the poll `(authority, poll_id)`.
///
/// Distinct `(authority, poll_id)` pairs map to distinct addresses within
/// the 256-bit address space; the same pair always maps to the same address.
pub fn derive_poll_address(authority: &PublicKey, poll_id: u64) -> StorageAddress {
    let id_bytes = poll_id.to_le_bytes();
    StorageAddress::new(crate::blake2b_256_multi(&[
        POLL_PREFIX,
        authority.as_bytes(),
        &id_bytes,
    ]))
}

/// Derive the storage address of the voter record `(voter, poll)`.
pub fn derive_voter_record_address(
    voter: &PublicKey,
    poll: &StorageAddress,
) -> StorageAddress {
    StorageAddress::new(crate::blake2b_256_multi(&[
        VOTE_PREFIX,
        voter.as_bytes(),
        poll.as_bytes(),
    ]))
}
