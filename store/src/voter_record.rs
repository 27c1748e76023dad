//! Voter record storage trait.

use crate::StoreError;
use agora_types::{StorageAddress, VoterRecord};

/// Trait for voter record storage, keyed by derived address.
///
/// Voter records are created only through [`crate::VotingStore::commit_vote`]
/// — allocation is inseparable from the matching tally update, so this trait
/// exposes reads only.
pub trait VoterRecordStore {
    /// Retrieve the voter record at `address`.
    fn get_voter_record(&self, address: &StorageAddress) -> Result<VoterRecord, StoreError>;

    /// Check whether a voter record exists at `address`.
    fn voter_record_exists(&self, address: &StorageAddress) -> Result<bool, StoreError>;

    /// Total number of voter records in the store.
    fn voter_record_count(&self) -> Result<u64, StoreError>;
}
