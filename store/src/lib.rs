//! Abstract storage traits for the Agora poll ledger.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. The rest of the workspace depends only on the traits.

pub mod error;
pub mod poll;
pub mod voter_record;

pub use error::StoreError;
pub use poll::PollStore;
pub use voter_record::VoterRecordStore;

use agora_types::{Poll, StorageAddress, VoterRecord};

/// Combined storage surface for the voting ledger.
///
/// Adds the one compound operation the vote ledger needs: persisting a voter
/// record and its poll's updated tally as a single all-or-nothing unit. A
/// partial effect (record without increment, or increment without record)
/// must be impossible; backends wrap both writes in one transaction.
pub trait VotingStore: PollStore + VoterRecordStore {
    /// Atomically allocate `record` at `record_address` and overwrite the
    /// poll at `poll_address` with `poll`.
    ///
    /// Fails with [`StoreError::Duplicate`] if `record_address` is occupied
    /// (the voter already voted — possibly a concurrent attempt that won the
    /// race), leaving the poll untouched. Fails with
    /// [`StoreError::NotFound`] if no poll was allocated at `poll_address`.
    fn commit_vote(
        &self,
        record_address: &StorageAddress,
        record: &VoterRecord,
        poll_address: &StorageAddress,
        poll: &Poll,
    ) -> Result<(), StoreError>;
}
