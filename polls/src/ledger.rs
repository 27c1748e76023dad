//! The vote ledger — creates one-time voter records and applies the matching
//! tally increment in a single atomic unit.

use std::sync::Arc;

use agora_crypto::derive_voter_record_address;
use agora_store::{StoreError, VotingStore};
use agora_types::{PublicKey, StorageAddress, VoterRecord};

use crate::error::VotingError;
use crate::registry;

/// Gates duplicate voting through derived-address collisions and guarantees
/// that a voter record never exists without its tally increment (or vice
/// versa).
pub struct VoteLedger<S> {
    store: Arc<S>,
}

impl<S: VotingStore> VoteLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Cast `voter`'s single vote for `option_index` on the poll at
    /// `poll_address`.
    ///
    /// Preconditions are checked in order, first failure wins: the poll
    /// exists, the poll is open, the index is in range, the voter has not
    /// voted. The voter record and the updated tally are then committed as
    /// one all-or-nothing transaction; losing a concurrent race for the
    /// record address surfaces as [`VotingError::DuplicateVote`] with the
    /// poll untouched.
    pub fn cast_vote(
        &self,
        voter: &PublicKey,
        poll_address: &StorageAddress,
        option_index: u8,
    ) -> Result<(StorageAddress, VoterRecord), VotingError> {
        let mut poll = match self.store.get_poll(poll_address) {
            Ok(poll) => poll,
            Err(StoreError::NotFound(_)) => return Err(VotingError::PollNotFound),
            Err(e) => return Err(e.into()),
        };

        // Checks open-then-bounds on the local copy; nothing persists until
        // commit_vote succeeds.
        registry::apply_vote(&mut poll, option_index)?;

        let record_address = derive_voter_record_address(voter, poll_address);
        if self.store.voter_record_exists(&record_address)? {
            return Err(VotingError::DuplicateVote);
        }

        let record = VoterRecord {
            poll: *poll_address,
            voter: *voter,
            option_index,
        };
        match self
            .store
            .commit_vote(&record_address, &record, poll_address, &poll)
        {
            Ok(()) => {
                tracing::debug!(
                    poll = %poll_address,
                    record = %record_address,
                    option_index,
                    "vote recorded"
                );
                Ok((record_address, record))
            }
            // A concurrent vote by the same voter won the storage race.
            Err(StoreError::Duplicate(_)) => Err(VotingError::DuplicateVote),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the voter record at `address`.
    pub fn get_voter_record(&self, address: &StorageAddress) -> Result<VoterRecord, VotingError> {
        Ok(self.store.get_voter_record(address)?)
    }
}
