//! The poll registry — owns the Poll lifecycle: creation, tally increment,
//! closing.

use std::sync::Arc;

use agora_crypto::derive_poll_address;
use agora_store::{PollStore, StoreError};
use agora_types::{Poll, PollLimits, PollOption, PollStatus, PublicKey, StorageAddress};

use crate::error::VotingError;

/// Creates polls at derived addresses and gates lifecycle transitions on the
/// stored authority.
///
/// Uniqueness of `(creator, poll_id)` is not checked against any index: the
/// poll's address is a pure function of that pair, so a second creation
/// attempt collides at allocation time.
pub struct PollRegistry<S> {
    store: Arc<S>,
    limits: PollLimits,
}

impl<S: PollStore> PollRegistry<S> {
    pub fn new(store: Arc<S>, limits: PollLimits) -> Self {
        Self { store, limits }
    }

    pub fn limits(&self) -> &PollLimits {
        &self.limits
    }

    /// Create a new open poll owned by `authority`.
    ///
    /// Validates the option set and description lengths against the
    /// deployment limits, then allocates the poll at the address derived
    /// from `(authority, poll_id)`. An occupied address means this creator
    /// already used this id.
    pub fn create_poll(
        &self,
        authority: &PublicKey,
        poll_id: u64,
        description: impl Into<String>,
        option_descriptions: Vec<String>,
    ) -> Result<(StorageAddress, Poll), VotingError> {
        let description = description.into();

        if option_descriptions.is_empty() {
            return Err(VotingError::EmptyOptions);
        }
        if option_descriptions.len() > self.limits.max_options {
            return Err(VotingError::TooManyOptions {
                count: option_descriptions.len(),
                max: self.limits.max_options,
            });
        }
        if description.len() > self.limits.max_description_len {
            return Err(VotingError::DescriptionTooLong {
                len: description.len(),
                max: self.limits.max_description_len,
            });
        }
        for (index, option) in option_descriptions.iter().enumerate() {
            if option.len() > self.limits.max_option_len {
                return Err(VotingError::OptionDescriptionTooLong {
                    index,
                    len: option.len(),
                    max: self.limits.max_option_len,
                });
            }
        }

        let address = derive_poll_address(authority, poll_id);
        let poll = Poll {
            poll_id,
            authority: *authority,
            description,
            options: option_descriptions.into_iter().map(PollOption::new).collect(),
            status: PollStatus::Open,
        };

        match self.store.allocate_poll(&address, &poll) {
            Ok(()) => {
                tracing::debug!(address = %address, poll_id, "poll created");
                Ok((address, poll))
            }
            Err(StoreError::Duplicate(_)) => Err(VotingError::DuplicatePoll { poll_id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Close the poll `(requester, poll_id)`.
    ///
    /// The poll is looked up through the address derived from the CLAIMED
    /// authority, and the stored authority must match the requester as well.
    /// Both checks agreeing is what defeats address substitution: a caller
    /// cannot reach someone else's poll through its own derivation, and a
    /// record reached through a forged derivation fails the identity match.
    /// Closing an already-closed poll is an allowed no-op.
    pub fn end_poll(
        &self,
        requester: &PublicKey,
        poll_id: u64,
    ) -> Result<(StorageAddress, Poll), VotingError> {
        let address = derive_poll_address(requester, poll_id);
        let mut poll = match self.store.get_poll(&address) {
            Ok(poll) => poll,
            // Nothing at the claimed authority's address: externally the
            // same failure kind as a stored-authority mismatch.
            Err(StoreError::NotFound(_)) => return Err(VotingError::AuthorityMismatch),
            Err(e) => return Err(e.into()),
        };
        if poll.authority != *requester {
            return Err(VotingError::AuthorityMismatch);
        }

        poll.status = PollStatus::Closed;
        self.store.update_poll(&address, &poll)?;
        tracing::debug!(address = %address, poll_id, "poll closed");
        Ok((address, poll))
    }

    /// Fetch the poll at `address`.
    pub fn get_poll(&self, address: &StorageAddress) -> Result<Poll, VotingError> {
        match self.store.get_poll(address) {
            Ok(poll) => Ok(poll),
            Err(StoreError::NotFound(_)) => Err(VotingError::PollNotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Increment the tally of `option_index` on an open poll.
///
/// Crate-internal: only the vote ledger applies tallies, under the same
/// atomic commit as the voter record. Checks run in the externally
/// observable order — closed poll first, then index bounds.
pub(crate) fn apply_vote(poll: &mut Poll, option_index: u8) -> Result<(), VotingError> {
    if !poll.is_open() {
        return Err(VotingError::PollClosed);
    }
    let option_count = poll.option_count();
    let option = poll
        .options
        .get_mut(option_index as usize)
        .ok_or(VotingError::InvalidOptionIndex {
            index: option_index,
            option_count,
        })?;
    option.votes = option.votes.checked_add(1).ok_or_else(|| {
        VotingError::IntegrityViolation(format!("tally overflow on option {option_index}"))
    })?;
    Ok(())
}
