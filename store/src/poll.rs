//! Poll storage trait.

use crate::StoreError;
use agora_types::{Poll, StorageAddress};

/// Trait for poll record storage, keyed by derived address.
pub trait PollStore {
    /// Allocate a new poll at `address`.
    ///
    /// Fails with [`StoreError::Duplicate`] if the address is already
    /// occupied — this collision is what makes "one poll per (creator, id)"
    /// hold without a global index or lock.
    fn allocate_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError>;

    /// Retrieve the poll at `address`.
    fn get_poll(&self, address: &StorageAddress) -> Result<Poll, StoreError>;

    /// Overwrite the poll at an already-occupied `address`.
    ///
    /// Fails with [`StoreError::NotFound`] if nothing was allocated there;
    /// update never creates.
    fn update_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError>;

    /// Check whether a poll exists at `address`.
    fn poll_exists(&self, address: &StorageAddress) -> Result<bool, StoreError>;

    /// Total number of polls in the store.
    fn poll_count(&self) -> Result<u64, StoreError>;
}
