//! LMDB implementation of PollStore.
//!
//! Keys are the raw 32 bytes of the derived poll address; values are
//! bincode-encoded [`Poll`] records.

use agora_store::{PollStore, StoreError};
use agora_types::{Poll, StorageAddress};

use crate::environment::LmdbEnvironment;
use crate::LmdbError;

impl PollStore for LmdbEnvironment {
    fn allocate_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError> {
        let bytes = bincode::serialize(poll).map_err(LmdbError::from)?;
        let mut wtxn = self.env().write_txn().map_err(LmdbError::from)?;
        // Occupancy check and put share the write transaction; LMDB's single
        // writer serializes racing allocations of the same address.
        if self
            .polls_db
            .get(&wtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .is_some()
        {
            return Err(StoreError::Duplicate(address.to_string()));
        }
        self.polls_db
            .put(&mut wtxn, address.as_bytes(), &bytes)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn get_poll(&self, address: &StorageAddress) -> Result<Poll, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let val = self
            .polls_db
            .get(&rtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .ok_or_else(|| StoreError::NotFound(address.to_string()))?;
        let poll: Poll = bincode::deserialize(val).map_err(LmdbError::from)?;
        Ok(poll)
    }

    fn update_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError> {
        let bytes = bincode::serialize(poll).map_err(LmdbError::from)?;
        let mut wtxn = self.env().write_txn().map_err(LmdbError::from)?;
        if self
            .polls_db
            .get(&wtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .is_none()
        {
            return Err(StoreError::NotFound(address.to_string()));
        }
        self.polls_db
            .put(&mut wtxn, address.as_bytes(), &bytes)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn poll_exists(&self, address: &StorageAddress) -> Result<bool, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        Ok(self
            .polls_db
            .get(&rtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .is_some())
    }

    fn poll_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let count = self.polls_db.len(&rtxn).map_err(LmdbError::from)?;
        Ok(count)
    }
}
