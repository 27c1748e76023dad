//! LMDB implementation of VoterRecordStore.
//!
//! Voter records are written only by `commit_vote` (see `environment.rs`);
//! this file covers the read side.

use agora_store::{StoreError, VoterRecordStore};
use agora_types::{StorageAddress, VoterRecord};

use crate::environment::LmdbEnvironment;
use crate::LmdbError;

impl VoterRecordStore for LmdbEnvironment {
    fn get_voter_record(&self, address: &StorageAddress) -> Result<VoterRecord, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let val = self
            .voter_records_db
            .get(&rtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .ok_or_else(|| StoreError::NotFound(address.to_string()))?;
        let record: VoterRecord = bincode::deserialize(val).map_err(LmdbError::from)?;
        Ok(record)
    }

    fn voter_record_exists(&self, address: &StorageAddress) -> Result<bool, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        Ok(self
            .voter_records_db
            .get(&rtxn, address.as_bytes())
            .map_err(LmdbError::from)?
            .is_some())
    }

    fn voter_record_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env().read_txn().map_err(LmdbError::from)?;
        let count = self
            .voter_records_db
            .len(&rtxn)
            .map_err(LmdbError::from)?;
        Ok(count)
    }
}
