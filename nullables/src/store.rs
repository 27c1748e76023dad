//! Nullable store — thread-safe in-memory storage for testing.

use agora_store::{PollStore, StoreError, VoterRecordStore, VotingStore};
use agora_types::{Poll, StorageAddress, VoterRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory poll + voter record store for testing.
///
/// Mirrors the backend contract exactly: allocation fails on an occupied
/// address, and `commit_vote` applies both writes or neither.
pub struct NullStore {
    polls: Mutex<HashMap<[u8; 32], Poll>>,
    voter_records: Mutex<HashMap<[u8; 32], VoterRecord>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            polls: Mutex::new(HashMap::new()),
            voter_records: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStore for NullStore {
    fn allocate_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError> {
        let mut polls = self.polls.lock().unwrap();
        if polls.contains_key(address.as_bytes()) {
            return Err(StoreError::Duplicate(address.to_string()));
        }
        polls.insert(*address.as_bytes(), poll.clone());
        Ok(())
    }

    fn get_poll(&self, address: &StorageAddress) -> Result<Poll, StoreError> {
        self.polls
            .lock()
            .unwrap()
            .get(address.as_bytes())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(address.to_string()))
    }

    fn update_poll(&self, address: &StorageAddress, poll: &Poll) -> Result<(), StoreError> {
        let mut polls = self.polls.lock().unwrap();
        match polls.get_mut(address.as_bytes()) {
            Some(slot) => {
                *slot = poll.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(address.to_string())),
        }
    }

    fn poll_exists(&self, address: &StorageAddress) -> Result<bool, StoreError> {
        Ok(self.polls.lock().unwrap().contains_key(address.as_bytes()))
    }

    fn poll_count(&self) -> Result<u64, StoreError> {
        Ok(self.polls.lock().unwrap().len() as u64)
    }
}

impl VoterRecordStore for NullStore {
    fn get_voter_record(&self, address: &StorageAddress) -> Result<VoterRecord, StoreError> {
        self.voter_records
            .lock()
            .unwrap()
            .get(address.as_bytes())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(address.to_string()))
    }

    fn voter_record_exists(&self, address: &StorageAddress) -> Result<bool, StoreError> {
        Ok(self
            .voter_records
            .lock()
            .unwrap()
            .contains_key(address.as_bytes()))
    }

    fn voter_record_count(&self) -> Result<u64, StoreError> {
        Ok(self.voter_records.lock().unwrap().len() as u64)
    }
}

impl VotingStore for NullStore {
    fn commit_vote(
        &self,
        record_address: &StorageAddress,
        record: &VoterRecord,
        poll_address: &StorageAddress,
        poll: &Poll,
    ) -> Result<(), StoreError> {
        // Both locks are held across the checks and the writes, so the pair
        // is all-or-nothing and racing duplicates serialize here.
        let mut polls = self.polls.lock().unwrap();
        let mut records = self.voter_records.lock().unwrap();

        if records.contains_key(record_address.as_bytes()) {
            return Err(StoreError::Duplicate(record_address.to_string()));
        }
        let slot = polls
            .get_mut(poll_address.as_bytes())
            .ok_or_else(|| StoreError::NotFound(poll_address.to_string()))?;

        records.insert(*record_address.as_bytes(), record.clone());
        *slot = poll.clone();
        Ok(())
    }
}
