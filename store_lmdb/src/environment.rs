//! LMDB environment setup and the atomic vote commit.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use agora_store::{StoreError, VotingStore};
use agora_types::{Poll, StorageAddress, VoterRecord};

use crate::LmdbError;

/// Wraps the LMDB environment and all database handles.
///
/// One environment holds two databases, each keyed by the raw 32-byte
/// derived address: `polls` and `voter_records`. Values are bincode.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    pub(crate) polls_db: Database<Bytes, Bytes>,
    pub(crate) voter_records_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, max_dbs: u32, map_size: usize) -> Result<Self, LmdbError> {
        // Safety: the environment is opened once per path per process.
        let env = unsafe {
            EnvOpenOptions::new()
                .max_dbs(max_dbs)
                .map_size(map_size)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let polls_db = env.create_database::<Bytes, Bytes>(&mut wtxn, Some("polls"))?;
        let voter_records_db =
            env.create_database::<Bytes, Bytes>(&mut wtxn, Some("voter_records"))?;
        wtxn.commit()?;

        tracing::debug!(path = %path.display(), "opened LMDB environment");

        Ok(Self {
            env: Arc::new(env),
            polls_db,
            voter_records_db,
        })
    }

    /// Access the raw heed environment.
    pub fn env(&self) -> &Env {
        &self.env
    }
}

impl VotingStore for LmdbEnvironment {
    /// Allocate the voter record and overwrite its poll inside a single
    /// LMDB write transaction — the only fsync for the whole vote. If the
    /// transaction is not committed (occupied record address, missing poll,
    /// backend failure), every write in it is rolled back.
    fn commit_vote(
        &self,
        record_address: &StorageAddress,
        record: &VoterRecord,
        poll_address: &StorageAddress,
        poll: &Poll,
    ) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;

        // The occupancy check and both puts share the transaction, so a
        // racing duplicate serializes behind LMDB's single writer and sees
        // the committed record.
        if self
            .voter_records_db
            .get(&wtxn, record_address.as_bytes())
            .map_err(LmdbError::from)?
            .is_some()
        {
            return Err(StoreError::Duplicate(record_address.to_string()));
        }
        if self
            .polls_db
            .get(&wtxn, poll_address.as_bytes())
            .map_err(LmdbError::from)?
            .is_none()
        {
            return Err(StoreError::NotFound(poll_address.to_string()));
        }

        let record_bytes = bincode::serialize(record).map_err(LmdbError::from)?;
        self.voter_records_db
            .put(&mut wtxn, record_address.as_bytes(), &record_bytes)
            .map_err(LmdbError::from)?;

        let poll_bytes = bincode::serialize(poll).map_err(LmdbError::from)?;
        self.polls_db
            .put(&mut wtxn, poll_address.as_bytes(), &poll_bytes)
            .map_err(LmdbError::from)?;

        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }
}
