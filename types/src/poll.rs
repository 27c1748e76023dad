//! The poll/vote data model.

use crate::address::StorageAddress;
use crate::keys::PublicKey;
use serde::{Deserialize, Serialize};

/// Whether a poll still accepts votes.
///
/// Polls start `Open`; `Closed` is terminal. Tally counters only move while
/// the poll is `Open` and are frozen once it is `Closed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollStatus {
    Open,
    Closed,
}

/// One selectable option of a poll: its text and its running tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub description: String,
    pub votes: u64,
}

impl PollOption {
    /// A fresh option with a zero tally.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            votes: 0,
        }
    }
}

/// A poll record, stored at the address derived from `(authority, poll_id)`.
///
/// `poll_id` is caller-supplied and unique per creator only — two creators
/// may reuse the same id because their derived addresses differ. The option
/// sequence is fixed at creation: never resized, option text never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub poll_id: u64,
    pub authority: PublicKey,
    pub description: String,
    pub options: Vec<PollOption>,
    pub status: PollStatus,
}

impl Poll {
    pub fn is_open(&self) -> bool {
        self.status == PollStatus::Open
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Sum of all option tallies.
    ///
    /// Equals the number of distinct voters who successfully voted — each
    /// voter contributes exactly one increment to exactly one option.
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }
}

/// The one-time proof that `voter` voted on the poll at `poll`.
///
/// Stored at the address derived from `(voter, poll)`, so a second vote by
/// the same voter collides at allocation time instead of needing a scan.
/// The `poll` field is a non-owning back-reference kept for auditability;
/// it is never used for cascading mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub poll: StorageAddress,
    pub voter: PublicKey,
    pub option_index: u8,
}
