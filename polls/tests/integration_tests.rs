//! Integration tests exercising the full voting pipeline:
//! poll creation → vote casting → closing → LMDB persistence → readback.
//!
//! The same engines run against the in-memory null store and the LMDB
//! backend; both must show identical contract behavior.

use std::sync::Arc;

use agora_crypto::{derive_poll_address, derive_voter_record_address, keypair_from_seed};
use agora_nullables::NullStore;
use agora_polls::{PollRegistry, VoteLedger, VotingError};
use agora_store::{PollStore, VoterRecordStore, VotingStore};
use agora_store_lmdb::LmdbEnvironment;
use agora_types::{PollLimits, PollStatus, PublicKey};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn temp_env() -> (tempfile::TempDir, Arc<LmdbEnvironment>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let env = LmdbEnvironment::open(dir.path(), 10, 64 * 1024 * 1024).expect("open env");
    (dir, Arc::new(env))
}

fn identity(seed: u8) -> PublicKey {
    keypair_from_seed(&[seed; 32]).public
}

fn engines<S: VotingStore>(store: Arc<S>) -> (PollRegistry<S>, VoteLedger<S>) {
    (
        PollRegistry::new(store.clone(), PollLimits::default()),
        VoteLedger::new(store),
    )
}

fn language_options() -> Vec<String> {
    vec![
        "Rust".to_string(),
        "TypeScript".to_string(),
        "Python".to_string(),
    ]
}

/// The contract scenarios, runnable against any backend.
fn run_poll_lifecycle<S: VotingStore>(store: Arc<S>) {
    let (registry, ledger) = engines(store);
    let authority = identity(1);
    let voter = identity(10);

    // Create → fetch returns an open poll with three zeroed options.
    let (poll_address, _) = registry
        .create_poll(&authority, 1, "What is your favorite programming language?", language_options())
        .unwrap();
    let poll = registry.get_poll(&poll_address).unwrap();
    assert_eq!(poll.poll_id, 1);
    assert_eq!(poll.authority, authority);
    assert!(poll.is_open());
    assert_eq!(poll.option_count(), 3);
    assert_eq!(poll.options[0].description, "Rust");
    assert!(poll.options.iter().all(|o| o.votes == 0));

    // Vote for option 0: tally 1, record references poll and index.
    let (record_address, record) = ledger.cast_vote(&voter, &poll_address, 0).unwrap();
    assert_eq!(record_address, derive_voter_record_address(&voter, &poll_address));
    assert_eq!(record.poll, poll_address);
    assert_eq!(record.voter, voter);
    assert_eq!(record.option_index, 0);
    assert_eq!(registry.get_poll(&poll_address).unwrap().options[0].votes, 1);

    // Second vote by the same voter, different index: rejected, tally kept.
    assert!(matches!(
        ledger.cast_vote(&voter, &poll_address, 2),
        Err(VotingError::DuplicateVote)
    ));
    let poll = registry.get_poll(&poll_address).unwrap();
    assert_eq!(poll.options[0].votes, 1);
    assert_eq!(poll.options[2].votes, 0);

    // Closing by a different identity fails; the poll stays open.
    assert!(matches!(
        registry.end_poll(&identity(2), 1),
        Err(VotingError::AuthorityMismatch)
    ));
    assert!(registry.get_poll(&poll_address).unwrap().is_open());

    // Closing by the authority succeeds; further votes bounce off.
    let (_, closed) = registry.end_poll(&authority, 1).unwrap();
    assert_eq!(closed.status, PollStatus::Closed);
    assert!(matches!(
        ledger.cast_vote(&identity(11), &poll_address, 1),
        Err(VotingError::PollClosed)
    ));
    assert_eq!(registry.get_poll(&poll_address).unwrap().total_votes(), 1);
}

// ---------------------------------------------------------------------------
// 1. Contract scenarios on both backends
// ---------------------------------------------------------------------------

#[test]
fn poll_lifecycle_null_store() {
    run_poll_lifecycle(Arc::new(NullStore::new()));
}

#[test]
fn poll_lifecycle_lmdb() {
    let (_dir, env) = temp_env();
    run_poll_lifecycle(env);
}

#[test]
fn invalid_index_on_single_option_poll() {
    let (registry, ledger) = engines(Arc::new(NullStore::new()));
    let (address, _) = registry
        .create_poll(&identity(1), 3, "only one choice", vec!["yes".to_string()])
        .unwrap();

    // Index 1 is already out of range on a single-option poll.
    assert!(matches!(
        ledger.cast_vote(&identity(10), &address, 1),
        Err(VotingError::InvalidOptionIndex { index: 1, option_count: 1 })
    ));
    assert!(matches!(
        ledger.cast_vote(&identity(10), &address, 5),
        Err(VotingError::InvalidOptionIndex { index: 5, option_count: 1 })
    ));
    assert_eq!(registry.get_poll(&address).unwrap().total_votes(), 0);
}

// ---------------------------------------------------------------------------
// 2. Independent polls and creators
// ---------------------------------------------------------------------------

#[test]
fn independent_polls_do_not_interfere() {
    let (_dir, env) = temp_env();
    let (registry, ledger) = engines(env.clone());
    let creator_a = identity(1);
    let creator_b = identity(2);

    // Same poll id under two creators: two distinct polls.
    let (addr_a, _) = registry
        .create_poll(&creator_a, 7, "a's poll", language_options())
        .unwrap();
    let (addr_b, _) = registry
        .create_poll(&creator_b, 7, "b's poll", language_options())
        .unwrap();
    assert_ne!(addr_a, addr_b);

    // One voter may vote on both polls; records are keyed per (voter, poll).
    let voter = identity(10);
    ledger.cast_vote(&voter, &addr_a, 0).unwrap();
    ledger.cast_vote(&voter, &addr_b, 1).unwrap();

    assert_eq!(registry.get_poll(&addr_a).unwrap().options[0].votes, 1);
    assert_eq!(registry.get_poll(&addr_b).unwrap().options[1].votes, 1);

    // Closing a's poll leaves b's poll open.
    registry.end_poll(&creator_a, 7).unwrap();
    assert!(!registry.get_poll(&addr_a).unwrap().is_open());
    assert!(registry.get_poll(&addr_b).unwrap().is_open());

    assert_eq!(env.poll_count().unwrap(), 2);
    assert_eq!(env.voter_record_count().unwrap(), 2);
}

#[test]
fn duplicate_creation_rejected_per_creator() {
    let (_dir, env) = temp_env();
    let (registry, _) = engines(env.clone());
    let authority = identity(1);

    registry
        .create_poll(&authority, 1, "first", language_options())
        .unwrap();
    assert!(matches!(
        registry.create_poll(&authority, 1, "second", language_options()),
        Err(VotingError::DuplicatePoll { poll_id: 1 })
    ));
    assert_eq!(env.poll_count().unwrap(), 1);
    // The loser's payload must not have overwritten the winner's.
    let poll = registry
        .get_poll(&derive_poll_address(&authority, 1))
        .unwrap();
    assert_eq!(poll.description, "first");
}

// ---------------------------------------------------------------------------
// 3. LMDB persistence
// ---------------------------------------------------------------------------

#[test]
fn votes_survive_environment_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let authority = identity(1);
    let poll_address;

    {
        let env = Arc::new(
            LmdbEnvironment::open(dir.path(), 10, 64 * 1024 * 1024).expect("open env"),
        );
        let (registry, ledger) = engines(env);
        let (address, _) = registry
            .create_poll(&authority, 1, "persistent poll", language_options())
            .unwrap();
        poll_address = address;
        for seed in 10..13 {
            ledger.cast_vote(&identity(seed), &address, 2).unwrap();
        }
        registry.end_poll(&authority, 1).unwrap();
    }

    let env = Arc::new(
        LmdbEnvironment::open(dir.path(), 10, 64 * 1024 * 1024).expect("reopen env"),
    );
    let (registry, ledger) = engines(env.clone());

    let poll = registry.get_poll(&poll_address).unwrap();
    assert_eq!(poll.status, PollStatus::Closed);
    assert_eq!(poll.options[2].votes, 3);
    assert_eq!(env.voter_record_count().unwrap(), 3);

    // The closed state and the one-vote gate both survive the reopen.
    assert!(matches!(
        ledger.cast_vote(&identity(20), &poll_address, 0),
        Err(VotingError::PollClosed)
    ));
    let record_address = derive_voter_record_address(&identity(10), &poll_address);
    assert!(env.voter_record_exists(&record_address).unwrap());
}

// ---------------------------------------------------------------------------
// 4. Tally correctness at modest scale
// ---------------------------------------------------------------------------

#[test]
fn tally_sums_match_distinct_voters_lmdb() {
    let (_dir, env) = temp_env();
    let (registry, ledger) = engines(env);
    let authority = identity(1);
    let (address, _) = registry
        .create_poll(&authority, 1, "spread", language_options())
        .unwrap();

    let mut successes = 0u64;
    for seed in 0..60u8 {
        let voter = keypair_from_seed(&[seed.wrapping_add(100); 32]).public;
        let index = seed % 4; // index 3 is out of range on purpose
        match ledger.cast_vote(&voter, &address, index) {
            Ok(_) => successes += 1,
            Err(VotingError::InvalidOptionIndex { .. }) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    let poll = registry.get_poll(&address).unwrap();
    assert_eq!(poll.total_votes(), successes);
    assert_eq!(poll.options[0].votes + poll.options[1].votes + poll.options[2].votes, successes);
}
