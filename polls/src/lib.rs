//! Poll registry and vote ledger engines for the Agora poll ledger.
//!
//! All state-transition logic lives here: poll creation at derived
//! addresses, one-vote-per-participant gating, authority-controlled
//! closing. Storage is abstract (`agora_store::VotingStore`); callers wire
//! in the LMDB backend or the in-memory null store.

pub mod error;
pub mod ledger;
pub mod registry;

pub use error::VotingError;
pub use ledger::VoteLedger;
pub use registry::PollRegistry;
