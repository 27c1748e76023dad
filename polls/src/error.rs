use agora_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VotingError {
    #[error("a poll with id {poll_id} already exists for this creator")]
    DuplicatePoll { poll_id: u64 },

    #[error("no poll at the given address")]
    PollNotFound,

    #[error("a poll needs at least one option")]
    EmptyOptions,

    #[error("too many options: {count} exceeds the limit of {max}")]
    TooManyOptions { count: usize, max: usize },

    #[error("poll description too long: {len} exceeds the limit of {max} bytes")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("option {index} description too long: {len} exceeds the limit of {max} bytes")]
    OptionDescriptionTooLong { index: usize, len: usize, max: usize },

    #[error("option index {index} out of range for a poll with {option_count} options")]
    InvalidOptionIndex { index: u8, option_count: usize },

    #[error("poll is closed to further votes")]
    PollClosed,

    #[error("this voter has already voted on this poll")]
    DuplicateVote,

    #[error("requester is not the poll's authority")]
    AuthorityMismatch,

    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
