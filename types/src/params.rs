//! Deployment-imposed poll limits.
//!
//! The maximum option count and description lengths are environment limits
//! (record sizing), not rules of the voting logic. They are therefore
//! configurable bounds handed to the registry at construction, never
//! hard-coded constants inside an operation.

use serde::{Deserialize, Serialize};

/// Upper bounds a deployment imposes on newly created polls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollLimits {
    /// Maximum number of options a poll may carry.
    pub max_options: usize,

    /// Maximum length (bytes) of a poll's description.
    pub max_description_len: usize,

    /// Maximum length (bytes) of a single option's description.
    pub max_option_len: usize,
}

impl PollLimits {
    /// The reference deployment bounds: 10 options, 256-byte poll
    /// description, 64-byte option descriptions.
    pub fn reference_defaults() -> Self {
        Self {
            max_options: 10,
            max_description_len: 256,
            max_option_len: 64,
        }
    }
}

impl Default for PollLimits {
    fn default() -> Self {
        Self::reference_defaults()
    }
}
