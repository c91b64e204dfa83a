use thiserror::Error;

/// Errors surfaced by the showcase core
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// The record source could not be fetched or read
    #[error("record data unavailable: {0}")]
    DataUnavailable(String),

    /// Node count and layout target count disagree (wiring bug)
    #[error("layout mismatch: {nodes} nodes but {targets} targets")]
    LayoutMismatch { nodes: usize, targets: usize },

    /// Transitions must last at least one millisecond
    #[error("transition duration must be positive")]
    InvalidDuration,

    /// The configuration file is missing or malformed
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
