//! Error types for the crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("environment size {size} is too small (a chain needs at least 2 states)")]
    EnvironmentTooSmall { size: usize },

    #[error("learning-rate schedule has {alphas} entries but {episodes} episodes are configured")]
    ScheduleTooShort { episodes: usize, alphas: usize },

    #[error("no learning rate for episode {episode}")]
    MissingLearningRate { episode: usize },

    #[error("action set is empty")]
    EmptyActionSet,

    #[error("invalid value for `{name}`: {value} (must be in the interval [{low}, {high}])")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("invalid decay strategy: {0}")]
    InvalidDecay(String),

    #[error("action {action} from state {state} leads to a neighbor that does not exist")]
    UndefinedTransition { state: usize, action: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error stems from invalid configuration, as opposed to a fault during a run
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::EnvironmentTooSmall { .. }
                | Error::ScheduleTooShort { .. }
                | Error::MissingLearningRate { .. }
                | Error::EmptyActionSet
                | Error::InvalidHyperparameter { .. }
                | Error::InvalidDecay(_)
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
