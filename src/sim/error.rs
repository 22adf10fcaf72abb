use std::fmt;

pub type SimResult<T> = std::result::Result<T, SimError>;

/// Simulation failures. A failed call returns no partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Rejected parameters, reported before any sequence is generated.
    InvalidConfiguration(String),
    /// The bounded retry loop could not place the requested number of
    /// non-overlapping motif instances inside the window.
    PlacementExhausted { num_instances: usize, window: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimError::PlacementExhausted {
                num_instances,
                window,
            } => write!(
                f,
                "Failed to place {} non-overlapping motif instances in a window of {} bp",
                num_instances, window
            ),
        }
    }
}

impl std::error::Error for SimError {}
