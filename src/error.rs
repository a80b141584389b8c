use thiserror::Error;

/// Errors raised while building a flight network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("flight {source_city} -> {destination} has negative distance {weight}")]
    NegativeDistance {
        source_city: String,
        destination: String,
        weight: i64,
    },

    #[error("flight {source_city} -> {destination} already exists")]
    DuplicateFlight {
        source_city: String,
        destination: String,
    },

    #[error("invalid flight {0:?} (expected SOURCE,DESTINATION,DISTANCE)")]
    InvalidFlight(String),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
