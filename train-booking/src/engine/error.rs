//! Engine error types.

use crate::domain::{DomainError, Station, TrainId};
use crate::repository::RepositoryError;

/// Error from a route query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// No train with this id is stored
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// The train's route does not include the station
    #[error("train {train} does not pass through {station}")]
    StationNotServed { train: TrainId, station: Station },

    /// The store failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error registering a new train.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Route, seats or tickets are invalid
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The store failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
