//! Repository error types.

use crate::domain::TrainId;

use super::codec::RouteDecodeError;

/// Errors from the train store.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A stored route no longer reads back as a valid route
    #[error("stored route for train {id} is corrupt: {source}")]
    CorruptRoute {
        id: TrainId,
        #[source]
        source: RouteDecodeError,
    },

    /// The store could not be accessed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepositoryError::Unavailable("lock poisoned".into());
        assert_eq!(err.to_string(), "store unavailable: lock poisoned");

        let err = RepositoryError::CorruptRoute {
            id: TrainId(3),
            source: RouteDecodeError::UnknownStation("LONDON".into()),
        };
        assert_eq!(
            err.to_string(),
            "stored route for train 3 is corrupt: unknown station \"LONDON\" in stored route"
        );
    }
}
