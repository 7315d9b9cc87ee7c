//! Train storage.
//!
//! The query engine only sees the [`TrainRepository`] trait. The store
//! keeps routes in text form (see [`codec`]) and turns them back into
//! typed routes before anything leaves it.

pub mod codec;
mod error;
mod fixture;
mod memory;

use std::sync::Arc;

use crate::domain::{NewTrain, Train, TrainId};

pub use codec::{ROUTE_DELIMITER, RouteDecodeError, decode_route, encode_route};
pub use error::RepositoryError;
pub use fixture::{FixtureError, load_fixture, parse_fixture, seed_repository};
pub use memory::InMemoryTrainRepository;

/// Storage for trains and their booked tickets.
///
/// Every returned `Train` is complete: route, seats, departure time and all
/// tickets with their passengers.
pub trait TrainRepository {
    /// Look up one train.
    fn find_by_id(&self, id: TrainId) -> Result<Option<Train>, RepositoryError>;

    /// Every stored train, in storage order.
    fn find_all(&self) -> Result<Vec<Train>, RepositoryError>;

    /// Store a new train and return it with its assigned id.
    fn save(&self, train: NewTrain) -> Result<Train, RepositoryError>;
}

impl<T: TrainRepository + ?Sized> TrainRepository for &T {
    fn find_by_id(&self, id: TrainId) -> Result<Option<Train>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Train>, RepositoryError> {
        (**self).find_all()
    }

    fn save(&self, train: NewTrain) -> Result<Train, RepositoryError> {
        (**self).save(train)
    }
}

impl<T: TrainRepository + ?Sized> TrainRepository for Arc<T> {
    fn find_by_id(&self, id: TrainId) -> Result<Option<Train>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Train>, RepositoryError> {
        (**self).find_all()
    }

    fn save(&self, train: NewTrain) -> Result<Train, RepositoryError> {
        (**self).save(train)
    }
}
