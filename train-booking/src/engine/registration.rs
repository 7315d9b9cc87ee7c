//! Adding trains to the network.

use tracing::info;

use crate::domain::{ClockTime, NewTrain, Route, Station, TrainId};
use crate::repository::TrainRepository;

use super::error::RegistrationError;

/// Creates trains through a repository.
pub struct TrainRegistry<R> {
    repository: R,
}

impl<R: TrainRepository> TrainRegistry<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Register a train with no bookings and return its new id.
    ///
    /// `stations` is the calling order; the train leaves the first station
    /// at `departure` and reaches each later one an hour after the last.
    pub fn add_train(
        &self,
        stations: Vec<Station>,
        departure: ClockTime,
        total_seats: u32,
    ) -> Result<TrainId, RegistrationError> {
        let route = Route::new(stations)?;
        let train = NewTrain::new(route, departure, total_seats)?;
        let saved = self.repository.save(train)?;

        info!(
            id = %saved.id,
            origin = %saved.route.origin(),
            terminus = %saved.route.terminus(),
            %departure,
            total_seats,
            "registered train"
        );
        Ok(saved.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::repository::InMemoryTrainRepository;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn add_train_stores_route_and_returns_id() {
        let repo = InMemoryTrainRepository::new();
        let registry = TrainRegistry::new(&repo);

        let id = registry
            .add_train(
                vec![Station::Chennai, Station::Bangalore, Station::Goa],
                time("07:45"),
                120,
            )
            .unwrap();
        assert_eq!(id, TrainId(1));

        let stored = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(
            stored.route.stations(),
            &[Station::Chennai, Station::Bangalore, Station::Goa]
        );
        assert_eq!(stored.departure, time("07:45"));
        assert_eq!(stored.total_seats, 120);
        assert!(stored.tickets.is_empty());
    }

    #[test]
    fn ids_increase_per_registration() {
        let repo = InMemoryTrainRepository::new();
        let registry = TrainRegistry::new(&repo);

        let a = registry
            .add_train(vec![Station::Delhi, Station::Agra], time("08:00"), 1)
            .unwrap();
        let b = registry
            .add_train(vec![Station::Agra, Station::Delhi], time("18:00"), 1)
            .unwrap();
        assert_eq!((a, b), (TrainId(1), TrainId(2)));
    }

    #[test]
    fn invalid_trains_are_not_stored() {
        let repo = InMemoryTrainRepository::new();
        let registry = TrainRegistry::new(&repo);

        let err = registry
            .add_train(vec![Station::Delhi], time("08:00"), 10)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::Invalid(DomainError::InvalidRoute(_))
        ));

        let err = registry
            .add_train(
                vec![Station::Delhi, Station::Agra, Station::Delhi],
                time("08:00"),
                10,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::Invalid(DomainError::DuplicateStation(Station::Delhi))
        ));

        let err = registry
            .add_train(vec![Station::Delhi, Station::Agra], time("08:00"), 0)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::Invalid(DomainError::NoSeats)));

        assert!(repo.is_empty().unwrap());
    }
}
