//! In-memory train store.

use std::sync::RwLock;

use tracing::trace;

use crate::domain::{ClockTime, NewTrain, Ticket, Train, TrainId};

use super::TrainRepository;
use super::codec::{decode_route, encode_route};
use super::error::RepositoryError;

/// A train as held in the table, with its route in text form.
#[derive(Debug, Clone)]
struct StoredTrain {
    id: TrainId,
    route: String,
    departure: ClockTime,
    total_seats: u32,
    tickets: Vec<Ticket>,
}

impl StoredTrain {
    fn load(&self) -> Result<Train, RepositoryError> {
        let route = decode_route(&self.route).map_err(|source| RepositoryError::CorruptRoute {
            id: self.id,
            source,
        })?;

        Ok(Train {
            id: self.id,
            route,
            departure: self.departure,
            total_seats: self.total_seats,
            tickets: self.tickets.clone(),
        })
    }
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<StoredTrain>,
    last_id: u32,
}

/// Thread-safe train table kept in memory.
///
/// Ids are assigned sequentially from 1. `find_all` returns trains in the
/// order they were saved. Every read returns owned copies, so callers work
/// on a snapshot.
#[derive(Debug, Default)]
pub struct InMemoryTrainRepository {
    table: RwLock<Table>,
}

impl InMemoryTrainRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trains.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.rows.len())
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.read()?.rows.is_empty())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Table>, RepositoryError> {
        self.table
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }
}

impl TrainRepository for InMemoryTrainRepository {
    fn find_by_id(&self, id: TrainId) -> Result<Option<Train>, RepositoryError> {
        let table = self.read()?;
        table
            .rows
            .iter()
            .find(|row| row.id == id)
            .map(StoredTrain::load)
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<Train>, RepositoryError> {
        let table = self.read()?;
        table.rows.iter().map(StoredTrain::load).collect()
    }

    fn save(&self, train: NewTrain) -> Result<Train, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        table.last_id += 1;
        let id = TrainId(table.last_id);
        let row = StoredTrain {
            id,
            route: encode_route(&train.route),
            departure: train.departure,
            total_seats: train.total_seats,
            tickets: train.tickets.clone(),
        };
        trace!(%id, route = %row.route, "stored train");
        table.rows.push(row);

        Ok(train.into_train(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Passenger, Route, Station};

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn new_train(stations: Vec<Station>, departure: &str) -> NewTrain {
        NewTrain::new(Route::new(stations).unwrap(), time(departure), 10).unwrap()
    }

    #[test]
    fn empty_store() {
        let repo = InMemoryTrainRepository::new();
        assert!(repo.is_empty().unwrap());
        assert_eq!(repo.find_by_id(TrainId(1)).unwrap(), None);
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn save_assigns_sequential_ids() {
        let repo = InMemoryTrainRepository::new();
        let a = repo
            .save(new_train(vec![Station::Delhi, Station::Agra], "09:00"))
            .unwrap();
        let b = repo
            .save(new_train(vec![Station::Pune, Station::Goa], "10:00"))
            .unwrap();

        assert_eq!(a.id, TrainId(1));
        assert_eq!(b.id, TrainId(2));
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[test]
    fn find_by_id_returns_full_train() {
        let repo = InMemoryTrainRepository::new();
        let train = new_train(vec![Station::Delhi, Station::Agra, Station::Jaipur], "06:15")
            .with_ticket(Ticket::new(
                Station::Delhi,
                Station::Jaipur,
                vec![Passenger::new("Asha", 31)],
            ))
            .unwrap();
        let saved = repo.save(train).unwrap();

        let found = repo.find_by_id(saved.id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(
            found.route.stations(),
            &[Station::Delhi, Station::Agra, Station::Jaipur]
        );
        assert_eq!(found.tickets.len(), 1);
        assert_eq!(found.departure, time("06:15"));
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let repo = InMemoryTrainRepository::new();
        repo.save(new_train(vec![Station::Pune, Station::Goa], "10:00"))
            .unwrap();
        repo.save(new_train(vec![Station::Delhi, Station::Agra], "09:00"))
            .unwrap();
        repo.save(new_train(vec![Station::Patna, Station::Ranchi], "08:00"))
            .unwrap();

        let ids: Vec<_> = repo.find_all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TrainId(1), TrainId(2), TrainId(3)]);
    }

    #[test]
    fn corrupt_route_is_reported() {
        let repo = InMemoryTrainRepository::new();
        repo.table.write().unwrap().rows.push(StoredTrain {
            id: TrainId(9),
            route: "DELHI, ATLANTIS".into(),
            departure: time("09:00"),
            total_seats: 1,
            tickets: vec![],
        });

        let err = repo.find_by_id(TrainId(9)).unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptRoute { id: TrainId(9), .. }));
        assert!(repo.find_all().is_err());
    }
}
