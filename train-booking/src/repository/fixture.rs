//! Seed data loaded from a JSON file.
//!
//! Lets a store start with trains that already have booked tickets, which
//! is how the query endpoints get data to work on.
//!
//! ```json
//! {
//!   "trains": [
//!     {
//!       "departure_time": "09:00",
//!       "total_seats": 2,
//!       "route": ["DELHI", "AGRA", "KANPUR"],
//!       "tickets": [
//!         {
//!           "from_station": "DELHI",
//!           "to_station": "KANPUR",
//!           "passengers": [{ "name": "Asha", "age": 40 }]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{
    ClockTime, DomainError, InvalidStation, NewTrain, Passenger, Route, Station, Ticket, TimeError,
    Train,
};

use super::TrainRepository;
use super::error::RepositoryError;

/// Errors loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Train at this index in the file is invalid
    #[error("train #{index}: {message}")]
    Invalid { index: usize, message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    trains: Vec<FixtureTrain>,
}

#[derive(Debug, Deserialize)]
struct FixtureTrain {
    departure_time: String,
    total_seats: u32,
    route: Vec<String>,
    #[serde(default)]
    tickets: Vec<FixtureTicket>,
}

#[derive(Debug, Deserialize)]
struct FixtureTicket {
    from_station: String,
    to_station: String,
    passengers: Vec<FixturePassenger>,
}

#[derive(Debug, Deserialize)]
struct FixturePassenger {
    #[serde(default)]
    name: String,
    age: u32,
}

/// Why one fixture train was rejected.
#[derive(Debug, thiserror::Error)]
enum EntryError {
    #[error(transparent)]
    Station(#[from] InvalidStation),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl FixtureTrain {
    fn into_new_train(self) -> Result<NewTrain, EntryError> {
        let stations = self
            .route
            .iter()
            .map(|name| Station::parse(name))
            .collect::<Result<Vec<_>, _>>()?;
        let route = Route::new(stations)?;
        let departure = ClockTime::parse(&self.departure_time)?;

        let mut train = NewTrain::new(route, departure, self.total_seats)?;
        for ticket in self.tickets {
            let passengers = ticket
                .passengers
                .into_iter()
                .map(|p| Passenger::new(p.name, p.age))
                .collect();
            train = train.with_ticket(Ticket::new(
                Station::parse(&ticket.from_station)?,
                Station::parse(&ticket.to_station)?,
                passengers,
            ))?;
        }
        Ok(train)
    }
}

/// Parse fixture JSON into unsaved trains.
pub fn parse_fixture(json: &str, path: &Path) -> Result<Vec<NewTrain>, FixtureError> {
    let file: FixtureFile = serde_json::from_str(json).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    file.trains
        .into_iter()
        .enumerate()
        .map(|(index, train)| {
            train.into_new_train().map_err(|e| FixtureError::Invalid {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read a fixture file.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Vec<NewTrain>, FixtureError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&json, path)
}

/// Read a fixture file and save every train in it, in file order.
pub fn seed_repository<R: TrainRepository>(
    repository: &R,
    path: impl AsRef<Path>,
) -> Result<Vec<Train>, FixtureError> {
    load_fixture(path)?
        .into_iter()
        .map(|train| repository.save(train).map_err(FixtureError::from))
        .collect()
}
