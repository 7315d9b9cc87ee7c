//! Read-only queries over stored trains and their bookings.

use tracing::{debug, trace};

use crate::domain::{ClockTime, Station, Train, TrainId};
use crate::repository::TrainRepository;

use super::error::QueryError;

/// Answers occupancy and timetable questions about trains.
///
/// Each call fetches its own snapshot from the repository and computes
/// from that copy alone; nothing is cached between calls.
pub struct RouteQueryEngine<R> {
    repository: R,
}

impl<R: TrainRepository> RouteQueryEngine<R> {
    /// Create an engine reading from `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch a train, failing if it does not exist.
    pub fn train(&self, id: TrainId) -> Result<Train, QueryError> {
        self.repository
            .find_by_id(id)?
            .ok_or(QueryError::TrainNotFound(id))
    }

    /// Seats left between exactly `from` and `to`.
    ///
    /// Only tickets booked for this exact station pair are counted. A ticket
    /// that merely overlaps the pair (say B -> D against a query for A -> C)
    /// does not reduce the result, even though it shares a segment.
    ///
    /// The stations are not checked against the route: a pair nobody has
    /// booked yields `total_seats`. The result goes negative if the store
    /// holds more bookings than seats.
    pub fn available_seats(
        &self,
        id: TrainId,
        from: Station,
        to: Station,
    ) -> Result<i64, QueryError> {
        let train = self.train(id)?;

        let booked: i64 = train
            .tickets
            .iter()
            .filter(|ticket| ticket.is_exactly(from, to))
            .map(|ticket| i64::from(ticket.seats()))
            .sum();

        let available = i64::from(train.total_seats) - booked;
        debug!(%id, %from, %to, booked, available, "seat availability");
        Ok(available)
    }

    /// Number of passengers whose journey starts at `station`.
    ///
    /// Fails with [`QueryError::StationNotServed`] if the train does not
    /// call at `station`. Zero is a normal answer.
    pub fn boarding_count(&self, id: TrainId, station: Station) -> Result<u32, QueryError> {
        let train = self.train(id)?;

        if !train.route.serves(station) {
            return Err(QueryError::StationNotServed { train: id, station });
        }

        let boarding: u32 = train
            .tickets
            .iter()
            .filter(|ticket| ticket.from == station)
            .map(|ticket| ticket.seats())
            .sum();

        debug!(%id, %station, boarding, "boarding count");
        Ok(boarding)
    }

    /// Age of the oldest passenger on any ticket.
    ///
    /// Returns `0` when nobody is travelling (no tickets, or only tickets
    /// without passengers). Callers cannot tell that apart from a
    /// passenger aged 0.
    pub fn oldest_age(&self, id: TrainId) -> Result<u32, QueryError> {
        let train = self.train(id)?;

        let oldest = train
            .tickets
            .iter()
            .filter_map(|ticket| ticket.oldest_age())
            .max()
            .unwrap_or(0);

        debug!(%id, oldest, "oldest passenger");
        Ok(oldest)
    }

    /// Trains that pass `station` strictly after `start` and strictly
    /// before `end`.
    ///
    /// Pass-through times wrap at midnight and the window does not, so a
    /// window never spans midnight. Trains that do not call at `station`
    /// are skipped. Ids come back in repository order.
    pub fn trains_through(
        &self,
        station: Station,
        start: ClockTime,
        end: ClockTime,
    ) -> Result<Vec<TrainId>, QueryError> {
        let trains = self.repository.find_all()?;

        let matching: Vec<TrainId> = trains
            .iter()
            .filter_map(|train| {
                let time = train.time_at(station)?;
                trace!(id = %train.id, %station, %time, "pass-through time");
                time.is_strictly_between(start, end).then_some(train.id)
            })
            .collect();

        debug!(
            %station,
            %start,
            %end,
            scanned = trains.len(),
            matched = matching.len(),
            "trains through station"
        );
        Ok(matching)
    }
}
