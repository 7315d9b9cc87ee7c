//! Trains, tickets and passengers.
//!
//! `NewTrain` is a train that has not been stored yet; storage assigns a
//! `TrainId` and hands back a `Train`. Both carry the booked tickets.

use super::{ClockTime, DomainError, Route, RoutePosition, Station};

/// Storage-assigned train identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub u32);

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person travelling on a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub age: u32,
}

impl Passenger {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// One booking between two stations of a train's route.
///
/// Occupies one seat per passenger on every segment from `from` up to, but
/// not including, `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub from: Station,
    pub to: Station,
    pub passengers: Vec<Passenger>,
}

impl Ticket {
    pub fn new(from: Station, to: Station, passengers: Vec<Passenger>) -> Self {
        Self {
            from,
            to,
            passengers,
        }
    }

    /// Number of seats this ticket holds on each segment it covers.
    pub fn seats(&self) -> u32 {
        self.passengers.len() as u32
    }

    /// Is this ticket for exactly the `from` -> `to` pair?
    pub fn is_exactly(&self, from: Station, to: Station) -> bool {
        self.from == from && self.to == to
    }

    /// Oldest passenger on this ticket, if any.
    pub fn oldest_age(&self) -> Option<u32> {
        self.passengers.iter().map(|p| p.age).max()
    }

    /// Check that both endpoints are on `route`, `from` strictly first.
    pub fn check_against(&self, route: &Route) -> Result<(), DomainError> {
        match (route.position(self.from), route.position(self.to)) {
            (Some(from), Some(to)) if from < to => Ok(()),
            _ => Err(DomainError::TicketOffRoute {
                from: self.from,
                to: self.to,
            }),
        }
    }
}

/// A train that has not yet been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    pub route: Route,
    pub departure: ClockTime,
    pub total_seats: u32,
    pub tickets: Vec<Ticket>,
}

impl NewTrain {
    /// Create a train with no tickets.
    pub fn new(route: Route, departure: ClockTime, total_seats: u32) -> Result<Self, DomainError> {
        if total_seats == 0 {
            return Err(DomainError::NoSeats);
        }
        Ok(Self {
            route,
            departure,
            total_seats,
            tickets: Vec::new(),
        })
    }

    /// Attach an already-booked ticket.
    ///
    /// Only the route is checked; seat capacity is the booking flow's job.
    pub fn with_ticket(mut self, ticket: Ticket) -> Result<Self, DomainError> {
        ticket.check_against(&self.route)?;
        self.tickets.push(ticket);
        Ok(self)
    }

    /// Attach a storage id.
    pub fn into_train(self, id: TrainId) -> Train {
        Train {
            id,
            route: self.route,
            departure: self.departure,
            total_seats: self.total_seats,
            tickets: self.tickets,
        }
    }
}

/// A stored train with its booked tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub id: TrainId,
    pub route: Route,
    pub departure: ClockTime,
    pub total_seats: u32,
    pub tickets: Vec<Ticket>,
}

impl Train {
    /// Time the train passes `station`, or `None` if it does not call there.
    pub fn time_at(&self, station: Station) -> Option<ClockTime> {
        self.route
            .position(station)
            .map(|position| self.time_at_position(position))
    }

    /// Time the train passes the given route position.
    pub fn time_at_position(&self, position: RoutePosition) -> ClockTime {
        self.departure.plus_hours(position.hours_after_departure())
    }

    /// Each station with the time the train passes it.
    pub fn timetable(&self) -> Vec<(Station, ClockTime)> {
        self.route
            .positions()
            .map(|(position, station)| (station, self.time_at_position(position)))
            .collect()
    }

    /// Total number of passengers across all tickets.
    pub fn passenger_count(&self) -> usize {
        self.tickets.iter().map(|t| t.passengers.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn route() -> Route {
        Route::new(vec![
            Station::Mumbai,
            Station::Pune,
            Station::Hyderabad,
            Station::Chennai,
        ])
        .unwrap()
    }

    fn pax(ages: &[u32]) -> Vec<Passenger> {
        ages.iter()
            .enumerate()
            .map(|(i, age)| Passenger::new(format!("p{i}"), *age))
            .collect()
    }

    #[test]
    fn new_train_requires_seats() {
        assert_eq!(
            NewTrain::new(route(), time("09:00"), 0),
            Err(DomainError::NoSeats)
        );
        assert!(NewTrain::new(route(), time("09:00"), 1).is_ok());
    }

    #[test]
    fn ticket_must_follow_route() {
        let train = NewTrain::new(route(), time("09:00"), 4).unwrap();

        let ok = Ticket::new(Station::Mumbai, Station::Hyderabad, pax(&[30]));
        let train = train.with_ticket(ok).unwrap();
        assert_eq!(train.tickets.len(), 1);

        let backwards = Ticket::new(Station::Chennai, Station::Pune, pax(&[30]));
        assert_eq!(
            train.clone().with_ticket(backwards),
            Err(DomainError::TicketOffRoute {
                from: Station::Chennai,
                to: Station::Pune
            })
        );

        let same = Ticket::new(Station::Pune, Station::Pune, pax(&[30]));
        assert!(train.clone().with_ticket(same).is_err());

        let off_route = Ticket::new(Station::Mumbai, Station::Delhi, pax(&[30]));
        assert!(train.with_ticket(off_route).is_err());
    }

    #[test]
    fn ticket_helpers() {
        let ticket = Ticket::new(Station::Mumbai, Station::Pune, pax(&[12, 64, 40]));
        assert_eq!(ticket.seats(), 3);
        assert_eq!(ticket.oldest_age(), Some(64));
        assert!(ticket.is_exactly(Station::Mumbai, Station::Pune));
        assert!(!ticket.is_exactly(Station::Mumbai, Station::Chennai));

        let empty = Ticket::new(Station::Mumbai, Station::Pune, vec![]);
        assert_eq!(empty.seats(), 0);
        assert_eq!(empty.oldest_age(), None);
    }

    #[test]
    fn time_at_station() {
        let train = NewTrain::new(route(), time("22:30"), 4)
            .unwrap()
            .into_train(TrainId(7));

        assert_eq!(train.id, TrainId(7));
        assert_eq!(train.time_at(Station::Mumbai), Some(time("22:30")));
        assert_eq!(train.time_at(Station::Pune), Some(time("23:30")));
        assert_eq!(train.time_at(Station::Chennai), Some(time("01:30")));
        assert_eq!(train.time_at(Station::Delhi), None);
    }

    #[test]
    fn timetable_lists_every_call() {
        let train = NewTrain::new(route(), time("09:00"), 4)
            .unwrap()
            .into_train(TrainId(1));

        assert_eq!(
            train.timetable(),
            vec![
                (Station::Mumbai, time("09:00")),
                (Station::Pune, time("10:00")),
                (Station::Hyderabad, time("11:00")),
                (Station::Chennai, time("12:00")),
            ]
        );
    }

    #[test]
    fn passenger_count_sums_tickets() {
        let train = NewTrain::new(route(), time("09:00"), 10)
            .unwrap()
            .with_ticket(Ticket::new(Station::Mumbai, Station::Pune, pax(&[1, 2])))
            .unwrap()
            .with_ticket(Ticket::new(Station::Pune, Station::Chennai, pax(&[3])))
            .unwrap()
            .into_train(TrainId(1));
        assert_eq!(train.passenger_count(), 3);
    }
}
