//! Train routes and positions along them.
//!
//! A `Route` is the ordered list of stations a train visits. A
//! `RoutePosition` is the zero-based index of a station in that list, which
//! is also the number of hours after departure at which the train is there.

use super::{DomainError, Station};

/// Zero-based index of a station within a route.
///
/// # Examples
///
/// ```
/// use train_booking::domain::{Route, RoutePosition, Station};
///
/// let route = Route::new(vec![Station::Delhi, Station::Agra]).unwrap();
/// assert_eq!(route.position(Station::Agra), Some(RoutePosition(1)));
/// assert_eq!(route.position(Station::Pune), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePosition(pub usize);

impl RoutePosition {
    /// Hours after departure at which a train reaches this position.
    pub fn hours_after_departure(self) -> usize {
        self.0
    }
}

/// An ordered, duplicate-free sequence of at least two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<Station>);

impl Route {
    /// Build a route, checking length and uniqueness.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::InvalidRoute(
                "route must contain at least two stations",
            ));
        }

        for (i, station) in stations.iter().enumerate() {
            if stations[..i].contains(station) {
                return Err(DomainError::DuplicateStation(*station));
            }
        }

        Ok(Self(stations))
    }

    /// Position of `station` on this route, or `None` if the train does not
    /// call there.
    pub fn position(&self, station: Station) -> Option<RoutePosition> {
        self.0.iter().position(|s| *s == station).map(RoutePosition)
    }

    /// Does this route call at `station`?
    pub fn serves(&self, station: Station) -> bool {
        self.position(station).is_some()
    }

    /// Station at a position, if in range.
    pub fn station_at(&self, position: RoutePosition) -> Option<Station> {
        self.0.get(position.0).copied()
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.0
    }

    /// Stations paired with their positions.
    pub fn positions(&self) -> impl Iterator<Item = (RoutePosition, Station)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, station)| (RoutePosition(i), *station))
    }

    /// First station.
    pub fn origin(&self) -> Station {
        self.0[0]
    }

    /// Last station.
    pub fn terminus(&self) -> Station {
        self.0[self.0.len() - 1]
    }

    /// Number of stations. Always at least two.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a route has at least two stations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
