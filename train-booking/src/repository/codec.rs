//! Text form of a route.
//!
//! Routes are stored as station names joined by `", "`, e.g.
//! `"DELHI, AGRA, KANPUR"`. Only the store uses this form; everything
//! above it works with [`Route`].

use crate::domain::{DomainError, Route, Station};

/// Separator between station names in a stored route.
pub const ROUTE_DELIMITER: &str = ", ";

/// Errors reading a stored route back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteDecodeError {
    /// A segment of the text is not a station name
    #[error("unknown station {0:?} in stored route")]
    UnknownStation(String),

    /// The stations parsed but do not form a valid route
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Serialize a route for storage.
pub fn encode_route(route: &Route) -> String {
    route
        .stations()
        .iter()
        .map(Station::name)
        .collect::<Vec<_>>()
        .join(ROUTE_DELIMITER)
}

/// Parse a stored route.
pub fn decode_route(s: &str) -> Result<Route, RouteDecodeError> {
    let stations = s
        .split(ROUTE_DELIMITER)
        .map(|name| {
            Station::parse(name).map_err(|e| RouteDecodeError::UnknownStation(e.name().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(stations)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Distinct stations in random order, at least two of them
    fn any_route() -> impl Strategy<Value = Route> {
        Just(Station::ALL.to_vec())
            .prop_shuffle()
            .prop_flat_map(|stations| {
                let len = stations.len();
                (Just(stations), 2..=len)
            })
            .prop_map(|(mut stations, len)| {
                stations.truncate(len);
                Route::new(stations).unwrap()
            })
    }

    proptest! {
        /// Every station comes back at the same index
        #[test]
        fn roundtrip_preserves_positions(route in any_route()) {
            let decoded = decode_route(&encode_route(&route)).unwrap();
            prop_assert_eq!(decoded.len(), route.len());
            for (position, station) in route.positions() {
                prop_assert_eq!(decoded.station_at(position), Some(station));
                prop_assert_eq!(decoded.position(station), Some(position));
            }
        }
    }
}
