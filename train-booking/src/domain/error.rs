//! Domain error types.
//!
//! These errors represent construction-time validation failures for trains
//! and tickets. Queries never produce them.

use super::Station;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route is structurally unusable
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// The same station appears twice on a route
    #[error("station {0} appears more than once on the route")]
    DuplicateStation(Station),

    /// A train must carry at least one seat
    #[error("train must have at least one seat")]
    NoSeats,

    /// Ticket endpoints are not on the route in travel order
    #[error("ticket {from} -> {to} does not follow the route")]
    TicketOffRoute { from: Station, to: Station },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidRoute("route must contain at least two stations");
        assert_eq!(
            err.to_string(),
            "invalid route: route must contain at least two stations"
        );

        let err = DomainError::DuplicateStation(Station::Agra);
        assert_eq!(
            err.to_string(),
            "station AGRA appears more than once on the route"
        );

        let err = DomainError::NoSeats;
        assert_eq!(err.to_string(), "train must have at least one seat");

        let err = DomainError::TicketOffRoute {
            from: Station::Pune,
            to: Station::Delhi,
        };
        assert_eq!(err.to_string(), "ticket PUNE -> DELHI does not follow the route");
    }
}
