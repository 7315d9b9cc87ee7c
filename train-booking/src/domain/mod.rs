//! Domain types for the train booking system.
//!
//! Routes, stations and times are validated at construction time, so code
//! that receives these types can trust their invariants.

mod error;
mod route;
mod station;
mod time;
mod train;

pub use error::DomainError;
pub use route::{Route, RoutePosition};
pub use station::{InvalidStation, Station};
pub use time::{ClockTime, TimeError};
pub use train::{NewTrain, Passenger, Ticket, Train, TrainId};
