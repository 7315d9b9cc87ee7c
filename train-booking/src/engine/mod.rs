//! Route queries and train registration.
//!
//! The engine answers questions about trains already in storage: seats
//! left between two stations, how many people board at a station, the
//! oldest passenger, and which trains pass a station within a time window.
//! All of them derive station times from the route position alone, one
//! hour per stop after departure.

mod error;
mod query;
mod registration;


pub use error::{QueryError, RegistrationError};
pub use query::RouteQueryEngine;
pub use registration::TrainRegistry;
