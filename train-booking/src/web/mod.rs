//! Web layer for the train booking service.
//!
//! Provides JSON endpoints for registering trains and querying them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
