//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        FromRequest, FromRequestParts, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{ClockTime, Station, TrainId};
use crate::engine::{QueryError, RegistrationError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/train", post(add_train))
        .route("/train/:id", get(train_details))
        .route("/train/:id/seats", get(available_seats))
        .route("/train/:id/boarding", get(boarding_count))
        .route("/train/:id/oldest", get(oldest_passenger))
        .route("/trains/through", get(trains_through))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// JSON body extractor that reports malformed bodies as [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
struct AppJson<T>(T);

/// Path extractor that reports bad ids as [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
struct AppPath<T>(T);

/// Query string extractor that reports missing fields as [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
struct AppQuery<T>(T);

fn parse_station(field: &str, value: &str) -> Result<Station, AppError> {
    Station::parse(value).map_err(|e| AppError::BadRequest {
        message: format!("invalid {field}: {e}"),
    })
}

fn parse_time(field: &str, value: &str) -> Result<ClockTime, AppError> {
    ClockTime::parse(value).map_err(|e| AppError::BadRequest {
        message: format!("invalid {field}: {e}"),
    })
}

/// Register a new train.
async fn add_train(
    State(state): State<AppState>,
    AppJson(req): AppJson<AddTrainRequest>,
) -> Result<(StatusCode, Json<AddTrainResponse>), AppError> {
    let stations = req
        .station_route
        .iter()
        .map(|name| parse_station("station_route", name))
        .collect::<Result<Vec<_>, _>>()?;
    let departure = parse_time("departure_time", &req.departure_time)?;

    let id = state
        .registry()
        .add_train(stations, departure, req.no_of_seats)?;

    Ok((StatusCode::CREATED, Json(AddTrainResponse { train_id: id.0 })))
}

/// Fetch a train with its timetable.
async fn train_details(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<Json<TrainResult>, AppError> {
    let train = state.engine().train(TrainId(id))?;
    Ok(Json(TrainResult::from_train(&train)))
}

/// Seats left between two stations.
async fn available_seats(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppQuery(req): AppQuery<SeatAvailabilityRequest>,
) -> Result<Json<SeatAvailabilityResponse>, AppError> {
    let from = parse_station("from_station", &req.from_station)?;
    let to = parse_station("to_station", &req.to_station)?;

    let available_seats = state.engine().available_seats(TrainId(id), from, to)?;

    Ok(Json(SeatAvailabilityResponse {
        train_id: id,
        from_station: from.to_string(),
        to_station: to.to_string(),
        available_seats,
    }))
}

/// Passengers boarding at a station.
async fn boarding_count(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppQuery(req): AppQuery<BoardingRequest>,
) -> Result<Json<BoardingResponse>, AppError> {
    let station = parse_station("station", &req.station)?;
    let boarding = state.engine().boarding_count(TrainId(id), station)?;

    Ok(Json(BoardingResponse {
        train_id: id,
        station: station.to_string(),
        boarding,
    }))
}

/// Oldest passenger on a train.
async fn oldest_passenger(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<Json<OldestPassengerResponse>, AppError> {
    let oldest_age = state.engine().oldest_age(TrainId(id))?;
    Ok(Json(OldestPassengerResponse {
        train_id: id,
        oldest_age,
    }))
}

/// Trains passing a station within a time window.
async fn trains_through(
    State(state): State<AppState>,
    AppQuery(req): AppQuery<TrainsThroughRequest>,
) -> Result<Json<TrainsThroughResponse>, AppError> {
    let station = parse_station("station", &req.station)?;
    let start = parse_time("start_time", &req.start_time)?;
    let end = parse_time("end_time", &req.end_time)?;

    let ids = state.engine().trains_through(station, start, end)?;

    Ok(Json(TrainsThroughResponse {
        station: station.to_string(),
        train_ids: ids.into_iter().map(|id| id.0).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::TrainNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            QueryError::StationNotServed { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            QueryError::Repository(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RegistrationError::Repository(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
