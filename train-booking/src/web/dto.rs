//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Train;

/// Request to register a train.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    /// Station names in calling order
    pub station_route: Vec<String>,

    /// Departure from the first station, HH:MM or HH:MM:SS
    pub departure_time: String,

    /// Seat capacity
    pub no_of_seats: u32,
}

/// Response for train registration.
#[derive(Debug, Serialize)]
pub struct AddTrainResponse {
    /// Id assigned by storage
    pub train_id: u32,
}

/// Query for seats between two stations.
#[derive(Debug, Deserialize)]
pub struct SeatAvailabilityRequest {
    pub from_station: String,
    pub to_station: String,
}

/// Seats left between two stations.
#[derive(Debug, Serialize)]
pub struct SeatAvailabilityResponse {
    pub train_id: u32,
    pub from_station: String,
    pub to_station: String,

    /// May be negative if the train is overbooked
    pub available_seats: i64,
}

/// Query for boarding at a station.
#[derive(Debug, Deserialize)]
pub struct BoardingRequest {
    pub station: String,
}

/// Number of passengers boarding at a station.
#[derive(Debug, Serialize)]
pub struct BoardingResponse {
    pub train_id: u32,
    pub station: String,
    pub boarding: u32,
}

/// Age of the oldest passenger.
#[derive(Debug, Serialize)]
pub struct OldestPassengerResponse {
    pub train_id: u32,

    /// 0 when nobody is travelling
    pub oldest_age: u32,
}

/// Query for trains passing a station in a time window.
#[derive(Debug, Deserialize)]
pub struct TrainsThroughRequest {
    pub station: String,

    /// Window start, HH:MM or HH:MM:SS, excluded
    pub start_time: String,

    /// Window end, HH:MM or HH:MM:SS, excluded
    pub end_time: String,
}

/// Trains passing a station in a time window.
#[derive(Debug, Serialize)]
pub struct TrainsThroughResponse {
    pub station: String,
    pub train_ids: Vec<u32>,
}

/// A stored train with its timetable.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    pub train_id: u32,

    /// Departure from the first station
    pub departure_time: String,

    pub total_seats: u32,

    /// Stations in calling order
    pub calls: Vec<CallResult>,

    /// Number of booked tickets
    pub tickets: usize,

    /// Number of passengers across all tickets
    pub passengers: usize,
}

/// A station on a train's route.
#[derive(Debug, Serialize)]
pub struct CallResult {
    pub station: String,

    /// Time the train passes this station
    pub time: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl TrainResult {
    /// Create from a domain Train.
    pub fn from_train(train: &Train) -> Self {
        let calls = train
            .timetable()
            .into_iter()
            .map(|(station, time)| CallResult {
                station: station.to_string(),
                time: time.to_string(),
            })
            .collect();

        Self {
            train_id: train.id.0,
            departure_time: train.departure.to_string(),
            total_seats: train.total_seats,
            calls,
            tickets: train.tickets.len(),
            passengers: train.passenger_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, NewTrain, Passenger, Route, Station, Ticket, TrainId};

    #[test]
    fn train_result_from_train() {
        let route = Route::new(vec![Station::Patna, Station::Ranchi, Station::Kolkata]).unwrap();
        let train = NewTrain::new(route, ClockTime::parse_hhmm("22:15").unwrap(), 40)
            .unwrap()
            .with_ticket(Ticket::new(
                Station::Patna,
                Station::Kolkata,
                vec![Passenger::new("a", 20), Passenger::new("b", 30)],
            ))
            .unwrap()
            .into_train(TrainId(5));

        let result = TrainResult::from_train(&train);
        assert_eq!(result.train_id, 5);
        assert_eq!(result.departure_time, "22:15");
        assert_eq!(result.total_seats, 40);
        assert_eq!(result.tickets, 1);
        assert_eq!(result.passengers, 2);

        let calls: Vec<_> = result
            .calls
            .iter()
            .map(|c| (c.station.as_str(), c.time.as_str()))
            .collect();
        assert_eq!(
            calls,
            vec![("PATNA", "22:15"), ("RANCHI", "23:15"), ("KOLKATA", "00:15")]
        );
    }

    #[test]
    fn add_train_request_deserializes() {
        let json = r#"{
            "station_route": ["DELHI", "AGRA"],
            "departure_time": "09:00",
            "no_of_seats": 3
        }"#;
        let req: AddTrainRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.station_route, vec!["DELHI", "AGRA"]);
        assert_eq!(req.departure_time, "09:00");
        assert_eq!(req.no_of_seats, 3);
    }

    #[test]
    fn responses_serialize() {
        let resp = TrainsThroughResponse {
            station: "AGRA".into(),
            train_ids: vec![1, 3],
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"station":"AGRA","train_ids":[1,3]}"#
        );

        let err = ErrorResponse {
            error: "train 9 not found".into(),
        };
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"error":"train 9 not found"}"#
        );
    }
}
