use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirlineError {
    #[error("invalid airline definition: {0}")]
    InvalidDefinition(String),
    #[error("airline has no fleet named {0:?}")]
    UnknownFleet(String),
    #[error("no aircraft types available in {}", .0.as_deref().unwrap_or("any fleet"))]
    EmptyFleet(Option<String>),
    #[error("airline {0:?} has no flight number length configured")]
    MissingFlightNumberLength(String),
    #[error("airline {0:?} is defined more than once")]
    DuplicateAirline(String),
    #[error("unknown airline {0:?}")]
    UnknownAirline(String),
    #[error("could not find a free flight number for airline {0:?}")]
    FlightNumbersExhausted(String),
    #[error("failed to read airline data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse airline data: {0}")]
    Json(#[from] serde_json::Error),
}
