#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid Sentence: {0}")]
    InvalidSentence(String),
    #[error("Invalid Header: {0}")]
    InvalidHeader(String),
    #[error("Invalid Position: {0}")]
    InvalidPosition(String),
    #[error("Invalid Latitude: {0}")]
    InvalidLatitude(String),
    #[error("Invalid Longitude: {0}")]
    InvalidLongitude(String),
    #[error("Invalid Aircraft ID: {0}")]
    InvalidAircraftId(String),
    #[error("Invalid Timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Empty Callsign: {0}")]
    EmptyCallsign(String),
    #[error("Empty Callsign SSID: {0}")]
    EmptySsid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No data received within {0:?}")]
    Timeout(std::time::Duration),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
