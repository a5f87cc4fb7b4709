use std::fmt::{Display, Formatter};

use chrono::{DateTime, Timelike, Utc};

use crate::bytes::parse_bytes;
use crate::DecodeError;

/// Hour, minute and second in UTC, as sent in the `hhmmss` field of a report.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Timestamp {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn now() -> Self {
        Self::from(Utc::now())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(t: DateTime<Utc>) -> Self {
        Self::new(t.hour() as u8, t.minute() as u8, t.second() as u8)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = DecodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let b = s.as_bytes();
        if b.len() != 6 {
            return Err(DecodeError::InvalidTimestamp(s.to_owned()));
        }

        let hour = parse_bytes(&b[0..2]).ok_or_else(|| DecodeError::InvalidTimestamp(s.to_owned()))?;
        let minute = parse_bytes(&b[2..4]).ok_or_else(|| DecodeError::InvalidTimestamp(s.to_owned()))?;
        let second = parse_bytes(&b[4..6]).ok_or_else(|| DecodeError::InvalidTimestamp(s.to_owned()))?;

        Ok(Timestamp::new(hour, minute, second))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)
    }
}
