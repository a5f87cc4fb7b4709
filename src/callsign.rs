use std::fmt::{Display, Formatter};

use crate::DecodeError;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Callsign<'a> {
    pub call: &'a str,
    pub ssid: Option<&'a str>,
}

impl<'a> Callsign<'a> {
    pub fn new(call: &'a str, ssid: Option<&'a str>) -> Self {
        Callsign { call, ssid }
    }

    pub fn parse(s: &'a str) -> Result<Self, DecodeError> {
        let Some((call, ssid)) = s.split_once('-') else {
            return Ok(Callsign::new(s, None));
        };

        if call.is_empty() {
            return Err(DecodeError::EmptyCallsign(s.to_owned()));
        }

        if ssid.is_empty() {
            return Err(DecodeError::EmptySsid(s.to_owned()));
        }

        Ok(Callsign::new(call, Some(ssid)))
    }
}

impl Display for Callsign<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.call)?;
        if let Some(ssid) = self.ssid {
            write!(f, "-{}", ssid)?;
        }
        Ok(())
    }
}

/// APRS-IS login passcode as accepted by the OGN servers: the sum of the
/// first six characters of the callsign, modulo 10000.
pub fn passcode(callsign: &str) -> u16 {
    let sum: u32 = callsign.bytes().take(6).map(u32::from).sum();
    (sum % 10_000) as u16
}
