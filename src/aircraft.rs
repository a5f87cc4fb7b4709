//! Aircraft identity as carried by the `id` token of an OGN traffic report.
//!
//! The token is eight hex digits `XXYYYYYY`:
//!
//! ```text
//! bit 31     stealth flag
//! bit 30     no-tracking flag
//! bits 29-26 aircraft category
//! bits 25-24 address type
//! bits 23-0  address (the last six hex digits)
//! ```
//!
//! see http://wiki.glidernet.org/wiki:ogn-flavoured-aprs

use std::borrow::Cow;

use crate::DecodeError;

/// Aircraft category, modelled after the FLARM/NMEA aircraft types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AircraftCategory {
    #[default]
    Unknown,
    /// Fixed wing aircraft
    Aircraft,
    /// Airship, such as a zeppelin or a blimp
    Airship,
    Balloon,
    /// Helicopter, gyrocopter or rotorcraft
    Copter,
    Drone,
    /// Glider, including powered gliders and touring motor gliders
    Glider,
    HangGlider,
    Jet,
    Paraglider,
    Skydiver,
    StaticObstacle,
    TowPlane,
}

/// Category codes 0x0 to 0xF of the identity token.
const CATEGORIES: [AircraftCategory; 16] = [
    AircraftCategory::Unknown,        // 0x0 reserved
    AircraftCategory::Glider,         // 0x1 glider, motor glider, TMG
    AircraftCategory::TowPlane,       // 0x2 tow plane, tug plane
    AircraftCategory::Copter,         // 0x3 helicopter, gyrocopter, rotorcraft
    AircraftCategory::Skydiver,       // 0x4 skydiver, parachute
    AircraftCategory::Aircraft,       // 0x5 drop plane for skydivers
    AircraftCategory::HangGlider,     // 0x6 hang glider (hard)
    AircraftCategory::Paraglider,     // 0x7 paraglider (soft)
    AircraftCategory::Aircraft,       // 0x8 aircraft with reciprocating engine(s)
    AircraftCategory::Jet,            // 0x9 aircraft with jet/turboprop engine(s)
    AircraftCategory::Unknown,        // 0xA unknown
    AircraftCategory::Balloon,        // 0xB balloon (hot, gas, weather, static)
    AircraftCategory::Airship,        // 0xC airship, blimp, zeppelin
    AircraftCategory::Drone,          // 0xD UAV, RPAS, drone
    AircraftCategory::Unknown,        // 0xE reserved
    AircraftCategory::StaticObstacle, // 0xF static obstacle
];

impl AircraftCategory {
    pub fn from_code(code: u8) -> Self {
        CATEGORIES
            .get(usize::from(code))
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AddressType {
    #[default]
    Unknown,
    Icao,
    Flarm,
    OgnTracker,
}

impl AddressType {
    pub fn from_code(code: u8) -> Self {
        match code & 0x3 {
            1 => AddressType::Icao,
            2 => AddressType::Flarm,
            3 => AddressType::OgnTracker,
            _ => AddressType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftId<'a> {
    pub stealth: bool,
    pub no_tracking: bool,
    pub category: AircraftCategory,
    pub address_type: AddressType,
    /// Six uppercase hex digits, present when the token has at least eight digits.
    pub address: Option<Cow<'a, str>>,
}

impl<'a> AircraftId<'a> {
    /// Decodes the hex digits of an identity token (without the `id` prefix).
    pub fn decode(token: &'a str) -> Result<Self, DecodeError> {
        let code = u32::from_str_radix(token, 16)
            .map_err(|_| DecodeError::InvalidAircraftId(token.to_owned()))?;

        let address = if token.len() >= 8 {
            token.get(2..8).map(uppercase)
        } else {
            None
        };

        Ok(Self {
            stealth: code & 0x8000_0000 != 0,
            no_tracking: code & 0x4000_0000 != 0,
            category: AircraftCategory::from_code(((code >> 26) & 0xF) as u8),
            address_type: AddressType::from_code(((code >> 24) & 0x3) as u8),
            address,
        })
    }
}

fn uppercase(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(s.to_ascii_uppercase())
    } else {
        Cow::Borrowed(s)
    }
}
