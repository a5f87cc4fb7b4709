use std::borrow::Cow;

use crate::{
    AddressType, AircraftCategory, AircraftId, Callsign, ExtensionToken, Symbol, Timestamp,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Unknown,
    TrafficReport,
    Comment,
    Status,
    Weather,
}

/// One decoded APRS-IS line.
///
/// Text fields borrow from the sentence they were decoded from, so a message
/// cannot outlive its line buffer. Numeric fields that are absent from the
/// sentence keep their defaults: `NaN` for latitude, longitude and altitude,
/// zero for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct OgnMessage<'a> {
    pub sentence: &'a str,
    pub kind: MessageKind,

    /// e.g. `FLRDDE626`
    pub source_id: &'a str,
    /// `hhmmss`, undecoded
    pub timestamp: &'a str,
    /// degrees, WGS84
    pub latitude: f64,
    /// degrees, WGS84
    pub longitude: f64,
    /// meters MSL
    pub altitude: f64,
    pub symbol: Symbol,

    /// degrees
    pub course: f64,
    /// knots
    pub speed: f64,
    /// m/s
    pub vertical_speed: f64,

    /// Hex digits of the `id` token, e.g. `0ADDE626`
    pub aircraft_id: &'a str,
    pub rotation_rate: &'a str,
    pub signal_strength: &'a str,
    pub error_count: &'a str,
    pub frequency_offset: &'a str,
    pub squawk: &'a str,
    pub flight_level: &'a str,
    pub flight_number: &'a str,
    pub gps_accuracy: &'a str,

    pub aircraft_category: AircraftCategory,
    pub address_type: AddressType,
    /// Six uppercase hex digits, empty when unknown
    pub address: Cow<'a, str>,
    /// The aircraft asked to be hidden
    pub stealth: bool,
    /// The aircraft asked not to be tracked
    pub no_tracking: bool,

    /// degrees
    pub wind_direction: u32,
    pub wind_speed: u32,
    pub wind_gust: u32,
    /// degrees Celsius
    pub temperature: i32,
    /// percent
    pub humidity: u32,
    /// hectopascal
    pub pressure: f64,
}

impl<'a> OgnMessage<'a> {
    /// A message of kind `Unknown` with every field at its default.
    pub fn new(sentence: &'a str) -> Self {
        Self {
            sentence,
            kind: MessageKind::Unknown,
            source_id: "",
            timestamp: "",
            latitude: f64::NAN,
            longitude: f64::NAN,
            altitude: f64::NAN,
            symbol: Symbol::Unknown,
            course: 0.0,
            speed: 0.0,
            vertical_speed: 0.0,
            aircraft_id: "",
            rotation_rate: "",
            signal_strength: "",
            error_count: "",
            frequency_offset: "",
            squawk: "",
            flight_level: "",
            flight_number: "",
            gps_accuracy: "",
            aircraft_category: AircraftCategory::Unknown,
            address_type: AddressType::Unknown,
            address: Cow::Borrowed(""),
            stealth: false,
            no_tracking: false,
            wind_direction: 0,
            wind_speed: 0,
            wind_gust: 0,
            temperature: 0,
            humidity: 0,
            pressure: 0.0,
        }
    }

    pub fn has_position(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }

    /// The report time, if the timestamp field holds a valid `hhmmss`.
    pub fn time(&self) -> Option<Timestamp> {
        Timestamp::try_from(self.timestamp).ok()
    }

    /// The source callsign split into call and SSID.
    pub fn source(&self) -> Option<Callsign<'a>> {
        if self.source_id.is_empty() {
            return None;
        }
        Callsign::parse(self.source_id).ok()
    }

    pub(crate) fn apply(&mut self, token: ExtensionToken<'a>) {
        match token {
            ExtensionToken::AircraftId(id) => self.aircraft_id = id,
            ExtensionToken::Temperature(t) => self.temperature = t,
            ExtensionToken::Humidity(h) => self.humidity = h,
            ExtensionToken::Pressure(p) => self.pressure = p,
            ExtensionToken::VerticalSpeed(v) => self.vertical_speed = v,
            ExtensionToken::RotationRate(s) => self.rotation_rate = s,
            ExtensionToken::SignalStrength(s) => self.signal_strength = s,
            ExtensionToken::ErrorCount(s) => self.error_count = s,
            ExtensionToken::FrequencyOffset(s) => self.frequency_offset = s,
            ExtensionToken::FlightLevel(s) => self.flight_level = s,
            ExtensionToken::FlightNumber(s) => self.flight_number = s,
            ExtensionToken::Squawk(s) => self.squawk = s,
            ExtensionToken::GpsAccuracy(s) => self.gps_accuracy = s,
        }
    }

    pub(crate) fn apply_aircraft_id(&mut self, id: AircraftId<'a>) {
        self.stealth = id.stealth;
        self.no_tracking = id.no_tracking;
        self.aircraft_category = id.category;
        self.address_type = id.address_type;
        if let Some(address) = id.address {
            self.address = address;
        }
    }
}
