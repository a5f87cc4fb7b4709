//! Projections of a decoded message onto the text formats `dump-ogn` can
//! print.

use chrono::{DateTime, Utc};

use crate::{MessageKind, OgnMessage};

/// 1 m in ft
const METERS_TO_FEET: f64 = 3.28084;
/// 1 m/s in ft/min
const MPS_TO_FPM: f64 = 196.85;

pub trait OutputFormatter {
    /// One output line for `message` (without line terminator), or `None` if
    /// the format has nothing to say about it.
    fn format(&self, message: &OgnMessage) -> Option<String>;
}

/// Passes the received sentences through unchanged.
pub struct RawFormatter;

impl OutputFormatter for RawFormatter {
    fn format(&self, message: &OgnMessage) -> Option<String> {
        Some(message.sentence.to_owned())
    }
}

/// SBS-1 (BaseStation) `MSG,8` lines for traffic reports, as read by most
/// ADS-B display software.
///
/// ```text
/// MSG,8,111,11111,DDE626,111111,2025/03/01,07:45:48.000,2025/03/01,07:45:48.000,DDE626,607,7,86,51.188667,-1.034000,-18,,,,,
/// ```
pub struct Sbs1Formatter;

impl Sbs1Formatter {
    /// Formats `message` as received at `now`.
    pub fn format_at(&self, message: &OgnMessage, now: DateTime<Utc>) -> Option<String> {
        if message.kind != MessageKind::TrafficReport || !message.has_position() {
            return None;
        }

        let date = now.format("%Y/%m/%d");
        let time = now.format("%H:%M:%S%.3f");

        let icao = format!("{:0>6}", message.address.to_uppercase());
        let callsign = if message.flight_number.is_empty() {
            icao.as_str()
        } else {
            message.flight_number
        };

        let altitude = if message.altitude.is_nan() {
            String::new()
        } else {
            ((message.altitude * METERS_TO_FEET) as i32).to_string()
        };

        Some(format!(
            "MSG,8,111,11111,{icao},111111,{date},{time},{date},{time},{callsign},{altitude},{},{},{:.6},{:.6},{},,,,,",
            message.speed as i32,
            message.course as i32,
            message.latitude,
            message.longitude,
            (message.vertical_speed * MPS_TO_FPM) as i32,
        ))
    }
}

impl OutputFormatter for Sbs1Formatter {
    fn format(&self, message: &OgnMessage) -> Option<String> {
        self.format_at(message, Utc::now())
    }
}
