//! Outbound APRS-IS lines: the login line sent after connecting, the filter
//! command that moves the receive area, and a position report for our own
//! aircraft.
//!
//! All decimals are written with `.` separators; Rust formatting does not
//! depend on the host locale.

use std::io::Write;

use crate::callsign::passcode;
use crate::lonlat::{Latitude, Longitude};
use crate::{AircraftCategory, EncodeError, Timestamp};

/// 1 m in ft
const METERS_TO_FEET: f64 = 3.28084;

/// Range filter around a position, restricted to traffic (`t/o`).
///
/// ```
/// assert_eq!(ogn_aprs::filter(-48.0, 7.85123456, 99), "filter r/-48.0000/7.8512/99 t/o");
/// ```
pub fn filter(latitude: f64, longitude: f64, radius_km: u32) -> String {
    format!(
        "filter r/{:.4}/{:.4}/{} t/o",
        latitude, longitude, radius_km
    )
}

/// The `user ... pass ... vers ...` line that opens an APRS-IS session.
pub fn login_line(
    callsign: &str,
    latitude: f64,
    longitude: f64,
    radius_km: u32,
    app_name: &str,
    app_version: &str,
) -> String {
    format!(
        "user {} pass {} vers {} {} {}\n",
        callsign,
        passcode(callsign),
        app_name,
        app_version,
        filter(latitude, longitude, radius_km)
    )
}

/// Server command replacing the filter of a running session.
pub fn filter_command(latitude: f64, longitude: f64, radius_km: u32) -> String {
    format!("# {}\n", filter(latitude, longitude, radius_km))
}

/// Position of our own aircraft, sent to the network as an uncompressed
/// position report with timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport<'a> {
    pub callsign: &'a str,
    /// degrees
    pub latitude: f64,
    /// degrees
    pub longitude: f64,
    /// meters MSL
    pub altitude: f64,
    /// degrees
    pub course: u16,
    /// knots
    pub speed: u16,
    pub category: AircraftCategory,
}

impl PositionReport<'_> {
    /// Encodes the report, stamped with the current UTC time.
    pub fn encode<W: Write>(&self, buf: &mut W) -> Result<(), EncodeError> {
        self.encode_at(buf, Timestamp::now())
    }

    pub fn encode_at<W: Write>(&self, buf: &mut W, timestamp: Timestamp) -> Result<(), EncodeError> {
        buf.write_all(self.line_at(timestamp).as_bytes())?;
        Ok(())
    }

    /// The report as a newline terminated line, stamped with `timestamp`.
    pub fn line_at(&self, timestamp: Timestamp) -> String {
        let symbol = self.category.symbol();
        let feet = (self.altitude * METERS_TO_FEET) as i32;

        format!(
            "{}>APRS,TCPIP*: /{}h{}{}{}{}{:03}/{:03}/A={:06}\n",
            self.callsign,
            timestamp,
            Latitude::new(self.latitude),
            symbol.table,
            Longitude::new(self.longitude),
            symbol.code,
            self.course,
            self.speed,
            feet
        )
    }
}

/// Position report line for our own aircraft at the current UTC time.
pub fn position_report(
    callsign: &str,
    latitude: f64,
    longitude: f64,
    altitude: f64,
    course: u16,
    speed: u16,
    category: AircraftCategory,
) -> String {
    PositionReport {
        callsign,
        latitude,
        longitude,
        altitude,
        course,
        speed,
        category,
    }
    .line_at(Timestamp::now())
}
