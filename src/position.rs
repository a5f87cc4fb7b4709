//! Decoder for position reports (`/hhmmss h lat sym lon sym ...`), which carry
//! both aircraft traffic and weather-station reports.
//!
//! Examples:
//! - `/074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz`
//! - `/001140h4741.90N/01104.20E^/A=034868 !W91! id254D21C2 +128fpm FL350.00 A3:AXY547M Sq2244`
//! - `/222245h4803.92N/00800.93E_292/005g010t030h01b65526 5.2dB` (weather)

use tracing::trace;

use crate::bytes::{field, parse_leading};
use crate::extensions::tokens;
use crate::lonlat::{Latitude, Longitude};
use crate::weather::decode_weather;
use crate::{AircraftId, DecodeError, MessageKind, OgnMessage, Symbol};

/// Shortest position block: `/hhmmssh`, latitude, table, longitude, code and
/// three more characters.
const MIN_POSITION_LEN: usize = 30;

/// 1 ft in m
const FEET_TO_METERS: f64 = 0.3048;

pub(crate) fn decode_position<'a>(
    sentence: &'a str,
    header: &'a str,
    body: &'a str,
) -> Result<OgnMessage<'a>, DecodeError> {
    let (source_id, _) = header
        .split_once('>')
        .ok_or_else(|| DecodeError::InvalidHeader(header.to_owned()))?;

    // APRS position block before the first blank, OGN extension after it
    let (aprs_part, ogn_part) = body.split_once(' ').unwrap_or((body, ""));
    if !aprs_part.starts_with('/') || aprs_part.len() < MIN_POSITION_LEN {
        return Err(DecodeError::InvalidPosition(aprs_part.to_owned()));
    }
    let b = aprs_part.as_bytes();

    let mut message = OgnMessage::new(sentence);
    message.kind = MessageKind::TrafficReport;
    message.source_id = source_id;
    message.timestamp = field(aprs_part, 1, 6);

    let (lat_enhancement, lon_enhancement) = precision_enhancement(body);
    message.latitude = Latitude::parse_uncompressed(field(aprs_part, 8, 7), b[15], lat_enhancement)
        .map_or_else(
            |e| {
                trace!("{}", e);
                f64::NAN
            },
            |lat| *lat,
        );
    message.longitude =
        Longitude::parse_uncompressed(field(aprs_part, 17, 8), b[25], lon_enhancement)
            .map_or_else(
                |e| {
                    trace!("{}", e);
                    f64::NAN
                },
                |lon| *lon,
            );

    message.symbol = Symbol::from_bytes(b[16], b[26]);
    if message.symbol == Symbol::WeatherStation {
        message.kind = MessageKind::Weather;
        decode_weather(&mut message, aprs_part);
    } else {
        decode_course_speed_altitude(&mut message, aprs_part);
    }

    for token in tokens(ogn_part) {
        message.apply(token);
    }

    if !message.aircraft_id.is_empty() {
        match AircraftId::decode(message.aircraft_id) {
            Ok(id) => message.apply_aircraft_id(id),
            Err(e) => trace!("{}", e),
        }
    }

    Ok(message)
}

/// The two digits of a `!Wxy!` marker, if the body carries one.
fn precision_enhancement(body: &str) -> (Option<u8>, Option<u8>) {
    match body.find("!W") {
        Some(index) if body.len() > index + 4 => {
            let b = body.as_bytes();
            (Some(b[index + 2]), Some(b[index + 3]))
        }
        _ => (None, None),
    }
}

fn decode_course_speed_altitude(message: &mut OgnMessage, aprs_part: &str) {
    // `ccc/sss` directly after the symbol code
    if aprs_part.len() >= 34 && aprs_part.as_bytes()[30] == b'/' {
        if let Some(course) = parse_leading::<i32>(field(aprs_part, 27, 3)) {
            message.course = f64::from(course);
        }
        if let Some(speed) = parse_leading::<i32>(field(aprs_part, 31, 3)) {
            message.speed = f64::from(speed);
        }
    }

    if let Some(index) = aprs_part.find("/A=") {
        match parse_leading::<i32>(field(aprs_part, index + 3, 6)) {
            Some(feet) => message.altitude = f64::from(feet) * FEET_TO_METERS,
            None => trace!("Invalid altitude in {}", aprs_part),
        }
    }
}
