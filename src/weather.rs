//! Weather fields of a position report whose symbol is the weather station
//! (`/_`). Each field is located by its marker character after the symbol code
//! and decoded on its own; a missing or garbled marker only leaves that field
//! at zero.
//!
//! Example: `/222245h4803.92N/00800.93E_292/005g010t030h01b65526`

use tracing::trace;

use crate::bytes::{field, find_from, parse_leading, tail};
use crate::OgnMessage;

/// Offset of the `_` symbol code; all markers are searched from here.
const SYMBOL_CODE_OFFSET: usize = 26;

pub(crate) fn decode_weather(message: &mut OgnMessage, aprs_part: &str) {
    // `ddd` right after the symbol code
    if let Some(direction) = parse_leading(field(aprs_part, SYMBOL_CODE_OFFSET + 1, 3)) {
        message.wind_direction = direction;
    }

    if let Some(speed) = value_after(aprs_part, '/', 3) {
        message.wind_speed = speed;
    }
    if let Some(gust) = value_after(aprs_part, 'g', 3) {
        message.wind_gust = gust;
    }
    if let Some(temperature) = value_after(aprs_part, 't', 3) {
        message.temperature = temperature;
    }
    if let Some(humidity) = value_after(aprs_part, 'h', 2) {
        message.humidity = humidity;
    }

    // tenths of hPa, up to the end of the block
    if let Some(index) = find_from(aprs_part, 'b', SYMBOL_CODE_OFFSET) {
        let value = tail(aprs_part, index + 1);
        let value = value.split(' ').next().unwrap_or(value);
        match parse_leading::<u32>(value) {
            Some(tenths) => message.pressure = f64::from(tenths) / 10.0,
            None => trace!("Invalid pressure in {}", aprs_part),
        }
    }
}

/// The number in the `len` characters following the first `marker` after the
/// symbol code.
fn value_after<T: std::str::FromStr>(aprs_part: &str, marker: char, len: usize) -> Option<T> {
    let index = find_from(aprs_part, marker, SYMBOL_CODE_OFFSET)?;
    parse_leading(field(aprs_part, index + 1, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(aprs_part: &str) -> OgnMessage<'_> {
        let mut message = OgnMessage::new(aprs_part);
        decode_weather(&mut message, aprs_part);
        message
    }

    #[test]
    fn decode_full_report() {
        let message = decode("/222245h4803.92N/00800.93E_292/005g010t030h01b65526");
        assert_eq!(message.wind_direction, 292);
        assert_eq!(message.wind_speed, 5);
        assert_eq!(message.wind_gust, 10);
        assert_eq!(message.temperature, 30);
        assert_eq!(message.humidity, 1);
        assert_relative_eq!(message.pressure, 6552.6, epsilon = 1e-9);
    }

    #[test]
    fn decode_below_freezing() {
        let message = decode("/101010h4803.92N/00800.93E_090/012g020t-05h87b10132");
        assert_eq!(message.wind_direction, 90);
        assert_eq!(message.temperature, -5);
        assert_eq!(message.humidity, 87);
        assert_relative_eq!(message.pressure, 1013.2, epsilon = 1e-9);
    }

    #[test]
    fn missing_markers_keep_defaults() {
        let message = decode("/222245h4803.92N/00800.93E_...");
        assert_eq!(message.wind_direction, 0);
        assert_eq!(message.wind_speed, 0);
        assert_eq!(message.wind_gust, 0);
        assert_eq!(message.temperature, 0);
        assert_eq!(message.humidity, 0);
        assert_eq!(message.pressure, 0.0);
    }

    #[test]
    fn garbled_field_only_affects_itself() {
        let message = decode("/222245h4803.92N/00800.93E_292/xyzg010t030h01bxx");
        assert_eq!(message.wind_direction, 292);
        assert_eq!(message.wind_speed, 0);
        assert_eq!(message.wind_gust, 10);
        assert_eq!(message.temperature, 30);
        assert_eq!(message.pressure, 0.0);
    }
}
