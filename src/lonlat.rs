use std::fmt::{Display, Formatter};
use std::io::Write;
use std::ops::Deref;

use crate::bytes::{field, parse_leading_decimal, tail};
use crate::{DecodeError, EncodeError};

/// Value of one digit of the `!Wxy!` precision enhancement, in degrees.
const ENHANCEMENT_STEP: f64 = 0.001 / 60.0;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub struct Latitude(f64);

impl Deref for Latitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Latitude {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value of the latitude in signed decimal degrees.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Decodes `DDMM.mm` text plus a `N`/`S` direction and an optional
    /// precision-enhancement digit.
    pub fn parse_uncompressed(
        s: &str,
        direction: u8,
        enhancement: Option<u8>,
    ) -> Result<Self, DecodeError> {
        decode_degrees(s, 2, enhancement)
            .map(|value| Self(if direction == b'S' { -value } else { value }))
            .ok_or_else(|| DecodeError::InvalidLatitude(s.to_owned()))
    }

    /// Returns the `Latitude`'s degrees, minutes, hundredths of a minute, and direction.
    /// `true` is north, `false` is south.
    pub fn dmh(&self) -> (u32, u32, u32, bool) {
        dmh(self.0)
    }

    pub fn encode_uncompressed<W: Write>(&self, buf: &mut W) -> Result<(), EncodeError> {
        write!(buf, "{}", self)?;
        Ok(())
    }
}

impl Display for Latitude {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let (deg, min, hundredths, north) = self.dmh();
        let dir = if north { 'N' } else { 'S' };
        write!(f, "{:02}{:02}.{:02}{}", deg, min, hundredths, dir)
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub struct Longitude(f64);

impl Deref for Longitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Longitude {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value of the longitude in signed decimal degrees.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Decodes `DDDMM.mm` text plus a `E`/`W` direction and an optional
    /// precision-enhancement digit.
    pub fn parse_uncompressed(
        s: &str,
        direction: u8,
        enhancement: Option<u8>,
    ) -> Result<Self, DecodeError> {
        decode_degrees(s, 3, enhancement)
            .map(|value| Self(if direction == b'W' { -value } else { value }))
            .ok_or_else(|| DecodeError::InvalidLongitude(s.to_owned()))
    }

    /// Returns the `Longitude`'s degrees, minutes, hundredths of a minute, and direction.
    /// `true` is east, `false` is west.
    pub fn dmh(&self) -> (u32, u32, u32, bool) {
        dmh(self.0)
    }

    pub fn encode_uncompressed<W: Write>(&self, buf: &mut W) -> Result<(), EncodeError> {
        write!(buf, "{}", self)?;
        Ok(())
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let (deg, min, hundredths, east) = self.dmh();
        let dir = if east { 'E' } else { 'W' };
        write!(f, "{:03}{:02}.{:02}{}", deg, min, hundredths, dir)
    }
}

/// Unsigned degrees from `D..DMM.mm` text with `deg_digits` leading degree digits.
fn decode_degrees(s: &str, deg_digits: usize, enhancement: Option<u8>) -> Option<f64> {
    if s.len() < deg_digits + 5 {
        return None;
    }

    let deg = parse_leading_decimal(field(s, 0, deg_digits))?;
    let min = parse_leading_decimal(tail(s, deg_digits))?;
    let mut value = deg + min / 60.0;

    if let Some(digit) = enhancement.filter(u8::is_ascii_digit) {
        value += f64::from(digit - b'0') * ENHANCEMENT_STEP;
    }

    Some(value)
}

fn dmh(value: f64) -> (u32, u32, u32, bool) {
    let (dir, value) = if value >= 0.0 {
        (true, value)
    } else {
        (false, -value)
    };

    let mut deg = value as u32;
    let mut min = ((value - (deg as f64)) * 60.0) as u32;
    let mut hundredths = ((value - (deg as f64) - (min as f64 / 60.0)) * 6000.0).round() as u32;

    if hundredths == 100 {
        // overflow from the rounding. need to propagate it up
        hundredths = 0;
        min += 1;
    }

    if min == 60 {
        min = 0;
        deg += 1;
    }

    (deg, min, hundredths, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat(s: &str, dir: u8, enhancement: Option<u8>) -> f64 {
        *Latitude::parse_uncompressed(s, dir, enhancement).unwrap()
    }

    fn lon(s: &str, dir: u8, enhancement: Option<u8>) -> f64 {
        *Longitude::parse_uncompressed(s, dir, enhancement).unwrap()
    }

    #[test]
    fn test_latitude() {
        assert_relative_eq!(lat("5111.32", b'N', None), 51.18866666666667, epsilon = 1e-9);
        assert_relative_eq!(lat("4903.50", b'S', None), -49.05833333333333, epsilon = 1e-9);
        assert_relative_eq!(lat("0000.00", b'N', None), 0.0, epsilon = 1e-9);
        assert_eq!(
            Latitude::parse_uncompressed("xx03.50", b'N', None),
            Err(DecodeError::InvalidLatitude("xx03.50".to_owned()))
        );
        assert_eq!(
            Latitude::parse_uncompressed("4903", b'N', None),
            Err(DecodeError::InvalidLatitude("4903".to_owned()))
        );
    }

    #[test]
    fn test_longitude() {
        assert_relative_eq!(lon("00102.04", b'W', None), -1.034, epsilon = 1e-9);
        assert_relative_eq!(lon("12903.50", b'E', None), 129.05833333333333, epsilon = 1e-9);
        assert_relative_eq!(lon("00000.00", b'W', None), 0.0, epsilon = 1e-9);
        assert_eq!(
            Longitude::parse_uncompressed("abcde.fg", b'E', None),
            Err(DecodeError::InvalidLongitude("abcde.fg".to_owned()))
        );
    }

    #[test]
    fn test_precision_enhancement() {
        assert_relative_eq!(lat("4741.90", b'N', Some(b'9')), 47.69848333333333, epsilon = 1e-9);
        assert_relative_eq!(lon("01104.20", b'E', Some(b'1')), 11.070016666666667, epsilon = 1e-9);
        assert_relative_eq!(lon("01104.20", b'W', Some(b'1')), -11.070016666666667, epsilon = 1e-9);
        // non-digit enhancement characters are ignored
        assert_relative_eq!(lat("4741.90", b'N', Some(b'!')), 47.69833333333333, epsilon = 1e-9);
    }

    #[test]
    fn test_encode() {
        assert_eq!(Latitude::new(51.1886666667).to_string(), "5111.32N");
        assert_eq!(Latitude::new(-48.0).to_string(), "4800.00S");
        assert_eq!(Longitude::new(-1.034).to_string(), "00102.04W");
        assert_eq!(Longitude::new(7.85123456).to_string(), "00751.07E");
        assert_eq!(Longitude::new(179.99999).to_string(), "18000.00E");

        let mut buf = vec![];
        Latitude::new(0.0).encode_uncompressed(&mut buf).unwrap();
        assert_eq!(buf, b"0000.00N");
    }

    #[test]
    fn test_round_trip() {
        for value in [0.0, 48.36016, -33.8675, 89.99, -89.99, 51.18866666666667] {
            let encoded = Latitude::new(value).to_string();
            let dir = encoded.as_bytes()[7];
            assert_abs_diff_eq!(lat(&encoded[..7], dir, None), value, epsilon = 1e-4);
        }

        for value in [0.0, 12.408166, -1.034, 179.99, -179.99, 7.85123456] {
            let encoded = Longitude::new(value).to_string();
            let dir = encoded.as_bytes()[8];
            assert_abs_diff_eq!(lon(&encoded[..8], dir, None), value, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_round_trip_with_enhancement() {
        // 47°41.909' needs the third decimal digit of the minutes
        let value = 47.0 + 41.909 / 60.0;
        let encoded = Latitude::new(value).to_string();
        assert_eq!(encoded, "4741.91N");
        assert_abs_diff_eq!(lat("4741.90", b'N', Some(b'9')), value, epsilon = 1e-9);
        assert_abs_diff_eq!(lat(&encoded[..7], b'N', None), value, epsilon = 1e-4);
    }
}
