//! Tokenizer for the free-form OGN segment that follows the APRS position
//! block, e.g. `id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz`.

use crate::bytes::parse_leading;

/// 1 ft/min in m/s
const FPM_TO_MPS: f64 = 0.00508;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtensionToken<'a> {
    /// Hex digits of the identity token, without the `id` prefix
    AircraftId(&'a str),
    /// Degrees Celsius
    Temperature(i32),
    /// Percent
    Humidity(u32),
    /// Hectopascal
    Pressure(f64),
    /// Meters per second
    VerticalSpeed(f64),
    /// e.g. `+0.0rot`
    RotationRate(&'a str),
    /// e.g. `5.5dB`
    SignalStrength(&'a str),
    /// e.g. `3e`
    ErrorCount(&'a str),
    /// e.g. `-4.3kHz`
    FrequencyOffset(&'a str),
    /// e.g. `FL350.00`
    FlightLevel(&'a str),
    /// Text after the colon of `A3:AXY547M`
    FlightNumber(&'a str),
    /// Text after the `Sq` prefix
    Squawk(&'a str),
    /// Text after the `gps:` prefix
    GpsAccuracy(&'a str),
}

impl<'a> ExtensionToken<'a> {
    /// Classifies a single token. The first matching pattern wins, so a token
    /// ending in `rot` is never tested against the `dB`, `e` or `kHz` rules.
    /// Tokens that match a pattern but carry an unparseable value are dropped.
    pub fn classify(item: &'a str) -> Option<Self> {
        if let Some(id) = item.strip_prefix("id") {
            Some(Self::AircraftId(id))
        } else if let Some(value) = item.strip_prefix('t') {
            parse_leading(value).map(Self::Temperature)
        } else if let Some(value) = item.strip_prefix('h') {
            parse_leading(value).map(Self::Humidity)
        } else if let Some(value) = item.strip_prefix('b') {
            parse_leading::<u32>(value).map(|tenths| Self::Pressure(f64::from(tenths) / 10.0))
        } else if item.ends_with("fpm") {
            let value = &item[..item.find('f')?];
            let value = value.strip_prefix('+').unwrap_or(value);
            parse_leading::<i32>(value).map(|fpm| Self::VerticalSpeed(f64::from(fpm) * FPM_TO_MPS))
        } else if item.ends_with("rot") {
            Some(Self::RotationRate(item))
        } else if item.ends_with("dB") {
            Some(Self::SignalStrength(item))
        } else if item.ends_with('e') {
            Some(Self::ErrorCount(item))
        } else if item.ends_with("kHz") {
            Some(Self::FrequencyOffset(item))
        } else if item.starts_with("FL") {
            Some(Self::FlightLevel(item))
        } else if item.starts_with('A') && item.as_bytes().get(2) == Some(&b':') {
            Some(Self::FlightNumber(&item[3..]))
        } else if let Some(squawk) = item.strip_prefix("Sq") {
            Some(Self::Squawk(squawk))
        } else {
            item.strip_prefix("gps:").map(Self::GpsAccuracy)
        }
    }
}

/// Splits `s` on spaces, skipping empty items, and yields every token that
/// matches one of the known patterns.
pub fn tokens(s: &str) -> impl Iterator<Item = ExtensionToken<'_>> {
    s.split(' ')
        .filter(|item| !item.is_empty())
        .filter_map(ExtensionToken::classify)
}
