//! [OGN](https://www.glidernet.org/) flavoured [APRS-IS](http://www.aprs-is.net/) decoder and formatter for Rust
//!
//! ```rust
//! let message = ogn_aprs::parse(
//!     r"FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz",
//! );
//!
//! assert_eq!(message.kind, ogn_aprs::MessageKind::TrafficReport);
//! assert_eq!(message.source_id, "FLRDDE626");
//! assert_eq!(message.address, "DDE626");
//! assert_eq!(message.aircraft_category, ogn_aprs::AircraftCategory::TowPlane);
//! ```

#[cfg(test)]
#[macro_use]
extern crate approx;

mod aircraft;
mod bytes;
mod callsign;
mod client;
mod error;
mod extensions;
mod formatter;
mod lonlat;
mod message;
mod output;
mod packet;
mod position;
mod status;
mod symbol;
mod timestamp;
mod weather;

pub use aircraft::{AddressType, AircraftCategory, AircraftId};
pub use callsign::{passcode, Callsign};
pub use client::{AprsClient, AprsClientConfig};
pub use error::{ClientError, DecodeError, EncodeError};
pub use extensions::{tokens, ExtensionToken};
pub use formatter::{filter, filter_command, login_line, position_report, PositionReport};
pub use lonlat::{Latitude, Longitude};
pub use message::{MessageKind, OgnMessage};
pub use output::{OutputFormatter, RawFormatter, Sbs1Formatter};
pub use symbol::{Symbol, SymbolCode, DEFAULT_AIRCRAFT_SYMBOL};
pub use timestamp::Timestamp;

/// Decodes one APRS-IS line, see [`OgnMessage::parse`].
pub fn parse(sentence: &str) -> OgnMessage<'_> {
    OgnMessage::parse(sentence)
}
