//! A Status Report announces a station's current state as a single line of
//! free text. The body starts with the '>' APRS Data Type Identifier; the text
//! itself is not decoded any further.
//!
//! Examples:
//! - `LFNW>APRS,TCPIP*,qAC,GLIDERN5:>183804h v0.2.6.ARM CPU:0.3 RAM:771.4/972.2MB`
//! - `EGHL>OGNSDR:>Hi there!`

use crate::{MessageKind, OgnMessage};

pub(crate) fn decode_status<'a>(sentence: &'a str, header: &'a str) -> OgnMessage<'a> {
    let source_id = header.split_once('>').map_or(header, |(source, _)| source);

    let mut message = OgnMessage::new(sentence);
    message.kind = MessageKind::Status;
    message.source_id = source_id;
    message
}
