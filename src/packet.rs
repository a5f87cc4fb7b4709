use tracing::debug;

use crate::position::decode_position;
use crate::status::decode_status;
use crate::{DecodeError, MessageKind, OgnMessage};

/// Header and body must each hold at least this many bytes.
const MIN_PART_LEN: usize = 5;

impl<'a> OgnMessage<'a> {
    /// Decodes one APRS-IS line (without its line terminator).
    ///
    /// Never fails: a line that does not have the shape of any known sentence
    /// comes back as `MessageKind::Unknown` with every field at its default.
    pub fn parse(sentence: &'a str) -> Self {
        if sentence.starts_with('#') {
            let mut message = OgnMessage::new(sentence);
            message.kind = MessageKind::Comment;
            return message;
        }

        match classify(sentence) {
            Ok(message) => message,
            Err(e) => {
                debug!("{}: {}", e, sentence);
                OgnMessage::new(sentence)
            }
        }
    }
}

fn classify(sentence: &str) -> Result<OgnMessage<'_>, DecodeError> {
    let (header, body) = sentence
        .split_once(':')
        .filter(|(header, body)| header.len() >= MIN_PART_LEN && body.len() >= MIN_PART_LEN)
        .ok_or_else(|| DecodeError::InvalidSentence(sentence.to_owned()))?;

    match body.as_bytes()[0] {
        b'/' => decode_position(sentence, header, body),
        b'>' => Ok(decode_status(sentence, header)),
        _ => Ok(OgnMessage::new(sentence)),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::{AddressType, AircraftCategory, Symbol};

    const SAMPLES: [&str; 6] = [
        "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz",
        "ICA4D21C2>OGADSB,qAS,HLST:/001140h4741.90N/01104.20E^124/460/A=034868 !W91! id254D21C2 +128fpm FL350.00 A3:AXY547M Sq2244",
        "FNT08075C>OGNFNT,qAS,Hoernle2:/222245h4803.92N/00800.93E_292/005g010t030h01b65526 5.2dB",
        "LFNW>APRS,TCPIP*,qAC,GLIDERN5:/183804h4254.53NI00203.90E&/A=001000",
        "LFNW>APRS,TCPIP*,qAC,GLIDERN5:>183804h v0.2.6.ARM CPU:0.3 RAM:771.4/972.2MB",
        "# aprsc 2.1.4-g408ed49 1 Oct 2024 10:43:10 GMT GLIDERN1 37.187.40.234:14580",
    ];

    fn assert_defaults(message: &OgnMessage) {
        assert!(message.latitude.is_nan());
        assert!(message.longitude.is_nan());
        assert!(message.altitude.is_nan());
        assert_eq!(message.source_id, "");
        assert_eq!(message.aircraft_id, "");
        assert_eq!(message.symbol, Symbol::Unknown);
    }

    #[test]
    fn parse_traffic_report() {
        let message = OgnMessage::parse(SAMPLES[0]);
        assert_eq!(message.kind, MessageKind::TrafficReport);
        assert_eq!(message.sentence, SAMPLES[0]);
        assert_relative_eq!(message.latitude, 51.18866667, epsilon = 1e-7);
        assert_relative_eq!(message.longitude, -1.034, epsilon = 1e-7);
        assert_relative_eq!(message.altitude, 185.0136, epsilon = 1e-7);
        assert_eq!(message.course, 86.0);
        assert_eq!(message.speed, 7.0);
        assert_relative_eq!(message.vertical_speed, -0.09652, epsilon = 1e-7);
        assert_eq!(message.aircraft_category, AircraftCategory::TowPlane);
        assert_eq!(message.address_type, AddressType::Flarm);
        assert_eq!(message.address, "DDE626");
        assert!(!message.stealth);
        assert!(!message.no_tracking);
    }

    #[test]
    fn parse_weather_report() {
        let message = OgnMessage::parse(SAMPLES[2]);
        assert_eq!(message.kind, MessageKind::Weather);
        assert_eq!(message.source_id, "FNT08075C");
        assert_eq!(message.symbol, Symbol::WeatherStation);
        assert_relative_eq!(message.latitude, 48.06533333, epsilon = 1e-7);
        assert_relative_eq!(message.longitude, 8.0155, epsilon = 1e-7);
        assert!(message.altitude.is_nan());
        assert_eq!(message.wind_direction, 292);
        assert_eq!(message.wind_speed, 5);
        assert_eq!(message.wind_gust, 10);
        assert_eq!(message.temperature, 30);
        assert_eq!(message.humidity, 1);
        assert_relative_eq!(message.pressure, 6552.6, epsilon = 1e-9);
        assert_eq!(message.signal_strength, "5.2dB");
    }

    #[test]
    fn parse_status() {
        let message = OgnMessage::parse(SAMPLES[4]);
        assert_eq!(message.kind, MessageKind::Status);
        assert_eq!(message.source_id, "LFNW");
        assert!(!message.has_position());
    }

    #[test]
    fn parse_comment() {
        let message = OgnMessage::parse(SAMPLES[5]);
        assert_eq!(message.kind, MessageKind::Comment);
        assert_eq!(message.sentence, SAMPLES[5]);
        assert_defaults(&message);

        assert_eq!(OgnMessage::parse("#").kind, MessageKind::Comment);
    }

    #[test]
    fn parse_invalid() {
        let message = OgnMessage::parse("INVALID MESSAGE FORMAT");
        assert_eq!(message.kind, MessageKind::Unknown);
        assert_eq!(message.sentence, "INVALID MESSAGE FORMAT");
        assert_defaults(&message);
    }

    #[test]
    fn parse_structural_rejections() {
        for sentence in [
            "",
            "abcd:/074548h5111.32N/00102.04W'086/007",
            "FLRDDE626>APRS:/0745",
            "FLRDDE626>APRS,qAS,EGHL:!4903.50N/07201.75W-",
            "FLRDDE626:/074548h5111.32N/00102.04W'086/007/A=000607",
            "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N",
            "FLRDDE626>APRS,qAS,EGHL:/074548h 5111.32N/00102.04W'086/007/A=000607",
        ] {
            let message = OgnMessage::parse(sentence);
            assert_eq!(message.kind, MessageKind::Unknown, "{}", sentence);
            assert_defaults(&message);
        }
    }

    #[test]
    fn parse_is_deterministic() {
        for sentence in SAMPLES {
            assert_eq!(
                format!("{:?}", OgnMessage::parse(sentence)),
                format!("{:?}", OgnMessage::parse(sentence))
            );
        }
    }

    #[test]
    fn parse_every_prefix() {
        for sentence in SAMPLES {
            for end in 0..=sentence.len() {
                let prefix = &sentence[..end];
                let message = OgnMessage::parse(prefix);
                assert_eq!(message.sentence, prefix);

                let too_short = match prefix.split_once(':') {
                    Some((header, body)) => header.len() < 5 || body.len() < 5,
                    None => true,
                };
                if too_short && !prefix.starts_with('#') {
                    assert_eq!(message.kind, MessageKind::Unknown, "{}", prefix);
                }
            }
        }
    }

    #[test]
    fn parse_random_short_strings() {
        const ALPHABET: &[u8] = b"/:>#!W _-.0123456789ABNSEWhgtbz'^";

        let mut rng = StdRng::seed_from_u64(0x06E1);
        for _ in 0..10_000 {
            let len = rng.random_range(0..48);
            let sentence: String = (0..len)
                .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
                .collect();

            let message = OgnMessage::parse(&sentence);
            if sentence.len() < 2 * MIN_PART_LEN + 1 && !sentence.starts_with('#') {
                assert_eq!(message.kind, MessageKind::Unknown, "{}", sentence);
            }
        }
    }

    #[test]
    fn parse_non_ascii() {
        for sentence in [
            "FLRDDE626>APRS:/074548hé111.32N/00102.04W'086/007/A=000607 idé",
            "FLRDDE626>APRS:/0745éééééééééééééééééééééééééééé",
            "FNT08075C>OGNFNT:/222245h4803.92N/00800.93E_29é/005gét03éh0éb6552é",
            "ÄÖÜÄÖ:>ÄÖÜ",
        ] {
            let _ = OgnMessage::parse(sentence);
        }
    }
}
