use lazy_static::lazy_static;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::AircraftCategory;

/// Map symbol of an OGN station, selected by the APRS symbol table and code
/// characters of a position report.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Symbol {
    #[default]
    Unknown,
    Glider,
    Helicopter,
    /// Parachute, hang glider, paraglider
    Parachute,
    /// Drop plane, powered aircraft
    Aircraft,
    Jet,
    /// Balloon, airship
    Balloon,
    StaticObject,
    WeatherStation,
}

/// Two-character symbol as written on the wire: symbol table, then symbol code.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SymbolCode {
    pub table: char,
    pub code: char,
}

impl Display for SymbolCode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.table, self.code)
    }
}

const fn code(table: char, code: char) -> SymbolCode {
    SymbolCode { table, code }
}

/// Symbol used when encoding a category that has no symbol of its own.
pub const DEFAULT_AIRCRAFT_SYMBOL: SymbolCode = code('\\', '^');

// see http://wiki.glidernet.org/wiki:ogn-flavoured-aprs
const AIRCRAFT_SYMBOLS: [(SymbolCode, AircraftCategory); 8] = [
    (code('/', 'z'), AircraftCategory::Unknown),
    (code('/', '\''), AircraftCategory::Glider),
    (code('/', 'X'), AircraftCategory::Copter),
    (code('/', 'g'), AircraftCategory::Paraglider),
    (code('\\', '^'), AircraftCategory::Aircraft),
    (code('/', '^'), AircraftCategory::Jet),
    (code('/', 'O'), AircraftCategory::Balloon),
    (code('\\', 'n'), AircraftCategory::StaticObstacle),
];

lazy_static! {
    static ref SYMBOL_MAP: HashMap<&'static str, Symbol> = vec![
        ("/z", Symbol::Unknown),
        ("/'", Symbol::Glider),
        ("/X", Symbol::Helicopter),
        ("/g", Symbol::Parachute),
        ("\\^", Symbol::Aircraft),
        ("/^", Symbol::Jet),
        ("/O", Symbol::Balloon),
        ("\\n", Symbol::StaticObject),
        ("/_", Symbol::WeatherStation),
    ]
    .into_iter()
    .collect();
}

impl Symbol {
    /// Looks up the symbol for a symbol table and symbol code byte.
    /// Unmapped pairs are `Symbol::Unknown`.
    pub fn from_bytes(table: u8, code: u8) -> Self {
        std::str::from_utf8(&[table, code])
            .ok()
            .and_then(|key| SYMBOL_MAP.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        Ok(SYMBOL_MAP.get(s).copied().unwrap_or_default())
    }
}

impl AircraftCategory {
    /// The symbol a position report for this category is sent with.
    pub fn symbol(self) -> SymbolCode {
        AIRCRAFT_SYMBOLS
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(symbol, _)| *symbol)
            .unwrap_or(DEFAULT_AIRCRAFT_SYMBOL)
    }
}
