//! Ranging codes and per constellation code bias tables
use std::{collections::HashMap, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, prelude::Constellation};

/// Ranging signal (code) identifier, as tracked by the receiver
/// and referenced by SSR code biases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Code {
    L1C,
    L1P,
    L1W,
    L1S,
    L1L,
    L1X,
    L1D,
    L1A,
    L1B,
    L1Z,
    L2C,
    L2D,
    L2S,
    L2L,
    L2X,
    L2P,
    L2W,
    L2I,
    L2Q,
    L5I,
    L5Q,
    L5X,
    L5D,
    L5P,
    L6I,
    L6Q,
    L6X,
    L6A,
    L7I,
    L7Q,
    L7X,
}

impl Code {
    /// Short (2 characters) display code, like "1C"
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::L1C => "1C",
            Self::L1P => "1P",
            Self::L1W => "1W",
            Self::L1S => "1S",
            Self::L1L => "1L",
            Self::L1X => "1X",
            Self::L1D => "1D",
            Self::L1A => "1A",
            Self::L1B => "1B",
            Self::L1Z => "1Z",
            Self::L2C => "2C",
            Self::L2D => "2D",
            Self::L2S => "2S",
            Self::L2L => "2L",
            Self::L2X => "2X",
            Self::L2P => "2P",
            Self::L2W => "2W",
            Self::L2I => "2I",
            Self::L2Q => "2Q",
            Self::L5I => "5I",
            Self::L5Q => "5Q",
            Self::L5X => "5X",
            Self::L5D => "5D",
            Self::L5P => "5P",
            Self::L6I => "6I",
            Self::L6Q => "6Q",
            Self::L6X => "6X",
            Self::L6A => "6A",
            Self::L7I => "7I",
            Self::L7Q => "7Q",
            Self::L7X => "7X",
        }
    }

    /// All known [Code]s
    pub const ALL: [Self; 31] = [
        Self::L1C,
        Self::L1P,
        Self::L1W,
        Self::L1S,
        Self::L1L,
        Self::L1X,
        Self::L1D,
        Self::L1A,
        Self::L1B,
        Self::L1Z,
        Self::L2C,
        Self::L2D,
        Self::L2S,
        Self::L2L,
        Self::L2X,
        Self::L2P,
        Self::L2W,
        Self::L2I,
        Self::L2Q,
        Self::L5I,
        Self::L5Q,
        Self::L5X,
        Self::L5D,
        Self::L5P,
        Self::L6I,
        Self::L6Q,
        Self::L6X,
        Self::L6A,
        Self::L7I,
        Self::L7Q,
        Self::L7X,
    ];
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = Error;

    /// Parses a [Code] from its display code ("1C"),
    /// a leading 'L' (RINEX-like "L1C") is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed.strip_prefix('L').unwrap_or(trimmed);

        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .copied()
            .ok_or(Error::UnknownCode(s.to_string()))
    }
}

/// One [Code] and how it is labelled in the SSR log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEntry {
    pub code: Code,
    pub label: &'static str,
}

impl SignalEntry {
    /// Builds a [SignalEntry] labelled with the [Code] display code
    pub const fn new(code: Code) -> Self {
        Self {
            code,
            label: code.as_str(),
        }
    }
}

const GPS_SIGNALS: [SignalEntry; 14] = [
    SignalEntry::new(Code::L1C),
    SignalEntry::new(Code::L1P),
    SignalEntry::new(Code::L1W),
    SignalEntry::new(Code::L1S),
    SignalEntry::new(Code::L1L),
    SignalEntry::new(Code::L2C),
    SignalEntry::new(Code::L2D),
    SignalEntry::new(Code::L2S),
    SignalEntry::new(Code::L2L),
    SignalEntry::new(Code::L2X),
    SignalEntry::new(Code::L2P),
    SignalEntry::new(Code::L2W),
    SignalEntry::new(Code::L5I),
    SignalEntry::new(Code::L5Q),
];

const BDS_SIGNALS: [SignalEntry; 14] = [
    SignalEntry::new(Code::L2I),
    SignalEntry::new(Code::L2Q),
    SignalEntry::new(Code::L6I),
    SignalEntry::new(Code::L6Q),
    SignalEntry::new(Code::L7I),
    SignalEntry::new(Code::L7Q),
    SignalEntry::new(Code::L1D),
    SignalEntry::new(Code::L1P),
    SignalEntry::new(Code::L1X),
    SignalEntry::new(Code::L5D),
    SignalEntry::new(Code::L5P),
    SignalEntry::new(Code::L5X),
    SignalEntry::new(Code::L1A),
    SignalEntry::new(Code::L6A),
];

/// [SignalTable] describes, for each [Constellation], which code biases
/// are reported in the SSR log, and in which order.
/// The default table covers GPS and BeiDou. Other constellations
/// have no entry and their code biases are not reported, unless
/// registered with [SignalTable::with_signals].
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTable {
    tables: HashMap<Constellation, Vec<SignalEntry>>,
}

impl Default for SignalTable {
    fn default() -> Self {
        let mut tables = HashMap::with_capacity(2);
        tables.insert(Constellation::GPS, GPS_SIGNALS.to_vec());
        tables.insert(Constellation::BeiDou, BDS_SIGNALS.to_vec());
        Self { tables }
    }
}

impl SignalTable {
    /// Ordered [SignalEntry]s for this [Constellation]. Empty when
    /// this [Constellation] is not registered.
    pub fn signals(&self, constellation: Constellation) -> &[SignalEntry] {
        self.tables
            .get(&constellation)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Copies and returns [SignalTable] with ordered [SignalEntry]s for this
    /// [Constellation], replacing any previous definition.
    pub fn with_signals(&self, constellation: Constellation, entries: Vec<SignalEntry>) -> Self {
        let mut s = self.clone();
        s.tables.insert(constellation, entries);
        s
    }

    /// Returns true if this [Constellation] has a registered table
    pub fn contains(&self, constellation: Constellation) -> bool {
        self.tables.contains_key(&constellation)
    }
}
