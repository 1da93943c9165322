#[cfg(feature = "serde")]
use serde::Deserialize;

/// Log [Category]. Each category is written to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum Category {
    /// State Space Representation corrections
    Ssr,
    /// Raw observations
    Observation,
    /// Satellite positions and clock states
    SatellitePosition,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.tag())
    }
}

impl Category {
    /// All [Category]s, in session creation order
    pub const ALL: [Self; 3] = [Self::Ssr, Self::Observation, Self::SatellitePosition];

    /// Short tag, used in default file names
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Ssr => "ssr",
            Self::Observation => "obs",
            Self::SatellitePosition => "satpos",
        }
    }

    /// Default file name pattern: one file per minute of session start
    pub fn default_pattern(&self) -> String {
        format!("{}_%Y%m%d%h%M.log", self.tag())
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Ssr => 0,
            Self::Observation => 1,
            Self::SatellitePosition => 2,
        }
    }
}
