use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::Deserialize;

mod category;
pub use category::Category;

/// Default compact SNR unit, in dB-Hz
pub const DEFAULT_SNR_UNIT_DBHZ: f64 = 0.25;

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_ssr_pattern() -> Option<String> {
    Some(Category::Ssr.default_pattern())
}

fn default_observation_pattern() -> Option<String> {
    Some(Category::Observation.default_pattern())
}

fn default_satellite_position_pattern() -> Option<String> {
    Some(Category::SatellitePosition.default_pattern())
}

fn default_snr_unit() -> f64 {
    DEFAULT_SNR_UNIT_DBHZ
}

/// Logging session [Config]uration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Directory where log files are created
    #[cfg_attr(feature = "serde", serde(default = "default_directory"))]
    pub directory: PathBuf,
    /// SSR log file name pattern. Not logged when undefined.
    #[cfg_attr(feature = "serde", serde(default = "default_ssr_pattern"))]
    pub ssr: Option<String>,
    /// Observation log file name pattern. Not logged when undefined.
    #[cfg_attr(feature = "serde", serde(default = "default_observation_pattern"))]
    pub observation: Option<String>,
    /// Satellite position log file name pattern. Not logged when undefined.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_satellite_position_pattern")
    )]
    pub satellite_position: Option<String>,
    /// Station name, substitutes `%r` in file name patterns
    #[cfg_attr(feature = "serde", serde(default))]
    pub station: String,
    /// Base station name, substitutes `%b` in file name patterns
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: String,
    /// Compact SNR unit (in dB-Hz) used by the receiver
    /// to store signal to noise ratios.
    #[cfg_attr(feature = "serde", serde(default = "default_snr_unit"))]
    pub snr_unit_dbhz: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            ssr: default_ssr_pattern(),
            observation: default_observation_pattern(),
            satellite_position: default_satellite_position_pattern(),
            station: Default::default(),
            base: Default::default(),
            snr_unit_dbhz: default_snr_unit(),
        }
    }
}

impl Config {
    /// File name pattern for this [Category], if requested
    pub fn pattern(&self, category: Category) -> Option<&str> {
        match category {
            Category::Ssr => self.ssr.as_deref(),
            Category::Observation => self.observation.as_deref(),
            Category::SatellitePosition => self.satellite_position.as_deref(),
        }
    }

    /// Copies and returns [Config] with updated output directory
    pub fn with_directory(&self, directory: impl AsRef<Path>) -> Self {
        let mut s = self.clone();
        s.directory = directory.as_ref().to_path_buf();
        s
    }

    /// Copies and returns [Config] with updated file name pattern
    /// for this [Category]. None disables this [Category].
    pub fn with_pattern(&self, category: Category, pattern: Option<&str>) -> Self {
        let mut s = self.clone();
        let pattern = pattern.map(|p| p.to_string());
        match category {
            Category::Ssr => s.ssr = pattern,
            Category::Observation => s.observation = pattern,
            Category::SatellitePosition => s.satellite_position = pattern,
        }
        s
    }

    /// Copies and returns [Config] with station and base names
    pub fn with_stations(&self, station: &str, base: &str) -> Self {
        let mut s = self.clone();
        s.station = station.to_string();
        s.base = base.to_string();
        s
    }

    /// Copies and returns [Config] with updated compact SNR unit
    pub fn with_snr_unit(&self, snr_unit_dbhz: f64) -> Self {
        let mut s = self.clone();
        s.snr_unit_dbhz = snr_unit_dbhz;
        s
    }
}
