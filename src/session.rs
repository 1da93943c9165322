//! Logging [Session]
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, warn};

use crate::{
    error::Error,
    observation, path,
    prelude::{
        Category, Config, Epoch, ObservationRecord, SatellitePosition, SignalTable, SsrCorrection,
    },
    satpos,
    ssr,
    time::now_gpst,
};

/// [Status] of one log [Category] within a [Session]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    /// Not requested
    #[default]
    Disabled,
    /// Opened and writable
    Active,
    /// Failed to open: logging is disabled for the rest of this [Session]
    Failed(Error),
    /// Released by [Session::close]
    Closed,
}

impl Status {
    /// True when this [Category] is writable
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

struct Sink<W: Write> {
    status: Status,
    path: Option<PathBuf>,
    writer: Option<W>,
}

impl<W: Write> Default for Sink<W> {
    fn default() -> Self {
        Self {
            status: Status::Disabled,
            path: None,
            writer: None,
        }
    }
}

impl<W: Write> Sink<W> {
    fn active(writer: W, path: Option<PathBuf>) -> Self {
        Self {
            path,
            status: Status::Active,
            writer: Some(writer),
        }
    }

    fn failed(error: Error) -> Self {
        Self {
            path: None,
            writer: None,
            status: Status::Failed(error),
        }
    }

    /// Flushes and releases the writer, if any
    fn release(&mut self, category: Category) -> Option<W> {
        let mut writer = self.writer.take()?;
        if let Err(e) = writer.flush() {
            error!("{} - failed to flush: {}", category, e);
        }
        self.status = Status::Closed;
        Some(writer)
    }
}

/// [Session] owns up to one writer per log [Category].
///
/// Logging is best effort: a [Category] that could not be opened
/// is reported by [Session::status] and all its logging requests
/// are silently dropped. Write errors are traced but never returned.
///
/// All writers are flushed after each logged batch, and released
/// on [Session::close] or when the [Session] is dropped.
///
/// ```
/// use rtk_datalog::prelude::{Category, Config, Session, Status};
///
/// let cfg = Config::default()
///     .with_pattern(Category::Ssr, None)
///     .with_pattern(Category::Observation, None)
///     .with_pattern(Category::SatellitePosition, None);
///
/// let mut session = Session::open(&cfg);
/// assert_eq!(session.status(Category::Ssr), &Status::Disabled);
///
/// session.log_observations(&[]);
/// session.close();
/// ```
pub struct Session<W: Write = BufWriter<File>> {
    sinks: [Sink<W>; 3],
    signals: SignalTable,
    snr_unit_dbhz: f64,
}

impl<W: Write> Default for Session<W> {
    fn default() -> Self {
        Self {
            sinks: Default::default(),
            signals: Default::default(),
            snr_unit_dbhz: crate::cfg::DEFAULT_SNR_UNIT_DBHZ,
        }
    }
}

impl Session<BufWriter<File>> {
    /// Opens a new file [Session]. Session start time is
    /// the current system time, expressed in GPST, and is used to name
    /// each log file. Failures are not fatal: see [Session::status].
    pub fn open(cfg: &Config) -> Self {
        match now_gpst() {
            Ok(t) => Self::open_at(cfg, t),
            Err(e) => {
                error!("session: {}", e);
                let sinks = Category::ALL.map(|category| match cfg.pattern(category) {
                    Some(_) => Sink::failed(e.clone()),
                    None => Sink::default(),
                });
                Self {
                    sinks,
                    signals: Default::default(),
                    snr_unit_dbhz: cfg.snr_unit_dbhz,
                }
            },
        }
    }

    /// Opens a new file [Session], using this session start time.
    /// Existing files are truncated.
    pub fn open_at(cfg: &Config, t: Epoch) -> Self {
        let sinks = Category::ALL.map(|category| {
            let Some(pattern) = cfg.pattern(category) else {
                debug!("{} - not requested", category);
                return Sink::default();
            };

            let filename = path::expand_path(pattern, t, &cfg.station, &cfg.base);
            let path = cfg.directory.join(filename);

            match File::create(&path) {
                Ok(fd) => {
                    debug!("{} - opened \"{}\"", category, path.display());
                    Sink::active(BufWriter::new(fd), Some(path))
                },
                Err(e) => {
                    warn!("{} - failed to create \"{}\": {}", category, path.display(), e);
                    Sink::failed(Error::FileCreation(path, e.kind()))
                },
            }
        });

        Self {
            sinks,
            signals: Default::default(),
            snr_unit_dbhz: cfg.snr_unit_dbhz,
        }
    }
}

impl<W: Write> Session<W> {
    /// Builds a [Session] on top of custom writers.
    /// A missing writer disables that [Category].
    pub fn from_writers(
        ssr: Option<W>,
        observation: Option<W>,
        satellite_position: Option<W>,
    ) -> Self {
        let sink = |writer: Option<W>| match writer {
            Some(writer) => Sink::active(writer, None),
            None => Sink::default(),
        };

        Self {
            sinks: [sink(ssr), sink(observation), sink(satellite_position)],
            signals: Default::default(),
            snr_unit_dbhz: crate::cfg::DEFAULT_SNR_UNIT_DBHZ,
        }
    }

    /// Returns [Session] using this [SignalTable] to select code biases
    pub fn with_signal_table(mut self, signals: SignalTable) -> Self {
        self.signals = signals;
        self
    }

    /// Returns [Session] using this compact SNR unit (in dB-Hz)
    pub fn with_snr_unit(mut self, snr_unit_dbhz: f64) -> Self {
        self.snr_unit_dbhz = snr_unit_dbhz;
        self
    }

    /// [Status] of this [Category]
    pub fn status(&self, category: Category) -> &Status {
        &self.sinks[category.index()].status
    }

    /// Log file path of this [Category], when file backed and opened
    pub fn path(&self, category: Category) -> Option<&Path> {
        self.sinks[category.index()].path.as_deref()
    }

    /// Writer of this [Category], until released
    pub fn writer(&self, category: Category) -> Option<&W> {
        self.sinks[category.index()].writer.as_ref()
    }

    /// Flushes, releases and returns the writer of this [Category].
    /// The [Category] is then [Status::Closed].
    pub fn take_writer(&mut self, category: Category) -> Option<W> {
        self.sinks[category.index()].release(category)
    }

    /// Flushes and releases all writers. Calling [Session::close]
    /// more than once has no effect.
    pub fn close(&mut self) {
        for category in Category::ALL {
            if self.sinks[category.index()].release(category).is_some() {
                debug!("{} - closed", category);
            }
        }
    }

    /// Logs all available [SsrCorrection]s, for this epoch.
    /// Corrections without orbit epoch are not logged.
    pub fn log_ssr(&mut self, t: Epoch, corrections: &[SsrCorrection]) {
        let Some(w) = self.sinks[Category::Ssr.index()].writer.as_mut() else {
            return;
        };

        if let Err(e) = ssr::format(w, t, corrections, &self.signals) {
            error!("{} - write error: {}", Category::Ssr, e);
        }
    }

    /// Logs a batch of [ObservationRecord]s
    pub fn log_observations(&mut self, observations: &[ObservationRecord]) {
        let Some(w) = self.sinks[Category::Observation.index()].writer.as_mut() else {
            return;
        };

        if let Err(e) = observation::format(w, observations, self.snr_unit_dbhz) {
            error!("{} - write error: {}", Category::Observation, e);
        }
    }

    /// Logs a batch of [SatellitePosition]s, each paired with
    /// the [ObservationRecord] at the same index.
    pub fn log_satellite_positions(
        &mut self,
        observations: &[ObservationRecord],
        positions: &[SatellitePosition],
    ) {
        let Some(w) = self.sinks[Category::SatellitePosition.index()]
            .writer
            .as_mut()
        else {
            return;
        };

        if let Err(e) = satpos::format(w, observations, positions) {
            error!("{} - write error: {}", Category::SatellitePosition, e);
        }
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        self.close();
    }
}
