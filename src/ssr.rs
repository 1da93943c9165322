//! SSR (State Space Representation) corrections
use std::{collections::HashMap, io::Write};

use itertools::Itertools;

use crate::{
    prelude::{Code, Epoch, SignalTable, Vector3, SV},
    time::{format_epoch, format_optional_epoch},
};

/// [SsrCorrection] received for one satellite at one epoch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SsrCorrection {
    /// Corrected satellite
    pub sv: SV,
    /// Issue of data (ephemeris) this correction applies to
    pub iode: u32,
    /// User Range Accuracy class
    pub ura: u8,
    /// Orbit correction epoch. Corrections without orbit
    /// epoch are considered unavailable and are not logged.
    pub orbit_epoch: Option<Epoch>,
    /// Clock correction epoch
    pub clock_epoch: Option<Epoch>,
    /// Radial, along-track and cross-track orbit corrections (in meters)
    pub orbit_delta_m: Vector3<f64>,
    /// Clock correction (in meters)
    pub clock_correction_m: f64,
    /// Code biases (in meters)
    pub code_biases: HashMap<Code, f64>,
}

impl SsrCorrection {
    /// Returns code bias for this [Code], if available.
    /// Zero biases are reported as [None]: the correction stream does not
    /// tell a null bias from a missing one.
    pub fn code_bias(&self, code: Code) -> Option<f64> {
        self.code_biases
            .get(&code)
            .copied()
            .filter(|bias| *bias != 0.0)
    }

    /// Copies and returns [SsrCorrection] with this code bias (in meters)
    pub fn with_code_bias(&self, code: Code, bias_m: f64) -> Self {
        let mut s = self.clone();
        s.code_biases.insert(code, bias_m);
        s
    }
}

/// Formats one SSR epoch
pub(crate) fn format<W: Write>(
    w: &mut W,
    t: Epoch,
    corrections: &[SsrCorrection],
    signals: &SignalTable,
) -> std::io::Result<()> {
    writeln!(w, "obs time: {}", format_epoch(t, 0))?;

    for ssr in corrections.iter() {
        let Some(orbit_epoch) = ssr.orbit_epoch else {
            continue;
        };

        let sv = ssr.sv.to_string();

        write!(
            w,
            "{:3} iode={:3} ura={:2} t0={} radial={:6.3} along={:6.3} cross={:6.3} t1={} dclk={:9.5}",
            sv,
            ssr.iode,
            ssr.ura,
            format_epoch(orbit_epoch, 0),
            ssr.orbit_delta_m[0],
            ssr.orbit_delta_m[1],
            ssr.orbit_delta_m[2],
            format_optional_epoch(ssr.clock_epoch, 0),
            ssr.clock_correction_m,
        )?;

        let biases = signals
            .signals(ssr.sv.constellation)
            .iter()
            .filter_map(|entry| {
                let bias = ssr.code_bias(entry.code)?;
                Some(format!("{}:{:.3}", entry.label, bias))
            })
            .join("  ");

        writeln!(w, " cbias= {}", biases)?;
    }

    writeln!(w)?;
    w.flush()
}
