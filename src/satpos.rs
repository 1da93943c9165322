//! Satellite position and clock states
use std::io::Write;

use log::warn;

use crate::{
    prelude::{Epoch, ObservationRecord, Vector3},
    time::format_epoch,
};

/// [SatellitePosition] resolved for one observation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SatellitePosition {
    /// Signal transmission [Epoch]
    pub transmission_epoch: Epoch,
    /// ECEF position (in meters)
    pub position_m: Vector3<f64>,
    /// Clock bias (in seconds)
    pub clock_bias_s: f64,
    /// Clock drift (in s.s⁻¹)
    pub clock_drift_s_s: f64,
    /// Position variance (in m²)
    pub variance_m2: f64,
    /// Health flag, as broadcast
    pub health: u8,
}

/// Formats one batch of [SatellitePosition]s. Each position
/// is paired to the [ObservationRecord] at the same index.
pub(crate) fn format<W: Write>(
    w: &mut W,
    observations: &[ObservationRecord],
    positions: &[SatellitePosition],
) -> std::io::Result<()> {
    if observations.len() != positions.len() {
        warn!(
            "satpos: {} observations for {} positions",
            observations.len(),
            positions.len()
        );
    }

    for (obs, pos) in observations.iter().zip(positions.iter()) {
        writeln!(
            w,
            "{} obs_time={} t_time={} rs={:13.3} {:13.3} {:13.3} dts={:15.12} var={:10.7} svh={:02X}",
            obs.sv,
            format_epoch(obs.epoch, 6),
            format_epoch(pos.transmission_epoch, 6),
            pos.position_m[0],
            pos.position_m[1],
            pos.position_m[2],
            pos.clock_bias_s,
            pos.variance_m2,
            pos.health,
        )?;
    }

    writeln!(w)?;
    w.flush()
}
