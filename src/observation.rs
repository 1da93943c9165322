//! Raw receiver observations
use std::io::Write;

use crate::{
    prelude::{Code, Epoch, SV},
    time::format_epoch,
};

/// Dual frequency [ObservationRecord], for one satellite at one epoch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationRecord {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Observed satellite
    pub sv: SV,
    /// Carrier phases (in cycles)
    pub phase_cycles: [f64; 2],
    /// Pseudo ranges (in meters)
    pub pseudo_range_m: [f64; 2],
    /// Loss of lock indicators
    pub lli: [u8; 2],
    /// Signal to noise ratios, in compact receiver unit
    pub snr: [u16; 2],
    /// Tracked ranging [Code]s
    pub codes: [Option<Code>; 2],
}

impl ObservationRecord {
    /// Signal to noise ratios (in dB-Hz), using this compact unit
    pub fn snr_dbhz(&self, snr_unit_dbhz: f64) -> [f64; 2] {
        [
            self.snr[0] as f64 * snr_unit_dbhz,
            self.snr[1] as f64 * snr_unit_dbhz,
        ]
    }
}

fn code_str(code: Option<Code>) -> &'static str {
    code.map(|c| c.as_str()).unwrap_or_default()
}

/// Formats one batch of [ObservationRecord]s
pub(crate) fn format<W: Write>(
    w: &mut W,
    observations: &[ObservationRecord],
    snr_unit_dbhz: f64,
) -> std::io::Result<()> {
    for (i, obs) in observations.iter().enumerate() {
        let snr = obs.snr_dbhz(snr_unit_dbhz);

        writeln!(
            w,
            " ({:2}) {} {:<3} L0={:13.3} L1={:13.3} P0={:13.3} P1={:13.3} LLI0=0x{:02x} LLI1=0x{:02x} SNR0={:3.1} SNR1={:3.1} {} {}",
            i + 1,
            format_epoch(obs.epoch, 3),
            obs.sv.to_string(),
            obs.phase_cycles[0],
            obs.phase_cycles[1],
            obs.pseudo_range_m[0],
            obs.pseudo_range_m[1],
            obs.lli[0],
            obs.lli[1],
            snr[0],
            snr[1],
            code_str(obs.codes[0]),
            code_str(obs.codes[1]),
        )?;
    }

    writeln!(w)?;
    w.flush()
}
