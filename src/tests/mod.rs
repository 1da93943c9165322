mod observation;
mod satpos;
mod time;

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{Code, Constellation, Epoch, ObservationRecord, Vector3, SV};

use hifitime::Unit;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// 2024/01/01 00:00:00 GPST
pub const REFERENCE_GPST_SECONDS: f64 = 1_388_102_400.0;

pub fn reference_epoch() -> Epoch {
    Epoch::from_gpst_seconds(REFERENCE_GPST_SECONDS)
}

/// 2024/03/05 13:47:12 GPST
pub fn later_epoch() -> Epoch {
    Epoch::from_gpst_seconds(1_393_681_632.0)
}

pub fn gps(prn: u8) -> SV {
    SV::new(Constellation::GPS, prn)
}

pub fn bds(prn: u8) -> SV {
    SV::new(Constellation::BeiDou, prn)
}

pub fn observation(sv: SV, t: Epoch) -> ObservationRecord {
    ObservationRecord {
        sv,
        epoch: t,
        phase_cycles: [120_000_000.123, 93_500_000.25],
        pseudo_range_m: [22_000_000.5, 22_000_003.75],
        lli: [1, 0],
        snr: [400, 180],
        codes: [Some(Code::L1C), Some(Code::L2W)],
    }
}

pub fn transmission_epoch(t: Epoch) -> Epoch {
    t - 70.0 * Unit::Millisecond
}

pub fn position() -> Vector3<f64> {
    Vector3::new(15_000_000.0, -20_000_000.5, 8_000_000.25)
}
