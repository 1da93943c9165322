#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod error;
mod observation;
mod path;
mod satpos;
mod session;
mod signal;
mod ssr;
mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Category, Config, DEFAULT_SNR_UNIT_DBHZ};
    pub use crate::error::Error;
    pub use crate::observation::ObservationRecord;
    pub use crate::path::expand_path;
    pub use crate::satpos::SatellitePosition;
    pub use crate::session::{Session, Status};
    pub use crate::signal::{Code, SignalEntry, SignalTable};
    pub use crate::ssr::SsrCorrection;
    pub use crate::time::{format_epoch, gpst_calendar, now_gpst};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
