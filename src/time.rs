use crate::{
    error::Error,
    prelude::{Epoch, TimeScale},
};

use hifitime::Unit;

/// Number of seconds in one GPS week
const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Number of seconds in one day
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Returns current system time, expressed in [TimeScale::GPST]
pub fn now_gpst() -> Result<Epoch, Error> {
    let now = Epoch::now().map_err(|_| Error::SystemTime)?;
    Ok(now.to_time_scale(TimeScale::GPST))
}

/// Gregorian decomposition of this [Epoch] in [TimeScale::GPST]
/// (continuous calendar, no leap seconds), as
/// (year, month, day, hours, minutes, seconds, nanoseconds).
pub fn gpst_calendar(t: Epoch) -> (i32, u8, u8, u8, u8, u8, u32) {
    // TAI calendar has no leap seconds either:
    // walk it from the GPST origin.
    let origin = Epoch::from_gregorian_tai_at_midnight(1980, 1, 6);
    (origin + t.to_gpst_duration()).to_gregorian_tai()
}

/// Returns (GPS week, day of week) for this [Epoch]
pub fn gpst_week_day(t: Epoch) -> (u32, u8) {
    let seconds = t.to_gpst_seconds();
    let week = (seconds / SECONDS_PER_WEEK).floor();
    let day = ((seconds - week * SECONDS_PER_WEEK) / SECONDS_PER_DAY).floor();
    (week as u32, day as u8)
}

/// Day of year (1..=366) of this [Epoch], in [TimeScale::GPST]
pub fn gpst_day_of_year(t: Epoch) -> u16 {
    let (y, m, d, _, _, _, _) = gpst_calendar(t);
    let elapsed = Epoch::from_gregorian_tai_at_midnight(y, m, d)
        - Epoch::from_gregorian_tai_at_midnight(y, 1, 1);
    (elapsed.to_seconds() / SECONDS_PER_DAY).round() as u16 + 1
}

/// Formats this [Epoch] as "YYYY/MM/DD hh:mm:ss.fff", in [TimeScale::GPST],
/// rounded to the desired number of sub-second digits (up to 9).
/// No fractional part is printed when `digits` is 0.
pub fn format_epoch(t: Epoch, digits: usize) -> String {
    let digits = digits.min(9);
    let step = 10_u32.pow(9 - digits as u32);

    let t = if step > 1 {
        t + (step as f64 / 2.0) * Unit::Nanosecond
    } else {
        t
    };

    let (y, m, d, hh, mm, ss, nanos) = gpst_calendar(t);

    if digits == 0 {
        format!("{:04}/{:02}/{:02} {:02}:{:02}:{:02}", y, m, d, hh, mm, ss)
    } else {
        format!(
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}.{:0width$}",
            y,
            m,
            d,
            hh,
            mm,
            ss,
            nanos / step,
            width = digits,
        )
    }
}

/// Formats an optional [Epoch] like [format_epoch],
/// or a dashed placeholder of the same layout when undefined.
pub(crate) fn format_optional_epoch(t: Option<Epoch>, digits: usize) -> String {
    match t {
        Some(t) => format_epoch(t, digits),
        None => {
            let digits = digits.min(9);
            if digits == 0 {
                "----/--/-- --:--:--".to_string()
            } else {
                format!("----/--/-- --:--:--.{}", "-".repeat(digits))
            }
        },
    }
}
