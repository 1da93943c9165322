use crate::{
    prelude::Epoch,
    tests::{later_epoch, reference_epoch},
    time::{format_epoch, format_optional_epoch, gpst_calendar, gpst_day_of_year, gpst_week_day},
};

use hifitime::Unit;

#[test]
fn gpst_origin() {
    let t = Epoch::from_gpst_seconds(0.0);
    assert_eq!(gpst_calendar(t), (1980, 1, 6, 0, 0, 0, 0));
    assert_eq!(gpst_week_day(t), (0, 0));
    assert_eq!(gpst_day_of_year(t), 6);
}

#[test]
fn gpst_decomposition() {
    assert_eq!(gpst_calendar(reference_epoch()), (2024, 1, 1, 0, 0, 0, 0));
    assert_eq!(gpst_week_day(reference_epoch()), (2295, 1));
    assert_eq!(gpst_day_of_year(reference_epoch()), 1);

    assert_eq!(gpst_calendar(later_epoch()), (2024, 3, 5, 13, 47, 12, 0));
    assert_eq!(gpst_week_day(later_epoch()), (2304, 2));
    assert_eq!(gpst_day_of_year(later_epoch()), 65);

    let t = reference_epoch() - 1.0 * Unit::Second;
    assert_eq!(gpst_calendar(t), (2023, 12, 31, 23, 59, 59, 0));
    assert_eq!(gpst_day_of_year(t), 365);
}

#[test]
fn epoch_formatting() {
    let t = reference_epoch();
    assert_eq!(format_epoch(t, 0), "2024/01/01 00:00:00");
    assert_eq!(format_epoch(t, 3), "2024/01/01 00:00:00.000");
    assert_eq!(format_epoch(t, 6), "2024/01/01 00:00:00.000000");

    let t = reference_epoch() + 123_456_789.0 * Unit::Nanosecond;
    assert_eq!(format_epoch(t, 0), "2024/01/01 00:00:00");
    assert_eq!(format_epoch(t, 3), "2024/01/01 00:00:00.123");
    assert_eq!(format_epoch(t, 6), "2024/01/01 00:00:00.123457");
    assert_eq!(format_epoch(t, 9), "2024/01/01 00:00:00.123456789");
    assert_eq!(format_epoch(t, 12), "2024/01/01 00:00:00.123456789");
}

#[test]
fn epoch_rounding() {
    let t = reference_epoch() + 999_600.0 * Unit::Microsecond;
    assert_eq!(format_epoch(t, 3), "2024/01/01 00:00:01.000");
    assert_eq!(format_epoch(t, 0), "2024/01/01 00:00:01");
}

#[test]
fn undefined_epoch_formatting() {
    assert_eq!(format_optional_epoch(None, 0), "----/--/-- --:--:--");
    assert_eq!(format_optional_epoch(None, 3), "----/--/-- --:--:--.---");
    assert_eq!(
        format_optional_epoch(Some(later_epoch()), 0),
        "2024/03/05 13:47:12"
    );
}
