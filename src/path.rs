//! Log file name templating
use crate::{
    prelude::Epoch,
    time::{gpst_calendar, gpst_day_of_year, gpst_week_day},
};

/// Expands a file name pattern, using this [Epoch] (in GPST) and
/// station names. Supported placeholders:
/// - `%Y` 4-digit year, `%y` 2-digit year
/// - `%m` month, `%d` day of month, `%n` day of year (3 digits)
/// - `%h` hours, `%M` minutes, `%S` seconds
/// - `%H` hour letter ('a' = 00h to 'x' = 23h)
/// - `%t` 15' slot ("00", "15", "30", "45")
/// - `%W` GPS week (4 digits), `%D` GPS day of week
/// - `%r` station name, `%b` base station name
/// - `%%` litteral '%'
///
/// Unknown placeholders are kept as is.
pub fn expand_path(pattern: &str, t: Epoch, station: &str, base: &str) -> String {
    let (y, m, d, hh, mm, ss, _) = gpst_calendar(t);

    let mut expanded = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            expanded.push(c);
            continue;
        }

        let Some(placeholder) = chars.next() else {
            expanded.push('%');
            break;
        };

        match placeholder {
            'Y' => expanded.push_str(&format!("{:04}", y)),
            'y' => expanded.push_str(&format!("{:02}", y.rem_euclid(100))),
            'm' => expanded.push_str(&format!("{:02}", m)),
            'd' => expanded.push_str(&format!("{:02}", d)),
            'n' => expanded.push_str(&format!("{:03}", gpst_day_of_year(t))),
            'h' => expanded.push_str(&format!("{:02}", hh)),
            'M' => expanded.push_str(&format!("{:02}", mm)),
            'S' => expanded.push_str(&format!("{:02}", ss)),
            'H' => expanded.push((b'a' + hh) as char),
            't' => expanded.push_str(&format!("{:02}", (mm / 15) * 15)),
            'W' => {
                let (week, _) = gpst_week_day(t);
                expanded.push_str(&format!("{:04}", week));
            },
            'D' => {
                let (_, day) = gpst_week_day(t);
                expanded.push_str(&format!("{}", day));
            },
            'r' => expanded.push_str(station),
            'b' => expanded.push_str(base),
            '%' => expanded.push('%'),
            other => {
                expanded.push('%');
                expanded.push(other);
            },
        }
    }

    expanded
}
