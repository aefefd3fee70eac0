//! UTC calendar rendering of ledger timestamps for display views.

use core::fmt;

use crate::error::FlowError;

pub const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: i32,  // e.g. 2026
    pub month: u32, // 1-12
    pub day: u32,   // 1-31
    pub sod: u32,   // seconds of day [0, 86399]
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month,
            self.day,
            self.sod / 3_600,
            (self.sod / 60) % 60,
            self.sod % 60
        )
    }
}

pub fn datetime_from_unix(ts: i64) -> Result<DateTimeUtc, FlowError> {
    // Ledger timestamps are never before the epoch.
    if ts < 0 {
        return Err(FlowError::InvalidTimestamp);
    }
    let days = ts / SECONDS_PER_DAY;
    let sod = (ts % SECONDS_PER_DAY) as u32;
    let (year, month, day) = civil_from_days(days);
    Ok(DateTimeUtc {
        year,
        month,
        day,
        sod,
    })
}

/// Proleptic Gregorian conversion: civil date from days since epoch.
/// Algorithm by Howard Hinnant (public domain).
fn civil_from_days(z: i64) -> (i32, u32, u32) {
    let z = z + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = (yoe + era * 400) as i32 + i32::from(m <= 2);
    (y, m, d)
}
