//! Monotonic clock, civil-date arithmetic and interval formatting, grounded
//! on `utime.h`/`utime.c`.
//!
//! The C library's `utime_get_ns` hand-rolls a platform dispatch
//! (`QueryPerformanceCounter` / Arduino `micros()` / `clock_gettime`). Rust's
//! standard library already gives a portable monotonic clock, so
//! [`monotonic_ns`] is built on [`std::time::Instant`] instead of
//! reimplementing that chain.

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use crate::error::UResult;
use crate::string::UString;

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const MONTHS_PER_YEAR: i64 = 12;
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

const MILLIS_PER_SECOND: i64 = 1000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A Unix-style timestamp, in seconds.
pub type TimeStamp = i64;

/// The unit a time quantity is expressed in, matching `utime_unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

/// A civil (calendar) date and time, always intended to be kept in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Howard Hinnant's `days_from_civil`: maps a year/month/day triple to the
/// number of days since 1970-01-01 (may be negative).
fn ymd_to_days(y: i64, m: u32, d: u32) -> i64 {
    let y = y - i64::from(m <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + d as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Inverse of [`ymd_to_days`].
fn days_to_ymd(days: i64) -> (i64, u32, u32) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = (days - era * 146097) as i64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let y = y + i64::from(m <= 2);
    (y, m, d)
}

impl CivilTime {
    /// Builds a civil time from its components, without range validation.
    pub fn new(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilTime {
        CivilTime { year, month, day, hour, minute, second }
    }

    /// The current wall-clock time, in UTC.
    pub fn now() -> CivilTime {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        CivilTime::from_timestamp(secs)
    }

    /// Converts to a Unix timestamp in seconds.
    pub fn to_timestamp(&self) -> TimeStamp {
        let mut ts = ymd_to_days(self.year, self.month, self.day) * SECONDS_PER_DAY;
        ts += i64::from(self.hour) * SECONDS_PER_HOUR;
        ts += i64::from(self.minute) * SECONDS_PER_MINUTE;
        ts += i64::from(self.second);
        ts
    }

    /// Builds a civil time from a Unix timestamp in seconds.
    pub fn from_timestamp(ts: TimeStamp) -> CivilTime {
        let mut tmp = ts % SECONDS_PER_DAY;
        let mut days = ts / SECONDS_PER_DAY;

        if tmp < 0 {
            tmp += SECONDS_PER_DAY;
            days -= 1;
        }

        let second = (tmp % SECONDS_PER_MINUTE) as u32;
        tmp /= SECONDS_PER_MINUTE;
        let minute = (tmp % MINUTES_PER_HOUR) as u32;
        tmp /= MINUTES_PER_HOUR;
        let hour = tmp as u32;

        let (year, month, day) = days_to_ymd(days);
        CivilTime { year, month, day, hour, minute, second }
    }

    /// Adds `quantity` whole `unit`s in place, matching `utime_add`. Years and
    /// months are applied directly to the calendar fields (with carry);
    /// everything else round-trips through a timestamp delta.
    pub fn add(&mut self, quantity: i64, unit: Unit) {
        match unit {
            Unit::Years => {
                self.year += quantity;
                return;
            }
            Unit::Months => {
                let mut q = quantity + i64::from(self.month);
                self.year += q / MONTHS_PER_YEAR;
                q %= MONTHS_PER_YEAR;
                self.month = if q < 0 { (MONTHS_PER_YEAR + q) as u32 } else { q as u32 };
                return;
            }
            _ => {}
        }

        let delta = match unit {
            Unit::Days => quantity * SECONDS_PER_DAY,
            Unit::Hours => quantity * SECONDS_PER_HOUR,
            Unit::Minutes => quantity * SECONDS_PER_MINUTE,
            Unit::Seconds => quantity,
            Unit::Milliseconds => quantity / MILLIS_PER_SECOND,
            Unit::Microseconds => quantity / MICROS_PER_SECOND,
            Unit::Nanoseconds => quantity / NANOS_PER_SECOND,
            Unit::Years | Unit::Months => unreachable!(),
        };

        *self = CivilTime::from_timestamp(self.to_timestamp() + delta);
    }

    /// Returns `self + quantity` `unit`s, leaving `self` untouched.
    pub fn plus(&self, quantity: i64, unit: Unit) -> CivilTime {
        let mut copy = *self;
        copy.add(quantity, unit);
        copy
    }

    /// Returns `self - other`, expressed in `unit`s, matching `utime_diff`.
    pub fn diff(&self, other: &CivilTime, unit: Unit) -> i64 {
        if unit >= Unit::Months {
            let months =
                i64::from(self.month) - i64::from(other.month) + (self.year - other.year) * MONTHS_PER_YEAR;
            return if unit == Unit::Months { months } else { months / MONTHS_PER_YEAR };
        }

        let diff = self.to_timestamp() - other.to_timestamp();
        match unit {
            Unit::Days => diff / SECONDS_PER_DAY,
            Unit::Hours => diff / SECONDS_PER_HOUR,
            Unit::Minutes => diff / SECONDS_PER_MINUTE,
            Unit::Milliseconds => diff * MILLIS_PER_SECOND,
            Unit::Microseconds => diff * MICROS_PER_SECOND,
            Unit::Nanoseconds => diff * NANOS_PER_SECOND,
            Unit::Seconds | Unit::Months | Unit::Years => diff,
        }
    }

    /// Shifts `self` by a `tz_hour` hours plus `tz_minute` minutes offset
    /// (the offset of the zone `self` is currently expressed in) so that it
    /// ends up expressed in UTC. `tz_minute`'s sign follows `tz_hour`'s.
    pub fn normalize_to_utc(&mut self, tz_hour: i64, tz_minute: i64) {
        let m = tz_hour * MINUTES_PER_HOUR + if tz_hour >= 0 { tz_minute } else { -tz_minute };
        self.add(-m, Unit::Minutes);
    }

    /// Formats as `"Y/M/D-H:M:S"`, always in UTC, mirroring `utime_to_string`.
    pub fn to_ustring(&self) -> UResult<UString> {
        UString::with_format(format_args!(
            "{:04}/{:02}/{:02}-{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        ))
    }

    /// Parses `"Y/M/D-H:M:S"` (or `"Y-M-DTH:M:S"`-style separators, since only
    /// the digit fields are actually validated) with an optional trailing
    /// `Z`/`z` or `±HH:MM` timezone suffix. Returns `None` on malformed input,
    /// matching `utime_from_string`'s boolean-failure contract.
    pub fn from_str_permissive(s: &str) -> Option<CivilTime> {
        let bytes = s.as_bytes();
        let mut pos = 0usize;

        fn take_int(bytes: &[u8], pos: &mut usize) -> Option<i64> {
            let start = *pos;
            if *pos < bytes.len() && (bytes[*pos] == b'+' || bytes[*pos] == b'-') {
                *pos += 1;
            }
            let digits_start = *pos;
            while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
                *pos += 1;
            }
            if *pos == digits_start {
                return None;
            }
            std::str::from_utf8(&bytes[start..*pos]).ok()?.parse().ok()
        }

        let year = take_int(bytes, &mut pos)?;
        pos += 1;
        let month = take_int(bytes, &mut pos)?;
        pos += 1;
        let day = take_int(bytes, &mut pos)?;
        pos += 1;
        let hour = take_int(bytes, &mut pos)?;
        pos += 1;
        let minute = take_int(bytes, &mut pos)?;
        pos += 1;
        let second = take_int(bytes, &mut pos)?;

        if !(1..=12).contains(&month) || day < 1 || day as u32 > days_in_month(year, month as u32) {
            return None;
        }
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0..60).contains(&second) {
            return None;
        }

        let mut time = CivilTime::new(year, month as u32, day as u32, hour as u32, minute as u32, second as u32);

        if pos < bytes.len() {
            if pos == bytes.len() - 1 {
                return if bytes[pos] == b'Z' || bytes[pos] == b'z' { Some(time) } else { None };
            }

            let tzh = take_int(bytes, &mut pos)?;
            if tzh.abs() > 14 {
                return None;
            }
            pos += 1;
            let tzm = take_int(bytes, &mut pos)?;
            if pos != bytes.len() || !(0..60).contains(&tzm) {
                return None;
            }

            time.normalize_to_utc(tzh, tzm);
        }

        Some(time)
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02}-{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Returns a monotonic nanosecond counter, for measuring intervals only.
/// The epoch is unspecified and only differences are meaningful.
pub fn monotonic_ns() -> u64 {
    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_nanos() as u64
}

const UNIT_NS: [u64; 8] = [
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    60 * 1_000_000_000,
    60 * 60 * 1_000_000_000,
    24 * 60 * 60 * 1_000_000_000,
    u64::MAX,
];

const UNIT_DIV: u64 = 100;

/// Picks the largest unit whose formatted magnitude (rounded to two
/// fractional digits) is at least 1, scanning `ns -> us -> ms -> s -> m -> h
/// -> d`, matching `utime_interval_unit_auto`.
pub fn interval_unit_auto(ns: u64) -> Unit {
    let mut unit = 1usize; // start at microseconds, as the C loop does
    while ns > UNIT_NS[unit] - UNIT_NS[unit - 1] / UNIT_DIV - 1 {
        unit += 1;
    }
    index_to_interval_unit(unit - 1)
}

fn index_to_interval_unit(i: usize) -> Unit {
    match i {
        0 => Unit::Nanoseconds,
        1 => Unit::Microseconds,
        2 => Unit::Milliseconds,
        3 => Unit::Seconds,
        4 => Unit::Minutes,
        5 => Unit::Hours,
        _ => Unit::Days,
    }
}

fn interval_unit_index(unit: Unit) -> usize {
    match unit {
        Unit::Nanoseconds => 0,
        Unit::Microseconds => 1,
        Unit::Milliseconds => 2,
        Unit::Seconds => 3,
        Unit::Minutes => 4,
        Unit::Hours => 5,
        Unit::Days => 6,
        Unit::Months | Unit::Years => 6,
    }
}

/// Converts an interval in nanoseconds to a floating-point quantity of `unit`.
pub fn interval_convert(ns: u64, unit: Unit) -> f64 {
    ns as f64 / UNIT_NS[interval_unit_index(unit)] as f64
}

fn unit_suffix(unit: Unit) -> &'static str {
    match unit {
        Unit::Nanoseconds => "ns",
        Unit::Microseconds => "us",
        Unit::Milliseconds => "ms",
        Unit::Seconds => "s",
        Unit::Minutes => "m",
        Unit::Hours => "h",
        Unit::Days => "d",
        Unit::Months => "mo",
        Unit::Years => "y",
    }
}

/// Formats a nanosecond interval as `"<value> <unit>"`, with two fractional
/// digits, matching `utime_interval_to_string`.
pub fn interval_to_ustring(ns: u64, unit: Unit) -> UResult<UString> {
    UString::with_format(format_args!("{:.2} {}", interval_convert(ns, unit), unit_suffix(unit)))
}
