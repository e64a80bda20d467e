//! Unix timestamps, the system clock and the few calendar helpers needed to read a date.
//!
//! [`TimeSpec`] is the moment type that every clock in this crate hands out. It is also a
//! [`TimeBearing`] value, so a [`TimeOfDay`](crate::TimeOfDay) can be taken straight from it (in
//! UTC).
//!
//! # Examples
//!
//! ```
//! # use timeofday::time::{Nanoseconds, Seconds, TimeSpec};
//! // Jan 1, 2025. 12:00:00.999999999 UTC.
//! let c = TimeSpec { sec: 1735732800, nsec: 999999999 };
//! assert_eq!(c + Seconds(10) + Nanoseconds(10), TimeSpec { sec: 1735732811, nsec: 9 });
//! ```

use core::ops::{Add, AddAssign};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};
use crate::timeofday::TimeBearing;

/// Nanoseconds per second.
const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds per microsecond.
const NANOS_PER_MICRO: i64 = 1_000;
/// Seconds per day.
const SECONDS_PER_DAY: i64 = 86_400;
/// Days per non-leap year.
const DAYS_PER_YEAR: i64 = 365;
/// Days per 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 400 * DAYS_PER_YEAR + 97;
/// Days from March 1, 0000 to January 1, 1970.
const DAYS_FROM_MARCH_0000_TO_JAN_1970: i64 = 719_468;

/// Helper type to support math on [`TimeSpec`]s. Represents seconds.
#[repr(transparent)]
pub struct Seconds(pub i64);

/// Helper type to support math on [`TimeSpec`]s. Represents nanoseconds.
///
/// Adding nanoseconds to a [`TimeSpec`] will roll over seconds if needed, in either direction.
///
/// # Examples
///
/// ```
/// # use timeofday::time::{Nanoseconds, TimeSpec};
/// let c = TimeSpec { sec: 10, nsec: 5 };
/// assert_eq!(c + Nanoseconds(-10), TimeSpec { sec: 9, nsec: 999999995 });
/// ```
#[repr(transparent)]
pub struct Nanoseconds(pub i64);

/// Unix time with nanosecond granularity.
///
/// Supports simple addition / addition-assignment with [`Seconds`] and [`Nanoseconds`].
/// Subtraction is supported by adding negative values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSpec {
	/// Seconds since the Unix epoch
	pub sec: i64,
	/// Nanoseconds since the beginning of `sec`, ranging [0-999999999]
	pub nsec: i64
}

impl TimeSpec {
	/// Microseconds elapsed since midnight UTC of the day containing `self`.
	///
	/// Timestamps before the epoch count forward from their own midnight too, so the result is
	/// always within `[0, 86_400_000_000)`. An `nsec` outside of its range carries into `sec`.
	pub fn micros_of_day(&self) -> i64 {
		let nanos = self.sec as i128 * NANOS_PER_SECOND as i128 + self.nsec as i128;
		let nanos = nanos.rem_euclid(SECONDS_PER_DAY as i128 * NANOS_PER_SECOND as i128);
		(nanos / NANOS_PER_MICRO as i128) as i64
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
impl From<timespec> for TimeSpec {
	/// Convert from `libc::timespec` to [`TimeSpec`] for better math ergonomics
	fn from(value: timespec) -> Self {
		TimeSpec {
			sec: value.tv_sec as i64,
			nsec: value.tv_nsec as i64
		}
	}
}

impl Add<Seconds> for TimeSpec {
	type Output = Self;

	fn add(mut self, rhs: Seconds) -> Self::Output {
		self.sec = self.sec.wrapping_add(rhs.0);
		self
	}
}

impl AddAssign<Seconds> for TimeSpec {
	fn add_assign(&mut self, rhs: Seconds) {
		*self = *self + rhs;
	}
}

impl Add<Nanoseconds> for TimeSpec {
	type Output = Self;

	/// Add `rhs` nanoseconds to `self`, carrying into or borrowing from seconds so that `nsec`
	/// stays in the range of [0-999999999].
	fn add(mut self, rhs: Nanoseconds) -> Self::Output {
		let nsec = self.nsec as i128 + rhs.0 as i128;
		let carry = nsec.div_euclid(NANOS_PER_SECOND as i128);
		self.sec = self.sec.wrapping_add(carry as i64);
		self.nsec = nsec.rem_euclid(NANOS_PER_SECOND as i128) as i64;
		self
	}
}

impl AddAssign<Nanoseconds> for TimeSpec {
	fn add_assign(&mut self, rhs: Nanoseconds) {
		*self = *self + rhs;
	}
}

impl Add for TimeSpec {
	type Output = Self;

	fn add(self, rhs: TimeSpec) -> Self::Output {
		self + Seconds(rhs.sec) + Nanoseconds(rhs.nsec)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<std::time::SystemTime> for TimeSpec {
	/// Convert from [`SystemTime`](std::time::SystemTime), including moments before the epoch.
	fn from(value: std::time::SystemTime) -> Self {
		let epoch = TimeSpec { sec: 0, nsec: 0 };
		match value.duration_since(std::time::UNIX_EPOCH) {
			Ok(d) => epoch + Seconds(d.as_secs() as i64) + Nanoseconds(d.subsec_nanos() as i64),
			Err(e) => {
				let d = e.duration();
				epoch + Seconds(-(d.as_secs() as i64)) + Nanoseconds(-(d.subsec_nanos() as i64))
			}
		}
	}
}

impl TimeBearing for TimeSpec {
	/// The UTC hour of the day.
	fn hour(&self) -> u8 {
		(self.micros_of_day() / 3_600_000_000) as u8
	}

	fn minute(&self) -> u8 {
		(self.micros_of_day() / 60_000_000 % 60) as u8
	}

	fn second(&self) -> u8 {
		(self.micros_of_day() / 1_000_000 % 60) as u8
	}

	/// Sub-microsecond digits are truncated.
	fn microsecond(&self) -> u32 {
		(self.micros_of_day() % 1_000_000) as u32
	}
}

/// The UTC time of day of a [`SystemTime`](std::time::SystemTime).
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl TimeBearing for std::time::SystemTime {
	fn hour(&self) -> u8 { TimeSpec::from(*self).hour() }
	fn minute(&self) -> u8 { TimeSpec::from(*self).minute() }
	fn second(&self) -> u8 { TimeSpec::from(*self).second() }
	fn microsecond(&self) -> u32 { TimeSpec::from(*self).microsecond() }
}

/// Get the current time as a Unix timestamp with nanosecond granularity.
///
/// This function will return `None` if `libc::clock_gettime` fails.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use timeofday::time::now;
/// let c = now().expect("Failed to get current time");
/// assert!(c.sec > 0);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now() -> Option<TimeSpec> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => Some(time.assume_init().into()),
			_ => None
		}
	}
}

/// Check whether a given `year` is a leap year.
///
/// # Examples
///
/// ```
/// # use timeofday::time::isleapyear;
/// assert_eq!(isleapyear(1900), false);
/// assert_eq!(isleapyear(2000), true);
/// assert_eq!(isleapyear(2023), false);
/// assert_eq!(isleapyear(2024), true);
/// ```
#[inline(always)]
pub fn isleapyear(year: u16) -> bool {
	let l = if year%100 != 0 { 3 } else { 15 };
	(year & l) == 0
}

/// The number of days in a given month.
///
/// `y` must be the absolute Gregorian calendar year, and `m` the 1-indexed month starting at
/// January.
pub fn days_per_month(y: u16, m: u8) -> u8 {
	if m == 2 {
		if isleapyear(y) { 29 } else { 28 }
	} else {
		30 | (m ^ (m >> 3))
	}
}

/// Get the Unix timestamp for 00:00:00 UTC on a given year, month, and day.
///
/// `y` must be the absolute Gregorian calendar year, `m` the 1-indexed month starting at January,
/// and `d` the day of the month.
///
/// # Examples
///
/// ```
/// # use timeofday::time::timestamp_from_ymd;
/// assert_eq!(timestamp_from_ymd(2001, 1, 1), 978307200);
/// assert_eq!(timestamp_from_ymd(2024, 2, 29), 1709164800);
/// ```
pub fn timestamp_from_ymd(y: u16, m: u8, d: u8) -> i64 {
	// Rotate the year to start in March so the leap day is the last day of the year. See
	// http://howardhinnant.github.io/date_algorithms.html#days_from_civil
	let y = if m < 3 { y as i64 - 1 } else { y as i64 };
	let era = y.div_euclid(400);
	let yoe = y - era * 400;
	let mp = if m > 2 { m as i64 - 3 } else { m as i64 + 9 };
	let doy = (153 * mp + 2) / 5 + d as i64 - 1;
	let doe = yoe * DAYS_PER_YEAR + yoe / 4 - yoe / 100 + doy;
	SECONDS_PER_DAY * (era * DAYS_PER_ERA + doe - DAYS_FROM_MARCH_0000_TO_JAN_1970)
}
