//! The [`TimeOfDay`] value type: a wall-clock time within a single day.
//!
//! A [`TimeOfDay`] holds hours, minutes, seconds and microseconds, always in canonical range. It
//! is never modified in place; every setter returns a new value.
//!
//! The setters accept any integer and wrap around the day. The whole time is turned into a count
//! of microseconds since midnight, the change is applied, and the count is reduced modulo one day
//! with a non-negative remainder before being split back into fields. Text input is the opposite:
//! anything that does not name a valid time is rejected outright.
//!
//! # Examples
//!
//! ```
//! # use timeofday::TimeOfDay;
//! let t = TimeOfDay::midnight().set_hours(-1);
//! assert_eq!(t.to_string(), "23:00:00.000000");
//!
//! let t = TimeOfDay::midnight().set_time(-1, 120, -1, 1_000_001);
//! assert_eq!(t.to_string(), "01:00:00.000001");
//!
//! let t = TimeOfDay::parse("23:59.59.9999991").unwrap();
//! assert_eq!(t.format("H:i:s.u").to_string(), "23:59:59.999999");
//! ```

use core::fmt;
use core::str::FromStr;
use crate::clock::Clock;
use crate::error::TimeError;
use crate::parse::{parse_time, ParseError};
use crate::time::TimeSpec;

/// Microseconds per second.
const MICROS_PER_SECOND: i64 = 1_000_000;
/// Microseconds per minute.
const MICROS_PER_MINUTE: i64 = MICROS_PER_SECOND * 60;
/// Microseconds per hour.
const MICROS_PER_HOUR: i64 = MICROS_PER_MINUTE * 60;
/// Microseconds per day.
pub const MICROS_PER_DAY: i64 = MICROS_PER_HOUR * 24;

/// Anything that carries a wall-clock time.
///
/// Implementations must return values in canonical range: hours [0, 23], minutes and seconds
/// [0, 59] and microseconds [0, 999999].
pub trait TimeBearing {
	/// The hour, ranged [0, 23]
	fn hour(&self) -> u8;
	/// The minute, ranged [0, 59]
	fn minute(&self) -> u8;
	/// The second, ranged [0, 59]
	fn second(&self) -> u8;
	/// The microsecond, ranged [0, 999999]
	fn microsecond(&self) -> u32;
}

/// Where a new [`TimeOfDay`] comes from. See [`TimeOfDay::new`].
#[derive(Clone, Copy)]
pub enum Source<'a> {
	/// The current moment, as reported by a [`Clock`].
	Now,
	/// A time string, parsed with [`parse_time`].
	Text(&'a str),
	/// Any other value carrying a time of day.
	Time(&'a dyn TimeBearing)
}

impl<'a> From<Option<&'a str>> for Source<'a> {
	fn from(value: Option<&'a str>) -> Self {
		value.map_or(Source::Now, Source::Text)
	}
}

impl<'a> From<&'a str> for Source<'a> {
	fn from(value: &'a str) -> Self {
		Source::Text(value)
	}
}

impl<'a> From<&'a dyn TimeBearing> for Source<'a> {
	fn from(value: &'a dyn TimeBearing) -> Self {
		Source::Time(value)
	}
}

impl<'a> From<&'a TimeOfDay> for Source<'a> {
	fn from(value: &'a TimeOfDay) -> Self {
		Source::Time(value)
	}
}

impl<'a> From<&'a TimeSpec> for Source<'a> {
	fn from(value: &'a TimeSpec) -> Self {
		Source::Time(value)
	}
}

/// A single field of a [`TimeOfDay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Hours,
	Minutes,
	Seconds,
	Microseconds
}

impl FromStr for Field {
	type Err = TimeError;

	/// Parse a field name, singular or plural, ignoring case.
	///
	/// Returns [`TimeError::UnknownField`] for anything else.
	///
	/// # Examples
	///
	/// ```
	/// # use std::str::FromStr;
	/// # use timeofday::{Field, TimeError};
	/// assert_eq!(Field::from_str("hour"), Ok(Field::Hours));
	/// assert_eq!(Field::from_str("Microseconds"), Ok(Field::Microseconds));
	/// assert_eq!(Field::from_str("sdfsdfss"), Err(TimeError::UnknownField));
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		const NAMES: [(&str, &str, Field); 4] = [
			("hour", "hours", Field::Hours),
			("minute", "minutes", Field::Minutes),
			("second", "seconds", Field::Seconds),
			("microsecond", "microseconds", Field::Microseconds),
		];
		NAMES.iter()
			.find(|(one, many, _)| s.eq_ignore_ascii_case(one) || s.eq_ignore_ascii_case(many))
			.map(|&(_, _, field)| field)
			.ok_or(TimeError::UnknownField)
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Field::Hours => write!(f, "hours"),
			Field::Minutes => write!(f, "minutes"),
			Field::Seconds => write!(f, "seconds"),
			Field::Microseconds => write!(f, "microseconds"),
		}
	}
}

/// An immutable wall-clock time, from 00:00:00.000000 to 23:59:59.999999.
///
/// Values order chronologically within the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
	/// Hours, ranged [0, 23]
	hour: u8,
	/// Minutes, ranged [0, 59]
	minute: u8,
	/// Seconds, ranged [0, 59]
	second: u8,
	/// Microseconds, ranged [0, 999999]
	microsecond: u32
}

impl TimeOfDay {
	/// Build a value from fields already known to be in canonical range.
	pub(crate) const fn from_canonical(hour: u8, minute: u8, second: u8, microsecond: u32) -> Self {
		TimeOfDay { hour, minute, second, microsecond }
	}

	/// Create a new time of day from `source`.
	///
	/// - [`Source::Now`] (or `None::<&str>`) reads the time of day from `clock`, in UTC.
	/// - [`Source::Text`] parses the text with [`parse_time`].
	/// - [`Source::Time`] copies the four fields of another time-bearing value.
	///
	/// # Errors
	///
	/// Returns [`TimeError::InvalidFormat`] if the text is not a valid time, or
	/// [`TimeError::ClockUnavailable`] if the clock cannot tell the time.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::{clock::FixedClock, time::TimeSpec, Source, TimeError, TimeOfDay};
	/// let clock = FixedClock(TimeSpec { sec: 978351194, nsec: 123456000 });
	/// let t = TimeOfDay::new(Source::Now, &clock).unwrap();
	/// assert_eq!(t.to_string(), "12:13:14.123456");
	///
	/// let t = TimeOfDay::new("1:01:1.000001", &clock).unwrap();
	/// assert_eq!(t.to_string(), "01:01:01.000001");
	///
	/// let copy = TimeOfDay::new(&t, &clock).unwrap();
	/// assert_eq!(copy, t);
	///
	/// assert!(matches!(TimeOfDay::new("now", &clock), Err(TimeError::InvalidFormat(_))));
	/// ```
	pub fn new<'a, C: Clock + ?Sized>(source: impl Into<Source<'a>>, clock: &C) -> Result<Self, TimeError> {
		match source.into() {
			Source::Now => TimeOfDay::now_with(clock),
			Source::Text(text) => TimeOfDay::parse(text).map_err(TimeError::InvalidFormat),
			Source::Time(time) => Ok(TimeOfDay::from_time(time)),
		}
	}

	/// The current time of day according to `clock`, in UTC.
	///
	/// # Errors
	///
	/// Returns [`TimeError::ClockUnavailable`] if the clock cannot tell the time.
	pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, TimeError> {
		match clock.now() {
			Some(t) => Ok(TimeOfDay::from(t)),
			None => {
				warn!("clock did not report the current time");
				Err(TimeError::ClockUnavailable)
			}
		}
	}

	/// The current time of day according to the system clock, in UTC.
	///
	/// This always reads [`SystemClock`](crate::clock::SystemClock), so a frozen
	/// [`TestClock`](crate::clock::TestClock) has no effect here. Use
	/// [`now_with`](TimeOfDay::now_with) with a `TestClock` for deterministic tests.
	///
	/// # Errors
	///
	/// Returns [`TimeError::ClockUnavailable`] if the system clock cannot be read.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::TimeOfDay;
	/// let t = TimeOfDay::now().unwrap();
	/// assert!(t.hours() < 24);
	/// ```
	#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
	#[cfg(feature = "now")]
	pub fn now() -> Result<Self, TimeError> {
		TimeOfDay::now_with(&crate::clock::SystemClock)
	}

	/// Parse a time string such as `23:59:59.999999`.
	///
	/// See [`parse_time`] for the accepted format.
	///
	/// # Errors
	///
	/// Returns [`ParseError`] if `text` is not a valid time.
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		parse_time(text.as_bytes()).inspect_err(|_e| {
			trace!("rejected time string {:?}: {}", text, _e);
		})
	}

	/// 00:00:00.000000
	pub const fn midnight() -> Self {
		TimeOfDay::from_canonical(0, 0, 0, 0)
	}

	/// 12:00:00.000000
	pub const fn noon() -> Self {
		TimeOfDay::from_canonical(12, 0, 0, 0)
	}

	/// Copy the time of day out of any time-bearing value.
	///
	/// The fields are run through the same wraparound as the setters, so an implementation that
	/// breaks the [`TimeBearing`] contract still yields a canonical value.
	pub fn from_time<T: TimeBearing + ?Sized>(time: &T) -> Self {
		TimeOfDay::midnight().set_time(
			time.hour() as i64,
			time.minute() as i64,
			time.second() as i64,
			time.microsecond() as i64
		)
	}

	/// The time `micros` microseconds after midnight, wrapping around the day in either direction.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::TimeOfDay;
	/// assert_eq!(TimeOfDay::from_microseconds(-1).to_string(), "23:59:59.999999");
	/// ```
	pub fn from_microseconds(micros: i64) -> Self {
		TimeOfDay::from_total(micros as i128)
	}

	/// Reduce a microsecond count modulo one day and split it into fields.
	fn from_total(total: i128) -> Self {
		let micros = total.rem_euclid(MICROS_PER_DAY as i128) as i64;
		TimeOfDay {
			hour: (micros / MICROS_PER_HOUR) as u8,
			minute: (micros / MICROS_PER_MINUTE % 60) as u8,
			second: (micros / MICROS_PER_SECOND % 60) as u8,
			microsecond: (micros % MICROS_PER_SECOND) as u32
		}
	}

	/// Hours, ranged [0, 23].
	#[inline]
	pub fn hours(&self) -> u8 {
		self.hour
	}

	/// Minutes, ranged [0, 59].
	#[inline]
	pub fn minutes(&self) -> u8 {
		self.minute
	}

	/// Seconds, ranged [0, 59].
	#[inline]
	pub fn seconds(&self) -> u8 {
		self.second
	}

	/// Microseconds, ranged [0, 999999].
	#[inline]
	pub fn microseconds(&self) -> u32 {
		self.microsecond
	}

	/// Microseconds since midnight, ranged [0, 86399999999].
	pub fn total_microseconds(&self) -> i64 {
		self.hour as i64 * MICROS_PER_HOUR
			+ self.minute as i64 * MICROS_PER_MINUTE
			+ self.second as i64 * MICROS_PER_SECOND
			+ self.microsecond as i64
	}

	/// The value of a single field.
	pub fn value(&self, field: Field) -> u32 {
		match field {
			Field::Hours => self.hour as u32,
			Field::Minutes => self.minute as u32,
			Field::Seconds => self.second as u32,
			Field::Microseconds => self.microsecond,
		}
	}

	/// The value of a field looked up by name. See [`Field::from_str`] for accepted names.
	///
	/// # Errors
	///
	/// Returns [`TimeError::UnknownField`] if `name` is not a field of a time of day.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::{TimeError, TimeOfDay};
	/// let t = TimeOfDay::noon();
	/// assert_eq!(t.get("hours"), Ok(12));
	/// assert_eq!(t.get("day"), Err(TimeError::UnknownField));
	/// ```
	pub fn get(&self, name: &str) -> Result<u32, TimeError> {
		Ok(self.value(name.parse()?))
	}

	/// Replace the hours with `hours`, wrapping around the day.
	#[must_use]
	pub fn set_hours(self, hours: i64) -> Self {
		self.set_time(hours, self.minute as i64, self.second as i64, self.microsecond as i64)
	}

	/// Replace the minutes with `minutes`, carrying into or borrowing from the hours.
	#[must_use]
	pub fn set_minutes(self, minutes: i64) -> Self {
		self.set_time(self.hour as i64, minutes, self.second as i64, self.microsecond as i64)
	}

	/// Replace the seconds with `seconds`, carrying into or borrowing from the coarser fields.
	#[must_use]
	pub fn set_seconds(self, seconds: i64) -> Self {
		self.set_time(self.hour as i64, self.minute as i64, seconds, self.microsecond as i64)
	}

	/// Replace the microseconds with `microseconds`, carrying into or borrowing from the coarser
	/// fields.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::TimeOfDay;
	/// let t = TimeOfDay::midnight().set_microseconds(1_000_000);
	/// assert_eq!(t.to_string(), "00:00:01.000000");
	/// let t = TimeOfDay::midnight().set_microseconds(-1);
	/// assert_eq!(t.to_string(), "23:59:59.999999");
	/// ```
	#[must_use]
	pub fn set_microseconds(self, microseconds: i64) -> Self {
		self.set_time(self.hour as i64, self.minute as i64, self.second as i64, microseconds)
	}

	/// Replace all four fields at once.
	///
	/// The fields are combined into a single microsecond count which is then reduced once, so out
	/// of range values in different fields offset each other. This can differ from calling the
	/// single-field setters one after another. Pass `0` for any field that should be cleared.
	///
	/// No input can overflow or panic.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::TimeOfDay;
	/// let t = TimeOfDay::midnight().set_time(24, 120, 120, 1_000_000);
	/// assert_eq!(t.to_string(), "02:02:01.000000");
	/// let t = TimeOfDay::midnight().set_time(-1, -1, -1, -1);
	/// assert_eq!(t.to_string(), "22:58:58.999999");
	/// ```
	#[must_use]
	pub fn set_time(self, hours: i64, minutes: i64, seconds: i64, microseconds: i64) -> Self {
		let total = ((hours as i128 * 60 + minutes as i128) * 60 + seconds as i128)
			* MICROS_PER_SECOND as i128
			+ microseconds as i128;
		TimeOfDay::from_total(total)
	}

	/// Whether `self` lies between `start` and `end`, in either order.
	///
	/// When `inclusive` is false, the bounds themselves are excluded.
	pub fn between(&self, start: TimeOfDay, end: TimeOfDay, inclusive: bool) -> bool {
		let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
		if inclusive {
			lo <= *self && *self <= hi
		} else {
			lo < *self && *self < hi
		}
	}

	/// Render `self` using `pattern`.
	///
	/// | Token | Output                               |
	/// | ----- | ------------------------------------ |
	/// | `H`   | Hours, two digits (`00`-`23`)        |
	/// | `i`   | Minutes, two digits (`00`-`59`)      |
	/// | `s`   | Seconds, two digits (`00`-`59`)      |
	/// | `u`   | Microseconds, six digits             |
	///
	/// Every other character is written as is.
	///
	/// # Examples
	///
	/// ```
	/// # use timeofday::TimeOfDay;
	/// let t = TimeOfDay::parse("7:05:09.25").unwrap();
	/// assert_eq!(t.format("H:i:s.u").to_string(), "07:05:09.250000");
	/// assert_eq!(t.format("H\\hi (u)").to_string(), "07\\h05 (250000)");
	/// ```
	pub fn format<'a>(&self, pattern: &'a str) -> Formatted<'a> {
		Formatted { time: *self, pattern }
	}
}

impl TimeBearing for TimeOfDay {
	fn hour(&self) -> u8 { self.hour }
	fn minute(&self) -> u8 { self.minute }
	fn second(&self) -> u8 { self.second }
	fn microsecond(&self) -> u32 { self.microsecond }
}

impl From<TimeSpec> for TimeOfDay {
	/// The UTC time of day at `value`.
	fn from(value: TimeSpec) -> Self {
		TimeOfDay::from_time(&value)
	}
}

impl FromStr for TimeOfDay {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TimeOfDay::parse(s)
	}
}

impl Default for TimeOfDay {
	/// Midnight.
	fn default() -> Self {
		TimeOfDay::midnight()
	}
}

impl fmt::Display for TimeOfDay {
	/// Writes `HH:MM:SS.uuuuuu`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.format("H:i:s.u"), f)
	}
}

/// A [`TimeOfDay`] paired with a format pattern. Created by [`TimeOfDay::format`].
#[derive(Clone, Copy, Debug)]
pub struct Formatted<'a> {
	time: TimeOfDay,
	pattern: &'a str
}

impl fmt::Display for Formatted<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.pattern.chars() {
			match c {
				'H' => write!(f, "{:02}", self.time.hour)?,
				'i' => write!(f, "{:02}", self.time.minute)?,
				's' => write!(f, "{:02}", self.time.second)?,
				'u' => write!(f, "{:06}", self.time.microsecond)?,
				c => fmt::Write::write_char(f, c)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeOfDay {
	fn arbitrary(g: &mut quickcheck::Gen) -> TimeOfDay {
		use quickcheck::Arbitrary;

		let micros = u64::arbitrary(g) % MICROS_PER_DAY as u64;
		TimeOfDay::from_microseconds(micros as i64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::string::{String, ToString};
	use crate::clock::{FixedClock, TestClock};

	fn hms(t: TimeOfDay) -> String {
		t.format("H:i:s.u").to_string()
	}

	#[test]
	fn construct_from_clock_test() {
		let clock = TestClock::new();
		let _frozen = clock.freeze(TimeSpec { sec: 978351194, nsec: 123456789 });
		assert_eq!(hms(TimeOfDay::new(Source::Now, &clock).unwrap()), "12:13:14.123456");
		assert_eq!(hms(TimeOfDay::new(None::<&str>, &clock).unwrap()), "12:13:14.123456");
		assert_eq!(hms(TimeOfDay::now_with(&clock).unwrap()), "12:13:14.123456");
	}

	#[test]
	fn construct_from_frozen_string_test() {
		let clock = TestClock::new();
		clock.set_str("2001-01-01 12:13:14.123456").unwrap();
		assert_eq!(hms(TimeOfDay::now_with(&clock).unwrap()), "12:13:14.123456");
		clock.clear();
		assert_eq!(clock.frozen(), None);
	}

	#[cfg(feature = "now")]
	#[test]
	fn now_after_clear_test() {
		use crate::clock::{Clock, SystemClock};

		let clock = TestClock::new();
		{
			let _frozen = clock.freeze(TimeSpec { sec: 978351194, nsec: 0 });
		}
		let before = SystemClock.now().unwrap();
		let t = TimeOfDay::now_with(&clock).unwrap();
		let after = SystemClock.now().unwrap();
		let (lo, hi) = (TimeOfDay::from(before), TimeOfDay::from(after));
		// The real clock may cross midnight between the two reads.
		assert!(t.between(lo, hi, true) || lo > hi);
		assert!(TimeOfDay::now().is_ok());
	}

	#[cfg(feature = "now")]
	#[test]
	fn now_ignores_test_clock_test() {
		use crate::clock::{Clock, SystemClock};

		let clock = TestClock::new();
		let _frozen = clock.freeze(TimeSpec { sec: 978351194, nsec: 123456000 });
		assert_eq!(hms(TimeOfDay::now_with(&clock).unwrap()), "12:13:14.123456");

		let before = SystemClock.now().unwrap();
		let t = TimeOfDay::now().unwrap();
		let after = SystemClock.now().unwrap();
		let (lo, hi) = (TimeOfDay::from(before), TimeOfDay::from(after));
		assert!(t.between(lo, hi, true) || lo > hi);
	}

	#[test]
	fn construct_unavailable_clock_test() {
		struct Broken;
		impl Clock for Broken {
			fn now(&self) -> Option<TimeSpec> { None }
		}
		assert_eq!(TimeOfDay::new(Source::Now, &Broken), Err(TimeError::ClockUnavailable));
		assert_eq!(hms(TimeOfDay::new("12:00", &Broken).unwrap()), "12:00:00.000000");
	}

	#[test]
	fn construct_from_string_test() {
		let clock = FixedClock(TimeSpec { sec: 0, nsec: 0 });
		let text = |s: &str| TimeOfDay::new(s, &clock).map(hms);
		assert_eq!(text("0.0.0.0").unwrap(), "00:00:00.000000");
		assert_eq!(text("1:01:1.000001").unwrap(), "01:01:01.000001");
		assert_eq!(text("23:59.59.999999").unwrap(), "23:59:59.999999");
		assert_eq!(text("23:59.59.9999991").unwrap(), "23:59:59.999999");
		assert_eq!(text("12:13").unwrap(), "12:13:00.000000");
	}

	#[test]
	fn construct_invalid_test() {
		let clock = FixedClock(TimeSpec { sec: 0, nsec: 0 });
		for (s, e) in [
			("now", ParseError::MissingHours),
			("23", ParseError::MissingMinutes),
			("24:00:00", ParseError::HoursOutOfRange),
			("23:60:00", ParseError::MinutesOutOfRange),
			("23:59:60", ParseError::SecondsOutOfRange),
		] {
			assert_eq!(TimeOfDay::new(s, &clock), Err(TimeError::InvalidFormat(e)), "{}", s);
			assert_eq!(TimeOfDay::parse(s), Err(e), "{}", s);
			assert_eq!(s.parse::<TimeOfDay>(), Err(e), "{}", s);
		}
	}

	#[test]
	fn construct_from_instance_test() {
		let clock = FixedClock(TimeSpec { sec: 0, nsec: 0 });

		// 2001-01-01 23:59:59.999999999 UTC
		let spec = TimeSpec { sec: 978393599, nsec: 999999999 };
		assert_eq!(hms(TimeOfDay::new(&spec, &clock).unwrap()), "23:59:59.999999");

		let t = TimeOfDay::from(spec);
		assert_eq!(hms(TimeOfDay::new(&t, &clock).unwrap()), "23:59:59.999999");
		let bearing: &dyn TimeBearing = &t;
		assert_eq!(TimeOfDay::new(bearing, &clock), Ok(t));
	}

	#[test]
	fn from_time_normalizes_test() {
		struct Sloppy;
		impl TimeBearing for Sloppy {
			fn hour(&self) -> u8 { 24 }
			fn minute(&self) -> u8 { 60 }
			fn second(&self) -> u8 { 0 }
			fn microsecond(&self) -> u32 { 1_000_000 }
		}
		assert_eq!(hms(TimeOfDay::from_time(&Sloppy)), "01:00:01.000000");
	}

	#[test]
	fn named_constructors_test() {
		assert_eq!(hms(TimeOfDay::midnight()), "00:00:00.000000");
		assert_eq!(hms(TimeOfDay::noon()), "12:00:00.000000");
		assert_eq!(TimeOfDay::default(), TimeOfDay::midnight());
		assert_eq!(hms(TimeOfDay::parse("23:59:59.999999").unwrap()), "23:59:59.999999");
	}

	#[test]
	fn setters_test() {
		let m = TimeOfDay::midnight();
		assert_eq!(hms(m.set_hours(24)), "00:00:00.000000");
		assert_eq!(hms(m.set_hours(-1)), "23:00:00.000000");
		assert_eq!(hms(m.set_minutes(60)), "01:00:00.000000");
		assert_eq!(hms(m.set_minutes(-1)), "23:59:00.000000");
		assert_eq!(hms(m.set_seconds(60)), "00:01:00.000000");
		assert_eq!(hms(m.set_seconds(-1)), "23:59:59.000000");
		assert_eq!(hms(m.set_microseconds(1_000_000)), "00:00:01.000000");
		assert_eq!(hms(m.set_microseconds(-1)), "23:59:59.999999");

		let t = m.set_hours(25).set_minutes(120).set_seconds(120).set_microseconds(2_000_001);
		assert_eq!(hms(t), "03:02:02.000001");

		// The other fields are kept
		let t = TimeOfDay::parse("10:20:30.000040").unwrap();
		assert_eq!(hms(t.set_hours(5)), "05:20:30.000040");
		assert_eq!(hms(t.set_minutes(-21)), "09:39:30.000040");
		assert_eq!(hms(t.set_minutes(-80)), "08:40:30.000040");
		assert_eq!(hms(t.set_seconds(0)), "10:20:00.000040");
		assert_eq!(hms(t.set_microseconds(0)), "10:20:30.000000");

		// Make sure extreme inputs cannot panic
		for n in [i64::MIN, i64::MAX, i64::MIN + 1, i64::MAX - 1] {
			let _ = m.set_hours(n).set_minutes(n).set_seconds(n).set_microseconds(n);
			let _ = m.set_time(n, n, n, n);
		}
	}

	#[test]
	fn setters_are_pure_test() {
		let t = TimeOfDay::noon();
		let new = t.set_time(0, 0, 0, 0);
		assert_eq!(t, TimeOfDay::noon());
		assert_eq!(hms(new), "00:00:00.000000");

		// Receivers are taken by value, so an unchanged result is still a separate copy.
		let same = t.set_hours(12);
		assert_eq!(same, t);
	}

	#[test]
	fn getters_test() {
		let t = TimeOfDay::midnight().set_time(-1, -1, -1, -1);
		assert_eq!(t.hours(), 22);
		assert_eq!(t.minutes(), 58);
		assert_eq!(t.seconds(), 58);
		assert_eq!(t.microseconds(), 999_999);
		assert_eq!(t.total_microseconds(), MICROS_PER_DAY - 3_661_000_001);
	}

	#[test]
	fn get_by_name_test() {
		let t = TimeOfDay::parse("01:02:03.000004").unwrap();
		assert_eq!(t.get("hours"), Ok(1));
		assert_eq!(t.get("minute"), Ok(2));
		assert_eq!(t.get("SECONDS"), Ok(3));
		assert_eq!(t.get("microsecond"), Ok(4));
		assert_eq!(t.get("sdfsdfss"), Err(TimeError::UnknownField));
		assert_eq!(t.get(""), Err(TimeError::UnknownField));
		assert_eq!(t.value(Field::Minutes), 2);
		assert_eq!(Field::Microseconds.to_string(), "microseconds");
	}

	#[test]
	fn set_time_test() {
		let m = TimeOfDay::midnight();
		assert_eq!(hms(m.set_time(24, 120, 120, 1_000_000)), "02:02:01.000000");
		assert_eq!(hms(m.set_time(-1, -1, -1, -1)), "22:58:58.999999");
		assert_eq!(hms(m.set_time(-1, 120, -1, 1_000_001)), "01:00:00.000001");

		// Differs from applying the setters one at a time, finest first
		let chained = m.set_microseconds(1_000_001).set_seconds(-1).set_minutes(120).set_hours(-1);
		assert_eq!(hms(chained), "23:00:59.000001");
	}

	#[test]
	fn compare_test() {
		let a = TimeOfDay::parse("08:00").unwrap();
		let b = TimeOfDay::parse("08:00:00.000001").unwrap();
		let c = TimeOfDay::parse("17:30").unwrap();
		assert!(a < b && b < c);
		assert!(b.between(a, c, false));
		assert!(b.between(c, a, false));
		assert!(a.between(a, c, true));
		assert!(!a.between(a, c, false));
		assert!(!TimeOfDay::midnight().between(a, c, true));
	}

	#[test]
	fn format_test() {
		let t = TimeOfDay::parse("23:59:59.999999").unwrap();
		assert_eq!(hms(t), "23:59:59.999999");
		assert_eq!(t.to_string(), "23:59:59.999999");
		assert_eq!(t.format("H").to_string(), "23");
		assert_eq!(t.format("").to_string(), "");
		assert_eq!(t.format("at H.i, s and u µs").to_string(), "at 23.59, 59 and 999999 µ59");
		let t = TimeOfDay::parse("1:2:3.4").unwrap();
		assert_eq!(t.format("His").to_string(), "010203");
		assert_eq!(t.format("u").to_string(), "400000");
	}

	quickcheck::quickcheck! {
		fn prop_set_hours_is_euclidean(n: i64) -> bool {
			let m = TimeOfDay::midnight();
			m.set_hours(n) == m.set_hours(n.rem_euclid(24))
		}

		fn prop_set_time_in_range(t: TimeOfDay, h: i64, m: i64, s: i64, us: i64) -> bool {
			let r = t.set_time(h, m, s, us);
			(0..MICROS_PER_DAY).contains(&r.total_microseconds())
				&& r.hours() < 24 && r.minutes() < 60 && r.seconds() < 60
				&& r.microseconds() < 1_000_000
		}

		fn prop_set_microseconds_matches_total(us: i64) -> bool {
			TimeOfDay::midnight().set_microseconds(us) == TimeOfDay::from_microseconds(us)
		}

		fn prop_format_then_parse(t: TimeOfDay) -> bool {
			TimeOfDay::parse(&t.to_string()) == Ok(t)
		}

		fn prop_ordering_same_as_total(t1: TimeOfDay, t2: TimeOfDay) -> bool {
			t1.cmp(&t2) == t1.total_microseconds().cmp(&t2.total_microseconds())
		}

		fn prop_copy_is_identity(t: TimeOfDay) -> bool {
			TimeOfDay::from_time(&t) == t
		}
	}
}
