//! Parse time strings like `HH:mm:ss.uuuuuu` and date time strings like `YYYY-MM-DD HH:mm:ss`.
//!
//! [`parse_time`] reads a wall-clock time into a [`TimeOfDay`]. [`parse_timestamp`] reads a full
//! UTC date time into a [`TimeSpec`], which is mostly useful to freeze a
//! [`TestClock`](crate::clock::TestClock) at a readable moment.
//!
//! # Examples
//! ```
//! # use timeofday::{parse::{parse_time, parse_timestamp}, time::TimeSpec};
//! let t = parse_time(b"12:30:45.5").unwrap();
//! assert_eq!(t.format("H:i:s.u").to_string(), "12:30:45.500000");
//!
//! assert_eq!(
//! 	parse_timestamp(b"2025-02-18T12:30:45Z"),
//! 	Ok(TimeSpec { sec: 1739881845, nsec: 0 })
//! );
//! ```

use core::{error, fmt};
use crate::time::{days_per_month, timestamp_from_ymd, TimeSpec};
use crate::timeofday::TimeOfDay;

/// Error type for parsing time and date time strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
	/// Expected a year, but it was missing or malformed.
	MissingYear,
	/// Expected a month, but it was missing or malformed.
	MissingMonth,
	/// The supplied month was outside of [1, 12].
	MonthOutOfRange,
	/// Expected a day, but it was missing or malformed.
	MissingDay,
	/// The supplied day was outside of [1, 28|29|30|31] depending on the month & year.
	DayOutOfRange,
	/// Expected hours, but it was missing or malformed.
	MissingHours,
	/// The supplied hour was outside of [0, 23].
	HoursOutOfRange,
	/// Hour was supplied but minutes were missing.
	MissingMinutes,
	/// The supplied minutes were outside of [0, 59].
	MinutesOutOfRange,
	/// Expected seconds, but it was missing or malformed.
	MissingSeconds,
	/// The supplied seconds were outside of [0, 59].
	SecondsOutOfRange,
	/// A fraction separator was found without any digits after it.
	MissingFraction,
	/// Found unexpected bytes after a valid time string.
	UnexpectedInput
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseError::MissingYear => write!(f, "Year missing or malformed"),
			ParseError::MissingMonth => write!(f, "Month missing or malformed"),
			ParseError::MonthOutOfRange => write!(f, "Month out of range"),
			ParseError::MissingDay => write!(f, "Day missing or malformed"),
			ParseError::DayOutOfRange => write!(f, "Day out of range"),
			ParseError::MissingHours => write!(f, "Hours missing or malformed"),
			ParseError::HoursOutOfRange => write!(f, "Hours out of range"),
			ParseError::MissingMinutes => write!(f, "Minutes missing or malformed"),
			ParseError::MinutesOutOfRange => write!(f, "Minutes out of range"),
			ParseError::MissingSeconds => write!(f, "Seconds missing or malformed"),
			ParseError::SecondsOutOfRange => write!(f, "Seconds out of range"),
			ParseError::MissingFraction => write!(f, "Fractional seconds missing or malformed"),
			ParseError::UnexpectedInput => write!(f, "Unexpected input at end of time string"),
		}
	}
}

impl error::Error for ParseError {}

/// Parse a fixed-length, unsigned integer.
///
/// `N` must be less than 5 to ensure the parsed value fits into a u16 with no possible overflow.
fn parse_num<const N: usize>(bytes: &[u8], e: ParseError) -> Result<(&[u8], u16), ParseError> {
	const { assert!(N < 5); }

	if bytes.len() < N {
		return Err(e);
	}

	let mut r: u16 = 0;
	for b in &bytes[..N] {
		r = match *b {
			v @ b'0'..=b'9' => r * 10 + (v - b'0') as u16,
			_ => return Err(e)
		};
	}

	Ok((&bytes[N..], r))
}

/// Parse an unsigned integer of one or two digits.
fn parse_short(bytes: &[u8], e: ParseError) -> Result<(&[u8], u8), ParseError> {
	let digits = bytes.iter().take(2).take_while(|b| b.is_ascii_digit()).count();
	if digits == 0 {
		return Err(e);
	}
	let r = bytes[..digits].iter().fold(0, |r, b| r * 10 + (b - b'0'));
	Ok((&bytes[digits..], r))
}

/// Parse a run of fractional digits, keeping the first `N` and padding them on the right.
///
/// Digits past the first `N` are consumed and dropped without rounding, e.g. with `N = 6`,
/// `5` => `500000` and `9999991` => `999999`.
fn parse_fraction<const N: usize>(bytes: &[u8], e: ParseError) -> Result<(&[u8], u32), ParseError> {
	const { assert!(N < 10); }

	let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
	if digits == 0 {
		return Err(e);
	}
	let mut r: u32 = 0;
	for i in 0..N {
		let d = bytes[..digits].get(i).map_or(0, |b| b - b'0');
		r = r * 10 + d as u32;
	}
	Ok((&bytes[digits..], r))
}

/// Parse a time of day string.
///
/// The accepted form is `H:M[:S[:F]]`, where `H`, `M` and `S` have one or two digits and `F` is
/// a run of fractional second digits. Any of the separators may be either `:` or `.`. Missing
/// trailing groups are zero. Only the first six fractional digits are kept; the rest are dropped
/// without rounding.
///
/// A bare hour is rejected, as is anything that does not match the pattern or names an hour,
/// minute or second outside of its canonical range. Values are never clamped.
///
/// # Errors
///
/// Returns [`ParseError`] describing the first problem found.
///
/// # Examples
/// ```
/// # use timeofday::parse::{parse_time, ParseError};
/// assert_eq!(parse_time(b"1:01:1.000001").unwrap().to_string(), "01:01:01.000001");
/// assert_eq!(parse_time(b"23:59.59.9999991").unwrap().to_string(), "23:59:59.999999");
/// assert_eq!(parse_time(b"12:13").unwrap().to_string(), "12:13:00.000000");
/// assert_eq!(parse_time(b"23"), Err(ParseError::MissingMinutes));
/// assert_eq!(parse_time(b"24:00:00"), Err(ParseError::HoursOutOfRange));
/// ```
pub fn parse_time(bytes: &[u8]) -> Result<TimeOfDay, ParseError> {
	let (bytes, hours) = parse_short(bytes, ParseError::MissingHours)?;
	if hours > 23 {
		return Err(ParseError::HoursOutOfRange);
	}

	// Required minutes
	let (bytes, minutes) = match bytes.split_first() {
		Some((b':' | b'.', b)) => parse_short(b, ParseError::MissingMinutes)?,
		Some(_) => return Err(ParseError::UnexpectedInput),
		None => return Err(ParseError::MissingMinutes),
	};
	if minutes > 59 {
		return Err(ParseError::MinutesOutOfRange);
	}
	if bytes.is_empty() {
		return Ok(TimeOfDay::from_canonical(hours, minutes, 0, 0));
	}

	// Optional seconds
	let (bytes, seconds) = match bytes.split_first() {
		Some((b':' | b'.', b)) => parse_short(b, ParseError::MissingSeconds)?,
		_ => return Err(ParseError::UnexpectedInput),
	};
	if seconds > 59 {
		return Err(ParseError::SecondsOutOfRange);
	}
	if bytes.is_empty() {
		return Ok(TimeOfDay::from_canonical(hours, minutes, seconds, 0));
	}

	// Optional fraction
	let (bytes, micros) = match bytes.split_first() {
		Some((b':' | b'.', b)) => parse_fraction::<6>(b, ParseError::MissingFraction)?,
		_ => return Err(ParseError::UnexpectedInput),
	};
	if bytes.is_empty() {
		Ok(TimeOfDay::from_canonical(hours, minutes, seconds, micros))
	} else {
		Err(ParseError::UnexpectedInput)
	}
}

/// Parse a UTC date time string into a Unix timestamp.
///
/// Accepted forms, each optionally followed by `Z` or ` Z`:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:mm` or `YYYY-MM-DD HH:mm`
/// - `YYYY-MM-DDTHH:mm:ss` or `YYYY-MM-DD HH:mm:ss`
/// - `YYYY-MM-DDTHH:mm:ss.f` or `YYYY-MM-DD HH:mm:ss.f`, where digits of `f` past the ninth
///   are dropped
///
/// Numeric UTC offsets are not supported.
///
/// # Errors
///
/// Returns [`ParseError`] if the input was malformed or invalid in any way. This includes cases
/// where a valid timestamp was read but additional characters remain in `bytes`.
///
/// # Examples
/// ```
/// # use timeofday::{parse::parse_timestamp, time::TimeSpec};
/// assert_eq!(
/// 	parse_timestamp(b"2025-02-18"),
/// 	Ok(TimeSpec { sec: 1739836800, nsec: 0 })
/// );
/// assert_eq!(
/// 	parse_timestamp(b"2001-01-01 12:13:14.123456"),
/// 	Ok(TimeSpec { sec: 978351194, nsec: 123456000 })
/// );
/// ```
pub fn parse_timestamp(bytes: &[u8]) -> Result<TimeSpec, ParseError> {
	let (bytes, year) = parse_num::<4>(bytes, ParseError::MissingYear)?;
	let (bytes, month) = match bytes.split_first() {
		Some((b'-', b)) => parse_num::<2>(b, ParseError::MissingMonth)?,
		_ => return utc_suffix(bytes, timestamp_from_ymd(year, 1, 1), 0),
	};
	if month == 0 || month > 12 {
		return Err(ParseError::MonthOutOfRange);
	}

	let (bytes, day) = match bytes.split_first() {
		Some((b'-', b)) => parse_num::<2>(b, ParseError::MissingDay)?,
		_ => return utc_suffix(bytes, timestamp_from_ymd(year, month as u8, 1), 0),
	};
	if day == 0 || day > days_per_month(year, month as u8) as u16 {
		return Err(ParseError::DayOutOfRange);
	}
	let mut sec = timestamp_from_ymd(year, month as u8, day as u8);

	let bytes = match bytes.split_first() {
		Some((b'T' | b' ', b)) if b.first().is_some_and(u8::is_ascii_digit) => b,
		_ => return utc_suffix(bytes, sec, 0),
	};
	let (bytes, hours) = parse_num::<2>(bytes, ParseError::MissingHours)?;
	if hours > 23 {
		return Err(ParseError::HoursOutOfRange);
	}
	let (bytes, minutes) = match bytes.split_first() {
		Some((b':', b)) => parse_num::<2>(b, ParseError::MissingMinutes)?,
		_ => return Err(ParseError::MissingMinutes),
	};
	if minutes > 59 {
		return Err(ParseError::MinutesOutOfRange);
	}
	sec += hours as i64 * 3600 + minutes as i64 * 60;

	let (bytes, seconds) = match bytes.split_first() {
		Some((b':', b)) => parse_num::<2>(b, ParseError::MissingSeconds)?,
		_ => return utc_suffix(bytes, sec, 0),
	};
	if seconds > 59 {
		return Err(ParseError::SecondsOutOfRange);
	}
	sec += seconds as i64;

	match bytes.split_first() {
		Some((b'.', b)) => {
			let (bytes, nsec) = parse_fraction::<9>(b, ParseError::MissingFraction)?;
			utc_suffix(bytes, sec, nsec as i64)
		},
		_ => utc_suffix(bytes, sec, 0),
	}
}

/// Accept the end of a date time string: nothing, `Z` or ` Z`.
fn utc_suffix(bytes: &[u8], sec: i64, nsec: i64) -> Result<TimeSpec, ParseError> {
	match bytes {
		[] | [b'Z'] | [b' ', b'Z'] => Ok(TimeSpec { sec, nsec }),
		_ => Err(ParseError::UnexpectedInput),
	}
}
