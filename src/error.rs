//! Error types used across modules.
//!
//! Parsing has its own error type, [`ParseError`], which [`TimeOfDay::parse`] returns directly.
//! Everything else surfaces a [`TimeError`].
//!
//! [`TimeOfDay::parse`]: crate::TimeOfDay::parse

use core::{error, fmt};
use crate::parse::ParseError;

/// The error type for constructing and inspecting [`TimeOfDay`](crate::TimeOfDay) values.
///
/// Arithmetic never produces this error: out of range numbers given to the setters wrap around
/// the day instead.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
	/// The source text was not a valid time. The reason is provided in the payload.
	InvalidFormat(ParseError),
	/// A field was requested by a name that does not belong to a time of day.
	UnknownField,
	/// The clock could not report the current moment.
	ClockUnavailable
}

impl fmt::Display for TimeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TimeError::InvalidFormat(e) => write!(f, "Invalid time format: {}", e),
			TimeError::UnknownField => write!(f, "Unknown time field"),
			TimeError::ClockUnavailable => write!(f, "Current time unavailable"),
		}
	}
}

impl fmt::Debug for TimeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl error::Error for TimeError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			TimeError::InvalidFormat(e) => Some(e),
			_ => None
		}
	}
}

impl From<ParseError> for TimeError {
	fn from(value: ParseError) -> Self {
		TimeError::InvalidFormat(value)
	}
}
