//! Sources of "now".
//!
//! Anything that needs the current moment asks a [`Clock`] for it rather than reading the system
//! time directly. [`SystemClock`] is the real wall clock, [`FixedClock`] always reports the same
//! moment, and [`TestClock`] can be frozen and unfrozen while it is in use.
//!
//! # Examples
//!
//! ```
//! # use timeofday::{clock::TestClock, TimeOfDay};
//! let clock = TestClock::new();
//! clock.set_str("2001-01-01 12:13:14.123456").unwrap();
//! let t = TimeOfDay::now_with(&clock).unwrap();
//! assert_eq!(t.format("H:i:s.u").to_string(), "12:13:14.123456");
//! clock.clear();
//! ```

use core::cell::Cell;
use crate::parse::{parse_timestamp, ParseError};
use crate::time::TimeSpec;

/// A provider of the current moment.
pub trait Clock {
	/// The current moment, or `None` if it cannot be determined.
	fn now(&self) -> Option<TimeSpec>;
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> Option<TimeSpec> {
		(**self).now()
	}
}

/// The real-time system clock.
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "now")]
impl Clock for SystemClock {
	fn now(&self) -> Option<TimeSpec> {
		crate::time::now()
	}
}

/// A clock stuck at a single moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock(pub TimeSpec);

impl Clock for FixedClock {
	fn now(&self) -> Option<TimeSpec> {
		Some(self.0)
	}
}

/// A clock that can be frozen at a chosen moment.
///
/// While frozen, [`Clock::now`] always returns the frozen moment. Once cleared, the clock follows
/// the system clock again (or reports no time at all without the `now` feature).
///
/// Prefer [`TestClock::freeze`] over [`TestClock::set`]: the returned guard unfreezes the clock
/// when it goes out of scope, so a frozen moment cannot leak into unrelated code.
///
/// # Examples
///
/// ```
/// # use timeofday::{clock::{Clock, TestClock}, time::TimeSpec};
/// let clock = TestClock::new();
/// let moment = TimeSpec { sec: 978351194, nsec: 123456000 };
/// {
/// 	let _frozen = clock.freeze(moment);
/// 	assert_eq!(clock.now(), Some(moment));
/// }
/// assert_eq!(clock.frozen(), None);
/// ```
#[derive(Debug, Default)]
pub struct TestClock {
	/// The frozen moment, if any
	frozen: Cell<Option<TimeSpec>>
}

impl TestClock {
	/// Create a clock that is not frozen.
	pub const fn new() -> Self {
		TestClock { frozen: Cell::new(None) }
	}

	/// Freeze the clock at `moment`, or unfreeze it with `None`.
	pub fn set(&self, moment: Option<TimeSpec>) {
		if let Some(_t) = moment {
			debug!("test clock frozen at {}.{:09}", _t.sec, _t.nsec);
		} else {
			debug!("test clock cleared");
		}
		self.frozen.set(moment);
	}

	/// Freeze the clock at a UTC date time string such as `2001-01-01 12:13:14.123456`.
	///
	/// See [`parse_timestamp`] for the accepted formats. The clock is left untouched if `text`
	/// fails to parse.
	pub fn set_str(&self, text: &str) -> Result<(), ParseError> {
		let moment = parse_timestamp(text.as_bytes())?;
		self.set(Some(moment));
		Ok(())
	}

	/// Unfreeze the clock.
	pub fn clear(&self) {
		self.set(None);
	}

	/// The frozen moment, if the clock is frozen.
	pub fn frozen(&self) -> Option<TimeSpec> {
		self.frozen.get()
	}

	/// Freeze the clock at `moment` until the returned guard is dropped.
	///
	/// Dropping the guard restores whatever the clock was set to before, so guards may be nested.
	pub fn freeze(&self, moment: TimeSpec) -> Frozen<'_> {
		let previous = self.frozen();
		self.set(Some(moment));
		Frozen { clock: self, previous }
	}
}

impl Clock for TestClock {
	fn now(&self) -> Option<TimeSpec> {
		if let Some(t) = self.frozen.get() {
			return Some(t);
		}
		#[cfg(feature = "now")]
		{
			crate::time::now()
		}
		#[cfg(not(feature = "now"))]
		{
			warn!("test clock is not frozen and no system clock is available");
			None
		}
	}
}

/// Guard returned by [`TestClock::freeze`].
#[must_use = "the clock unfreezes as soon as this guard is dropped"]
#[derive(Debug)]
pub struct Frozen<'a> {
	/// The clock to restore
	clock: &'a TestClock,
	/// What the clock was set to before freezing
	previous: Option<TimeSpec>
}

impl Drop for Frozen<'_> {
	fn drop(&mut self) {
		self.clock.set(self.previous);
	}
}
