//! Wall-clock time-of-day values.
//!
//! The center of this crate is [`TimeOfDay`], an immutable time within a single day with
//! microsecond precision. It can be parsed from text, copied out of anything implementing
//! [`TimeBearing`], or read from a [`Clock`](clock::Clock). Its setters take any integer and wrap
//! around the day, while text that does not describe a valid time is always rejected.
//!
//! The supporting modules are:
//! - [`time`]: Unix timestamps ([`TimeSpec`]) and the system clock.
//! - [`clock`]: injectable sources of "now", including a [`TestClock`](clock::TestClock) that can
//!   be frozen for deterministic tests.
//! - [`parse`]: the time and date time string parsers.
//!
//! This crate supports `no_std`. The `std` feature adds conversions from
//! [`std::time::SystemTime`]. The `now` feature (on by default) reads the system clock through
//! `libc`, enabling [`TimeOfDay::now`] and [`clock::SystemClock`]. The `logging` feature emits
//! diagnostics through the [`log`](https://docs.rs/log) crate.
//!
//! # Examples
//!
//! ```
//! # use timeofday::TimeOfDay;
//! let t = TimeOfDay::parse("12:13").unwrap();
//! assert_eq!(t.format("H:i:s.u").to_string(), "12:13:00.000000");
//!
//! let t = TimeOfDay::midnight().set_hours(25).set_minutes(120).set_seconds(120);
//! assert_eq!(t.set_microseconds(2_000_001).to_string(), "03:02:02.000001");
//! ```
//!
//! Freezing the current time:
//! ```
//! # use timeofday::{clock::TestClock, TimeOfDay};
//! let clock = TestClock::new();
//! clock.set_str("2001-01-01 12:13:14.123456").unwrap();
//! assert_eq!(TimeOfDay::now_with(&clock).unwrap().to_string(), "12:13:14.123456");
//! clock.clear();
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

pub mod clock;
pub mod error;
pub mod parse;
pub mod time;
mod timeofday;

pub use error::TimeError;
pub use parse::ParseError;
pub use time::TimeSpec;
pub use timeofday::*;
