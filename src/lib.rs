#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

macro_rules! with_context {
	(( $fmt:tt $($t:tt)* ), $e:expr) => {{
		use failure::Error;

		match (|| { $e })() {
			Ok(v) => Ok(v),
			Err(e) => {
				let e: Error = e;
				let msg = format!(concat!($fmt, ": {}") $($t)*, e);
				Err(Error::from(e.context(msg)))
			}
		}
	}};

	($msg:expr, $e:expr) => {
		with_context!(("{}", $msg), $e)
	};
}

pub type AResult<T> = Result<T, failure::Error>;

/// Ways driving the GPIO serial lines can fail.
#[derive(Debug, Fail)]
pub enum GpioSerialError {
	/// Rejected before touching any hardware: bad pin numbers,
	/// clock and data on the same line, and similar.
	#[fail(display = "configuration error: {}", _0)]
	Configuration(String),
	/// Mapping the GPIO register window failed; no registers were
	/// left mapped.
	#[fail(display = "GPIO register mapping failed: {}", _0)]
	Mapping(String),
	/// An operation was called in a state that doesn't allow it,
	/// e.g. sending before `initialize`.
	#[fail(display = "precondition violated: {}", _0)]
	Precondition(String),
}

pub mod gpio;
pub mod mmio;
pub mod serial;
