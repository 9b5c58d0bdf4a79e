use std::fmt;
use std::str;

use crate::{
	AResult,
	GpioSerialError,
};

/// Number of GPIO lines the BCM283x register block controls.
pub const PIN_COUNT: u8 = 54;

/// A GPIO line, identified by its BCM number (not the header position).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pin(u8);

impl Pin {
	pub fn new(number: u8) -> AResult<Pin> {
		if number >= PIN_COUNT {
			return Err(GpioSerialError::Configuration(
				format!("GPIO pin {} out of range (valid: 0..{})", number, PIN_COUNT)
			).into());
		}
		Ok(Pin(number))
	}

	pub fn number(self) -> u8 {
		self.0
	}

	/// Bit for this pin in its 32-pin set/clear/level registers.
	pub fn mask(self) -> u32 {
		1 << (self.0 % 32)
	}

	/// Index of the 32-pin register group (GPSET0/GPSET1, ...) holding this pin.
	pub fn bank(self) -> usize {
		usize::from(self.0 / 32)
	}

	/// Index of the GPFSELn register holding this pin's function field.
	pub fn fsel_index(self) -> usize {
		usize::from(self.0 / 10)
	}

	/// Bit position of this pin's 3-bit function field within GPFSELn.
	pub fn fsel_shift(self) -> u32 {
		u32::from(self.0 % 10) * 3
	}
}

impl fmt::Display for Pin {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "GPIO{}", self.0)
	}
}

impl str::FromStr for Pin {
	type Err = ::failure::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let number = with_context!(("invalid GPIO pin {:?}", s),
			Ok(s.parse::<u8>()?)
		)?;
		Pin::new(number)
	}
}
