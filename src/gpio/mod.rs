/// Driving the BCM283x GPIO register block.
///
/// Pins are selected as outputs through the GPFSELn function registers
/// and toggled through the GPSETn/GPCLRn set/clear registers, all in a
/// memory-mapped window obtained from the mmio module.

mod bitbang;
mod pin;
mod registers;

pub use self::bitbang::{
	GpioSerial,
};

pub use self::pin::{
	Pin,
	PIN_COUNT,
};

pub use self::registers::{
	Line,
	Mode,
	GPIO_MEM_LEN,
};
