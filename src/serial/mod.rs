/// Synchronous two-wire serial output: one clock line, one data line.
///
/// A byte goes out one bit at a time. For every bit the data line is set
/// first, held stable for the settle time, and only then is the clock
/// pulsed so the receiver samples while data is steady. There is no
/// acknowledgement and no read-back; the receiver is trusted to keep up.
///
/// Between transfers both lines rest at their idle level (low for a
/// rising sample edge, clock high for a falling one).

mod protocol;
mod transmitter;

pub use self::protocol::{
	BitOrder,
	Protocol,
	SampleEdge,
};

pub use self::transmitter::{
	SerialTransmitter,
};
