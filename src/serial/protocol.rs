use std::thread;
use std::time::{
	Duration,
	Instant,
};

const DEFAULT_SETTLE: Duration = Duration::from_nanos(250);

pub fn reliable_sleep(mut duration: Duration) {
	loop {
		let now = Instant::now();
		thread::sleep(duration);
		let elapsed = now.elapsed();
		if elapsed >= duration {
			return;
		}
		duration -= elapsed;
	}
}

/// Which bit of a byte goes on the wire first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BitOrder {
	MsbFirst,
	LsbFirst,
}

/// Clock edge the receiver samples on.
///
/// The clock idles at the opposite level, so every pulse produces
/// exactly one sampling edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SampleEdge {
	Rising,
	Falling,
}

impl SampleEdge {
	/// Level of the clock line between pulses.
	pub fn idle_high(self) -> bool {
		match self {
			SampleEdge::Rising => false,
			SampleEdge::Falling => true,
		}
	}
}

/// Timing and framing of the two-wire output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Protocol {
	pub bit_order: BitOrder,
	pub sample_edge: SampleEdge,
	/// Minimum time the lines are held after each transition.
	pub settle: Duration,
}

impl Default for Protocol {
	fn default() -> Self {
		Protocol {
			bit_order: BitOrder::MsbFirst,
			sample_edge: SampleEdge::Rising,
			settle: DEFAULT_SETTLE,
		}
	}
}

impl Protocol {
	// hold lines steady for (at least) the settle time
	pub fn hold(&self) {
		if self.settle > Duration::from_nanos(0) {
			reliable_sleep(self.settle);
		}
	}
}
