use std::fmt;

use crate::mmio::{
	DevGpioMem,
	GpioMemory,
	RegisterBlock,
};
use crate::serial::{
	BitOrder,
	Protocol,
	SerialTransmitter,
};
use crate::{
	AResult,
	GpioSerialError,
};

use super::registers::{
	set_mode,
	Line,
	Mode,
	GPIO_MEM_LEN,
};
use super::Pin;

// held only while initialized; dropping it unmaps the registers
struct Outputs<B: RegisterBlock> {
	block: B,
	clock: Line,
	data: Line,
}

impl<B: RegisterBlock> Outputs<B> {
	// data goes out during clock idle, then one clock pulse; the
	// receiver samples on the pulse edge, so data must be stable
	// before the clock moves
	fn send_bit(&mut self, protocol: &Protocol, high: bool) {
		let idle = protocol.sample_edge.idle_high();

		self.data.drive(&mut self.block, high);
		protocol.hold(); // wait for the line to be stable

		self.clock.drive(&mut self.block, !idle);
		protocol.hold(); // wait for the receiver sampling the line

		self.clock.drive(&mut self.block, idle);
		protocol.hold();
	}

	fn drive_idle(&mut self, protocol: &Protocol) {
		self.clock.drive(&mut self.block, protocol.sample_edge.idle_high());
		self.data.drive(&mut self.block, false);
	}
}

/// Bit-banged two-wire transmitter on a pair of GPIO lines.
///
/// `initialize` maps the GPIO register block, switches both pins to
/// output and parks them at the idle level; `send` then turns byte
/// buffers into data writes and clock pulses. Dropping the engine (or
/// calling `release`) parks the lines and unmaps the registers.
///
/// The engine assumes exclusive use of its two pins. Nothing stops
/// another process (or another engine) from driving the same lines;
/// keeping them apart is the caller's job.
pub struct GpioSerial<M: GpioMemory> {
	memory: M,
	clock_pin: Pin,
	data_pin: Pin,
	protocol: Protocol,
	outputs: Option<Outputs<M::Block>>,
}

impl GpioSerial<DevGpioMem> {
	/// Engine using the kernel memory devices for register access.
	pub fn new(clock_pin: Pin, data_pin: Pin, protocol: Protocol) -> AResult<Self> {
		GpioSerial::with_memory(DevGpioMem::default(), clock_pin, data_pin, protocol)
	}
}

impl<M: GpioMemory> GpioSerial<M> {
	/// Engine on a caller-provided source of register mappings.
	pub fn with_memory(memory: M, clock_pin: Pin, data_pin: Pin, protocol: Protocol) -> AResult<Self> {
		if clock_pin == data_pin {
			return Err(GpioSerialError::Configuration(
				format!("clock and data need distinct lines, both given as {}", clock_pin)
			).into());
		}
		Ok(GpioSerial {
			memory,
			clock_pin,
			data_pin,
			protocol,
			outputs: None,
		})
	}

	pub fn clock_pin(&self) -> Pin {
		self.clock_pin
	}

	pub fn data_pin(&self) -> Pin {
		self.data_pin
	}

	pub fn protocol(&self) -> Protocol {
		self.protocol
	}

	pub fn is_initialized(&self) -> bool {
		self.outputs.is_some()
	}
}

impl<M: GpioMemory> fmt::Display for GpioSerial<M> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "serial(clk={}, dat={})", self.clock_pin, self.data_pin)
	}
}

impl<M: GpioMemory> SerialTransmitter for GpioSerial<M> {
	fn initialize(&mut self) -> AResult<()> {
		if self.outputs.is_some() {
			return Err(GpioSerialError::Precondition(
				format!("{} is already initialized", self)
			).into());
		}

		let block = match self.memory.map_registers() {
			Ok(block) => block,
			Err(e) => return Err(GpioSerialError::Mapping(e.to_string()).into()),
		};
		if block.len() < GPIO_MEM_LEN {
			// dropping the block unmaps the short window again
			return Err(GpioSerialError::Mapping(
				format!("register window too small: {} < {} bytes", block.len(), GPIO_MEM_LEN)
			).into());
		}

		let mut outputs = Outputs {
			block,
			clock: Line::for_pin(self.clock_pin),
			data: Line::for_pin(self.data_pin),
		};
		set_mode(&mut outputs.block, self.clock_pin, Mode::Output);
		set_mode(&mut outputs.block, self.data_pin, Mode::Output);
		outputs.drive_idle(&self.protocol);

		debug!("{}: pins configured as outputs, lines idle", self);
		self.outputs = Some(outputs);
		Ok(())
	}

	/// Clock out all bytes of `data` in order. Blocks until the last
	/// bit is on the wire; register writes themselves cannot fail.
	fn send(&mut self, data: &[u8]) -> AResult<()> {
		let protocol = self.protocol;
		let outputs = match self.outputs.as_mut() {
			Some(outputs) => outputs,
			None => {
				return Err(GpioSerialError::Precondition(
					"send needs a successful initialize first".to_string()
				).into());
			}
		};

		for byte in data {
			for bit in 0..8 {
				let bit_mask = match protocol.bit_order {
					BitOrder::MsbFirst => 0x80u8 >> bit,
					BitOrder::LsbFirst => 0x01u8 << bit,
				};
				outputs.send_bit(&protocol, 0 != (byte & bit_mask));
			}
		}
		if !data.is_empty() {
			// data line back to idle; the clock already is
			outputs.data.drive(&mut outputs.block, false);
		}
		Ok(())
	}

	fn release(&mut self) {
		if let Some(mut outputs) = self.outputs.take() {
			outputs.drive_idle(&self.protocol);
			debug!("{}: lines idle, unmapping registers", self);
		}
	}
}

impl<M: GpioMemory> Drop for GpioSerial<M> {
	fn drop(&mut self) {
		self.release();
	}
}
