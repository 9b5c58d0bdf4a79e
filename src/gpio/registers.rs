use crate::mmio::RegisterBlock;

use super::Pin;

// register offsets within the GPIO block (BCM283x peripheral manual)
pub const GPFSEL0: usize = 0x00;
pub const GPSET0: usize = 0x1c;
pub const GPCLR0: usize = 0x28;

/// Size of the GPIO register window to map.
pub const GPIO_MEM_LEN: usize = 0x1000;

/// Pin function field values for GPFSELn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Mode {
	Input = 0b000,
	Output = 0b001,
}

/// Set the 3-bit function field of one pin, preserving the fields of
/// the nine other pins sharing the same GPFSELn register.
pub fn set_mode<B: RegisterBlock>(block: &mut B, pin: Pin, mode: Mode) {
	let offset = GPFSEL0 + 4 * pin.fsel_index();
	let mut fsel = block.read_register(offset);
	fsel &= !(0b111 << pin.fsel_shift());
	fsel |= (mode as u32) << pin.fsel_shift();
	block.write_register(offset, fsel);
}

/// Set/clear coordinates of a single GPIO line, precomputed so the
/// per-bit loop is a bare register write.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Line {
	mask: u32,
	set_offset: usize,
	clear_offset: usize,
}

impl Line {
	pub fn for_pin(pin: Pin) -> Line {
		Line {
			mask: pin.mask(),
			set_offset: GPSET0 + 4 * pin.bank(),
			clear_offset: GPCLR0 + 4 * pin.bank(),
		}
	}

	/// Drive the line high or low. GPSETn/GPCLRn only act on bits that
	/// are set in the written value, so no read-modify-write is needed.
	pub fn drive<B: RegisterBlock>(&self, block: &mut B, high: bool) {
		if high {
			block.write_register(self.set_offset, self.mask);
		} else {
			block.write_register(self.clear_offset, self.mask);
		}
	}
}
