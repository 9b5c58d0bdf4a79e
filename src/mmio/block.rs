use std::io;

/// Word-sized access to a mapped block of device registers.
///
/// Offsets are byte offsets from the start of the block; they must be
/// 4-byte aligned and within `len`. Reads and writes go to externally
/// mutable memory and must not be cached or elided.
pub trait RegisterBlock {
	fn len(&self) -> usize;

	fn read_register(&self, offset: usize) -> u32;
	fn write_register(&mut self, offset: usize, value: u32);
}

impl<'a, B: ?Sized + RegisterBlock> RegisterBlock for &'a mut B {
	fn len(&self) -> usize {
		B::len(*self)
	}

	fn read_register(&self, offset: usize) -> u32 {
		B::read_register(*self, offset)
	}

	fn write_register(&mut self, offset: usize, value: u32) {
		B::write_register(*self, offset, value);
	}
}

/// Where GPIO register mappings come from.
///
/// The engine only ever asks for the one GPIO block; keeping the
/// source behind a trait lets tests substitute a plain buffer for the
/// real kernel mapping.
pub trait GpioMemory {
	type Block: RegisterBlock;

	fn map_registers(&self) -> io::Result<Self::Block>;
}
