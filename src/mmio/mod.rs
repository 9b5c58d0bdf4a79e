mod block;
mod linux;

pub use self::block::{
	GpioMemory,
	RegisterBlock,
};

// OS-specific. for now linux only.
pub use self::linux::{
	DevGpioMem,
	Mapped,
};
