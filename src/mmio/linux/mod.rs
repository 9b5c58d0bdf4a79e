use std::fs;
use std::io;

mod mapped;

pub use self::mapped::Mapped;

use crate::gpio::GPIO_MEM_LEN;
use crate::mmio::GpioMemory;

const DEV_GPIOMEM: &str = "/dev/gpiomem";
const DEV_MEM: &str = "/dev/mem";
const SOC_RANGES: &str = "/proc/device-tree/soc/ranges";

// GPIO block offset from the SoC peripheral base
const GPIO_BLOCK_OFFSET: u64 = 0x0020_0000;

/// GPIO register windows from the kernel memory devices.
///
/// /dev/gpiomem exposes exactly the GPIO block and works without
/// special privileges, so it is tried first. The fallback maps
/// /dev/mem at the SoC peripheral base from the device tree (or a
/// base given explicitly), which usually requires root.
#[derive(Clone, Debug, Default)]
pub struct DevGpioMem {
	base: Option<u64>,
}

impl DevGpioMem {
	/// Skip /dev/gpiomem and device tree discovery; map /dev/mem at
	/// the given SoC peripheral base (e.g. 0x3f000000 on a Pi 3).
	pub fn with_base(base: u64) -> Self {
		DevGpioMem {
			base: Some(base),
		}
	}

	fn map_dev_mem(&self, base: u64) -> io::Result<Mapped> {
		debug!("mapping GPIO registers from {} at peripheral base 0x{:08x}", DEV_MEM, base);
		mapped::inner_map(DEV_MEM, base + GPIO_BLOCK_OFFSET, GPIO_MEM_LEN)
			.map_err(|e| io::Error::new(e.kind(), format!("{}: {}", DEV_MEM, e)))
	}
}

impl GpioMemory for DevGpioMem {
	type Block = Mapped;

	fn map_registers(&self) -> io::Result<Mapped> {
		if let Some(base) = self.base {
			return self.map_dev_mem(base);
		}
		match mapped::inner_map(DEV_GPIOMEM, 0, GPIO_MEM_LEN) {
			Ok(block) => Ok(block),
			Err(e) => {
				debug!("{} not usable ({}), falling back to {}", DEV_GPIOMEM, e, DEV_MEM);
				self.map_dev_mem(soc_peripheral_base()?)
			}
		}
	}
}

fn soc_peripheral_base() -> io::Result<u64> {
	let ranges = fs::read(SOC_RANGES)
		.map_err(|e| io::Error::new(e.kind(), format!("{}: {}", SOC_RANGES, e)))?;
	match parse_soc_ranges(&ranges) {
		Some(base) => Ok(base),
		None => Err(io::Error::new(
			io::ErrorKind::InvalidData,
			format!("no usable peripheral base in {}", SOC_RANGES),
		)),
	}
}

// The soc node ranges start with <child address, cpu address, size>
// cells, big-endian. The cpu address is the peripheral base; on later
// models it is a 64-bit value whose high word is zero.
fn parse_soc_ranges(ranges: &[u8]) -> Option<u64> {
	if ranges.len() < 12 {
		return None;
	}
	let base = be_dword(&ranges[4..8]);
	if base != 0 {
		return Some(base);
	}
	let base = be_dword(&ranges[8..12]);
	if base != 0 {
		return Some(base);
	}
	None
}

fn be_dword(buf: &[u8]) -> u64 {
	u64::from(buf[0]) << 24
		| u64::from(buf[1]) << 16
		| u64::from(buf[2]) << 8
		| u64::from(buf[3])
}
