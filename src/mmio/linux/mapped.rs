use std::ffi::CString;
use std::fs;
use std::io;
use std::os::unix::io::{
	FromRawFd,
};
use std::ptr;

use libc::{
	MAP_SHARED,
	O_CLOEXEC,
	O_RDWR,
	O_SYNC,
	PROT_READ,
	PROT_WRITE,
	c_void,
	mmap,
	munmap,
	open,
};

use crate::mmio::RegisterBlock;

#[derive(Debug)]
pub struct Mapped {
	ptr: ptr::NonNull<u8>, // u8 instead of void for easier offset operations
	len: usize,
}

impl Drop for Mapped {
	fn drop(&mut self) {
		unsafe {
			let res = munmap(
				self.ptr.as_ptr() as *mut c_void,
				self.len,
			);
			if 0 != res {
				// nothing left to recover here, only report
				error!("munmap failed: {}", io::Error::last_os_error());
			}
		}
	}
}

impl Mapped {
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn read_dword(&self, offset: usize) -> u32 {
		assert!(offset & 3 == 0);
		assert!(offset + 3 < self.len);
		u32::from_le(unsafe { ptr::read_volatile(self.ptr.as_ptr().add(offset) as *const u32) })
	}

	pub fn write_dword(&mut self, offset: usize, data: u32) {
		assert!(offset & 3 == 0);
		assert!(offset + 3 < self.len);
		unsafe { ptr::write_volatile(self.ptr.as_ptr().add(offset) as *mut u32, data.to_le()) }
	}
}

impl RegisterBlock for Mapped {
	fn len(&self) -> usize {
		Mapped::len(self)
	}

	fn read_register(&self, offset: usize) -> u32 {
		Mapped::read_dword(self, offset)
	}

	fn write_register(&mut self, offset: usize, value: u32) {
		Mapped::write_dword(self, offset, value)
	}
}

pub fn inner_map(path: &str, offset: u64, len: usize) -> io::Result<Mapped> {
	let open_flags = O_RDWR | O_CLOEXEC | O_SYNC;
	let mmap_prot_flags = PROT_READ | PROT_WRITE;

	let path = CString::new(path)?;

	let fd = unsafe { open(path.as_ptr(), open_flags) };
	if -1 == fd {
		return Err(io::Error::last_os_error());
	}
	// now get fd managed to prevent resource leak; a MAP_SHARED
	// mapping stays valid after the descriptor is closed
	let _file = unsafe { fs::File::from_raw_fd(fd) };

	let area = unsafe {
		mmap(
			ptr::null_mut(),
			len,
			mmap_prot_flags,
			MAP_SHARED,
			fd,
			offset as libc::off_t,
		)
	};

	if area as usize == !0usize {
		return Err(io::Error::last_os_error());
	}
	match ptr::NonNull::new(area as *mut u8) {
		None => panic!("mmap shouldn't return NULL ever"),
		Some(area) => Ok(Mapped {
			ptr: area,
			len,
		}),
	}
}
