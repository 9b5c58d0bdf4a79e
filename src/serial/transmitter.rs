use crate::AResult;

/// Push-only byte transmitter with an explicit hardware lifecycle.
///
/// `initialize` claims the lines, `send` may be called any number of
/// times afterwards, `release` puts the lines back and gives them up.
/// Releasing twice is a no-op; sending outside the initialized window
/// is an error and must not touch the hardware.
pub trait SerialTransmitter {
	fn initialize(&mut self) -> AResult<()>;
	fn send(&mut self, data: &[u8]) -> AResult<()>;
	fn release(&mut self);
}

impl<'a, T: ?Sized + SerialTransmitter> SerialTransmitter for &'a mut T {
	fn initialize(&mut self) -> AResult<()> {
		T::initialize(*self)
	}
	fn send(&mut self, data: &[u8]) -> AResult<()> {
		T::send(*self, data)
	}
	fn release(&mut self) {
		T::release(*self)
	}
}
