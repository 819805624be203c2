//! Bus interface abstraction for the LIS3DH driver.

pub mod callback;
pub mod i2c;
pub mod spi;

#[cfg(test)]
pub(crate) mod mock;

/// Abstraction over the low-level bus access required by the driver.
///
/// Multi-byte transfers address consecutive registers; implementations are
/// responsible for requesting address auto-increment from the device.
pub trait Lis3dhInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes multiple consecutive registers from the provided buffer.
    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write_many(register, core::slice::from_ref(&value))
    }
}
