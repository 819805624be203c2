//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Lis3dhInterface;

// Command byte bit 7: read when set.
const READ_FLAG: u8 = 0x80;
// Command byte bit 6: auto-increment the address between bytes.
const MULTI_FLAG: u8 = 0x40;

/// SPI-based interface implementation for the LIS3DH driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool, len: usize) -> u8 {
        let mut command = register & 0x3F;
        if is_read {
            command |= READ_FLAG;
        }
        if len > 1 {
            command |= MULTI_FLAG;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis3dhInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true, buf.len())];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, false, data.len())];
        let mut operations = [Operation::Write(&command), Operation::Write(data)];
        self.spi.transaction(&mut operations)
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::interface::Lis3dhInterface;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

    struct MockDevice<'a> {
        expectations: &'a [TransactionExpectation<'a>],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransactionExpectation<'a>]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = Infallible;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            assert_eq!(operations.len(), 2, "expected command + payload operations");
            let (first, rest) = operations.split_first_mut().expect("missing first op");
            let command = match first {
                Operation::Write(data) => {
                    assert_eq!(data.len(), 1, "command length mismatch");
                    data[0]
                }
                _ => panic!("first operation must be write"),
            };

            let second = rest.first_mut().expect("missing second op");
            match (*expected, second) {
                (TransactionExpectation::Read { command: want, response }, Operation::Read(buf)) => {
                    assert_eq!(command, want, "command byte mismatch");
                    assert_eq!(buf.len(), response.len(), "response length mismatch");
                    buf.copy_from_slice(response);
                }
                (TransactionExpectation::Write { command: want, payload }, Operation::Write(data)) => {
                    assert_eq!(command, want, "command byte mismatch");
                    assert_eq!(*data, payload, "payload mismatch");
                }
                _ => panic!("operation kind does not match expectation"),
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum TransactionExpectation<'a> {
        Read { command: u8, response: &'a [u8] },
        Write { command: u8, payload: &'a [u8] },
    }

    #[test]
    fn single_byte_read_sets_only_read_flag() {
        let expectations = [TransactionExpectation::Read {
            command: 0x8F,
            response: &[0x33],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_register(0x0F).unwrap(), 0x33);
    }

    #[test]
    fn burst_read_requests_auto_increment() {
        let expectations = [TransactionExpectation::Read {
            command: 0xE8,
            response: &[1, 2, 3, 4, 5, 6],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let mut buffer = [0u8; 6];
        interface.read_many(0x28, &mut buffer).unwrap();
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn single_byte_write_uses_plain_address() {
        let expectations = [TransactionExpectation::Write {
            command: 0x20,
            payload: &[0x57],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(0x20, 0x57).unwrap();
    }

    #[test]
    fn burst_write_requests_auto_increment() {
        let expectations = [TransactionExpectation::Write {
            command: 0x7C,
            payload: &[0x10, 0x20],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_many(0x3C, &[0x10, 0x20]).unwrap();
    }

    #[test]
    fn empty_transfers_skip_the_bus() {
        let expectations: [TransactionExpectation; 0] = [];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.read_many(0x28, &mut []).unwrap();
        interface.write_many(0x28, &[]).unwrap();
    }
}
