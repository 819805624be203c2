//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, Operation};

use super::Lis3dhInterface;
use crate::params::I2cAddress;

// Sub-address bit 7: auto-increment the register address between bytes.
const AUTO_INCREMENT: u8 = 0x80;

/// I²C-based interface implementation for the LIS3DH driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: I2cAddress) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the 7-bit bus address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    fn sub_address(register: u8, len: usize) -> u8 {
        if len > 1 {
            register | AUTO_INCREMENT
        } else {
            register
        }
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis3dhInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let sub = Self::sub_address(register, buf.len());
        self.i2c.write_read(self.address, &[sub], buf)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        // Adjacent writes share one START/STOP frame.
        let sub = [Self::sub_address(register, data.len())];
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&sub), Operation::Write(data)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::I2cInterface;
    use crate::interface::Lis3dhInterface;
    use crate::params::I2cAddress;
    use embedded_hal::i2c::{ErrorKind, I2c, Operation};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn single_register_read_keeps_plain_sub_address() {
        let expectations = [I2cTransaction::write_read(0x18, vec![0x0F], vec![0x33])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), I2cAddress::Sa0Low);

        assert_eq!(interface.read_register(0x0F).unwrap(), 0x33);
        interface.release().done();
    }

    #[test]
    fn burst_read_sets_auto_increment_bit() {
        let expectations = [I2cTransaction::write_read(
            0x19,
            vec![0xA8],
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), I2cAddress::Sa0High);

        let mut buf = [0u8; 6];
        interface.read_many(0x28, &mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        interface.release().done();
    }

    #[test]
    fn register_write_prefixes_sub_address() {
        let expectations = [
            I2cTransaction::transaction_start(0x19),
            I2cTransaction::write(0x19, vec![0x20]),
            I2cTransaction::write(0x19, vec![0x57]),
            I2cTransaction::transaction_end(0x19),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), I2cAddress::Sa0High);

        interface.write_register(0x20, 0x57).unwrap();
        interface.release().done();
    }

    #[test]
    fn long_burst_write_is_one_transaction() {
        let data: [u8; 18] = core::array::from_fn(|i| i as u8);
        let expectations = [
            I2cTransaction::transaction_start(0x18),
            I2cTransaction::write(0x18, vec![0x80 | 0x20]),
            I2cTransaction::write(0x18, data.to_vec()),
            I2cTransaction::transaction_end(0x18),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), I2cAddress::Sa0Low);

        interface.write_many(0x20, &data).unwrap();
        interface.release().done();
    }

    struct FailingBus {
        transactions: usize,
    }

    impl embedded_hal::i2c::ErrorType for FailingBus {
        type Error = ErrorKind;
    }

    impl I2c for FailingBus {
        fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.transactions += 1;
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn failed_burst_write_is_a_single_attempt() {
        let mut interface = I2cInterface::new(FailingBus { transactions: 0 }, I2cAddress::Sa0Low);

        assert_eq!(interface.write_many(0x20, &[0u8; 18]), Err(ErrorKind::Other));
        assert_eq!(interface.release().transactions, 1);
    }

    #[test]
    fn empty_transfers_skip_the_bus() {
        let expectations: [I2cTransaction; 0] = [];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), I2cAddress::Sa0Low);

        interface.read_many(0x28, &mut []).unwrap();
        interface.write_many(0x28, &[]).unwrap();
        interface.release().done();
    }

    #[test]
    fn read_address_matches_datasheet_strap_values() {
        assert_eq!(I2cAddress::Sa0Low.read_address(), 0x31);
        assert_eq!(I2cAddress::Sa0High.read_address(), 0x33);
    }
}
