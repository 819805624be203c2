//! Interface built from a caller-supplied pair of transfer closures.
//!
//! Useful when the bus is driven by foreign code that reports success with a
//! zero status, e.g. a vendor HAL. The closures capture whatever handle and
//! device address they need.

use super::Lis3dhInterface;

/// Non-zero status returned by one of the transfer closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CallbackError(pub i32);

/// Interface forwarding every transfer to a `write`/`read` closure pair.
pub struct CallbackInterface<W, R> {
    write: W,
    read: R,
}

impl<W, R> CallbackInterface<W, R>
where
    W: FnMut(u8, &[u8]) -> i32,
    R: FnMut(u8, &mut [u8]) -> i32,
{
    /// Wraps the given closures. Both receive the start register address.
    pub const fn new(write: W, read: R) -> Self {
        Self { write, read }
    }

    /// Consumes the interface and returns the closures.
    pub fn release(self) -> (W, R) {
        (self.write, self.read)
    }
}

fn check(status: i32) -> core::result::Result<(), CallbackError> {
    match status {
        0 => Ok(()),
        code => Err(CallbackError(code)),
    }
}

impl<W, R> Lis3dhInterface for CallbackInterface<W, R>
where
    W: FnMut(u8, &[u8]) -> i32,
    R: FnMut(u8, &mut [u8]) -> i32,
{
    type Error = CallbackError;

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        check((self.read)(register, buf))
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        check((self.write)(register, data))
    }
}
