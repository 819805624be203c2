//! Register-file test double with failure injection.

use super::Lis3dhInterface;

/// Error raised by [`RegisterFile`] when a failure is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusFault;

/// Keeps one byte per register address and serves bursts from consecutive slots.
pub(crate) struct RegisterFile {
    pub regs: [u8; 0x40],
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub reads: usize,
    pub writes: usize,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; 0x40],
            fail_reads: false,
            fail_writes: false,
            reads: 0,
            writes: 0,
        }
    }

    pub fn with(mut self, register: u8, value: u8) -> Self {
        self.regs[register as usize] = value;
        self
    }

    pub fn reg(&self, register: u8) -> u8 {
        self.regs[register as usize]
    }
}

impl Lis3dhInterface for RegisterFile {
    type Error = BusFault;

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if self.fail_reads {
            return Err(BusFault);
        }
        self.reads += 1;
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.regs[(register as usize + offset) % 0x40];
        }
        Ok(())
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(BusFault);
        }
        self.writes += 1;
        for (offset, byte) in data.iter().enumerate() {
            self.regs[(register as usize + offset) % 0x40] = *byte;
        }
        Ok(())
    }
}
