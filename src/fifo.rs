//! FIFO configuration, status and draining.
//!
//! The FIFO holds up to 32 acceleration triplets. Samples are popped by
//! reading the output registers, so draining is one 6-byte burst per sample.
//! After an overrun in [`FifoMode::Fifo`] the buffer only restarts once the
//! mode passes through [`FifoMode::Bypass`].

use crate::device::Lis3dh;
use crate::error::Result;
use crate::interface::Lis3dhInterface;
use crate::params::{FifoMode, FifoTrigger};
use crate::registers::{CtrlReg5, FIVE_BIT_MASK, FifoCtrl, FifoSrc};

/// Snapshot of the FIFO control configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoSettings {
    /// `CTRL_REG5.FIFO_EN`.
    pub enabled: bool,
    /// Watermark level in samples (0-31).
    pub watermark: u8,
    /// Generator linked to the stream-to-FIFO trigger.
    pub trigger: FifoTrigger,
    /// FIFO operating mode.
    pub mode: FifoMode,
}

impl FifoSettings {
    /// Creates a new settings snapshot.
    pub const fn new(enabled: bool, watermark: u8, trigger: FifoTrigger, mode: FifoMode) -> Self {
        Self {
            enabled,
            watermark,
            trigger,
            mode,
        }
    }
}

impl Default for FifoSettings {
    fn default() -> Self {
        Self::new(false, 0, FifoTrigger::Int1, FifoMode::Bypass)
    }
}

fn five_bit(value: u8) -> u8 {
    if value > FIVE_BIT_MASK {
        warn!("FIFO watermark {=u8} exceeds 31, masking", value);
    }
    value & FIVE_BIT_MASK
}

impl<IFACE, CommE> Lis3dh<IFACE>
where
    IFACE: Lis3dhInterface<Error = CommE>,
{
    // ==================================================================
    // == FIFO Configuration ============================================
    // ==================================================================
    /// Applies a full FIFO configuration.
    pub fn configure_fifo(&mut self, settings: FifoSettings) -> Result<(), CommE> {
        let control = FifoCtrl::new()
            .with_fth(five_bit(settings.watermark))
            .with_tr(settings.trigger)
            .with_fm(settings.mode);
        self.write_reg(control)?;
        self.set_fifo_enabled(settings.enabled)
    }

    /// Reads back the FIFO configuration.
    pub fn fifo_settings(&mut self) -> Result<FifoSettings, CommE> {
        let enabled = self.fifo_enabled()?;
        let control = self.read_reg::<FifoCtrl>()?;
        Ok(FifoSettings::new(
            enabled,
            control.fth(),
            control.tr(),
            control.fm(),
        ))
    }

    /// Enables or disables the FIFO (`CTRL_REG5.FIFO_EN`).
    pub fn set_fifo_enabled(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg5, _>(|reg| reg.set_fifo_en(enable))?;
        Ok(())
    }

    /// Reads `CTRL_REG5.FIFO_EN`.
    pub fn fifo_enabled(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<CtrlReg5>()?.fifo_en())
    }

    /// Sets the watermark level. Values above 31 are masked to 5 bits.
    pub fn set_fifo_watermark(&mut self, level: u8) -> Result<(), CommE> {
        let level = five_bit(level);
        self.modify_reg::<FifoCtrl, _>(|reg| reg.set_fth(level))?;
        Ok(())
    }

    /// Reads `FIFO_CTRL_REG.FTH`.
    pub fn fifo_watermark(&mut self) -> Result<u8, CommE> {
        Ok(self.read_reg::<FifoCtrl>()?.fth())
    }

    /// Links the stream-to-FIFO trigger to one of the motion generators.
    pub fn set_fifo_trigger(&mut self, trigger: FifoTrigger) -> Result<(), CommE> {
        self.modify_reg::<FifoCtrl, _>(|reg| reg.set_tr(trigger))?;
        Ok(())
    }

    /// Reads `FIFO_CTRL_REG.TR`.
    pub fn fifo_trigger(&mut self) -> Result<FifoTrigger, CommE> {
        Ok(self.read_reg::<FifoCtrl>()?.tr())
    }

    /// Selects the FIFO mode.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), CommE> {
        debug!("FIFO mode -> {}", mode);
        self.modify_reg::<FifoCtrl, _>(|reg| reg.set_fm(mode))?;
        Ok(())
    }

    /// Reads `FIFO_CTRL_REG.FM`.
    pub fn fifo_mode(&mut self) -> Result<FifoMode, CommE> {
        Ok(self.read_reg::<FifoCtrl>()?.fm())
    }

    // ==================================================================
    // == FIFO Status & Data ============================================
    // ==================================================================
    /// Reads `FIFO_SRC_REG`.
    pub fn fifo_status(&mut self) -> Result<FifoSrc, CommE> {
        self.read_reg()
    }

    /// Number of unread samples.
    pub fn fifo_level(&mut self) -> Result<u8, CommE> {
        Ok(self.fifo_status()?.fss())
    }

    /// `FIFO_SRC_REG.EMPTY`: no unread samples.
    pub fn fifo_empty(&mut self) -> Result<bool, CommE> {
        Ok(self.fifo_status()?.empty())
    }

    /// `FIFO_SRC_REG.OVRN_FIFO`: the FIFO filled and a sample was lost.
    pub fn fifo_overrun(&mut self) -> Result<bool, CommE> {
        Ok(self.fifo_status()?.ovrn_fifo())
    }

    /// `FIFO_SRC_REG.WTM`: the level is at or above the watermark.
    pub fn fifo_watermark_reached(&mut self) -> Result<bool, CommE> {
        Ok(self.fifo_status()?.wtm())
    }

    /// Drains up to `samples.len()` raw triplets and returns how many were read.
    pub fn read_fifo(&mut self, samples: &mut [[i16; 3]]) -> Result<usize, CommE> {
        if samples.is_empty() {
            return Ok(0);
        }

        let available = usize::from(self.fifo_level()?);
        let count = available.min(samples.len());
        for sample in samples.iter_mut().take(count) {
            *sample = self.acceleration_raw()?;
        }

        trace!("drained {=usize} of {=usize} FIFO samples", count, available);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::interface::mock::{BusFault, RegisterFile};
    use crate::registers::{REG_CTRL_REG5, REG_FIFO_CTRL, REG_FIFO_SRC, REG_OUT_X_L};

    fn device() -> Lis3dh<RegisterFile> {
        Lis3dh::new(RegisterFile::new())
    }

    #[test]
    fn mode_transitions_keep_watermark_and_trigger() {
        let mut dev = device();
        dev.set_fifo_watermark(20).unwrap();
        dev.set_fifo_trigger(FifoTrigger::Int2).unwrap();

        for mode in [
            FifoMode::Fifo,
            FifoMode::Bypass,
            FifoMode::Stream,
            FifoMode::StreamToFifo,
            FifoMode::Bypass,
        ] {
            dev.set_fifo_mode(mode).unwrap();
            assert_eq!(dev.fifo_mode().unwrap(), mode);
            assert_eq!(dev.fifo_watermark().unwrap(), 20);
            assert_eq!(dev.fifo_trigger().unwrap(), FifoTrigger::Int2);
        }
    }

    #[test]
    fn trigger_roundtrips_both_generators() {
        let mut dev = device();
        for trigger in [FifoTrigger::Int2, FifoTrigger::Int1] {
            dev.set_fifo_trigger(trigger).unwrap();
            assert_eq!(dev.fifo_trigger().unwrap(), trigger);
        }
        assert_eq!(dev.release().reg(REG_FIFO_CTRL), 0x00);
    }

    #[test]
    fn failed_write_propagates() {
        let mut dev = device();
        dev.interface_mut().fail_writes = true;

        assert_eq!(dev.set_fifo_mode(FifoMode::Stream), Err(Error::Bus(BusFault)));
        assert_eq!(
            dev.configure_fifo(FifoSettings::new(true, 8, FifoTrigger::Int2, FifoMode::Fifo)),
            Err(Error::Bus(BusFault))
        );
        assert_eq!(dev.set_fifo_enabled(true), Err(Error::Bus(BusFault)));
        assert_eq!(dev.set_fifo_watermark(4), Err(Error::Bus(BusFault)));
        assert_eq!(dev.release().writes, 0);
    }

    #[test]
    fn watermark_is_masked_to_five_bits() {
        let mut dev = Lis3dh::new(RegisterFile::new().with(REG_FIFO_CTRL, 0b1000_0000));
        dev.set_fifo_watermark(0x3F).unwrap();

        assert_eq!(dev.fifo_watermark().unwrap(), 31);
        assert_eq!(dev.fifo_mode().unwrap(), FifoMode::Stream);
        assert_eq!(dev.release().reg(REG_FIFO_CTRL), 0b1001_1111);
    }

    #[test]
    fn enable_preserves_boot_bit() {
        let mut dev = Lis3dh::new(RegisterFile::new().with(REG_CTRL_REG5, 0x80));
        dev.set_fifo_enabled(true).unwrap();
        assert!(dev.fifo_enabled().unwrap());
        assert_eq!(dev.release().reg(REG_CTRL_REG5), 0xC0);
    }

    #[test]
    fn configure_fifo_writes_control_and_enable() {
        let mut dev = device();
        let settings = FifoSettings::new(true, 16, FifoTrigger::Int1, FifoMode::Stream);
        dev.configure_fifo(settings).unwrap();

        assert_eq!(dev.fifo_settings().unwrap(), settings);
        let regs = dev.release();
        assert_eq!(regs.reg(REG_FIFO_CTRL), 0b1001_0000);
        assert_eq!(regs.reg(REG_CTRL_REG5), 0x40);
    }

    #[test]
    fn status_flags_decode() {
        let mut dev = Lis3dh::new(RegisterFile::new().with(REG_FIFO_SRC, 0b1101_1111));
        assert_eq!(dev.fifo_level().unwrap(), 31);
        assert!(dev.fifo_watermark_reached().unwrap());
        assert!(dev.fifo_overrun().unwrap());
        assert!(!dev.fifo_empty().unwrap());
    }

    #[test]
    fn read_fifo_stops_at_buffer_length() {
        let mut regs = RegisterFile::new().with(REG_FIFO_SRC, 3);
        regs.regs[REG_OUT_X_L as usize..REG_OUT_X_L as usize + 6]
            .copy_from_slice(&[0x10, 0x00, 0x20, 0x00, 0x30, 0x00]);
        let mut dev = Lis3dh::new(regs);

        let mut samples = [[0i16; 3]; 2];
        assert_eq!(dev.read_fifo(&mut samples).unwrap(), 2);
        assert_eq!(samples, [[0x10, 0x20, 0x30]; 2]);
        // One status read plus one burst per sample.
        assert_eq!(dev.interface_mut().reads, 3);
    }

    #[test]
    fn read_fifo_stops_at_level() {
        let mut dev = Lis3dh::new(RegisterFile::new().with(REG_FIFO_SRC, 0b0010_0000));
        let mut samples = [[7i16; 3]; 4];

        assert_eq!(dev.read_fifo(&mut samples).unwrap(), 0);
        assert_eq!(samples, [[7; 3]; 4]);
        assert_eq!(dev.read_fifo(&mut []).unwrap(), 0);
    }

    #[test]
    fn read_fifo_propagates_bus_error() {
        let mut dev = Lis3dh::new(RegisterFile::new().with(REG_FIFO_SRC, 2));
        dev.interface_mut().fail_reads = true;
        let mut samples = [[0i16; 3]; 2];
        assert_eq!(dev.read_fifo(&mut samples), Err(Error::Bus(BusFault)));
    }
}
