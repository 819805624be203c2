//! Motion interrupt generators, tap detection and sleep-to-wake.
//!
//! Both motion generators share one register layout at different base
//! addresses; the [`InterruptGenerator`] argument picks the bank. Pin routing
//! registers are exchanged as whole records.

use crate::device::Lis3dh;
use crate::error::Result;
use crate::interface::Lis3dhInterface;
use crate::params::{InterruptGenerator, IntPolarity, NotificationMode};
use crate::registers::{
    ActThs, ClickCfg, ClickSrc, ClickThs, CtrlReg3, CtrlReg5, CtrlReg6, IntGenConfig,
    IntGenDuration, IntGenSource, IntGenThreshold, REG_ACT_DUR, REG_INT1_CFG, REG_INT2_CFG,
    REG_TIME_LATENCY, REG_TIME_WINDOW, Register, SEVEN_BIT_MASK, TimeLimit,
};

// Offsets from the generator base address.
const CFG_OFFSET: u8 = 0;
const SRC_OFFSET: u8 = 1;
const THS_OFFSET: u8 = 2;
const DURATION_OFFSET: u8 = 3;

impl InterruptGenerator {
    const fn base(self) -> u8 {
        match self {
            InterruptGenerator::Int1 => REG_INT1_CFG,
            InterruptGenerator::Int2 => REG_INT2_CFG,
        }
    }
}

/// Clamps a caller value to a 7-bit field by dropping the top bit.
fn seven_bit(value: u8, register: u8) -> u8 {
    if value > SEVEN_BIT_MASK {
        warn!(
            "value {=u8:#x} exceeds 7 bits for register {=u8:#x}, masking",
            value,
            register
        );
    }
    value & SEVEN_BIT_MASK
}

impl<IFACE, CommE> Lis3dh<IFACE>
where
    IFACE: Lis3dhInterface<Error = CommE>,
{
    // ==================================================================
    // == Motion Interrupt Generators ===================================
    // ==================================================================
    /// Writes the whole `INTx_CFG` record.
    pub fn set_int_config(
        &mut self,
        generator: InterruptGenerator,
        config: IntGenConfig,
    ) -> Result<(), CommE> {
        self.write_register(generator.base() + CFG_OFFSET, config.into())
    }

    /// Reads the whole `INTx_CFG` record.
    pub fn int_config(&mut self, generator: InterruptGenerator) -> Result<IntGenConfig, CommE> {
        self.read_at(generator.base() + CFG_OFFSET)
    }

    /// Reads `INTx_SRC`. With latched notification this clears the request.
    pub fn int_source(&mut self, generator: InterruptGenerator) -> Result<IntGenSource, CommE> {
        self.read_at(generator.base() + SRC_OFFSET)
    }

    /// Sets the generator threshold. Values above 127 are masked to 7 bits.
    pub fn set_int_threshold(
        &mut self,
        generator: InterruptGenerator,
        threshold: u8,
    ) -> Result<(), CommE> {
        let register = generator.base() + THS_OFFSET;
        let threshold = seven_bit(threshold, register);
        self.modify_at::<IntGenThreshold, _>(register, |reg| reg.set_ths(threshold))?;
        Ok(())
    }

    /// Reads the generator threshold.
    pub fn int_threshold(&mut self, generator: InterruptGenerator) -> Result<u8, CommE> {
        let reg: IntGenThreshold = self.read_at(generator.base() + THS_OFFSET)?;
        Ok(reg.ths())
    }

    /// Sets the minimum event duration. Values above 127 are masked to 7 bits.
    pub fn set_int_duration(
        &mut self,
        generator: InterruptGenerator,
        duration: u8,
    ) -> Result<(), CommE> {
        let register = generator.base() + DURATION_OFFSET;
        let duration = seven_bit(duration, register);
        self.modify_at::<IntGenDuration, _>(register, |reg| reg.set_d(duration))?;
        Ok(())
    }

    /// Reads the minimum event duration.
    pub fn int_duration(&mut self, generator: InterruptGenerator) -> Result<u8, CommE> {
        let reg: IntGenDuration = self.read_at(generator.base() + DURATION_OFFSET)?;
        Ok(reg.d())
    }

    /// Enables 4D detection on the generator (requires 6D in `INTx_CFG`).
    pub fn set_int_4d(&mut self, generator: InterruptGenerator, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg5, _>(|reg| match generator {
            InterruptGenerator::Int1 => reg.set_d4d_int1(enable),
            InterruptGenerator::Int2 => reg.set_d4d_int2(enable),
        })?;
        Ok(())
    }

    /// Reads `CTRL_REG5.D4D_INTx` for the generator.
    pub fn int_4d(&mut self, generator: InterruptGenerator) -> Result<bool, CommE> {
        let reg = self.read_reg::<CtrlReg5>()?;
        Ok(match generator {
            InterruptGenerator::Int1 => reg.d4d_int1(),
            InterruptGenerator::Int2 => reg.d4d_int2(),
        })
    }

    /// Selects pulsed or latched requests for the generator.
    pub fn set_int_notification(
        &mut self,
        generator: InterruptGenerator,
        mode: NotificationMode,
    ) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg5, _>(|reg| match generator {
            InterruptGenerator::Int1 => reg.set_lir_int1(mode),
            InterruptGenerator::Int2 => reg.set_lir_int2(mode),
        })?;
        Ok(())
    }

    /// Reads `CTRL_REG5.LIR_INTx` for the generator.
    pub fn int_notification(
        &mut self,
        generator: InterruptGenerator,
    ) -> Result<NotificationMode, CommE> {
        let reg = self.read_reg::<CtrlReg5>()?;
        Ok(match generator {
            InterruptGenerator::Int1 => reg.lir_int1(),
            InterruptGenerator::Int2 => reg.lir_int2(),
        })
    }

    // ==================================================================
    // == Pin Routing ===================================================
    // ==================================================================
    /// Writes the INT1 pin routing (`CTRL_REG3`).
    pub fn set_int1_pin_config(&mut self, config: CtrlReg3) -> Result<(), CommE> {
        self.write_reg(config)
    }

    /// Reads the INT1 pin routing (`CTRL_REG3`).
    pub fn int1_pin_config(&mut self) -> Result<CtrlReg3, CommE> {
        self.read_reg()
    }

    /// Writes the INT2 pin routing (`CTRL_REG6`), including pin polarity.
    pub fn set_int2_pin_config(&mut self, config: CtrlReg6) -> Result<(), CommE> {
        self.write_reg(config)
    }

    /// Reads the INT2 pin routing (`CTRL_REG6`).
    pub fn int2_pin_config(&mut self) -> Result<CtrlReg6, CommE> {
        self.read_reg()
    }

    /// Selects the polarity of both interrupt pins.
    pub fn set_interrupt_polarity(&mut self, polarity: IntPolarity) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg6, _>(|reg| reg.set_int_polarity(polarity))?;
        Ok(())
    }

    /// Reads `CTRL_REG6.INT_POLARITY`.
    pub fn interrupt_polarity(&mut self) -> Result<IntPolarity, CommE> {
        Ok(self.read_reg::<CtrlReg6>()?.int_polarity())
    }

    // ==================================================================
    // == Tap Detection =================================================
    // ==================================================================
    /// Writes the whole `CLICK_CFG` record.
    pub fn set_tap_config(&mut self, config: ClickCfg) -> Result<(), CommE> {
        self.write_reg(config)
    }

    /// Reads the whole `CLICK_CFG` record.
    pub fn tap_config(&mut self) -> Result<ClickCfg, CommE> {
        self.read_reg()
    }

    /// Reads `CLICK_SRC`.
    pub fn tap_source(&mut self) -> Result<ClickSrc, CommE> {
        self.read_reg()
    }

    /// Sets the tap threshold. Values above 127 are masked to 7 bits.
    pub fn set_tap_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        let threshold = seven_bit(threshold, ClickThs::ADDRESS);
        self.modify_reg::<ClickThs, _>(|reg| reg.set_ths(threshold))?;
        Ok(())
    }

    /// Reads `CLICK_THS.THS`.
    pub fn tap_threshold(&mut self) -> Result<u8, CommE> {
        Ok(self.read_reg::<ClickThs>()?.ths())
    }

    /// Selects pulsed or latched tap requests.
    pub fn set_tap_notification(&mut self, mode: NotificationMode) -> Result<(), CommE> {
        self.modify_reg::<ClickThs, _>(|reg| reg.set_lir_click(mode))?;
        Ok(())
    }

    /// Reads `CLICK_THS.LIR_Click`.
    pub fn tap_notification(&mut self) -> Result<NotificationMode, CommE> {
        Ok(self.read_reg::<ClickThs>()?.lir_click())
    }

    /// Sets the maximum shock duration. Values above 127 are masked to 7 bits.
    pub fn set_tap_shock(&mut self, duration: u8) -> Result<(), CommE> {
        let duration = seven_bit(duration, TimeLimit::ADDRESS);
        self.modify_reg::<TimeLimit, _>(|reg| reg.set_tli(duration))?;
        Ok(())
    }

    /// Reads `TIME_LIMIT.TLI`.
    pub fn tap_shock(&mut self) -> Result<u8, CommE> {
        Ok(self.read_reg::<TimeLimit>()?.tli())
    }

    /// Sets the quiet time after the first tap (`TIME_LATENCY`).
    pub fn set_tap_quiet(&mut self, duration: u8) -> Result<(), CommE> {
        self.write_register(REG_TIME_LATENCY, duration)
    }

    /// Reads `TIME_LATENCY`.
    pub fn tap_quiet(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_TIME_LATENCY)
    }

    /// Sets the window in which a second tap counts as a double tap.
    pub fn set_double_tap_window(&mut self, window: u8) -> Result<(), CommE> {
        self.write_register(REG_TIME_WINDOW, window)
    }

    /// Reads `TIME_WINDOW`.
    pub fn double_tap_window(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_TIME_WINDOW)
    }

    // ==================================================================
    // == Sleep-to-Wake =================================================
    // ==================================================================
    /// Sets the sleep-to-wake threshold. Values above 127 are masked to 7 bits.
    pub fn set_activity_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        let threshold = seven_bit(threshold, ActThs::ADDRESS);
        self.modify_reg::<ActThs, _>(|reg| reg.set_acth(threshold))?;
        Ok(())
    }

    /// Reads `ACT_THS.ACTH`.
    pub fn activity_threshold(&mut self) -> Result<u8, CommE> {
        Ok(self.read_reg::<ActThs>()?.acth())
    }

    /// Sets the sleep-to-wake duration (`ACT_DUR`).
    pub fn set_activity_duration(&mut self, duration: u8) -> Result<(), CommE> {
        self.write_register(REG_ACT_DUR, duration)
    }

    /// Reads `ACT_DUR`.
    pub fn activity_duration(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_ACT_DUR)
    }
}
