//! Register map definitions for the LIS3DH accelerometer.
//!
//! Every layout is a one-byte `modular-bitfield` struct. The first declared field
//! occupies bit 0, so the encoding is independent of host bit or byte order.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    DataFormat, FifoMode, FifoTrigger, FullScale, HighPassCutoff, HighPassMode, HighPassRoute,
    IntPolarity, NotificationMode, OutputDataRate, SdoPullUp, SelfTest, SpiMode,
};

/// Register address of `STATUS_REG_AUX`.
pub const REG_STATUS_AUX: u8 = 0x07;
/// Register address of `OUT_ADC1_L`.
pub const REG_OUT_ADC1_L: u8 = 0x08;
/// Register address of `OUT_ADC1_H`.
pub const REG_OUT_ADC1_H: u8 = 0x09;
/// Register address of `OUT_ADC2_L`.
pub const REG_OUT_ADC2_L: u8 = 0x0A;
/// Register address of `OUT_ADC2_H`.
pub const REG_OUT_ADC2_H: u8 = 0x0B;
/// Register address of `OUT_ADC3_L`.
pub const REG_OUT_ADC3_L: u8 = 0x0C;
/// Register address of `OUT_ADC3_H`.
pub const REG_OUT_ADC3_H: u8 = 0x0D;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL_REG0`.
pub const REG_CTRL_REG0: u8 = 0x1E;
/// Register address of `TEMP_CFG_REG`.
pub const REG_TEMP_CFG: u8 = 0x1F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: u8 = 0x24;
/// Register address of `CTRL_REG6`.
pub const REG_CTRL_REG6: u8 = 0x25;
/// Register address of `REFERENCE`.
pub const REG_REFERENCE: u8 = 0x26;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;
/// Register address of `FIFO_CTRL_REG`.
pub const REG_FIFO_CTRL: u8 = 0x2E;
/// Register address of `FIFO_SRC_REG`.
pub const REG_FIFO_SRC: u8 = 0x2F;
/// Register address of `INT1_CFG`.
pub const REG_INT1_CFG: u8 = 0x30;
/// Register address of `INT1_SRC`.
pub const REG_INT1_SRC: u8 = 0x31;
/// Register address of `INT1_THS`.
pub const REG_INT1_THS: u8 = 0x32;
/// Register address of `INT1_DURATION`.
pub const REG_INT1_DURATION: u8 = 0x33;
/// Register address of `INT2_CFG`.
pub const REG_INT2_CFG: u8 = 0x34;
/// Register address of `INT2_SRC`.
pub const REG_INT2_SRC: u8 = 0x35;
/// Register address of `INT2_THS`.
pub const REG_INT2_THS: u8 = 0x36;
/// Register address of `INT2_DURATION`.
pub const REG_INT2_DURATION: u8 = 0x37;
/// Register address of `CLICK_CFG`.
pub const REG_CLICK_CFG: u8 = 0x38;
/// Register address of `CLICK_SRC`.
pub const REG_CLICK_SRC: u8 = 0x39;
/// Register address of `CLICK_THS`.
pub const REG_CLICK_THS: u8 = 0x3A;
/// Register address of `TIME_LIMIT`.
pub const REG_TIME_LIMIT: u8 = 0x3B;
/// Register address of `TIME_LATENCY`.
pub const REG_TIME_LATENCY: u8 = 0x3C;
/// Register address of `TIME_WINDOW`.
pub const REG_TIME_WINDOW: u8 = 0x3D;
/// Register address of `ACT_THS`.
pub const REG_ACT_THS: u8 = 0x3E;
/// Register address of `ACT_DUR`.
pub const REG_ACT_DUR: u8 = 0x3F;

/// Content of `WHO_AM_I` on a genuine LIS3DH.
pub const WHO_AM_I_VALUE: u8 = 0x33;
/// Mandatory pattern of `CTRL_REG0[6:0]`.
pub const CTRL_REG0_RESERVED: u8 = 0b001_0000;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every single-address register value type.
pub trait Register: Copy + From<u8> + Into<u8> {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reset value defined by the datasheet, `None` for output registers.
    const RESET_VALUE: Option<u8>;
}

macro_rules! impl_byte_conversions {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<u8> for $ty {
                fn from(value: u8) -> Self {
                    Self::from_bytes([value])
                }
            }

            impl From<$ty> for u8 {
                fn from(value: $ty) -> Self {
                    value.into_bytes()[0]
                }
            }
        )+
    };
}

macro_rules! impl_register {
    ($ty:ident, $addr:expr, $access:ident, $reset:expr) => {
        impl Register for $ty {
            const ADDRESS: u8 = $addr;
            const ACCESS: RegisterAccess = RegisterAccess::$access;
            const RESET_VALUE: Option<u8> = $reset;
        }
    };
}

/// Bitfield representation of `STATUS_REG_AUX` (address `0x07`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAux {
    // ADC channel 1 new data (bit 0).
    pub adc1_ready: bool,
    // ADC channel 2 new data (bit 1).
    pub adc2_ready: bool,
    // ADC channel 3 / temperature new data (bit 2).
    pub adc3_ready: bool,
    // All channels new data (bit 3).
    pub all_ready: bool,
    // ADC channel 1 overrun (bit 4).
    pub adc1_overrun: bool,
    // ADC channel 2 overrun (bit 5).
    pub adc2_overrun: bool,
    // ADC channel 3 / temperature overrun (bit 6).
    pub adc3_overrun: bool,
    // All channels overrun (bit 7).
    pub all_overrun: bool,
}

/// Bitfield representation of `CTRL_REG0` (address `0x1E`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg0 {
    // Must always read back as `CTRL_REG0_RESERVED` (bits 6:0).
    pub reserved: B7,
    // SDO/SA0 pull-up disconnect (bit 7).
    pub sdo_pu_disc: SdoPullUp,
}

/// Bitfield representation of `TEMP_CFG_REG` (address `0x1F`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempCfg {
    #[skip]
    __: B6,
    // Temperature sensor on ADC channel 3 (bit 6).
    pub temp_en: bool,
    // Auxiliary ADC enable (bit 7).
    pub adc_en: bool,
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X axis enable (bit 0).
    pub xen: bool,
    // Y axis enable (bit 1).
    pub yen: bool,
    // Z axis enable (bit 2).
    pub zen: bool,
    // Low-power mode enable (bit 3).
    pub lpen: bool,
    // Output data rate (bits 7:4).
    pub odr: OutputDataRate,
}

/// Bitfield representation of `CTRL_REG2` (address `0x21`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg2 {
    // HP_IA1, HP_IA2 and HPCLICK routing (bits 2:0).
    pub hp: HighPassRoute,
    // Filtered data selection (bit 3).
    pub fds: bool,
    // High-pass cut-off (bits 5:4).
    pub hpcf: HighPassCutoff,
    // High-pass mode (bits 7:6).
    pub hpm: HighPassMode,
}

/// Bitfield representation of `CTRL_REG3` (address `0x22`), the INT1 pin routing.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg3 {
    #[skip]
    __: B1,
    // FIFO overrun on INT1 (bit 1).
    pub i1_overrun: bool,
    // FIFO watermark on INT1 (bit 2).
    pub i1_wtm: bool,
    // Auxiliary ADC data ready on INT1 (bit 3).
    pub i1_321da: bool,
    // Acceleration data ready on INT1 (bit 4).
    pub i1_zyxda: bool,
    // Interrupt generator 2 on INT1 (bit 5).
    pub i1_ia2: bool,
    // Interrupt generator 1 on INT1 (bit 6).
    pub i1_ia1: bool,
    // Tap generator on INT1 (bit 7).
    pub i1_click: bool,
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // SPI serial interface mode (bit 0).
    pub sim: SpiMode,
    // Self-test selection (bits 2:1).
    pub st: SelfTest,
    // High-resolution output (bit 3).
    pub hr: bool,
    // Full-scale selection (bits 5:4).
    pub fs: FullScale,
    // Big/little endian selection (bit 6).
    pub ble: DataFormat,
    // Block data update (bit 7).
    pub bdu: bool,
}

/// Bitfield representation of `CTRL_REG5` (address `0x24`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5 {
    // 4D detection on INT2 (bit 0).
    pub d4d_int2: bool,
    // Latch INT2 requests (bit 1).
    pub lir_int2: NotificationMode,
    // 4D detection on INT1 (bit 2).
    pub d4d_int1: bool,
    // Latch INT1 requests (bit 3).
    pub lir_int1: NotificationMode,
    #[skip]
    __: B2,
    // FIFO enable (bit 6).
    pub fifo_en: bool,
    // Reboot memory content (bit 7).
    pub boot: bool,
}

/// Bitfield representation of `CTRL_REG6` (address `0x25`), the INT2 pin routing.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg6 {
    #[skip]
    __: B1,
    // Interrupt pin polarity (bit 1).
    pub int_polarity: IntPolarity,
    #[skip]
    __: B1,
    // Activity interrupt on INT2 (bit 3).
    pub i2_act: bool,
    // Boot status on INT2 (bit 4).
    pub i2_boot: bool,
    // Interrupt generator 2 on INT2 (bit 5).
    pub i2_ia2: bool,
    // Interrupt generator 1 on INT2 (bit 6).
    pub i2_ia1: bool,
    // Tap generator on INT2 (bit 7).
    pub i2_click: bool,
}

/// Bitfield representation of `STATUS_REG` (address `0x27`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // X axis new data (bit 0).
    pub xda: bool,
    // Y axis new data (bit 1).
    pub yda: bool,
    // Z axis new data (bit 2).
    pub zda: bool,
    // X, Y and Z new data (bit 3).
    pub zyxda: bool,
    // X axis overrun (bit 4).
    pub xor: bool,
    // Y axis overrun (bit 5).
    pub yor: bool,
    // Z axis overrun (bit 6).
    pub zor: bool,
    // X, Y and Z overrun (bit 7).
    pub zyxor: bool,
}

/// Bitfield representation of `FIFO_CTRL_REG` (address `0x2E`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoCtrl {
    // Watermark level (bits 4:0).
    pub fth: B5,
    // Trigger selection (bit 5).
    pub tr: FifoTrigger,
    // FIFO mode (bits 7:6).
    pub fm: FifoMode,
}

/// Bitfield representation of `FIFO_SRC_REG` (address `0x2F`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoSrc {
    // Unread samples stored (bits 4:0).
    pub fss: B5,
    // FIFO empty (bit 5).
    pub empty: bool,
    // FIFO overrun (bit 6).
    pub ovrn_fifo: bool,
    // Watermark reached (bit 7).
    pub wtm: bool,
}

/// Bitfield representation of `INT1_CFG` / `INT2_CFG` (addresses `0x30` / `0x34`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntGenConfig {
    // X low event enable (bit 0).
    pub xlie: bool,
    // X high event enable (bit 1).
    pub xhie: bool,
    // Y low event enable (bit 2).
    pub ylie: bool,
    // Y high event enable (bit 3).
    pub yhie: bool,
    // Z low event enable (bit 4).
    pub zlie: bool,
    // Z high event enable (bit 5).
    pub zhie: bool,
    // 6-direction detection (bit 6).
    pub six_d: bool,
    // AND/OR combination of events (bit 7).
    pub aoi: bool,
}

/// Bitfield representation of `INT1_SRC` / `INT2_SRC` (addresses `0x31` / `0x35`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntGenSource {
    // X low (bit 0).
    pub xl: bool,
    // X high (bit 1).
    pub xh: bool,
    // Y low (bit 2).
    pub yl: bool,
    // Y high (bit 3).
    pub yh: bool,
    // Z low (bit 4).
    pub zl: bool,
    // Z high (bit 5).
    pub zh: bool,
    // Interrupt active (bit 6).
    pub ia: bool,
    #[skip]
    __: B1,
}

/// Bitfield representation of `INT1_THS` / `INT2_THS` (addresses `0x32` / `0x36`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntGenThreshold {
    // Threshold (bits 6:0).
    pub ths: B7,
    #[skip]
    __: B1,
}

/// Bitfield representation of `INT1_DURATION` / `INT2_DURATION` (addresses `0x33` / `0x37`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntGenDuration {
    // Minimum event duration (bits 6:0).
    pub d: B7,
    #[skip]
    __: B1,
}

/// Bitfield representation of `CLICK_CFG` (address `0x38`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickCfg {
    // Single tap on X (bit 0).
    pub xs: bool,
    // Double tap on X (bit 1).
    pub xd: bool,
    // Single tap on Y (bit 2).
    pub ys: bool,
    // Double tap on Y (bit 3).
    pub yd: bool,
    // Single tap on Z (bit 4).
    pub zs: bool,
    // Double tap on Z (bit 5).
    pub zd: bool,
    #[skip]
    __: B2,
}

/// Bitfield representation of `CLICK_SRC` (address `0x39`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickSrc {
    // Tap on X (bit 0).
    pub x: bool,
    // Tap on Y (bit 1).
    pub y: bool,
    // Tap on Z (bit 2).
    pub z: bool,
    // Tap sign, set when negative (bit 3).
    pub sign: bool,
    // Single tap detected (bit 4).
    pub sclick: bool,
    // Double tap detected (bit 5).
    pub dclick: bool,
    // Interrupt active (bit 6).
    pub ia: bool,
    #[skip]
    __: B1,
}

/// Bitfield representation of `CLICK_THS` (address `0x3A`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickThs {
    // Tap threshold (bits 6:0).
    pub ths: B7,
    // Latch tap requests (bit 7).
    pub lir_click: NotificationMode,
}

/// Bitfield representation of `TIME_LIMIT` (address `0x3B`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLimit {
    // Shock window (bits 6:0).
    pub tli: B7,
    #[skip]
    __: B1,
}

/// Bitfield representation of `ACT_THS` (address `0x3E`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActThs {
    // Sleep-to-wake threshold (bits 6:0).
    pub acth: B7,
    #[skip]
    __: B1,
}

impl_byte_conversions!(
    StatusAux,
    CtrlReg0,
    TempCfg,
    CtrlReg1,
    CtrlReg2,
    CtrlReg3,
    CtrlReg4,
    CtrlReg5,
    CtrlReg6,
    Status,
    FifoCtrl,
    FifoSrc,
    IntGenConfig,
    IntGenSource,
    IntGenThreshold,
    IntGenDuration,
    ClickCfg,
    ClickSrc,
    ClickThs,
    TimeLimit,
    ActThs,
);

impl_register!(StatusAux, REG_STATUS_AUX, ReadOnly, None);
impl_register!(CtrlReg0, REG_CTRL_REG0, ReadWrite, Some(CTRL_REG0_RESERVED));
impl_register!(TempCfg, REG_TEMP_CFG, ReadWrite, Some(0x00));
impl_register!(CtrlReg1, REG_CTRL_REG1, ReadWrite, Some(0x07));
impl_register!(CtrlReg2, REG_CTRL_REG2, ReadWrite, Some(0x00));
impl_register!(CtrlReg3, REG_CTRL_REG3, ReadWrite, Some(0x00));
impl_register!(CtrlReg4, REG_CTRL_REG4, ReadWrite, Some(0x00));
impl_register!(CtrlReg5, REG_CTRL_REG5, ReadWrite, Some(0x00));
impl_register!(CtrlReg6, REG_CTRL_REG6, ReadWrite, Some(0x00));
impl_register!(Status, REG_STATUS, ReadOnly, None);
impl_register!(FifoCtrl, REG_FIFO_CTRL, ReadWrite, Some(0x00));
impl_register!(FifoSrc, REG_FIFO_SRC, ReadOnly, None);
impl_register!(ClickCfg, REG_CLICK_CFG, ReadWrite, Some(0x00));
impl_register!(ClickSrc, REG_CLICK_SRC, ReadOnly, None);
impl_register!(ClickThs, REG_CLICK_THS, ReadWrite, Some(0x00));
impl_register!(TimeLimit, REG_TIME_LIMIT, ReadWrite, Some(0x00));
impl_register!(ActThs, REG_ACT_THS, ReadWrite, Some(0x00));

/// Mask applied to caller values destined for 7-bit fields.
pub const SEVEN_BIT_MASK: u8 = 0x7F;
/// Mask applied to caller values destined for the 5-bit FIFO watermark.
pub const FIVE_BIT_MASK: u8 = 0x1F;

/// Assembles a little-endian sample from a low/high register pair.
#[inline]
pub fn sample_from_le(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}

/// Assembles three consecutive little-endian samples from a 6-byte burst.
pub fn samples_from_burst(raw: &[u8; 6]) -> [i16; 3] {
    [
        sample_from_le(raw[0], raw[1]),
        sample_from_le(raw[2], raw[3]),
        sample_from_le(raw[4], raw[5]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that CTRL_REG1 bitfields match the datasheet layout.
    #[test]
    fn ctrl_reg1_layout_matches_datasheet() {
        let reg = CtrlReg1::from(0x57);
        assert!(reg.xen());
        assert!(reg.yen());
        assert!(reg.zen());
        assert!(!reg.lpen());
        assert_eq!(reg.odr(), OutputDataRate::Hz100);

        let reg = CtrlReg1::new()
            .with_lpen(true)
            .with_odr(OutputDataRate::Khz5_376LowPowerKhz1_344);
        assert_eq!(u8::from(reg), 0b1001_1000);
    }

    /// Ensures CTRL_REG4 encodes and decodes as expected across all fields.
    #[test]
    fn ctrl_reg4_roundtrip() {
        let reg = CtrlReg4::new()
            .with_sim(SpiMode::ThreeWire)
            .with_st(SelfTest::Negative)
            .with_hr(true)
            .with_fs(FullScale::G8)
            .with_ble(DataFormat::LsbAtLowAddress)
            .with_bdu(true);

        assert_eq!(u8::from(reg), 0b1_0_10_1_10_1);
        let decoded = CtrlReg4::from(u8::from(reg));
        assert_eq!(decoded.sim(), SpiMode::ThreeWire);
        assert_eq!(decoded.st(), SelfTest::Negative);
        assert!(decoded.hr());
        assert_eq!(decoded.fs(), FullScale::G8);
        assert!(decoded.bdu());
    }

    #[test]
    fn ctrl_reg2_places_routing_in_low_bits() {
        let reg = CtrlReg2::new()
            .with_hp(HighPassRoute::Int1Tap)
            .with_fds(true)
            .with_hpcf(HighPassCutoff::Medium)
            .with_hpm(HighPassMode::AutoResetOnInterrupt);
        assert_eq!(u8::from(reg), 0b11_10_1_101);
    }

    #[test]
    fn fifo_registers_split_counters_and_flags() {
        let ctrl = FifoCtrl::new()
            .with_fth(0x1F)
            .with_tr(FifoTrigger::Int2)
            .with_fm(FifoMode::StreamToFifo);
        assert_eq!(u8::from(ctrl), 0xFF);

        let src = FifoSrc::from(0b1010_0000 | 0x0C);
        assert_eq!(src.fss(), 12);
        assert!(src.empty());
        assert!(!src.ovrn_fifo());
        assert!(src.wtm());
    }

    #[test]
    fn threshold_layouts_keep_top_bit_separate() {
        let ths = ClickThs::from(0xC5);
        assert_eq!(ths.ths(), 0x45);
        assert_eq!(ths.lir_click(), NotificationMode::Latched);

        let ths = IntGenThreshold::from(0xFF);
        assert_eq!(ths.ths(), 0x7F);
    }

    #[test]
    fn ctrl_reg0_reset_value_carries_reserved_pattern() {
        let reg = CtrlReg0::from(CtrlReg0::RESET_VALUE.unwrap_or_default());
        assert_eq!(reg.reserved(), CTRL_REG0_RESERVED);
        assert_eq!(reg.sdo_pu_disc(), SdoPullUp::Connected);
    }

    #[test]
    fn status_flags_follow_bit_order() {
        let status = Status::from(0b1000_1000);
        assert!(status.zyxda());
        assert!(status.zyxor());
        assert!(!status.xda());
        assert!(!status.xor());

        let aux = StatusAux::from(0b0100_0100);
        assert!(aux.adc3_ready());
        assert!(aux.adc3_overrun());
        assert!(!aux.all_ready());
    }

    #[test]
    fn burst_assembly_is_little_endian() {
        let raw = [0x10, 0x20, 0xF0, 0xFF, 0x00, 0x80];
        assert_eq!(samples_from_burst(&raw), [0x2010, -16, i16::MIN]);
    }

    #[test]
    fn register_metadata_marks_outputs_read_only() {
        assert_eq!(Status::ACCESS, RegisterAccess::ReadOnly);
        assert_eq!(FifoSrc::RESET_VALUE, None);
        assert_eq!(CtrlReg1::RESET_VALUE, Some(0x07));
        assert_eq!(ClickThs::ADDRESS, REG_CLICK_THS);
    }
}
