//! Strongly typed parameter enumerations for the LIS3DH driver.
//!
//! These enums map directly to datasheet field encodings: the discriminant of
//! each variant is the bit pattern stored in the register. They are used by the
//! register layouts in [`registers`](crate::registers), by
//! [`Config`](crate::config::Config) and by the accessors on
//! [`Lis3dh`](crate::device::Lis3dh).
//!
//! # Examples
//!
//! ```rust
//! use lis3dh_regs::params::{FullScale, OperatingMode, OutputDataRate};
//!
//! let odr = OutputDataRate::Hz100;
//! let mode = OperatingMode::HighResolution;
//! let fs = FullScale::G4;
//! assert_eq!(odr.hz(mode), 100);
//! let _ = fs;
//! ```

use modular_bitfield::prelude::Specifier;

/// I²C slave address selected by the SA0 strap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum I2cAddress {
    /// SA0 tied to ground (8-bit read address `0x31`).
    Sa0Low = 0x18,
    /// SA0 tied to supply (8-bit read address `0x33`).
    Sa0High = 0x19,
}

impl I2cAddress {
    /// Returns the 7-bit bus address.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Returns the 8-bit read address as printed in the datasheet.
    pub const fn read_address(self) -> u8 {
        ((self as u8) << 1) | 0x01
    }
}

impl Default for I2cAddress {
    fn default() -> Self {
        Self::Sa0High
    }
}

/// Sampling resolution, selected by `CTRL_REG1.LPen` and `CTRL_REG4.HR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// 12-bit output.
    #[default]
    HighResolution,
    /// 10-bit output.
    Normal,
    /// 8-bit output.
    LowPower,
}

impl OperatingMode {
    /// Number of significant bits in the left-justified output word.
    pub const fn resolution_bits(self) -> u8 {
        match self {
            Self::HighResolution => 12,
            Self::Normal => 10,
            Self::LowPower => 8,
        }
    }
}

/// Output data rate selections encoded in `CTRL_REG1[7:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// Power-down mode.
    PowerDown = 0x0,
    /// 1 Hz.
    Hz1 = 0x1,
    /// 10 Hz.
    Hz10 = 0x2,
    /// 25 Hz.
    Hz25 = 0x3,
    /// 50 Hz.
    Hz50 = 0x4,
    /// 100 Hz.
    Hz100 = 0x5,
    /// 200 Hz.
    Hz200 = 0x6,
    /// 400 Hz.
    Hz400 = 0x7,
    /// 1.620 kHz, low-power mode only.
    Khz1_620LowPower = 0x8,
    /// 5.376 kHz in low-power mode, 1.344 kHz in normal and high-resolution.
    Khz5_376LowPowerKhz1_344 = 0x9,
}

impl Default for OutputDataRate {
    fn default() -> Self {
        Self::PowerDown
    }
}

impl OutputDataRate {
    /// Returns the sample rate in hertz for the given operating mode.
    pub const fn hz(self, mode: OperatingMode) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Khz1_620LowPower => 1_620,
            Self::Khz5_376LowPowerKhz1_344 => match mode {
                OperatingMode::LowPower => 5_376,
                _ => 1_344,
            },
        }
    }
}

/// Full-scale selections encoded in `CTRL_REG4.FS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl FullScale {
    /// Returns the measurement range in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// High-pass filter modes encoded in `CTRL_REG2.HPM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum HighPassMode {
    /// Normal mode, reset by reading `REFERENCE`.
    NormalWithReset = 0b00,
    /// Reference signal for filtering.
    Reference = 0b01,
    /// Normal mode.
    Normal = 0b10,
    /// Autoreset on interrupt event.
    AutoResetOnInterrupt = 0b11,
}

/// High-pass cut-off selections encoded in `CTRL_REG2.HPCF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum HighPassCutoff {
    /// Highest cut-off frequency.
    Aggressive = 0b00,
    /// Second-highest cut-off frequency.
    Strong = 0b01,
    /// Second-lowest cut-off frequency.
    Medium = 0b10,
    /// Lowest cut-off frequency.
    Light = 0b11,
}

/// High-pass filter routing to the event generators (`CTRL_REG2[2:0]`).
///
/// Bit 0 feeds interrupt generator 1, bit 1 interrupt generator 2, bit 2 the
/// tap generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum HighPassRoute {
    /// Filter bypassed for all generators.
    Disconnected = 0b000,
    /// Interrupt generator 1.
    Int1 = 0b001,
    /// Interrupt generator 2.
    Int2 = 0b010,
    /// Interrupt generators 1 and 2.
    Int1Int2 = 0b011,
    /// Tap generator.
    Tap = 0b100,
    /// Interrupt generator 1 and tap generator.
    Int1Tap = 0b101,
    /// Interrupt generator 2 and tap generator.
    Int2Tap = 0b110,
    /// All generators.
    Int1Int2Tap = 0b111,
}

/// Self-test selections encoded in `CTRL_REG4.ST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum SelfTest {
    /// Normal operation.
    Disabled = 0b00,
    /// Self-test 0 (positive sign).
    Positive = 0b01,
    /// Self-test 1 (negative sign).
    Negative = 0b10,
}

impl Default for SelfTest {
    fn default() -> Self {
        Self::Disabled
    }
}

/// Output byte order encoded in `CTRL_REG4.BLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum DataFormat {
    /// Data LSB at the lower address.
    LsbAtLowAddress = 0,
    /// Data MSB at the lower address.
    MsbAtLowAddress = 1,
}

/// SPI serial interface mode encoded in `CTRL_REG4.SIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum SpiMode {
    /// 4-wire interface.
    FourWire = 0,
    /// 3-wire interface.
    ThreeWire = 1,
}

/// FIFO operating modes encoded in `FIFO_CTRL_REG.FM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO bypassed.
    Bypass = 0b00,
    /// Stops collecting when full.
    Fifo = 0b01,
    /// Overwrites the oldest sample when full.
    Stream = 0b10,
    /// Stream until the trigger event, then FIFO.
    StreamToFifo = 0b11,
}

/// FIFO trigger source encoded in `FIFO_CTRL_REG.TR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum FifoTrigger {
    /// Trigger linked to interrupt generator 1.
    Int1 = 0,
    /// Trigger linked to interrupt generator 2.
    Int2 = 1,
}

/// Interrupt request latching (`LIR_INT1`, `LIR_INT2`, `LIR_Click`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum NotificationMode {
    /// Request follows the event.
    Pulsed = 0,
    /// Request held until the source register is read.
    Latched = 1,
}

/// Interrupt pin polarity encoded in `CTRL_REG6.INT_POLARITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum IntPolarity {
    /// Pins active high.
    ActiveHigh = 0,
    /// Pins active low.
    ActiveLow = 1,
}

/// SDO/SA0 internal pull-up encoded in `CTRL_REG0.SDO_PU_DISC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum SdoPullUp {
    /// Pull-up connected to the SDO/SA0 pin.
    Connected = 0,
    /// Pull-up disconnected.
    Disconnected = 1,
}

/// Auxiliary ADC routing, selected by `TEMP_CFG_REG.ADC_EN` and `TEMP_EN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuxAdc {
    /// ADC powered down.
    #[default]
    Disabled,
    /// ADC sampling the three external pads.
    Pads,
    /// ADC channel 3 connected to the temperature sensor.
    Temperature,
}

/// Selects one of the two identical motion interrupt generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptGenerator {
    /// Generator 1 (`INT1_CFG` .. `INT1_DURATION`).
    Int1,
    /// Generator 2 (`INT2_CFG` .. `INT2_DURATION`).
    Int2,
}
