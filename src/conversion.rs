//! Raw sample to physical unit conversions.
//!
//! Output words are left-justified, so each operating mode first divides by the
//! unused low bits (16 for 12-bit, 64 for 10-bit, 256 for 8-bit) and then applies
//! the datasheet sensitivity in mg/digit for the selected full scale. None of
//! these functions touch the bus: the caller supplies the mode and full scale
//! that were active when the sample was taken.

use crate::params::{FullScale, OperatingMode};

// Left-justification divisors per operating mode.
const HR_DIVISOR: f32 = 16.0;
const NM_DIVISOR: f32 = 64.0;
const LP_DIVISOR: f32 = 256.0;

// Sensitivities in mg/digit, high-resolution mode.
const HR_FS2_SENSITIVITY: f32 = 1.0;
const HR_FS4_SENSITIVITY: f32 = 2.0;
const HR_FS8_SENSITIVITY: f32 = 4.0;
const HR_FS16_SENSITIVITY: f32 = 12.0;

// Sensitivities in mg/digit, normal mode.
const NM_FS2_SENSITIVITY: f32 = 4.0;
const NM_FS4_SENSITIVITY: f32 = 8.0;
const NM_FS8_SENSITIVITY: f32 = 16.0;
const NM_FS16_SENSITIVITY: f32 = 48.0;

// Sensitivities in mg/digit, low-power mode.
const LP_FS2_SENSITIVITY: f32 = 16.0;
const LP_FS4_SENSITIVITY: f32 = 32.0;
const LP_FS8_SENSITIVITY: f32 = 64.0;
const LP_FS16_SENSITIVITY: f32 = 192.0;

// Temperature output is relative to 25 °C.
const TEMPERATURE_OFFSET_C: f32 = 25.0;

/// ±2 g, high-resolution mode.
pub fn from_fs2_hr_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / HR_DIVISOR) * HR_FS2_SENSITIVITY
}

/// ±4 g, high-resolution mode.
pub fn from_fs4_hr_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / HR_DIVISOR) * HR_FS4_SENSITIVITY
}

/// ±8 g, high-resolution mode.
pub fn from_fs8_hr_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / HR_DIVISOR) * HR_FS8_SENSITIVITY
}

/// ±16 g, high-resolution mode.
pub fn from_fs16_hr_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / HR_DIVISOR) * HR_FS16_SENSITIVITY
}

/// Temperature in °C, high-resolution mode.
pub fn from_lsb_hr_to_celsius(lsb: i16) -> f32 {
    ((lsb as f32 / 64.0) / 4.0) + TEMPERATURE_OFFSET_C
}

/// ±2 g, normal mode.
pub fn from_fs2_nm_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / NM_DIVISOR) * NM_FS2_SENSITIVITY
}

/// ±4 g, normal mode.
pub fn from_fs4_nm_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / NM_DIVISOR) * NM_FS4_SENSITIVITY
}

/// ±8 g, normal mode.
pub fn from_fs8_nm_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / NM_DIVISOR) * NM_FS8_SENSITIVITY
}

/// ±16 g, normal mode.
pub fn from_fs16_nm_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / NM_DIVISOR) * NM_FS16_SENSITIVITY
}

/// Temperature in °C, normal mode.
pub fn from_lsb_nm_to_celsius(lsb: i16) -> f32 {
    ((lsb as f32 / 64.0) / 4.0) + TEMPERATURE_OFFSET_C
}

/// ±2 g, low-power mode.
pub fn from_fs2_lp_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / LP_DIVISOR) * LP_FS2_SENSITIVITY
}

/// ±4 g, low-power mode.
pub fn from_fs4_lp_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / LP_DIVISOR) * LP_FS4_SENSITIVITY
}

/// ±8 g, low-power mode.
pub fn from_fs8_lp_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / LP_DIVISOR) * LP_FS8_SENSITIVITY
}

/// ±16 g, low-power mode.
pub fn from_fs16_lp_to_mg(lsb: i16) -> f32 {
    (lsb as f32 / LP_DIVISOR) * LP_FS16_SENSITIVITY
}

/// Temperature in °C, low-power mode.
pub fn from_lsb_lp_to_celsius(lsb: i16) -> f32 {
    ((lsb as f32 / 256.0) * 1.0) + TEMPERATURE_OFFSET_C
}

/// Converts a raw acceleration word using the given mode and full scale.
pub fn acceleration_to_mg(lsb: i16, mode: OperatingMode, full_scale: FullScale) -> f32 {
    match (mode, full_scale) {
        (OperatingMode::HighResolution, FullScale::G2) => from_fs2_hr_to_mg(lsb),
        (OperatingMode::HighResolution, FullScale::G4) => from_fs4_hr_to_mg(lsb),
        (OperatingMode::HighResolution, FullScale::G8) => from_fs8_hr_to_mg(lsb),
        (OperatingMode::HighResolution, FullScale::G16) => from_fs16_hr_to_mg(lsb),
        (OperatingMode::Normal, FullScale::G2) => from_fs2_nm_to_mg(lsb),
        (OperatingMode::Normal, FullScale::G4) => from_fs4_nm_to_mg(lsb),
        (OperatingMode::Normal, FullScale::G8) => from_fs8_nm_to_mg(lsb),
        (OperatingMode::Normal, FullScale::G16) => from_fs16_nm_to_mg(lsb),
        (OperatingMode::LowPower, FullScale::G2) => from_fs2_lp_to_mg(lsb),
        (OperatingMode::LowPower, FullScale::G4) => from_fs4_lp_to_mg(lsb),
        (OperatingMode::LowPower, FullScale::G8) => from_fs8_lp_to_mg(lsb),
        (OperatingMode::LowPower, FullScale::G16) => from_fs16_lp_to_mg(lsb),
    }
}

/// Converts a raw X/Y/Z triplet using the given mode and full scale.
pub fn acceleration_triplet_to_mg(raw: [i16; 3], mode: OperatingMode, full_scale: FullScale) -> [f32; 3] {
    raw.map(|lsb| acceleration_to_mg(lsb, mode, full_scale))
}

/// Converts a raw temperature word using the given mode.
pub fn temperature_to_celsius(lsb: i16, mode: OperatingMode) -> f32 {
    match mode {
        OperatingMode::HighResolution => from_lsb_hr_to_celsius(lsb),
        OperatingMode::Normal => from_lsb_nm_to_celsius(lsb),
        OperatingMode::LowPower => from_lsb_lp_to_celsius(lsb),
    }
}
