//! Configuration primitives for the LIS3DH driver.

use crate::params::{AuxAdc, FullScale, OperatingMode, OutputDataRate};

/// Per-axis enable flags held in `CTRL_REG1[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisEnable {
    /// X axis enabled.
    pub x: bool,
    /// Y axis enabled.
    pub y: bool,
    /// Z axis enabled.
    pub z: bool,
}

impl AxisEnable {
    /// All three axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };
}

impl Default for AxisEnable {
    fn default() -> Self {
        Self::ALL
    }
}

/// Bulk settings applied by [`Lis3dh::configure`](crate::device::Lis3dh::configure).
///
/// The driver writes these to the device and keeps no copy; reading back goes to
/// the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output data rate selection.
    pub odr: OutputDataRate,
    /// Sampling resolution.
    pub operating_mode: OperatingMode,
    /// Measurement range.
    pub full_scale: FullScale,
    /// Block output updates until both bytes of a sample are read.
    pub block_data_update: bool,
    /// Enabled axes.
    pub axes: AxisEnable,
    /// Auxiliary ADC routing.
    pub aux_adc: AuxAdc,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: OutputDataRate) -> Self {
        self.config.odr = odr;
        self
    }

    /// Overrides the operating mode.
    pub fn operating_mode(mut self, mode: OperatingMode) -> Self {
        self.config.operating_mode = mode;
        self
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Enables or disables block data update.
    pub fn block_data_update(mut self, enabled: bool) -> Self {
        self.config.block_data_update = enabled;
        self
    }

    /// Selects the enabled axes.
    pub fn axes(mut self, axes: AxisEnable) -> Self {
        self.config.axes = axes;
        self
    }

    /// Selects the auxiliary ADC routing.
    pub fn aux_adc(mut self, aux_adc: AuxAdc) -> Self {
        self.config.aux_adc = aux_adc;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Hz400,
            operating_mode: OperatingMode::HighResolution,
            full_scale: FullScale::G2,
            block_data_update: true,
            axes: AxisEnable::ALL,
            aux_adc: AuxAdc::Disabled,
        }
    }
}
