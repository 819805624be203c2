//! High-level LIS3DH device driver implementation.
//!
//! Every accessor round-trips to the device; the driver keeps no register
//! state. Setters for fields that share a register with other fields read the
//! register, patch the field and write the byte back. That read and write are
//! two separate bus transactions, so a concurrent writer to the same register
//! between them would be overwritten. Callers sharing a bus must serialize
//! access to the device themselves.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use crate::config::{AxisEnable, Config};
use crate::conversion::acceleration_triplet_to_mg;
use crate::error::{Error, Result};
use crate::interface::Lis3dhInterface;
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::params::{
    AuxAdc, DataFormat, FullScale, HighPassCutoff, HighPassMode, HighPassRoute, I2cAddress,
    OperatingMode, OutputDataRate, SdoPullUp, SelfTest, SpiMode,
};
use crate::registers::{
    CTRL_REG0_RESERVED, CtrlReg0, CtrlReg1, CtrlReg2, CtrlReg4, CtrlReg5, REG_OUT_ADC1_L,
    REG_OUT_ADC3_L, REG_OUT_X_L, REG_REFERENCE, REG_WHO_AM_I, Register, Status, StatusAux,
    TempCfg, WHO_AM_I_VALUE, sample_from_le, samples_from_burst,
};

// Time for the device to reload its trimming parameters after BOOT is set.
const BOOT_TIME_MS: u32 = 5;
// Number of consecutive bytes spanning X, Y, Z axis samples.
const RAW_AXIS_BYTES: usize = 6;

/// Register-level synchronous driver for the LIS3DH accelerometer.
pub struct Lis3dh<IFACE> {
    interface: IFACE,
}

impl<IFACE> Lis3dh<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Lis3dh<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, address: I2cAddress) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Releases the driver, returning the I²C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<SPI> Lis3dh<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

/// Returns the decoded field, or the enum default when the stored bit pattern
/// has no declared meaning.
fn decoded_or_default<T: Default, P>(
    field: core::result::Result<T, P>,
    register: u8,
) -> T {
    match field {
        Ok(value) => value,
        Err(_) => {
            warn!("undefined field pattern in register {=u8:#x}", register);
            T::default()
        }
    }
}

impl<IFACE, CommE> Lis3dh<IFACE>
where
    IFACE: Lis3dhInterface<Error = CommE>,
{
    // ==================================================================
    // == Register Primitives ===========================================
    // ==================================================================
    /// Reads one register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        let value = self
            .interface
            .read_register(register)
            .map_err(Error::from)?;
        trace!("read {=u8:#x} -> {=u8:#x}", register, value);
        Ok(value)
    }

    /// Writes one register.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        trace!("write {=u8:#x} <- {=u8:#x}", register, value);
        self.interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    /// Burst-reads consecutive registers starting at `register`.
    pub fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        if buf.is_empty() {
            return Ok(());
        }
        trace!("burst read {=u8:#x} ({=usize} bytes)", register, buf.len());
        self.interface
            .read_many(register, buf)
            .map_err(Error::from)
    }

    /// Burst-writes consecutive registers starting at `register`.
    pub fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), CommE> {
        if data.is_empty() {
            return Ok(());
        }
        trace!("burst write {=u8:#x} ({=usize} bytes)", register, data.len());
        self.interface
            .write_many(register, data)
            .map_err(Error::from)
    }

    pub(crate) fn read_at<R>(&mut self, register: u8) -> Result<R, CommE>
    where
        R: From<u8>,
    {
        self.read_register(register).map(R::from)
    }

    pub(crate) fn modify_at<R, F>(&mut self, register: u8, mutate: F) -> Result<R, CommE>
    where
        R: From<u8> + Into<u8> + Copy,
        F: FnOnce(&mut R),
    {
        let mut value = R::from(self.read_register(register)?);
        mutate(&mut value);
        self.write_register(register, value.into())?;
        Ok(value)
    }

    pub(crate) fn read_reg<R: Register>(&mut self) -> Result<R, CommE> {
        self.read_at(R::ADDRESS)
    }

    pub(crate) fn write_reg<R: Register>(&mut self, value: R) -> Result<(), CommE> {
        self.write_register(R::ADDRESS, value.into())
    }

    pub(crate) fn modify_reg<R, F>(&mut self, mutate: F) -> Result<R, CommE>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        self.modify_at(R::ADDRESS, mutate)
    }

    // ==================================================================
    // == Initialization & Bulk Configuration ===========================
    // ==================================================================
    /// Reboots the memory content, then applies `config`.
    pub fn init(&mut self, delay: &mut impl DelayNs, config: &Config) -> Result<(), CommE> {
        self.reboot(delay)?;
        self.configure(config)
    }

    /// Applies `config` to the device.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        debug!("applying configuration");
        self.modify_reg::<CtrlReg4, _>(|reg| {
            reg.set_fs(config.full_scale);
            reg.set_bdu(config.block_data_update);
        })?;
        self.set_operating_mode(config.operating_mode)?;
        self.modify_reg::<CtrlReg1, _>(|reg| {
            reg.set_odr(config.odr);
            reg.set_xen(config.axes.x);
            reg.set_yen(config.axes.y);
            reg.set_zen(config.axes.z);
        })?;
        self.set_aux_adc(config.aux_adc)
    }

    /// Sets BOOT and waits for the trimming parameters to reload.
    pub fn reboot(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        debug!("rebooting memory content");
        self.set_boot(true)?;
        delay.delay_ms(BOOT_TIME_MS);
        Ok(())
    }

    /// Sets or clears `CTRL_REG5.BOOT`.
    pub fn set_boot(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg5, _>(|reg| reg.set_boot(enable))?;
        Ok(())
    }

    /// Reads `CTRL_REG5.BOOT`; the device clears it once the reboot completes.
    pub fn boot(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<CtrlReg5>()?.boot())
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads `WHO_AM_I`.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_WHO_AM_I)
    }

    /// Returns `true` when `WHO_AM_I` matches the LIS3DH identifier.
    pub fn is_present(&mut self) -> Result<bool, CommE> {
        Ok(self.device_id()? == WHO_AM_I_VALUE)
    }

    /// Reads `STATUS_REG`.
    pub fn status(&mut self) -> Result<Status, CommE> {
        self.read_reg()
    }

    /// New X, Y and Z data available.
    pub fn acceleration_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.status()?.zyxda())
    }

    /// X, Y and Z data overwritten before being read.
    pub fn acceleration_overrun(&mut self) -> Result<bool, CommE> {
        Ok(self.status()?.zyxor())
    }

    /// Reads `STATUS_REG_AUX`.
    pub fn aux_status(&mut self) -> Result<StatusAux, CommE> {
        self.read_reg()
    }

    /// New temperature data available.
    pub fn temperature_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.aux_status()?.adc3_ready())
    }

    /// Temperature data overwritten before being read.
    pub fn temperature_overrun(&mut self) -> Result<bool, CommE> {
        Ok(self.aux_status()?.adc3_overrun())
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Selects the sampling resolution.
    ///
    /// Touches `CTRL_REG1.LPen` and `CTRL_REG4.HR` with one read-modify-write each.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), CommE> {
        let (lpen, hr) = match mode {
            OperatingMode::HighResolution => (false, true),
            OperatingMode::Normal => (false, false),
            OperatingMode::LowPower => (true, false),
        };
        self.modify_reg::<CtrlReg1, _>(|reg| reg.set_lpen(lpen))?;
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_hr(hr))?;
        Ok(())
    }

    /// Reads back the sampling resolution.
    pub fn operating_mode(&mut self) -> Result<OperatingMode, CommE> {
        let ctrl1 = self.read_reg::<CtrlReg1>()?;
        let ctrl4 = self.read_reg::<CtrlReg4>()?;
        Ok(Self::mode_from(ctrl1, ctrl4))
    }

    fn mode_from(ctrl1: CtrlReg1, ctrl4: CtrlReg4) -> OperatingMode {
        if ctrl1.lpen() {
            OperatingMode::LowPower
        } else if ctrl4.hr() {
            OperatingMode::HighResolution
        } else {
            OperatingMode::Normal
        }
    }

    /// Selects the output data rate.
    pub fn set_data_rate(&mut self, odr: OutputDataRate) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg1, _>(|reg| reg.set_odr(odr))?;
        Ok(())
    }

    /// Reads back the output data rate.
    pub fn data_rate(&mut self) -> Result<OutputDataRate, CommE> {
        let reg = self.read_reg::<CtrlReg1>()?;
        Ok(decoded_or_default(reg.odr_or_err(), CtrlReg1::ADDRESS))
    }

    /// Enables or disables individual axes.
    pub fn set_axes(&mut self, axes: AxisEnable) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg1, _>(|reg| {
            reg.set_xen(axes.x);
            reg.set_yen(axes.y);
            reg.set_zen(axes.z);
        })?;
        Ok(())
    }

    /// Reads back the axis enables.
    pub fn axes(&mut self) -> Result<AxisEnable, CommE> {
        let reg = self.read_reg::<CtrlReg1>()?;
        Ok(AxisEnable {
            x: reg.xen(),
            y: reg.yen(),
            z: reg.zen(),
        })
    }

    /// Selects the full-scale range.
    pub fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_fs(full_scale))?;
        Ok(())
    }

    /// Reads back the full-scale range.
    pub fn full_scale(&mut self) -> Result<FullScale, CommE> {
        Ok(self.read_reg::<CtrlReg4>()?.fs())
    }

    /// Enables or disables block data update.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_bdu(enable))?;
        Ok(())
    }

    /// Reads back block data update.
    pub fn block_data_update(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<CtrlReg4>()?.bdu())
    }

    /// Selects the output byte order.
    pub fn set_data_format(&mut self, format: DataFormat) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_ble(format))?;
        Ok(())
    }

    /// Reads back the output byte order.
    pub fn data_format(&mut self) -> Result<DataFormat, CommE> {
        Ok(self.read_reg::<CtrlReg4>()?.ble())
    }

    /// Selects the self-test mode.
    pub fn set_self_test(&mut self, mode: SelfTest) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_st(mode))?;
        Ok(())
    }

    /// Reads back the self-test mode.
    pub fn self_test(&mut self) -> Result<SelfTest, CommE> {
        let reg = self.read_reg::<CtrlReg4>()?;
        Ok(decoded_or_default(reg.st_or_err(), CtrlReg4::ADDRESS))
    }

    /// Selects 3- or 4-wire SPI.
    pub fn set_spi_mode(&mut self, mode: SpiMode) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg4, _>(|reg| reg.set_sim(mode))?;
        Ok(())
    }

    /// Reads back the SPI mode.
    pub fn spi_mode(&mut self) -> Result<SpiMode, CommE> {
        Ok(self.read_reg::<CtrlReg4>()?.sim())
    }

    /// Connects or disconnects the SDO/SA0 pull-up.
    ///
    /// The reserved low bits are rewritten with their mandatory pattern.
    pub fn set_sdo_pull_up(&mut self, pull_up: SdoPullUp) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg0, _>(|reg| {
            reg.set_reserved(CTRL_REG0_RESERVED);
            reg.set_sdo_pu_disc(pull_up);
        })?;
        Ok(())
    }

    /// Reads back the SDO/SA0 pull-up state.
    pub fn sdo_pull_up(&mut self) -> Result<SdoPullUp, CommE> {
        Ok(self.read_reg::<CtrlReg0>()?.sdo_pu_disc())
    }

    /// Routes the auxiliary ADC.
    ///
    /// Enabling any source also enables block data update, which the
    /// temperature and ADC outputs require.
    pub fn set_aux_adc(&mut self, aux: AuxAdc) -> Result<(), CommE> {
        if aux != AuxAdc::Disabled {
            self.set_block_data_update(true)?;
        }
        let (adc_en, temp_en) = match aux {
            AuxAdc::Disabled => (false, false),
            AuxAdc::Pads => (true, false),
            AuxAdc::Temperature => (true, true),
        };
        self.modify_reg::<TempCfg, _>(|reg| {
            reg.set_adc_en(adc_en);
            reg.set_temp_en(temp_en);
        })?;
        Ok(())
    }

    /// Reads back the auxiliary ADC routing.
    pub fn aux_adc(&mut self) -> Result<AuxAdc, CommE> {
        let reg = self.read_reg::<TempCfg>()?;
        Ok(match (reg.adc_en(), reg.temp_en()) {
            (true, true) => AuxAdc::Temperature,
            (true, false) => AuxAdc::Pads,
            _ => AuxAdc::Disabled,
        })
    }

    // ==================================================================
    // == High-Pass Filter ==============================================
    // ==================================================================
    /// Sends filtered data to the output registers and FIFO.
    pub fn set_high_pass_on_outputs(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg2, _>(|reg| reg.set_fds(enable))?;
        Ok(())
    }

    /// Reads back the filtered-data selection.
    pub fn high_pass_on_outputs(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<CtrlReg2>()?.fds())
    }

    /// Selects the high-pass cut-off frequency.
    pub fn set_high_pass_cutoff(&mut self, cutoff: HighPassCutoff) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg2, _>(|reg| reg.set_hpcf(cutoff))?;
        Ok(())
    }

    /// Reads back the high-pass cut-off frequency.
    pub fn high_pass_cutoff(&mut self) -> Result<HighPassCutoff, CommE> {
        Ok(self.read_reg::<CtrlReg2>()?.hpcf())
    }

    /// Selects the high-pass filter mode.
    pub fn set_high_pass_mode(&mut self, mode: HighPassMode) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg2, _>(|reg| reg.set_hpm(mode))?;
        Ok(())
    }

    /// Reads back the high-pass filter mode.
    pub fn high_pass_mode(&mut self) -> Result<HighPassMode, CommE> {
        Ok(self.read_reg::<CtrlReg2>()?.hpm())
    }

    /// Routes the high-pass filter to the event generators.
    pub fn set_high_pass_route(&mut self, route: HighPassRoute) -> Result<(), CommE> {
        self.modify_reg::<CtrlReg2, _>(|reg| reg.set_hp(route))?;
        Ok(())
    }

    /// Reads back the high-pass filter routing.
    pub fn high_pass_route(&mut self) -> Result<HighPassRoute, CommE> {
        Ok(self.read_reg::<CtrlReg2>()?.hp())
    }

    /// Writes the filter reference value.
    pub fn set_filter_reference(&mut self, value: u8) -> Result<(), CommE> {
        self.write_register(REG_REFERENCE, value)
    }

    /// Reads the filter reference value. In `NormalWithReset` mode this also
    /// resets the filter.
    pub fn filter_reference(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_REFERENCE)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw, left-justified acceleration triplet.
    pub fn acceleration_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.read_registers(REG_OUT_X_L, &mut raw)?;
        Ok(samples_from_burst(&raw))
    }

    /// Reads an acceleration triplet in milli-g.
    ///
    /// The operating mode and full scale are read from the device first, so
    /// this costs three bus transactions.
    pub fn acceleration_mg(&mut self) -> Result<[f32; 3], CommE> {
        let ctrl1 = self.read_reg::<CtrlReg1>()?;
        let ctrl4 = self.read_reg::<CtrlReg4>()?;
        let raw = self.acceleration_raw()?;
        Ok(acceleration_triplet_to_mg(
            raw,
            Self::mode_from(ctrl1, ctrl4),
            ctrl4.fs(),
        ))
    }

    /// Reads the three raw auxiliary ADC channels.
    pub fn adc_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.read_registers(REG_OUT_ADC1_L, &mut raw)?;
        Ok(samples_from_burst(&raw))
    }

    /// Reads the raw temperature word from ADC channel 3.
    pub fn temperature_raw(&mut self) -> Result<i16, CommE> {
        let mut raw = [0u8; 2];
        self.read_registers(REG_OUT_ADC3_L, &mut raw)?;
        Ok(sample_from_le(raw[0], raw[1]))
    }
}
