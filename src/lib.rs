//! Register-level `no_std` driver for the STMicroelectronics LIS3DH accelerometer.
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use lis3dh_regs::params::{I2cAddress, OutputDataRate};
//! use lis3dh_regs::{Config, Lis3dh};
//!
//! # fn demo<I: I2c>(i2c: I, delay: &mut impl DelayNs) -> lis3dh_regs::Result<(), I::Error> {
//! let mut accel = Lis3dh::new_i2c(i2c, I2cAddress::Sa0High);
//! let config = Config::new().odr(OutputDataRate::Hz100).build();
//! accel.init(delay, &config)?;
//!
//! if accel.acceleration_ready()? {
//!     let [x, y, z] = accel.acceleration_mg()?;
//! #   let _ = (x, y, z);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod conversion;
pub mod device;
pub mod fifo;
pub mod interface;
pub mod interrupts;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::Lis3dh;
pub use crate::error::{Error, Result};
