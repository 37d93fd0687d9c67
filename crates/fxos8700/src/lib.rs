//! Blocking `#![no_std]` driver for the NXP
//! [FXOS8700](https://www.nxp.com/part/FXOS8700CQ) 3-axis accelerometer and
//! 3-axis magnetometer.
//!
//! This crate provides an `embedded-hal` 1.0 based I2C driver. It converts the
//! chip's 14-bit accelerometer and 16-bit magnetometer counts into m/s^2 and
//! microtesla and reports them as generic [`SensorEvent`]s.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_fxos8700::{Fxos8700I2c, Sensor};
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::I2c;
//! #
//! # fn example<I2C: I2c, D: DelayNs>(
//! #     i2c: I2C,
//! #     delay: D,
//! #     millis: impl FnMut() -> u32,
//! # ) -> Result<(), ph_fxos8700::Error> {
//! let mut fxos = Fxos8700I2c::new_i2c(i2c, delay, millis);
//! fxos.init()?;
//!
//! let reading = fxos.read_combined()?;
//! let heading_input = (reading.accel.data, reading.mag.data);
//!
//! let accel = fxos.accelerometer().read()?;
//! # let _ = (heading_input, accel);
//! # Ok(())
//! # }
//! ```
//!
//! # Standby handshake
//!
//! The FXOS8700 only accepts configuration writes in standby. Every setter
//! clears CTRL_REG1.active, waits for SYSMOD to report standby, writes its
//! fields and reactivates the part. SYSMOD is polled every 10 ms up to
//! [`Config::standby_poll_attempts`] times before [`Error::StandbyTimeout`] is
//! returned.
//!
//! # Output data rates
//!
//! The CTRL_REG1.dr field selects from two tables: one for accelerometer-only
//! or magnetometer-only operation and one, at half the rate, for hybrid mode.
//! [`Fxos8700::set_output_data_rate`] returns `Ok(false)` for a rate the
//! current mode does not offer. See [`SensorMode::odr_table`].
//!
//! # Logging
//!
//! Enable `defmt` or `log` (not both) to route driver diagnostics to that
//! framework. Without either feature logging compiles away.
//!
//! # Scaling helpers
//!
//! Use [`accel_lsb_per_g`] and [`mag_lsb_per_ut`] (or the ratios
//! [`accel_mg_per_lsb`] / [`mag_nt_per_lsb`]) to convert raw counts without
//! floating-point math.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to access fixed-point helpers that convert raw
//! readings into g and microtesla using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::float_cmp,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::items_after_statements
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

// Must come first so the logging macros are visible in every module below.
#[macro_use]
mod fmt;

mod config;
mod data;
mod device;
mod driver;
mod error;
mod facade;
mod interface;
mod register;
mod sensor;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::{Fxos8700Address, I2cInterface};

// Configuration
pub use config::{AccelRange, Config, MagOversamplingRatio, OutputDataRate, SensorMode};
pub use config::{ACCEL_MAG_ONLY_ODR, DEFAULT_STANDBY_POLL_ATTEMPTS, HYBRID_ODR, OdrTable};

// Driver
pub use driver::{Fxos8700, Fxos8700I2c};
pub use facade::{Accelerometer, Magnetometer};

// Sensor events
pub use sensor::{Clock, CombinedReading, Sensor, SensorDescriptor, SensorEvent, SensorType};
pub use sensor::Vector3;

// Data types
pub use data::{AccelRaw, CombinedRaw, DataStatus, MagRaw};
pub use data::{
    ACCEL_G_PER_LSB_2G,
    ACCEL_G_PER_LSB_4G,
    ACCEL_G_PER_LSB_8G,
    MAG_LIMIT_UT,
    MAG_UT_PER_LSB,
    SENSORS_GRAVITY_STANDARD,
    ScaleFactor,
    accel_g_per_lsb,
    accel_limits_g,
    accel_lsb_per_g,
    accel_mg_per_lsb,
    accel_ms2_per_lsb,
    mag_lsb_per_ut,
    mag_nt_per_lsb,
};

pub use error::Error;

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{AccelFixed, Fixed, MagFixed, accel_to_g, mag_to_microtesla};
