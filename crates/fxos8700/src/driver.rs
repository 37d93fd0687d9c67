//! FXOS8700 driver implementation.
//!
//! This module provides the blocking public driver for the FXOS8700.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{AccelRange, Config, MagOversamplingRatio, OutputDataRate, SensorMode};
use crate::data::{AccelRaw, MagRaw};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::facade::{Accelerometer, Magnetometer};
use crate::interface::Interface;
use crate::interface::{Fxos8700Address, I2cInterface};
use crate::sensor::{Clock, CombinedReading, SensorDescriptor, SensorEvent};

/// FXOS8700 accelerometer/magnetometer driver.
///
/// `D` paces the SYSMOD polls of the standby handshake and `C` stamps events.
pub struct Fxos8700<I, D, C> {
    core: DeviceCore<I, D, C>,
}

/// I2C type alias for the FXOS8700 driver.
pub type Fxos8700I2c<I2C, D, C> = Fxos8700<I2cInterface<I2C>, D, C>;

impl<I2C, D, C> Fxos8700<I2cInterface<I2C>, D, C>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver at the default address with default settings.
    pub fn new_i2c(i2c: I2C, delay: D, clock: C) -> Self {
        Self::with_config(i2c, delay, clock, Config::default(), Fxos8700Address::default())
    }

    /// Creates a new I2C-based driver with a custom configuration and address.
    ///
    /// The configuration is checked and written by [`init`](Self::init).
    pub fn with_config(
        i2c: I2C,
        delay: D,
        clock: C,
        config: Config,
        address: Fxos8700Address,
    ) -> Self {
        let interface = I2cInterface::new(i2c, address.addr());
        Self {
            core: DeviceCore::new(interface, delay, clock, config),
        }
    }

    /// Updates the I2C address used by the interface.
    pub fn set_i2c_address(&mut self, address: u8) {
        self.core.set_i2c_address(address);
    }

    /// Returns the I2C address in use.
    pub const fn i2c_address(&self) -> u8 {
        self.core.i2c_address()
    }

    /// Releases the I2C bus, delay and clock, consuming the driver.
    pub fn release(self) -> (I2C, D, C) {
        let (interface, delay, clock) = self.core.release();
        (interface.release(), delay, clock)
    }
}

impl<I2C, D, C> Fxos8700<I2cInterface<I2C>, D, C>
where
    I2C: I2c,
    D: DelayNs,
    C: Clock,
{
    /// Attempts initialization at each address in turn.
    ///
    /// Returns the address that answered. A device that answers with the
    /// wrong identity stops the search.
    pub fn init_with_addresses(&mut self, addresses: &[u8]) -> Result<u8, Error> {
        let mut last_err = None;
        for &address in addresses {
            self.set_i2c_address(address);
            match self.init() {
                Ok(()) => return Ok(address),
                Err(Error::WrongDevice) => return Err(Error::WrongDevice),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or(Error::NotPresent))
    }
}

impl<I, D, C> Fxos8700<I, D, C> {
    #[cfg(test)]
    pub(crate) fn from_parts(interface: I, delay: D, clock: C, config: Config) -> Self {
        Self {
            core: DeviceCore::new(interface, delay, clock, config),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (I, D, C) {
        self.core.release()
    }

    /// Returns the current configuration.
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Returns the current sensor mode.
    pub const fn sensor_mode(&self) -> SensorMode {
        self.core.config().mode
    }

    /// Returns the current accelerometer range.
    pub const fn accel_range(&self) -> AccelRange {
        self.core.config().accel_range
    }

    /// Returns the current output data rate.
    pub const fn output_data_rate(&self) -> OutputDataRate {
        self.core.config().odr
    }

    /// Returns the current magnetometer oversampling ratio.
    pub const fn mag_oversampling_ratio(&self) -> MagOversamplingRatio {
        self.core.config().mag_osr
    }

    /// Returns the last accelerometer counts read (zero after init).
    pub const fn accel_raw(&self) -> AccelRaw {
        self.core.accel_raw()
    }

    /// Returns the last magnetometer counts read (zero after init).
    pub const fn mag_raw(&self) -> MagRaw {
        self.core.mag_raw()
    }

    /// Describes the accelerometer channel for the current range and rate.
    pub fn accel_descriptor(&self) -> SensorDescriptor {
        self.core.accel_descriptor()
    }

    /// Describes the magnetometer channel.
    pub fn mag_descriptor(&self) -> SensorDescriptor {
        self.core.mag_descriptor()
    }

    /// Returns the accelerometer and magnetometer descriptors.
    pub fn descriptors(&self) -> (SensorDescriptor, SensorDescriptor) {
        (self.accel_descriptor(), self.mag_descriptor())
    }
}

impl<I, D, C> Fxos8700<I, D, C>
where
    I: Interface,
    D: DelayNs,
    C: Clock,
{
    /// Initializes the device (probe, verify WHO_AM_I, apply config).
    ///
    /// On success the device is active with the stored configuration and the
    /// raw sample caches are cleared.
    pub fn init(&mut self) -> Result<(), Error> {
        self.core.init()
    }

    /// Verifies the device WHO_AM_I register.
    pub fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device()
    }

    /// Puts the device into standby (`true`) or back into active mode (`false`).
    ///
    /// Waits for SYSMOD to confirm the transition.
    pub fn set_standby(&mut self, standby: bool) -> Result<(), Error> {
        self.core.set_standby(standby)
    }

    /// Selects which sensors are sampled.
    ///
    /// The output data rate is re-read under the new mode's table, so a
    /// change of mode can change [`output_data_rate`](Self::output_data_rate).
    pub fn set_sensor_mode(&mut self, mode: SensorMode) -> Result<(), Error> {
        self.core.set_sensor_mode(mode)
    }

    /// Sets the accelerometer range. Selecting +/-8 g turns low-noise mode off.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error> {
        self.core.set_accel_range(range)
    }

    /// Sets the output data rate.
    ///
    /// Returns `Ok(false)` and leaves the device untouched when the current
    /// sensor mode does not offer `rate`.
    pub fn set_output_data_rate(&mut self, rate: OutputDataRate) -> Result<bool, Error> {
        self.core.set_output_data_rate(rate)
    }

    /// Sets the magnetometer oversampling ratio.
    pub fn set_mag_oversampling_ratio(&mut self, ratio: MagOversamplingRatio) -> Result<(), Error> {
        self.core.set_mag_oversampling_ratio(ratio)
    }

    /// Reads both sensors in one burst (hybrid mode only).
    pub fn read_combined(&mut self) -> Result<CombinedReading, Error> {
        self.core.read_combined()
    }

    /// Reads the accelerometer (accelerometer-only or hybrid mode).
    pub fn read_accel(&mut self) -> Result<SensorEvent, Error> {
        self.core.read_accel()
    }

    /// Reads the magnetometer (magnetometer-only or hybrid mode).
    pub fn read_mag(&mut self) -> Result<SensorEvent, Error> {
        self.core.read_mag()
    }

    /// Reads the sensor sampled in a single-sensor mode.
    ///
    /// Hybrid mode has two sensors and returns [`Error::Unsupported`]; use
    /// [`read_combined`](Self::read_combined) or the facades instead.
    pub fn read_event(&mut self) -> Result<SensorEvent, Error> {
        self.core.read_event()
    }

    /// Borrows the driver as an accelerometer-only [`Sensor`](crate::Sensor).
    pub fn accelerometer(&mut self) -> Accelerometer<'_, I, D, C> {
        Accelerometer::new(self)
    }

    /// Borrows the driver as a magnetometer-only [`Sensor`](crate::Sensor).
    pub fn magnetometer(&mut self) -> Magnetometer<'_, I, D, C> {
        Magnetometer::new(self)
    }
}
