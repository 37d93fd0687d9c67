//! Single-channel views of the driver.
//!
//! Each facade borrows the driver mutably and exposes one channel through the
//! [`Sensor`] trait, so generic sensor code can consume the accelerometer and
//! magnetometer separately.

use embedded_hal::delay::DelayNs;

use crate::config::SensorMode;
use crate::driver::Fxos8700;
use crate::error::Error;
use crate::interface::Interface;
use crate::sensor::{Clock, Sensor, SensorDescriptor, SensorEvent};

const ACCELEROMETER_NAME: &str = "FXOS8700_A";
const MAGNETOMETER_NAME: &str = "FXOS8700_M";

/// Accelerometer channel of an [`Fxos8700`].
pub struct Accelerometer<'a, I, D, C> {
    driver: &'a mut Fxos8700<I, D, C>,
}

impl<'a, I, D, C> Accelerometer<'a, I, D, C> {
    pub(crate) fn new(driver: &'a mut Fxos8700<I, D, C>) -> Self {
        Self { driver }
    }
}

impl<I, D, C> Sensor for Accelerometer<'_, I, D, C>
where
    I: Interface,
    D: DelayNs,
    C: Clock,
{
    /// In hybrid mode this takes the accelerometer half of a combined burst.
    fn read(&mut self) -> Result<SensorEvent, Error> {
        if self.driver.sensor_mode() == SensorMode::Hybrid {
            Ok(self.driver.read_combined()?.accel)
        } else {
            self.driver.read_accel()
        }
    }

    fn descriptor(&self) -> SensorDescriptor {
        SensorDescriptor {
            name: ACCELEROMETER_NAME,
            ..self.driver.accel_descriptor()
        }
    }
}

/// Magnetometer channel of an [`Fxos8700`].
pub struct Magnetometer<'a, I, D, C> {
    driver: &'a mut Fxos8700<I, D, C>,
}

impl<'a, I, D, C> Magnetometer<'a, I, D, C> {
    pub(crate) fn new(driver: &'a mut Fxos8700<I, D, C>) -> Self {
        Self { driver }
    }
}

impl<I, D, C> Sensor for Magnetometer<'_, I, D, C>
where
    I: Interface,
    D: DelayNs,
    C: Clock,
{
    /// In hybrid mode this takes the magnetometer half of a combined burst.
    fn read(&mut self) -> Result<SensorEvent, Error> {
        if self.driver.sensor_mode() == SensorMode::Hybrid {
            Ok(self.driver.read_combined()?.mag)
        } else {
            self.driver.read_mag()
        }
    }

    fn descriptor(&self) -> SensorDescriptor {
        SensorDescriptor {
            name: MAGNETOMETER_NAME,
            ..self.driver.mag_descriptor()
        }
    }
}
