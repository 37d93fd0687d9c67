//! Configuration helpers for the FXOS8700.

pub(crate) mod common;
pub(crate) mod odr;

pub use common::{AccelRange, MagOversamplingRatio, OutputDataRate, SensorMode};
pub(crate) use common::{dr_field, dr_index};
pub use odr::{ACCEL_MAG_ONLY_ODR, HYBRID_ODR, OdrTable};

use crate::error::Error;

/// Default number of SYSMOD polls before a standby transition is abandoned.
pub const DEFAULT_STANDBY_POLL_ATTEMPTS: u16 = 50;

/// FXOS8700 configuration settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Sensor mode (accelerometer, magnetometer or both).
    pub mode: SensorMode,
    /// Accelerometer full-scale range.
    pub accel_range: AccelRange,
    /// Output data rate; must be offered by `mode.odr_table()`.
    pub odr: OutputDataRate,
    /// Magnetometer oversampling ratio.
    pub mag_osr: MagOversamplingRatio,
    /// Identifier reported in accelerometer events and descriptors.
    pub accel_sensor_id: i32,
    /// Identifier reported in magnetometer events and descriptors.
    pub mag_sensor_id: i32,
    /// SYSMOD polls (10 ms apart) allowed for each standby transition.
    pub standby_poll_attempts: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates the power-up configuration: hybrid, +/-2 g, 100 Hz, OSR 7.
    pub const fn new() -> Self {
        Self {
            mode: SensorMode::Hybrid,
            accel_range: AccelRange::G2,
            odr: OutputDataRate::Hz100,
            mag_osr: MagOversamplingRatio::Osr7,
            accel_sensor_id: -1,
            mag_sensor_id: -1,
            standby_poll_attempts: DEFAULT_STANDBY_POLL_ATTEMPTS,
        }
    }

    /// Sets the sensor mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: SensorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the accelerometer range.
    #[must_use]
    pub const fn with_accel_range(mut self, range: AccelRange) -> Self {
        self.accel_range = range;
        self
    }

    /// Sets the output data rate.
    #[must_use]
    pub const fn with_output_data_rate(mut self, odr: OutputDataRate) -> Self {
        self.odr = odr;
        self
    }

    /// Sets the magnetometer oversampling ratio.
    #[must_use]
    pub const fn with_mag_oversampling_ratio(mut self, ratio: MagOversamplingRatio) -> Self {
        self.mag_osr = ratio;
        self
    }

    /// Sets the sensor identifiers reported in events and descriptors.
    #[must_use]
    pub const fn with_sensor_ids(mut self, accel: i32, mag: i32) -> Self {
        self.accel_sensor_id = accel;
        self.mag_sensor_id = mag;
        self
    }

    /// Sets how many SYSMOD polls a standby transition may take.
    ///
    /// Zero is treated as a single poll.
    #[must_use]
    pub const fn with_standby_poll_attempts(mut self, attempts: u16) -> Self {
        self.standby_poll_attempts = attempts;
        self
    }

    /// Checks that the output data rate is available in the sensor mode.
    pub fn validate(self) -> Result<(), Error> {
        if self.mode.odr_table().contains(self.odr) {
            Ok(())
        } else {
            Err(Error::InvalidConfig)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_power_up_settings() {
        let config = Config::default();
        assert_eq!(config.mode, SensorMode::Hybrid);
        assert_eq!(config.accel_range, AccelRange::G2);
        assert_eq!(config.odr, OutputDataRate::Hz100);
        assert_eq!(config.mag_osr, MagOversamplingRatio::Osr7);
        assert_eq!(config.accel_sensor_id, -1);
        assert_eq!(config.mag_sensor_id, -1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_rate_missing_from_mode_table() {
        let config = Config::new()
            .with_mode(SensorMode::AccelOnly)
            .with_output_data_rate(OutputDataRate::Hz25);
        assert_eq!(config.validate(), Err(Error::InvalidConfig));

        let config = Config::new().with_output_data_rate(OutputDataRate::Hz800);
        assert_eq!(config.validate(), Err(Error::InvalidConfig));
    }

    #[test]
    fn validate_allows_single_sensor_rates() {
        let config = Config::new()
            .with_mode(SensorMode::MagOnly)
            .with_output_data_rate(OutputDataRate::Hz800);
        assert_eq!(config.validate(), Ok(()));
    }
}
