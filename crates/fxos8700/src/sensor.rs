//! Generic sensor event and descriptor types.
//!
//! These mirror the usual "unified sensor" shape: an event carries one
//! timestamped three-axis reading in SI-derived units, a descriptor carries the
//! static limits of a channel.

use crate::data::DataStatus;
use crate::error::Error;

/// Kind of quantity a sensor channel reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorType {
    /// Acceleration in m/s^2.
    Accelerometer,
    /// Magnetic field in microtesla.
    MagneticField,
}

/// Three-axis physical reading.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    /// X axis.
    pub x: f32,
    /// Y axis.
    pub y: f32,
    /// Z axis.
    pub z: f32,
}

/// One timestamped reading from a sensor channel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorEvent {
    /// Identifier of the reporting channel.
    pub sensor_id: i32,
    /// Quantity reported in `data`.
    pub sensor_type: SensorType,
    /// Acquisition time in milliseconds from the driver's [`Clock`].
    pub timestamp_ms: u32,
    /// Converted reading (m/s^2 or microtesla, see `sensor_type`).
    pub data: Vector3,
}

/// Accelerometer and magnetometer events from one hybrid burst read.
///
/// Both events carry the same timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CombinedReading {
    /// Accelerometer event.
    pub accel: SensorEvent,
    /// Magnetometer event.
    pub mag: SensorEvent,
    /// DR_STATUS at the start of the burst (not checked by the driver).
    pub status: DataStatus,
}

/// Static description of a sensor channel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorDescriptor {
    /// Channel name.
    pub name: &'static str,
    /// Driver version.
    pub version: i32,
    /// Identifier of the channel.
    pub sensor_id: i32,
    /// Quantity reported by the channel.
    pub sensor_type: SensorType,
    /// Largest reportable value.
    pub max_value: f32,
    /// Smallest reportable value.
    pub min_value: f32,
    /// Smallest distinguishable change.
    pub resolution: f32,
    /// Minimum delay between events in microseconds.
    pub min_delay_us: u32,
}

/// A channel that produces [`SensorEvent`]s.
pub trait Sensor {
    /// Reads one event from the channel.
    fn read(&mut self) -> Result<SensorEvent, Error>;
    /// Describes the channel.
    fn descriptor(&self) -> SensorDescriptor;
}

/// Millisecond timestamp source used to stamp events.
pub trait Clock {
    /// Returns the current time in milliseconds (monotonic, may wrap).
    fn now_ms(&mut self) -> u32;
}

impl<F> Clock for F
where
    F: FnMut() -> u32,
{
    fn now_ms(&mut self) -> u32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_clocks() {
        let mut ticks = 0u32;
        let mut clock = || {
            ticks += 5;
            ticks
        };
        assert_eq!(clock.now_ms(), 5);
        assert_eq!(clock.now_ms(), 10);
    }
}
