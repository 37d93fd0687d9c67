//! Sensor data readout helpers.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{
    ACCEL_G_PER_LSB_2G, ACCEL_G_PER_LSB_4G, ACCEL_G_PER_LSB_8G, MAG_LIMIT_UT, MAG_UT_PER_LSB,
    SENSORS_GRAVITY_STANDARD, ScaleFactor, accel_g_per_lsb, accel_limits_g, accel_lsb_per_g,
    accel_mg_per_lsb, accel_ms2_per_lsb, mag_lsb_per_ut, mag_nt_per_lsb,
};

use crate::config::AccelRange;
use crate::register::{Register, status};
use crate::sensor::Vector3;

/// First register of the hybrid burst window.
pub(crate) const COMBINED_BLOCK_START: Register = Register::Status;
/// STATUS + 3 accel axes + 3 mag axes.
pub(crate) const COMBINED_BLOCK_LEN: usize = 13;
pub(crate) const COMBINED_BLOCK_ACCEL_OFFSET: usize = 1;
pub(crate) const COMBINED_BLOCK_MAG_OFFSET: usize = 7;

/// Status byte followed by three big-endian axes.
pub(crate) const SINGLE_BLOCK_LEN: usize = 7;

/// Data-ready / overwrite flags from DR_STATUS or M_DR_STATUS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    bits: u8,
}

impl DataStatus {
    /// Wraps a raw status register value.
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns the raw status register value.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// New data is available on all three axes.
    pub const fn xyz_ready(self) -> bool {
        (self.bits & status::ZYXDR) != 0
    }

    /// At least one axis was overwritten before being read.
    pub const fn overrun(self) -> bool {
        (self.bits & status::ZYXOW) != 0
    }
}

/// Raw accelerometer sample, already right-aligned to 14 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl AccelRaw {
    /// Decodes three left-justified 14-bit big-endian axes.
    pub(crate) const fn from_be_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: decode_accel_axis(bytes[0], bytes[1]),
            y: decode_accel_axis(bytes[2], bytes[3]),
            z: decode_accel_axis(bytes[4], bytes[5]),
        }
    }

    /// Converts to m/s^2 for the given range.
    pub fn to_ms2(self, range: AccelRange) -> Vector3 {
        let scale = accel_ms2_per_lsb(range);
        Vector3 {
            x: f32::from(self.x) * scale,
            y: f32::from(self.y) * scale,
            z: f32::from(self.z) * scale,
        }
    }
}

/// Raw magnetometer sample (full 16-bit counts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl MagRaw {
    pub(crate) const fn from_be_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_be_bytes([bytes[0], bytes[1]]),
            y: i16::from_be_bytes([bytes[2], bytes[3]]),
            z: i16::from_be_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Converts to microtesla.
    pub fn to_microtesla(self) -> Vector3 {
        Vector3 {
            x: f32::from(self.x) * MAG_UT_PER_LSB,
            y: f32::from(self.y) * MAG_UT_PER_LSB,
            z: f32::from(self.z) * MAG_UT_PER_LSB,
        }
    }
}

/// Sign-extends a left-justified 14-bit sample (arithmetic shift keeps the sign).
pub(crate) const fn decode_accel_axis(msb: u8, lsb: u8) -> i16 {
    i16::from_be_bytes([msb, lsb]) >> 2
}

/// Raw content of the 13-byte hybrid burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CombinedRaw {
    /// DR_STATUS value at the start of the burst.
    pub status: DataStatus,
    /// Accelerometer counts.
    pub accel: AccelRaw,
    /// Magnetometer counts.
    pub mag: MagRaw,
}

/// Decodes a hybrid burst buffer.
pub(crate) fn decode_combined_block(buffer: &[u8; COMBINED_BLOCK_LEN]) -> CombinedRaw {
    CombinedRaw {
        status: DataStatus::from_bits(buffer[0]),
        accel: AccelRaw::from_be_bytes(axes_at(buffer, COMBINED_BLOCK_ACCEL_OFFSET)),
        mag: MagRaw::from_be_bytes(axes_at(buffer, COMBINED_BLOCK_MAG_OFFSET)),
    }
}

/// Splits a single-sensor burst (status + 3 axes) into status and axis bytes.
pub(crate) fn split_single_block(buffer: &[u8; SINGLE_BLOCK_LEN]) -> (DataStatus, [u8; 6]) {
    (DataStatus::from_bits(buffer[0]), axes_at(buffer, 1))
}

fn axes_at(buffer: &[u8], offset: usize) -> [u8; 6] {
    let mut axes = [0u8; 6];
    axes.copy_from_slice(&buffer[offset..offset + 6]);
    axes
}
