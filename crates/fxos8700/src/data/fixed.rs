//! Fixed-point conversion helpers.

use super::scale::{accel_lsb_per_g, mag_lsb_per_ut};
use super::{AccelRaw, MagRaw};
use crate::config::AccelRange;

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Fixed-point accelerometer sample in g.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelFixed {
    /// X-axis acceleration in g.
    pub x: Fixed,
    /// Y-axis acceleration in g.
    pub y: Fixed,
    /// Z-axis acceleration in g.
    pub z: Fixed,
}

/// Fixed-point magnetometer sample in microtesla.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagFixed {
    /// X-axis field in microtesla.
    pub x: Fixed,
    /// Y-axis field in microtesla.
    pub y: Fixed,
    /// Z-axis field in microtesla.
    pub z: Fixed,
}

/// Converts accelerometer raw counts to g using the nominal 14-bit sensitivity.
pub fn accel_to_g(raw: AccelRaw, range: AccelRange) -> AccelFixed {
    let scale = Fixed::from_num(accel_lsb_per_g(range));
    AccelFixed {
        x: Fixed::from_num(raw.x) / scale,
        y: Fixed::from_num(raw.y) / scale,
        z: Fixed::from_num(raw.z) / scale,
    }
}

/// Converts magnetometer raw counts to microtesla.
pub fn mag_to_microtesla(raw: MagRaw) -> MagFixed {
    let scale = Fixed::from_num(mag_lsb_per_ut());
    MagFixed {
        x: Fixed::from_num(raw.x) / scale,
        y: Fixed::from_num(raw.y) / scale,
        z: Fixed::from_num(raw.z) / scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_conversion_matches_scale() {
        let raw = AccelRaw {
            x: 4_096,
            y: -4_096,
            z: 0,
        };
        let fixed = accel_to_g(raw, AccelRange::G2);
        assert_eq!(fixed.x, Fixed::from_num(1));
        assert_eq!(fixed.y, Fixed::from_num(-1));
        assert_eq!(fixed.z, Fixed::from_num(0));

        let fixed = accel_to_g(raw, AccelRange::G8);
        assert_eq!(fixed.x, Fixed::from_num(4));
    }

    #[test]
    fn mag_conversion_matches_scale() {
        let raw = MagRaw {
            x: 10,
            y: -250,
            z: 0,
        };
        let fixed = mag_to_microtesla(raw);
        assert_eq!(fixed.x, Fixed::from_num(1));
        assert_eq!(fixed.y, Fixed::from_num(-25));
        assert_eq!(fixed.z, Fixed::from_num(0));
    }
}
