//! Scaling helpers for raw sensor data.

use crate::config::AccelRange;

/// Standard gravity in m/s^2.
pub const SENSORS_GRAVITY_STANDARD: f32 = 9.806_65;

/// Accelerometer sensitivity at +/-2 g, in g per LSB.
pub const ACCEL_G_PER_LSB_2G: f32 = 0.000_244;
/// Accelerometer sensitivity at +/-4 g, in g per LSB.
pub const ACCEL_G_PER_LSB_4G: f32 = 0.000_488;
/// Accelerometer sensitivity at +/-8 g, in g per LSB.
pub const ACCEL_G_PER_LSB_8G: f32 = 0.000_976;

/// Magnetometer sensitivity in microtesla per LSB.
pub const MAG_UT_PER_LSB: f32 = 0.1;
/// Magnetometer measurement limit in microtesla (symmetric).
pub const MAG_LIMIT_UT: f32 = 1200.0;

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the ratio to a raw count (truncating toward zero).
    ///
    /// Returns `None` for a zero denominator or when the result does not fit
    /// in an `i32`.
    pub const fn apply(self, raw: i16) -> Option<i32> {
        match (raw as i32).checked_mul(self.numerator) {
            Some(scaled) => scaled.checked_div(self.denominator),
            None => None,
        }
    }
}

/// Returns the accelerometer sensitivity in g per LSB.
pub const fn accel_g_per_lsb(range: AccelRange) -> f32 {
    match range {
        AccelRange::G2 => ACCEL_G_PER_LSB_2G,
        AccelRange::G4 => ACCEL_G_PER_LSB_4G,
        AccelRange::G8 => ACCEL_G_PER_LSB_8G,
    }
}

/// Returns the reportable accelerometer limits in g as `(min, max)`.
///
/// The negative bound is one count short of full scale.
pub const fn accel_limits_g(range: AccelRange) -> (f32, f32) {
    match range {
        AccelRange::G2 => (-1.999, 2.0),
        AccelRange::G4 => (-3.998, 4.0),
        AccelRange::G8 => (-7.996, 8.0),
    }
}

/// Returns the accelerometer sensitivity in m/s^2 per LSB.
pub fn accel_ms2_per_lsb(range: AccelRange) -> f32 {
    accel_g_per_lsb(range) * SENSORS_GRAVITY_STANDARD
}

/// Returns the nominal accelerometer sensitivity in LSB/g (14-bit counts).
pub const fn accel_lsb_per_g(range: AccelRange) -> i32 {
    match range {
        AccelRange::G2 => 4_096,
        AccelRange::G4 => 2_048,
        AccelRange::G8 => 1_024,
    }
}

/// Returns the accelerometer scale in milli-g per LSB as a ratio.
pub const fn accel_mg_per_lsb(range: AccelRange) -> ScaleFactor {
    ScaleFactor::new(1000, accel_lsb_per_g(range))
}

/// Returns the magnetometer sensitivity in LSB per microtesla.
pub const fn mag_lsb_per_ut() -> i32 {
    10
}

/// Returns the magnetometer scale in nanotesla per LSB as a ratio.
pub const fn mag_nt_per_lsb() -> ScaleFactor {
    ScaleFactor::new(1000, mag_lsb_per_ut())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_lsb_per_g_values() {
        assert_eq!(accel_lsb_per_g(AccelRange::G2), 4_096);
        assert_eq!(accel_lsb_per_g(AccelRange::G8), 1_024);
    }

    #[test]
    fn accel_sensitivity_doubles_with_range() {
        assert_eq!(accel_g_per_lsb(AccelRange::G4), 2.0 * accel_g_per_lsb(AccelRange::G2));
        assert_eq!(accel_g_per_lsb(AccelRange::G8), 2.0 * accel_g_per_lsb(AccelRange::G4));
    }

    #[test]
    fn integer_ratios() {
        assert_eq!(accel_mg_per_lsb(AccelRange::G2).apply(4_096), Some(1000));
        assert_eq!(accel_mg_per_lsb(AccelRange::G8).apply(-512), Some(-500));
        assert_eq!(mag_nt_per_lsb(), ScaleFactor::new(1000, 10));
        assert_eq!(mag_nt_per_lsb().apply(-3), Some(-300));
    }

    #[test]
    fn degenerate_ratios_yield_none() {
        assert_eq!(ScaleFactor::new(1, 0).apply(5), None);
        assert_eq!(ScaleFactor::new(i32::MAX, 1).apply(2), None);
        assert_eq!(ScaleFactor::new(1, -1).apply(i16::MIN), Some(32_768));
        assert_eq!(ScaleFactor::new(65_536, -1).apply(i16::MIN), None);
    }
}
