//! Output data rate availability per sensor mode.
//!
//! CTRL_REG1.dr is a 3-bit index whose meaning depends on the sensor mode: in
//! hybrid mode the two sensors alternate, so every index selects half the
//! accel/mag-only rate. Each table maps dr index -> rate, and a rate that is
//! missing from the table for the current mode cannot be selected.

use super::common::{OutputDataRate, SensorMode, dr_field};

/// Rate lookup table for one group of sensor modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OdrTable {
    rates: &'static [OutputDataRate; 8],
}

const ACCEL_MAG_ONLY_RATES: [OutputDataRate; 8] = [
    OutputDataRate::Hz800,
    OutputDataRate::Hz400,
    OutputDataRate::Hz200,
    OutputDataRate::Hz100,
    OutputDataRate::Hz50,
    OutputDataRate::Hz12_5,
    OutputDataRate::Hz6_25,
    OutputDataRate::Hz1_5625,
];

const HYBRID_RATES: [OutputDataRate; 8] = [
    OutputDataRate::Hz400,
    OutputDataRate::Hz200,
    OutputDataRate::Hz100,
    OutputDataRate::Hz50,
    OutputDataRate::Hz25,
    OutputDataRate::Hz6_25,
    OutputDataRate::Hz3_125,
    OutputDataRate::Hz0_7813,
];

/// Rates available in accelerometer-only and magnetometer-only modes.
pub const ACCEL_MAG_ONLY_ODR: OdrTable = OdrTable {
    rates: &ACCEL_MAG_ONLY_RATES,
};

/// Rates available in hybrid mode.
pub const HYBRID_ODR: OdrTable = OdrTable {
    rates: &HYBRID_RATES,
};

impl OdrTable {
    /// Returns the dr index selecting `rate`, if the table offers it.
    pub fn index_of(self, rate: OutputDataRate) -> Option<u8> {
        self.rates
            .iter()
            .position(|&entry| entry == rate)
            .map(|index| index as u8)
    }

    /// Returns the CTRL_REG1 dr field value selecting `rate`, if offered.
    pub fn dr_bits(self, rate: OutputDataRate) -> Option<u8> {
        self.index_of(rate).map(dr_field)
    }

    /// Returns the rate selected by a dr index (only the low 3 bits are used).
    pub const fn rate_at(self, index: u8) -> OutputDataRate {
        self.rates[(index & 0b111) as usize]
    }

    /// Returns true if `rate` can be selected with this table.
    pub fn contains(self, rate: OutputDataRate) -> bool {
        self.index_of(rate).is_some()
    }

    /// Iterates over the offered rates in dr index order.
    pub fn rates(self) -> impl Iterator<Item = OutputDataRate> {
        self.rates.iter().copied()
    }
}

impl SensorMode {
    /// Returns the output data rate table that applies in this mode.
    pub const fn odr_table(self) -> OdrTable {
        match self {
            Self::Hybrid => HYBRID_ODR,
            Self::AccelOnly | Self::MagOnly => ACCEL_MAG_ONLY_ODR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RATES: [OutputDataRate; 11] = [
        OutputDataRate::Hz800,
        OutputDataRate::Hz400,
        OutputDataRate::Hz200,
        OutputDataRate::Hz100,
        OutputDataRate::Hz50,
        OutputDataRate::Hz25,
        OutputDataRate::Hz12_5,
        OutputDataRate::Hz6_25,
        OutputDataRate::Hz3_125,
        OutputDataRate::Hz1_5625,
        OutputDataRate::Hz0_7813,
    ];

    #[test]
    fn hybrid_table_bit_patterns() {
        assert_eq!(HYBRID_ODR.dr_bits(OutputDataRate::Hz400), Some(0x00));
        assert_eq!(HYBRID_ODR.dr_bits(OutputDataRate::Hz100), Some(0x10));
        assert_eq!(HYBRID_ODR.dr_bits(OutputDataRate::Hz25), Some(0x20));
        assert_eq!(HYBRID_ODR.dr_bits(OutputDataRate::Hz0_7813), Some(0x38));
        assert_eq!(HYBRID_ODR.dr_bits(OutputDataRate::Hz800), None);
    }

    #[test]
    fn accel_mag_only_table_bit_patterns() {
        assert_eq!(ACCEL_MAG_ONLY_ODR.dr_bits(OutputDataRate::Hz800), Some(0x00));
        assert_eq!(ACCEL_MAG_ONLY_ODR.dr_bits(OutputDataRate::Hz100), Some(0x18));
        assert_eq!(ACCEL_MAG_ONLY_ODR.dr_bits(OutputDataRate::Hz12_5), Some(0x28));
        assert_eq!(ACCEL_MAG_ONLY_ODR.dr_bits(OutputDataRate::Hz1_5625), Some(0x38));
        assert_eq!(ACCEL_MAG_ONLY_ODR.dr_bits(OutputDataRate::Hz25), None);
    }

    #[test]
    fn every_rate_is_offered_by_at_least_one_table() {
        for rate in ALL_RATES {
            assert!(HYBRID_ODR.contains(rate) || ACCEL_MAG_ONLY_ODR.contains(rate));
        }
    }

    #[test]
    fn shared_rates_use_different_indices() {
        let shared = ALL_RATES
            .iter()
            .filter(|&&rate| HYBRID_ODR.contains(rate) && ACCEL_MAG_ONLY_ODR.contains(rate));
        for &rate in shared {
            let hybrid = HYBRID_ODR.index_of(rate).unwrap();
            let single = ACCEL_MAG_ONLY_ODR.index_of(rate).unwrap();
            assert_eq!(hybrid + 1, single);
        }
    }

    #[test]
    fn mode_selects_table() {
        assert_eq!(SensorMode::Hybrid.odr_table(), HYBRID_ODR);
        assert_eq!(SensorMode::AccelOnly.odr_table(), ACCEL_MAG_ONLY_ODR);
        assert_eq!(SensorMode::MagOnly.odr_table(), ACCEL_MAG_ONLY_ODR);
    }

    #[test]
    fn rate_at_masks_index() {
        assert_eq!(HYBRID_ODR.rate_at(2), OutputDataRate::Hz100);
        assert_eq!(HYBRID_ODR.rate_at(0b1010), OutputDataRate::Hz100);
    }
}
