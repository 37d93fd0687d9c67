//! I2C address definitions for the FXOS8700.

/// FXOS8700 I2C addresses, selected by the SA1/SA0 straps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fxos8700Address {
    /// 0x1E (SA1 = low, SA0 = low).
    Sa1LowSa0Low,
    /// 0x1D (SA1 = low, SA0 = high).
    Sa1LowSa0High,
    /// 0x1C (SA1 = high, SA0 = low).
    Sa1HighSa0Low,
    /// 0x1F (SA1 = high, SA0 = high). Breakout board default.
    #[default]
    Sa1HighSa0High,
}

impl Fxos8700Address {
    /// Every strap option, breakout default first.
    pub const ALL: [Self; 4] = [
        Self::Sa1HighSa0High,
        Self::Sa1LowSa0Low,
        Self::Sa1LowSa0High,
        Self::Sa1HighSa0Low,
    ];

    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Sa1LowSa0Low => 0x1E,
            Self::Sa1LowSa0High => 0x1D,
            Self::Sa1HighSa0Low => 0x1C,
            Self::Sa1HighSa0High => 0x1F,
        }
    }
}
