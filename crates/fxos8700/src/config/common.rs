use crate::register::{ctrl_reg1, m_ctrl_reg1};

/// Sensor mode selection (M_CTRL_REG1.m_hms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorMode {
    /// Only the accelerometer is sampled.
    AccelOnly,
    /// Only the magnetometer is sampled.
    MagOnly,
    /// Accelerometer and magnetometer are sampled alternately.
    ///
    /// The effective per-sensor rate is half the accel/mag-only rate.
    Hybrid,
}

impl SensorMode {
    /// Returns the M_CTRL_REG1 m_hms bits.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::AccelOnly => 0b00,
            Self::MagOnly => 0b01,
            Self::Hybrid => 0b11,
        }
    }

    /// Returns true when the accelerometer is sampled in this mode.
    pub const fn accel_enabled(self) -> bool {
        matches!(self, Self::AccelOnly | Self::Hybrid)
    }

    /// Returns true when the magnetometer is sampled in this mode.
    pub const fn mag_enabled(self) -> bool {
        matches!(self, Self::MagOnly | Self::Hybrid)
    }
}

/// Accelerometer full-scale range selection (XYZ_DATA_CFG.fs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range. Not reachable with low-noise mode enabled.
    G8,
}

impl AccelRange {
    /// Returns the full-scale range in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }

    /// Returns the XYZ_DATA_CFG range bits.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G4 => 0b01,
            Self::G8 => 0b10,
        }
    }

    /// Returns true if low-noise mode may stay enabled with this range.
    pub(crate) const fn allows_low_noise(self) -> bool {
        !matches!(self, Self::G8)
    }
}

/// Output data rate selection (CTRL_REG1.dr).
///
/// The same 3-bit field selects different rates depending on the sensor mode;
/// see [`SensorMode::odr_table`] for which rates each mode offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// 800 Hz (accel/mag-only modes).
    Hz800,
    /// 400 Hz (all modes).
    Hz400,
    /// 200 Hz (all modes).
    Hz200,
    /// 100 Hz (all modes).
    Hz100,
    /// 50 Hz (all modes).
    Hz50,
    /// 25 Hz (hybrid mode).
    Hz25,
    /// 12.5 Hz (accel/mag-only modes).
    Hz12_5,
    /// 6.25 Hz (all modes).
    Hz6_25,
    /// 3.125 Hz (hybrid mode).
    Hz3_125,
    /// 1.5625 Hz (accel/mag-only modes).
    Hz1_5625,
    /// 0.7813 Hz (hybrid mode).
    Hz0_7813,
}

impl OutputDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz800 => 800_000,
            Self::Hz400 => 400_000,
            Self::Hz200 => 200_000,
            Self::Hz100 => 100_000,
            Self::Hz50 => 50_000,
            Self::Hz25 => 25_000,
            Self::Hz12_5 => 12_500,
            Self::Hz6_25 => 6_250,
            Self::Hz3_125 => 3_125,
            Self::Hz1_5625 => 1_563,
            Self::Hz0_7813 => 781,
        }
    }

    /// Returns the sample period in microseconds.
    pub const fn period_us(self) -> u32 {
        (1_000_000_000u64 / self.hz_milli() as u64) as u32
    }
}

/// Magnetometer oversampling ratio (M_CTRL_REG1.m_os).
///
/// Higher ratios average more samples per output, lowering noise at the cost
/// of current and bandwidth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOversamplingRatio {
    /// Oversampling ratio 0.
    Osr0,
    /// Oversampling ratio 1.
    Osr1,
    /// Oversampling ratio 2.
    Osr2,
    /// Oversampling ratio 3.
    Osr3,
    /// Oversampling ratio 4.
    Osr4,
    /// Oversampling ratio 5.
    Osr5,
    /// Oversampling ratio 6.
    Osr6,
    /// Oversampling ratio 7 (highest).
    Osr7,
}

impl MagOversamplingRatio {
    /// Returns the ratio as its 3-bit register value.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Osr0 => 0,
            Self::Osr1 => 1,
            Self::Osr2 => 2,
            Self::Osr3 => 3,
            Self::Osr4 => 4,
            Self::Osr5 => 5,
            Self::Osr6 => 6,
            Self::Osr7 => 7,
        }
    }

    pub(crate) const fn field(self) -> u8 {
        (self.bits() << m_ctrl_reg1::M_OS_SHIFT) & m_ctrl_reg1::M_OS_MASK
    }
}

/// Places a dr index into its CTRL_REG1 field position.
pub(crate) const fn dr_field(index: u8) -> u8 {
    (index << ctrl_reg1::DR_SHIFT) & ctrl_reg1::DR_MASK
}

/// Extracts the dr index from a CTRL_REG1 value.
pub(crate) const fn dr_index(ctrl_reg1_value: u8) -> u8 {
    (ctrl_reg1_value & ctrl_reg1::DR_MASK) >> ctrl_reg1::DR_SHIFT
}
