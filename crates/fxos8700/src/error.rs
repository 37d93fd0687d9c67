//! Error type for the FXOS8700 driver.

/// Error type for FXOS8700 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C NACK, arbitration loss, etc.).
    Bus,
    /// Nothing acknowledged the configured bus address.
    NotPresent,
    /// WHO_AM_I did not match the FXOS8700 identifier.
    WrongDevice,
    /// SYSMOD never reached the requested state within the poll budget.
    StandbyTimeout,
    /// The configuration violates the output data rate / sensor mode table.
    InvalidConfig,
    /// The requested sensor is not sampled in the current sensor mode.
    Unsupported,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Bus => "bus error",
            Self::NotPresent => "device not present",
            Self::WrongDevice => "unexpected WHO_AM_I value",
            Self::StandbyTimeout => "timed out waiting for SYSMOD transition",
            Self::InvalidConfig => "output data rate not available in sensor mode",
            Self::Unsupported => "sensor not sampled in current mode",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}
