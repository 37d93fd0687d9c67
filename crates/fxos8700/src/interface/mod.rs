//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;

pub use address::Fxos8700Address;
pub use i2c::I2cInterface;

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal blocking register I/O for the device core.
pub trait Interface: sealed::Sealed {
    /// Checks that something acknowledges the device address.
    fn probe(&mut self) -> Result<(), Error>;
    /// Reads a single register.
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Reads a contiguous block of registers into `buffer`.
    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single register.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
}
