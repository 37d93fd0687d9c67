//! I2C interface adapter for the FXOS8700.

use embedded_hal::i2c::I2c;

use super::{Interface, sealed};
use crate::error::Error;

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit I2C address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Changes the 7-bit I2C address.
    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn probe(&mut self) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[])
            .map_err(|_| Error::NotPresent)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.i2c
            .write_read(self.address, &[reg], buffer)
            .map_err(|_| Error::Bus)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [reg, value];
        self.i2c
            .write(self.address, &buffer)
            .map_err(|_| Error::Bus)
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Op {
        Write(Vec<u8>),
        Read(usize),
    }

    #[derive(Default)]
    struct RecordingI2c {
        transactions: Vec<(u8, Vec<Op>)>,
        read_fill: u8,
        nack: bool,
    }

    impl ErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            let mut ops = Vec::new();
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(data) => ops.push(Op::Write(data.to_vec())),
                    Operation::Read(buffer) => {
                        buffer.fill(self.read_fill);
                        ops.push(Op::Read(buffer.len()));
                    }
                }
            }
            self.transactions.push((address, ops));
            Ok(())
        }
    }

    #[test]
    fn write_reg_sends_address_then_value() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x1F);
        interface.write_reg(0x2A, 0x19).expect("write");

        let i2c = interface.release();
        assert_eq!(
            i2c.transactions,
            vec![(0x1F, vec![Op::Write(vec![0x2A, 0x19])])]
        );
    }

    #[test]
    fn read_regs_uses_write_read() {
        let bus = RecordingI2c {
            read_fill: 0xC7,
            ..RecordingI2c::default()
        };
        let mut interface = I2cInterface::new(bus, 0x1E);
        let mut buffer = [0u8; 13];
        interface.read_regs(0x00, &mut buffer).expect("read");
        assert_eq!(buffer, [0xC7; 13]);

        let i2c = interface.release();
        assert_eq!(
            i2c.transactions,
            vec![(0x1E, vec![Op::Write(vec![0x00]), Op::Read(13)])]
        );
    }

    #[test]
    fn empty_read_skips_the_bus() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x1F);
        interface.read_regs(0x00, &mut []).expect("read");
        assert!(interface.release().transactions.is_empty());
    }

    #[test]
    fn nack_maps_to_driver_errors() {
        let bus = RecordingI2c {
            nack: true,
            ..RecordingI2c::default()
        };
        let mut interface = I2cInterface::new(bus, 0x1F);
        assert_eq!(interface.probe(), Err(Error::NotPresent));
        assert_eq!(interface.read_reg(0x0D), Err(Error::Bus));
        assert_eq!(interface.write_reg(0x2A, 0), Err(Error::Bus));
    }

    #[test]
    fn set_address_redirects_transactions() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x1F);
        interface.set_address(0x1C);
        assert_eq!(interface.address(), 0x1C);
        interface.probe().expect("probe");
        assert_eq!(
            interface.release().transactions,
            vec![(0x1C, vec![Op::Write(vec![])])]
        );
    }
}
