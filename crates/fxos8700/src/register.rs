//! FXOS8700 register definitions.
//!
//! Only the registers the driver touches are listed, together with the bit
//! masks of the fields it reads or writes.

#![allow(dead_code)] // The axis registers only bound the burst windows.

/// FXOS8700 register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Accelerometer data status (DR_STATUS).
    Status = 0x00,
    /// Accelerometer Z-axis LSB, last byte of the accelerometer block.
    OutZLsb = 0x06,
    /// Current system mode.
    SysMod = 0x0B,
    /// Device identifier register.
    WhoAmI = 0x0D,
    /// Accelerometer full-scale configuration.
    XyzDataCfg = 0x0E,
    /// Control register 1 (ODR, low noise, active).
    CtrlReg1 = 0x2A,
    /// Control register 2 (oversampling mode).
    CtrlReg2 = 0x2B,
    /// Magnetometer data status.
    MDrStatus = 0x32,
    /// Magnetometer X-axis MSB.
    MOutXMsb = 0x33,
    /// Magnetometer Z-axis LSB, last byte of the magnetometer block.
    MOutZLsb = 0x38,
    /// Magnetometer control register 1 (sensor mode, oversampling).
    MCtrlReg1 = 0x5B,
    /// Magnetometer control register 2 (hybrid auto-increment).
    MCtrlReg2 = 0x5C,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected values for WHO_AM_I.
pub mod who_am_i {
    /// Expected WHO_AM_I register value.
    pub const EXPECTED: u8 = 0b1100_0111;
}

/// DR_STATUS / M_DR_STATUS register bits (same layout for both).
pub mod status {
    /// X, Y or Z data was overwritten before it was read.
    pub const ZYXOW: u8 = 0b1000_0000;
    /// New X, Y and Z data ready.
    pub const ZYXDR: u8 = 0b0000_1000;
    /// New X-axis data ready.
    pub const XDR: u8 = 0b0000_0001;
}

/// SYSMOD register fields.
pub mod sysmod {
    /// System mode field mask.
    pub const SYSMOD_MASK: u8 = 0b0000_0011;
    /// Standby.
    pub const STANDBY: u8 = 0b00;
    /// Wake (active, sampling).
    pub const WAKE: u8 = 0b01;
}

/// XYZ_DATA_CFG register fields.
pub mod xyz_data_cfg {
    /// High-pass filtered output select.
    pub const HPF_OUT: u8 = 0b0001_0000;
    /// Accelerometer full-scale range mask.
    pub const FS_MASK: u8 = 0b0000_0011;
}

/// CTRL_REG1 register fields.
pub mod ctrl_reg1 {
    /// Output data rate selection mask.
    pub const DR_MASK: u8 = 0b0011_1000;
    /// Output data rate selection shift.
    pub const DR_SHIFT: u8 = 3;
    /// Reduced-noise mode (limits the accelerometer to +/-4 g).
    pub const LNOISE: u8 = 0b0000_0100;
    /// Active mode; cleared for standby.
    pub const ACTIVE: u8 = 0b0000_0001;
}

/// CTRL_REG2 register fields.
pub mod ctrl_reg2 {
    /// Active-mode oversampling mode mask.
    pub const MODS_MASK: u8 = 0b0000_0011;
    /// High-resolution oversampling.
    pub const MODS_HIGH_RESOLUTION: u8 = 0b10;
}

/// M_CTRL_REG1 register fields.
pub mod m_ctrl_reg1 {
    /// Oversampling ratio mask.
    pub const M_OS_MASK: u8 = 0b0001_1100;
    /// Oversampling ratio shift.
    pub const M_OS_SHIFT: u8 = 2;
    /// Hybrid mode select mask.
    pub const M_HMS_MASK: u8 = 0b0000_0011;
}

/// M_CTRL_REG2 register fields.
pub mod m_ctrl_reg2 {
    /// Hybrid auto-increment: burst reads roll from 0x06 to 0x33.
    pub const HYB_AUTOINC_MODE: u8 = 0b0010_0000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_burst_window_is_contiguous() {
        assert_eq!(Register::OutZLsb.addr() + 1, 0x07);
        assert_eq!(Register::MOutXMsb.addr(), Register::MDrStatus.addr() + 1);
        assert_eq!(Register::MOutZLsb.addr() - Register::MOutXMsb.addr(), 5);
    }

    #[test]
    fn masks_do_not_overlap() {
        assert_eq!(ctrl_reg1::DR_MASK & ctrl_reg1::LNOISE, 0);
        assert_eq!(ctrl_reg1::DR_MASK & ctrl_reg1::ACTIVE, 0);
        assert_eq!(m_ctrl_reg1::M_OS_MASK & m_ctrl_reg1::M_HMS_MASK, 0);
    }
}
