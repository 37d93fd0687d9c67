//! Device core operations for the FXOS8700.

use embedded_hal::delay::DelayNs;

use crate::config::{
    AccelRange, Config, MagOversamplingRatio, OutputDataRate, SensorMode, dr_index,
};
use crate::data::{
    AccelRaw, COMBINED_BLOCK_LEN, COMBINED_BLOCK_START, MAG_LIMIT_UT, MAG_UT_PER_LSB, MagRaw,
    SENSORS_GRAVITY_STANDARD, SINGLE_BLOCK_LEN, accel_limits_g, accel_ms2_per_lsb,
    decode_combined_block, split_single_block,
};
use crate::error::Error;
use crate::interface::{I2cInterface, Interface};
use crate::register::{
    Register, ctrl_reg1, ctrl_reg2, m_ctrl_reg1, m_ctrl_reg2, sysmod, who_am_i, xyz_data_cfg,
};
use crate::sensor::{Clock, CombinedReading, SensorDescriptor, SensorEvent, SensorType};

/// Name reported in descriptors.
pub(crate) const DEVICE_NAME: &str = "FXOS8700";
/// Version reported in descriptors.
pub(crate) const DRIVER_VERSION: i32 = 1;

pub(crate) struct DeviceCore<I, D, C> {
    interface: I,
    delay: D,
    clock: C,
    config: Config,
    accel_raw: AccelRaw,
    mag_raw: MagRaw,
}

impl<I, D, C> DeviceCore<I, D, C> {
    pub(crate) fn new(interface: I, delay: D, clock: C, config: Config) -> Self {
        Self {
            interface,
            delay,
            clock,
            config,
            accel_raw: AccelRaw::default(),
            mag_raw: MagRaw::default(),
        }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) const fn accel_raw(&self) -> AccelRaw {
        self.accel_raw
    }

    pub(crate) const fn mag_raw(&self) -> MagRaw {
        self.mag_raw
    }

    pub(crate) fn release(self) -> (I, D, C) {
        (self.interface, self.delay, self.clock)
    }

    pub(crate) fn accel_descriptor(&self) -> SensorDescriptor {
        let range = self.config.accel_range;
        let (min_g, max_g) = accel_limits_g(range);
        SensorDescriptor {
            name: DEVICE_NAME,
            version: DRIVER_VERSION,
            sensor_id: self.config.accel_sensor_id,
            sensor_type: SensorType::Accelerometer,
            max_value: max_g * SENSORS_GRAVITY_STANDARD,
            min_value: min_g * SENSORS_GRAVITY_STANDARD,
            resolution: accel_ms2_per_lsb(range),
            min_delay_us: self.config.odr.period_us(),
        }
    }

    pub(crate) fn mag_descriptor(&self) -> SensorDescriptor {
        SensorDescriptor {
            name: DEVICE_NAME,
            version: DRIVER_VERSION,
            sensor_id: self.config.mag_sensor_id,
            sensor_type: SensorType::MagneticField,
            max_value: MAG_LIMIT_UT,
            min_value: -MAG_LIMIT_UT,
            resolution: MAG_UT_PER_LSB,
            min_delay_us: self.config.odr.period_us(),
        }
    }

    fn accel_event(&self, raw: AccelRaw, timestamp_ms: u32) -> SensorEvent {
        SensorEvent {
            sensor_id: self.config.accel_sensor_id,
            sensor_type: SensorType::Accelerometer,
            timestamp_ms,
            data: raw.to_ms2(self.config.accel_range),
        }
    }

    fn mag_event(&self, raw: MagRaw, timestamp_ms: u32) -> SensorEvent {
        SensorEvent {
            sensor_id: self.config.mag_sensor_id,
            sensor_type: SensorType::MagneticField,
            timestamp_ms,
            data: raw.to_microtesla(),
        }
    }
}

impl<I, D, C> DeviceCore<I, D, C>
where
    I: Interface,
    D: DelayNs,
    C: Clock,
{
    /// Probes the bus, checks the configuration and identity, then applies it.
    pub(crate) fn init(&mut self) -> Result<(), Error> {
        self.interface.probe()?;
        self.config.validate()?;
        self.verify_device()?;
        self.apply_config()
    }

    pub(crate) fn verify_device(&mut self) -> Result<(), Error> {
        let who = self.read_reg(Register::WhoAmI)?;
        if who != who_am_i::EXPECTED {
            warn!("unexpected WHO_AM_I {:#x}", who);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Writes the stored configuration; on failure the requested configuration
    /// is restored.
    fn apply_config(&mut self) -> Result<(), Error> {
        let config = self.config;
        let result = self.write_config(config);
        if result.is_err() {
            self.config = config;
        }
        result
    }

    fn write_config(&mut self, config: Config) -> Result<(), Error> {
        let range = config.accel_range;
        self.with_standby(|core| {
            core.modify_reg(Register::XyzDataCfg, xyz_data_cfg::FS_MASK, range.bits())?;
            let lnoise = if range.allows_low_noise() {
                ctrl_reg1::LNOISE
            } else {
                0
            };
            core.modify_reg(Register::CtrlReg1, ctrl_reg1::LNOISE, lnoise)?;
            core.modify_reg(
                Register::CtrlReg2,
                ctrl_reg2::MODS_MASK,
                ctrl_reg2::MODS_HIGH_RESOLUTION,
            )
        })?;
        self.set_sensor_mode(config.mode)?;
        if !self.set_output_data_rate(config.odr)? {
            return Err(Error::InvalidConfig);
        }
        self.set_mag_oversampling_ratio(config.mag_osr)?;
        self.accel_raw = AccelRaw::default();
        self.mag_raw = MagRaw::default();
        debug!(
            "configured {:?} {:?} {:?} {:?}",
            config.mode, config.accel_range, config.odr, config.mag_osr
        );
        Ok(())
    }

    /// Enters standby (`true`) or returns to active mode (`false`).
    pub(crate) fn set_standby(&mut self, standby: bool) -> Result<(), Error> {
        if standby {
            self.enter_standby()
        } else {
            self.exit_standby()
        }
    }

    fn enter_standby(&mut self) -> Result<(), Error> {
        let ctrl1 = self.read_reg(Register::CtrlReg1)?;
        self.write_reg(Register::CtrlReg1, ctrl1 & !ctrl_reg1::ACTIVE)?;
        self.wait_sysmod(true)
    }

    fn exit_standby(&mut self) -> Result<(), Error> {
        let ctrl1 = self.read_reg(Register::CtrlReg1)?;
        self.write_reg(Register::CtrlReg1, ctrl1 | ctrl_reg1::ACTIVE)?;
        self.wait_sysmod(false)
    }

    /// Polls SYSMOD until it reports standby (or anything else when `standby` is false).
    fn wait_sysmod(&mut self, standby: bool) -> Result<(), Error> {
        const POLL_DELAY_NS: u32 = 10_000_000;

        let attempts = self.config.standby_poll_attempts.max(1);
        for _ in 0..attempts {
            let mode = self.read_reg(Register::SysMod)? & sysmod::SYSMOD_MASK;
            if (mode == sysmod::STANDBY) == standby {
                return Ok(());
            }
            self.delay.delay_ns(POLL_DELAY_NS);
        }

        warn!("SYSMOD transition timed out (standby = {})", standby);
        Err(Error::StandbyTimeout)
    }

    /// Runs `f` between standby entry and exit.
    ///
    /// `f` never runs when standby entry fails. Exit is attempted even when `f`
    /// fails; the first error wins.
    fn with_standby<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.enter_standby()?;
        let result = f(self);
        let exit = self.exit_standby();
        let value = result?;
        exit?;
        Ok(value)
    }

    pub(crate) fn set_sensor_mode(&mut self, mode: SensorMode) -> Result<(), Error> {
        let ctrl1 = self.with_standby(|core| {
            core.modify_reg(Register::MCtrlReg1, m_ctrl_reg1::M_HMS_MASK, mode.bits())?;
            let autoinc = if mode == SensorMode::Hybrid {
                m_ctrl_reg2::HYB_AUTOINC_MODE
            } else {
                0
            };
            core.modify_reg(Register::MCtrlReg2, m_ctrl_reg2::HYB_AUTOINC_MODE, autoinc)?;
            core.read_reg(Register::CtrlReg1)
        })?;
        // The dr field keeps its bits across the mode change but selects from another table.
        self.config.mode = mode;
        self.config.odr = mode.odr_table().rate_at(dr_index(ctrl1));
        debug!("sensor mode {:?}, rate now {:?}", mode, self.config.odr);
        Ok(())
    }

    pub(crate) fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error> {
        self.with_standby(|core| {
            core.modify_reg(Register::XyzDataCfg, xyz_data_cfg::FS_MASK, range.bits())?;
            if !range.allows_low_noise() {
                core.modify_reg(Register::CtrlReg1, ctrl_reg1::LNOISE, 0)?;
            }
            Ok(())
        })?;
        self.config.accel_range = range;
        debug!("accel range {:?}", range);
        Ok(())
    }

    /// Returns `Ok(false)` without touching the device when the current mode
    /// does not offer `rate`.
    pub(crate) fn set_output_data_rate(&mut self, rate: OutputDataRate) -> Result<bool, Error> {
        let mode = self.config.mode;
        let Some(dr) = mode.odr_table().dr_bits(rate) else {
            warn!("{:?} not available in {:?}", rate, mode);
            return Ok(false);
        };
        self.with_standby(|core| core.modify_reg(Register::CtrlReg1, ctrl_reg1::DR_MASK, dr))?;
        self.config.odr = rate;
        debug!("output data rate {:?}", rate);
        Ok(true)
    }

    pub(crate) fn set_mag_oversampling_ratio(
        &mut self,
        ratio: MagOversamplingRatio,
    ) -> Result<(), Error> {
        self.with_standby(|core| {
            core.modify_reg(Register::MCtrlReg1, m_ctrl_reg1::M_OS_MASK, ratio.field())
        })?;
        self.config.mag_osr = ratio;
        debug!("mag oversampling {:?}", ratio);
        Ok(())
    }

    /// Burst-reads status, accelerometer and magnetometer in one transaction.
    pub(crate) fn read_combined(&mut self) -> Result<CombinedReading, Error> {
        if self.config.mode != SensorMode::Hybrid {
            return Err(Error::Unsupported);
        }
        let mut buffer = [0u8; COMBINED_BLOCK_LEN];
        self.read_regs(COMBINED_BLOCK_START, &mut buffer)?;
        let timestamp_ms = self.clock.now_ms();

        let raw = decode_combined_block(&buffer);
        self.accel_raw = raw.accel;
        self.mag_raw = raw.mag;
        if raw.status.overrun() {
            trace!("accel overrun, status {:#x}", raw.status.bits());
        }
        Ok(CombinedReading {
            accel: self.accel_event(raw.accel, timestamp_ms),
            mag: self.mag_event(raw.mag, timestamp_ms),
            status: raw.status,
        })
    }

    pub(crate) fn read_accel(&mut self) -> Result<SensorEvent, Error> {
        if !self.config.mode.accel_enabled() {
            return Err(Error::Unsupported);
        }
        let mut buffer = [0u8; SINGLE_BLOCK_LEN];
        self.read_regs(Register::Status, &mut buffer)?;
        let timestamp_ms = self.clock.now_ms();
        let (status, axes) = split_single_block(&buffer);
        trace!("accel status {:#x}", status.bits());
        self.accel_raw = AccelRaw::from_be_bytes(axes);
        Ok(self.accel_event(self.accel_raw, timestamp_ms))
    }

    pub(crate) fn read_mag(&mut self) -> Result<SensorEvent, Error> {
        if !self.config.mode.mag_enabled() {
            return Err(Error::Unsupported);
        }
        let mut buffer = [0u8; SINGLE_BLOCK_LEN];
        self.read_regs(Register::MDrStatus, &mut buffer)?;
        let timestamp_ms = self.clock.now_ms();
        let (status, axes) = split_single_block(&buffer);
        trace!("mag status {:#x}", status.bits());
        self.mag_raw = MagRaw::from_be_bytes(axes);
        Ok(self.mag_event(self.mag_raw, timestamp_ms))
    }

    /// Reads the only sensor sampled in a single-sensor mode.
    pub(crate) fn read_event(&mut self) -> Result<SensorEvent, Error> {
        match self.config.mode {
            SensorMode::AccelOnly => self.read_accel(),
            SensorMode::MagOnly => self.read_mag(),
            SensorMode::Hybrid => Err(Error::Unsupported),
        }
    }

    pub(crate) fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        self.interface.read_reg(reg.addr())
    }

    pub(crate) fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer)
    }

    pub(crate) fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        trace!("write {:?} = {:#x}", reg, value);
        self.interface.write_reg(reg.addr(), value)
    }

    /// Read-modify-write of the bits selected by `mask`.
    fn modify_reg(&mut self, reg: Register, mask: u8, bits: u8) -> Result<(), Error> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, (current & !mask) | (bits & mask))
    }
}

impl<I2C, D, C> DeviceCore<I2cInterface<I2C>, D, C> {
    pub(crate) fn set_i2c_address(&mut self, address: u8) {
        self.interface.set_address(address);
    }

    pub(crate) const fn i2c_address(&self) -> u8 {
        self.interface.address()
    }
}
