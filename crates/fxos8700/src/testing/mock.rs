extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};
use crate::register::{Register, ctrl_reg1, sysmod, who_am_i};
use crate::sensor::Clock;

/// Register map that also plays the SYSMOD side of the standby handshake.
///
/// A CTRL_REG1 write retargets SYSMOD to Standby or Wake from the active bit;
/// SYSMOD reads keep reporting the old state for `sysmod_lag` polls.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    reads: Vec<u8>,
    bursts: Vec<(u8, usize)>,
    sysmod_target: u8,
    sysmod_pending: u16,
    sysmod_lag: u16,
    pub(crate) sysmod_stuck: bool,
    pub(crate) fail_write_to: Option<u8>,
    /// One-shot failure of the n-th write attempt (1-based).
    pub(crate) fail_nth_write: Option<usize>,
    write_attempts: usize,
    pub(crate) fail_reads: bool,
    pub(crate) absent: bool,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: Vec::new(),
            bursts: Vec::new(),
            sysmod_target: sysmod::STANDBY,
            sysmod_pending: 0,
            sysmod_lag: 0,
            sysmod_stuck: false,
            fail_write_to: None,
            fail_nth_write: None,
            write_attempts: 0,
            fail_reads: false,
            absent: false,
        }
    }
}

impl MockInterface {
    /// Powered-up part: correct WHO_AM_I, standby.
    pub(crate) fn fxos8700() -> Self {
        Self::default().with_reg(Register::WhoAmI.addr(), who_am_i::EXPECTED)
    }

    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_sysmod_lag(mut self, lag: u16) -> Self {
        self.sysmod_lag = lag;
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
        if reg == Register::SysMod.addr() {
            self.sysmod_target = value & sysmod::SYSMOD_MASK;
            self.sysmod_pending = 0;
        }
    }

    pub(crate) fn set_regs(&mut self, reg: u8, values: &[u8]) {
        for (offset, value) in values.iter().enumerate() {
            self.set_reg(reg.wrapping_add(offset as u8), *value);
        }
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub(crate) fn writes_to(&self, reg: u8) -> usize {
        self.writes.iter().filter(|(addr, _)| *addr == reg).count()
    }

    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub(crate) fn bursts(&self) -> &[(u8, usize)] {
        &self.bursts
    }

    pub(crate) fn clear_log(&mut self) {
        self.writes.clear();
        self.reads.clear();
        self.bursts.clear();
    }

    fn poll_sysmod(&mut self) -> u8 {
        let addr = Register::SysMod.addr() as usize;
        let current = self.regs[addr] & sysmod::SYSMOD_MASK;
        if current != self.sysmod_target && !self.sysmod_stuck {
            if self.sysmod_pending == 0 {
                self.regs[addr] = (self.regs[addr] & !sysmod::SYSMOD_MASK) | self.sysmod_target;
            } else {
                self.sysmod_pending -= 1;
            }
        }
        self.regs[addr]
    }
}

impl Interface for MockInterface {
    fn probe(&mut self) -> Result<(), Error> {
        if self.absent {
            return Err(Error::NotPresent);
        }
        Ok(())
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        if self.fail_reads {
            return Err(Error::Bus);
        }
        self.reads.push(reg);
        if reg == Register::SysMod.addr() {
            return Ok(self.poll_sysmod());
        }
        Ok(self.regs[reg as usize])
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if self.fail_reads {
            return Err(Error::Bus);
        }
        if buffer.is_empty() {
            return Ok(());
        }
        self.bursts.push((reg, buffer.len()));
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        Ok(())
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.write_attempts += 1;
        if self.fail_nth_write == Some(self.write_attempts) {
            self.fail_nth_write = None;
            return Err(Error::Bus);
        }
        if self.fail_write_to == Some(reg) {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        if reg == Register::CtrlReg1.addr() {
            let target = if (value & ctrl_reg1::ACTIVE) != 0 {
                sysmod::WAKE
            } else {
                sysmod::STANDBY
            };
            if target != self.sysmod_target {
                self.sysmod_target = target;
                self.sysmod_pending = self.sysmod_lag;
            }
        }
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
    }
}

/// Returns `now`, then advances it by `step`.
#[derive(Default, Debug)]
pub(crate) struct MockClock {
    pub(crate) now: u32,
    pub(crate) step: u32,
    pub(crate) calls: u32,
}

impl MockClock {
    pub(crate) fn starting_at(now: u32, step: u32) -> Self {
        Self {
            now,
            step,
            calls: 0,
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&mut self) -> u32 {
        let now = self.now;
        self.now = self.now.wrapping_add(self.step);
        self.calls += 1;
        now
    }
}
