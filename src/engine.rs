mod instructions;

use crate::cpu::{CpuState, RegisterSet, WideReg};
use crate::error::Result;
use crate::format::DataFormat;
use bitflags::bitflags;

bitflags! {
    /// Engine feature flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EngineFlags: u32 {
        /// Record destination registers in the modified-register bitmap.
        const TRACK_MODIFIED = 1 << 0;
    }
}

/// Vector execution engine: a register file plus one method per operation
/// kind. Each method computes the exact architectural result lane by lane
/// and commits it; a failed lane access aborts the sweep at that point,
/// leaving earlier lanes written.
pub struct Engine {
    pub cpu: CpuState,
    flags: EngineFlags,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineFlags::empty())
    }
}

impl Engine {
    pub fn new(flags: EngineFlags) -> Self {
        Self {
            cpu: CpuState::new(),
            flags,
        }
    }

    pub fn wr_read(&self, wr: u32) -> Result<u128> {
        Ok(self.cpu.wreg(wr)?.to_u128())
    }

    pub fn wr_write(&mut self, wr: u32, value: u128) -> Result<()> {
        self.cpu.set_wreg(wr, WideReg::from_u128(value))
    }

    /// Dirty bitmap of registers written by operations since the last
    /// `clear_modified`. Only maintained with `TRACK_MODIFIED` set.
    pub fn modified(&self) -> RegisterSet {
        self.cpu.modified
    }

    pub fn clear_modified(&mut self) {
        self.cpu.modified.clear();
    }

    /// Signalled once per operation, after the full lane sweep.
    pub(crate) fn mark_modified(&mut self, wd: u32) {
        if self.flags.contains(EngineFlags::TRACK_MODIFIED) {
            self.cpu.modified.insert(wd);
        }
    }

    /// Lane sweep for two-source operations. Operand lanes are fetched
    /// sign-extended; kernels working in the unsigned domain mask
    /// internally.
    pub(crate) fn vec_binary(
        &mut self,
        df: DataFormat,
        wd: u32,
        ws: u32,
        wt: u32,
        f: fn(DataFormat, i64, i64) -> i64,
    ) -> Result<()> {
        for i in 0..df.elements() {
            let a = self.cpu.load_signed(ws, df, i)?;
            let b = self.cpu.load_signed(wt, df, i)?;
            self.cpu.store(wd, df, i, f(df, a, b) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }

    /// Lane sweep for source-plus-immediate operations; the immediate is
    /// broadcast as the second kernel operand.
    pub(crate) fn vec_binary_imm(
        &mut self,
        df: DataFormat,
        wd: u32,
        ws: u32,
        imm: i64,
        f: fn(DataFormat, i64, i64) -> i64,
    ) -> Result<()> {
        for i in 0..df.elements() {
            let a = self.cpu.load_signed(ws, df, i)?;
            self.cpu.store(wd, df, i, f(df, a, imm) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }

    /// Lane sweep for accumulate forms: the kernel's first operand is the
    /// destination's current lane value.
    pub(crate) fn vec_ternary(
        &mut self,
        df: DataFormat,
        wd: u32,
        ws: u32,
        wt: u32,
        f: fn(DataFormat, i64, i64, i64) -> i64,
    ) -> Result<()> {
        for i in 0..df.elements() {
            let dest = self.cpu.load_signed(wd, df, i)?;
            let a = self.cpu.load_signed(ws, df, i)?;
            let b = self.cpu.load_signed(wt, df, i)?;
            self.cpu.store(wd, df, i, f(df, dest, a, b) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }

    /// Accumulate form with an immediate second operand.
    pub(crate) fn vec_ternary_imm(
        &mut self,
        df: DataFormat,
        wd: u32,
        ws: u32,
        imm: i64,
        f: fn(DataFormat, i64, i64, i64) -> i64,
    ) -> Result<()> {
        for i in 0..df.elements() {
            let dest = self.cpu.load_signed(wd, df, i)?;
            let a = self.cpu.load_signed(ws, df, i)?;
            self.cpu.store(wd, df, i, f(df, dest, a, imm) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }
}
