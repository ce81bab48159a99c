use crate::error::{EmulatorError, Result};
use crate::format::DataFormat;
use std::fmt;

/// Width of one wide register in bits.
pub const WR_BITS: u32 = 128;
/// Width of one wide register in bytes.
pub const WR_BYTES: usize = (WR_BITS / 8) as usize;
/// Number of wide registers in the register file.
pub const NUM_WREGS: usize = 32;

/// One 128-bit vector register. Storage is a byte buffer; the four lane
/// views (8/16/32/64-bit, little-endian lanes) are realized by stride
/// arithmetic over the same bytes, so a write through any view is visible
/// through all of them.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct WideReg {
    bytes: [u8; WR_BYTES],
}

impl WideReg {
    pub fn from_u128(value: u128) -> Self {
        Self {
            bytes: value.to_le_bytes(),
        }
    }

    pub fn to_u128(self) -> u128 {
        u128::from_le_bytes(self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; WR_BYTES] {
        &self.bytes
    }

    /// Raw lane read, zero-extended. `i` must already be a valid lane number.
    pub(crate) fn lane_unsigned(&self, df: DataFormat, i: u32) -> u64 {
        let w = df.lane_bytes();
        let off = i as usize * w;
        let mut buf = [0u8; 8];
        buf[..w].copy_from_slice(&self.bytes[off..off + w]);
        u64::from_le_bytes(buf)
    }

    /// Raw lane read, sign-extended.
    pub(crate) fn lane_signed(&self, df: DataFormat, i: u32) -> i64 {
        df.to_signed(self.lane_unsigned(df, i))
    }

    /// Raw lane write, truncating `value` to the lane width.
    pub(crate) fn set_lane(&mut self, df: DataFormat, i: u32, value: u64) {
        let w = df.lane_bytes();
        let off = i as usize * w;
        self.bytes[off..off + w].copy_from_slice(&value.to_le_bytes()[..w]);
    }

    pub(crate) fn byte(&self, i: usize) -> u8 {
        self.bytes[i]
    }

    pub(crate) fn set_byte(&mut self, i: usize, value: u8) {
        self.bytes[i] = value;
    }
}

impl fmt::Debug for WideReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideReg({:#034x})", self.to_u128())
    }
}

/// Per-register dirty bitmap. The engine only ever sets bits; clearing is
/// the write-back collaborator's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterSet(u32);

impl RegisterSet {
    pub fn insert(&mut self, wr: u32) {
        self.0 |= 1 << wr;
    }

    pub fn contains(&self, wr: u32) -> bool {
        self.0 & (1 << wr) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

/// Vector register file plus the modified-register bitmap. Registers
/// persist across operations; the engine never allocates or frees them.
#[derive(Debug, Clone)]
pub struct CpuState {
    pub wregs: [WideReg; NUM_WREGS],
    pub modified: RegisterSet,
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuState {
    pub fn new() -> Self {
        Self {
            wregs: [WideReg::default(); NUM_WREGS],
            modified: RegisterSet::default(),
        }
    }

    fn index(&self, wr: u32) -> Result<usize> {
        if wr as usize >= NUM_WREGS {
            return Err(EmulatorError::InvalidRegister(wr));
        }
        Ok(wr as usize)
    }

    pub fn wreg(&self, wr: u32) -> Result<WideReg> {
        Ok(self.wregs[self.index(wr)?])
    }

    pub fn set_wreg(&mut self, wr: u32, value: WideReg) -> Result<()> {
        let idx = self.index(wr)?;
        self.wregs[idx] = value;
        Ok(())
    }

    /// Checked lane read, sign-extended to i64. Register-derived indices
    /// wrap: `i` is reduced modulo the lane count before the bound check.
    pub fn load_signed(&self, wr: u32, df: DataFormat, i: u32) -> Result<i64> {
        let i = i % df.elements();
        df.check_lane(i)?;
        Ok(self.wregs[self.index(wr)?].lane_signed(df, i))
    }

    /// Checked lane read, zero-extended to u64.
    pub fn load_unsigned(&self, wr: u32, df: DataFormat, i: u32) -> Result<u64> {
        let i = i % df.elements();
        df.check_lane(i)?;
        Ok(self.wregs[self.index(wr)?].lane_unsigned(df, i))
    }

    /// Checked lane write, truncating `value` to the lane width.
    pub fn store(&mut self, wr: u32, df: DataFormat, i: u32, value: u64) -> Result<()> {
        let i = i % df.elements();
        df.check_lane(i)?;
        let idx = self.index(wr)?;
        self.wregs[idx].set_lane(df, i, value);
        Ok(())
    }
}
