use crate::cpu::WR_BITS;
use crate::error::{EmulatorError, Result};

/// Lane-width selector for a wide register. One register holds
/// 16 bytes, 8 halfwords, 4 words or 2 doublewords; all four views
/// alias the same storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataFormat {
    Byte,
    Half,
    Word,
    Double,
}

impl DataFormat {
    /// Lane width in bits: 8, 16, 32 or 64.
    pub const fn bits(self) -> u32 {
        8 << self as u32
    }

    /// Lane width in bytes.
    pub const fn lane_bytes(self) -> usize {
        1 << self as u32
    }

    /// Number of lanes in one wide register.
    pub const fn elements(self) -> u32 {
        WR_BITS / self.bits()
    }

    /// Largest representable signed lane value.
    pub const fn max_int(self) -> i64 {
        (u64::MAX >> (65 - self.bits())) as i64
    }

    /// Smallest representable signed lane value.
    pub const fn min_int(self) -> i64 {
        !self.max_int()
    }

    /// Largest representable unsigned lane value; also the lane mask.
    pub const fn max_uint(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }

    /// Truncate to the lane width, zero-extending into the accumulator type.
    pub const fn to_unsigned(self, x: i64) -> u64 {
        x as u64 & self.max_uint()
    }

    /// Truncate to the lane width, sign-extending into the accumulator type.
    pub const fn to_signed(self, x: u64) -> i64 {
        let sh = 64 - self.bits();
        ((x as i64) << sh) >> sh
    }

    /// Bit position within a lane: the operand reduced modulo the lane width.
    pub const fn bit_position(self, x: i64) -> u32 {
        (x as u64 % self.bits() as u64) as u32
    }

    /// Bound check for a lane index. Fails with the reserved-instruction
    /// condition when `n` is not a valid lane number for this format.
    pub fn check_lane(self, n: u32) -> Result<()> {
        if n > self.elements() - 1 {
            return Err(EmulatorError::InvalidOperand);
        }
        Ok(())
    }
}
