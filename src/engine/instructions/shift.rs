use crate::engine::Engine;
use crate::error::Result;
use crate::format::DataFormat;
use crate::kernel;

// Register-operand shift amounts are reduced modulo the lane width by the
// kernels; immediate amounts are valid by construction of the encoding.

impl Engine {
    /// SLL: logical left shift.
    pub fn sll(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::sll)
    }

    /// SLLI: logical left shift by an immediate.
    pub fn slli(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::sll)
    }

    /// SRA: arithmetic right shift.
    pub fn sra(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::sra)
    }

    /// SRAI: arithmetic right shift by an immediate.
    pub fn srai(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::sra)
    }

    /// SRL: logical right shift.
    pub fn srl(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::srl)
    }

    /// SRLI: logical right shift by an immediate.
    pub fn srli(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::srl)
    }

    /// SRAR: rounded arithmetic right shift.
    pub fn srar(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::srar)
    }

    /// SRARI: rounded arithmetic right shift by an immediate.
    pub fn srari(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::srar)
    }

    /// SRLR: rounded logical right shift.
    pub fn srlr(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::srlr)
    }

    /// SRLRI: rounded logical right shift by an immediate.
    pub fn srlri(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::srlr)
    }
}
