use crate::engine::Engine;
use crate::error::Result;
use crate::format::DataFormat;
use crate::kernel;

impl Engine {
    /// BCLR: clear the bit selected by wt, modulo the lane width.
    pub fn bclr(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::bclr)
    }

    /// BCLRI: clear the bit at an immediate position.
    pub fn bclri(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::bclr)
    }

    /// BSET: set the bit selected by wt, modulo the lane width.
    pub fn bset(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::bset)
    }

    /// BSETI: set the bit at an immediate position.
    pub fn bseti(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::bset)
    }

    /// BNEG: negate the bit selected by wt, modulo the lane width.
    pub fn bneg(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::bneg)
    }

    /// BNEGI: negate the bit at an immediate position.
    pub fn bnegi(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, m as i64, kernel::bneg)
    }

    /// BINSL: insert the high bits of ws into wd at a split derived from wt.
    pub fn binsl(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_ternary(df, wd, ws, wt, kernel::binsl)
    }

    /// BINSLI: immediate-split variant of BINSL.
    pub fn binsli(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_ternary_imm(df, wd, ws, m as i64, kernel::binsl)
    }

    /// BINSR: insert the low bits of ws into wd at a split derived from wt.
    pub fn binsr(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_ternary(df, wd, ws, wt, kernel::binsr)
    }

    /// BINSRI: immediate-split variant of BINSR.
    pub fn binsri(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        self.vec_ternary_imm(df, wd, ws, m as i64, kernel::binsr)
    }

    /// SAT_S: saturate each lane to an (m+1)-bit signed range.
    pub fn sat_s(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        for i in 0..df.elements() {
            let a = self.cpu.load_signed(ws, df, i)?;
            self.cpu.store(wd, df, i, kernel::sat_s(df, a, m) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }

    /// SAT_U: saturate each lane to an (m+1)-bit unsigned range.
    pub fn sat_u(&mut self, df: DataFormat, wd: u32, ws: u32, m: u32) -> Result<()> {
        for i in 0..df.elements() {
            let a = self.cpu.load_signed(ws, df, i)?;
            self.cpu.store(wd, df, i, kernel::sat_u(df, a, m) as u64)?;
        }
        self.mark_modified(wd);
        Ok(())
    }
}
