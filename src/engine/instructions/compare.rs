use crate::engine::Engine;
use crate::error::Result;
use crate::format::DataFormat;
use crate::kernel;

// Compare results are lane-wide masks: all ones when the predicate holds,
// all zeros otherwise.

impl Engine {
    /// CEQ: lanes equal.
    pub fn ceq(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::ceq)
    }

    /// CEQI: lane equals a signed 5-bit immediate.
    pub fn ceqi(&mut self, df: DataFormat, wd: u32, ws: u32, s5: i64) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, s5, kernel::ceq)
    }

    /// CLT_S: signed less-than.
    pub fn clt_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::clt_s)
    }

    /// CLT_U: unsigned less-than.
    pub fn clt_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::clt_u)
    }

    /// CLE_S: signed less-than-or-equal.
    pub fn cle_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::cle_s)
    }

    /// CLE_U: unsigned less-than-or-equal.
    pub fn cle_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::cle_u)
    }

    /// CLTI_S: signed less-than against a signed 5-bit immediate.
    pub fn clti_s(&mut self, df: DataFormat, wd: u32, ws: u32, s5: i64) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, s5, kernel::clt_s)
    }

    /// CLTI_U: unsigned less-than against an unsigned 5-bit immediate.
    pub fn clti_u(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::clt_u)
    }

    /// CLEI_S: signed less-than-or-equal against a signed 5-bit immediate.
    pub fn clei_s(&mut self, df: DataFormat, wd: u32, ws: u32, s5: i64) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, s5, kernel::cle_s)
    }

    /// CLEI_U: unsigned less-than-or-equal against an unsigned 5-bit immediate.
    pub fn clei_u(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::cle_u)
    }
}
