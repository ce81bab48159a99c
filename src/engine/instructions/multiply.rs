use crate::engine::Engine;
use crate::error::{EmulatorError, Result};
use crate::format::DataFormat;
use crate::kernel;

impl Engine {
    /// MULV: modular vector multiply.
    pub fn mulv(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::mulv)
    }

    /// MADDV: multiply and add to the destination.
    pub fn maddv(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_ternary(df, wd, ws, wt, kernel::maddv)
    }

    /// MSUBV: multiply and subtract from the destination.
    pub fn msubv(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_ternary(df, wd, ws, wt, kernel::msubv)
    }

    /// DOTP_S: signed dot product of even/odd sub-lane pairs.
    pub fn dotp_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::dotp_s)
    }

    /// DOTP_U: unsigned dot product of even/odd sub-lane pairs.
    pub fn dotp_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::dotp_u)
    }

    /// DPADD_S: signed dot product added to the destination.
    pub fn dpadd_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_ternary(df, wd, ws, wt, kernel::dpadd_s)
    }

    /// DPADD_U: unsigned dot product added to the destination.
    pub fn dpadd_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_ternary(df, wd, ws, wt, kernel::dpadd_u)
    }

    /// DPSUB_S: signed dot product subtracted from the destination.
    pub fn dpsub_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_ternary(df, wd, ws, wt, kernel::dpsub_s)
    }

    /// DPSUB_U: unsigned dot product subtracted from the destination.
    pub fn dpsub_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_ternary(df, wd, ws, wt, kernel::dpsub_u)
    }

    /// HADD_S: odd sub-lane of ws plus even sub-lane of wt, signed.
    pub fn hadd_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::hadd_s)
    }

    /// HADD_U: odd sub-lane of ws plus even sub-lane of wt, unsigned.
    pub fn hadd_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::hadd_u)
    }

    /// HSUB_S: odd sub-lane of ws minus even sub-lane of wt, signed.
    pub fn hsub_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::hsub_s)
    }

    /// HSUB_U: odd sub-lane of ws minus even sub-lane of wt, unsigned.
    pub fn hsub_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        check_sublane_format(df)?;
        self.vec_binary(df, wd, ws, wt, kernel::hsub_u)
    }
}

/// Sub-lane operations have no byte-format encoding; the condition is
/// architecturally reserved.
fn check_sublane_format(df: DataFormat) -> Result<()> {
    if df == DataFormat::Byte {
        return Err(EmulatorError::InvalidOperand);
    }
    Ok(())
}
