use crate::engine::Engine;
use crate::error::Result;
use crate::format::DataFormat;
use crate::kernel;

impl Engine {
    /// DIV_S: signed lane division. Division by zero yields 0; the signed
    /// minimum divided by -1 yields the minimum unchanged.
    pub fn div_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::div_s)
    }

    /// DIV_U: unsigned lane division; division by zero yields 0.
    pub fn div_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::div_u)
    }

    /// MOD_S: signed remainder; zero divisor and MIN % -1 both yield 0.
    pub fn mod_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::mod_s)
    }

    /// MOD_U: unsigned remainder; zero divisor yields 0.
    pub fn mod_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::mod_u)
    }
}
