use crate::engine::Engine;
use crate::error::Result;
use crate::format::DataFormat;
use crate::kernel;

impl Engine {
    /// ADDV: modular vector add.
    pub fn addv(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::addv)
    }

    /// ADDVI: modular add of an unsigned 5-bit immediate.
    pub fn addvi(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::addv)
    }

    /// SUBV: modular vector subtract.
    pub fn subv(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::subv)
    }

    /// SUBVI: modular subtract of an unsigned 5-bit immediate.
    pub fn subvi(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::subv)
    }

    /// ADDS_S: saturating signed add.
    pub fn adds_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::adds_s)
    }

    /// ADDS_U: saturating unsigned add.
    pub fn adds_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::adds_u)
    }

    /// SUBS_S: saturating signed subtract.
    pub fn subs_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::subs_s)
    }

    /// SUBS_U: saturating unsigned subtract, floored at zero.
    pub fn subs_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::subs_u)
    }

    /// SUBSUS_U: unsigned ws minus signed wt, clamped to the unsigned range.
    pub fn subsus_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::subsus_u)
    }

    /// SUBSUU_S: unsigned difference clamped to the signed range.
    pub fn subsuu_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::subsuu_s)
    }

    /// ASUB_S: absolute difference of signed lanes.
    pub fn asub_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::asub_s)
    }

    /// ASUB_U: absolute difference of unsigned lanes.
    pub fn asub_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::asub_u)
    }

    /// ADD_A: modular add of lane magnitudes.
    pub fn add_a(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::add_a)
    }

    /// ADDS_A: saturating add of lane magnitudes.
    pub fn adds_a(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::adds_a)
    }

    /// AVE_S: signed average, rounding toward zero.
    pub fn ave_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::ave_s)
    }

    /// AVE_U: unsigned average, rounding toward zero.
    pub fn ave_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::ave_u)
    }

    /// AVER_S: signed average, rounding to nearest.
    pub fn aver_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::aver_s)
    }

    /// AVER_U: unsigned average, rounding to nearest.
    pub fn aver_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::aver_u)
    }

    /// MAX_S: signed maximum.
    pub fn max_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::max_s)
    }

    /// MAX_U: unsigned maximum.
    pub fn max_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::max_u)
    }

    /// MIN_S: signed minimum.
    pub fn min_s(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::min_s)
    }

    /// MIN_U: unsigned minimum.
    pub fn min_u(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::min_u)
    }

    /// MAX_A: lane with the larger magnitude; ties keep the first source.
    pub fn max_a(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::max_a)
    }

    /// MIN_A: lane with the smaller magnitude; ties keep the first source.
    pub fn min_a(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        self.vec_binary(df, wd, ws, wt, kernel::min_a)
    }

    /// MAXI_S: signed maximum against a signed 5-bit immediate.
    pub fn maxi_s(&mut self, df: DataFormat, wd: u32, ws: u32, s5: i64) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, s5, kernel::max_s)
    }

    /// MAXI_U: unsigned maximum against an unsigned 5-bit immediate.
    pub fn maxi_u(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::max_u)
    }

    /// MINI_S: signed minimum against a signed 5-bit immediate.
    pub fn mini_s(&mut self, df: DataFormat, wd: u32, ws: u32, s5: i64) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, s5, kernel::min_s)
    }

    /// MINI_U: unsigned minimum against an unsigned 5-bit immediate.
    pub fn mini_u(&mut self, df: DataFormat, wd: u32, ws: u32, u5: u32) -> Result<()> {
        self.vec_binary_imm(df, wd, ws, u5 as i64, kernel::min_u)
    }
}
