use crate::cpu::{WideReg, WR_BYTES};
use crate::engine::Engine;
use crate::error::{EmulatorError, Result};
use crate::format::DataFormat;

// Permutation-class operations read lanes out of their natural order, and
// source and destination registers may alias. Every operation here stages
// its full result in a stack-local scratch register and commits it after
// the sweep.

impl Engine {
    /// PCKEV: pack even-indexed lanes; wt fills the low half of wd, ws the
    /// high half.
    pub fn pckev(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, i, wt_v.lane_unsigned(df, 2 * i));
            x.set_lane(df, i + half, ws_v.lane_unsigned(df, 2 * i));
        }
        self.commit(wd, x)
    }

    /// PCKOD: pack odd-indexed lanes.
    pub fn pckod(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, i, wt_v.lane_unsigned(df, 2 * i + 1));
            x.set_lane(df, i + half, ws_v.lane_unsigned(df, 2 * i + 1));
        }
        self.commit(wd, x)
    }

    /// ILVR: interleave the right (low) halves of wt and ws.
    pub fn ilvr(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, 2 * i, wt_v.lane_unsigned(df, i));
            x.set_lane(df, 2 * i + 1, ws_v.lane_unsigned(df, i));
        }
        self.commit(wd, x)
    }

    /// ILVL: interleave the left (high) halves of wt and ws.
    pub fn ilvl(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, 2 * i, wt_v.lane_unsigned(df, i + half));
            x.set_lane(df, 2 * i + 1, ws_v.lane_unsigned(df, i + half));
        }
        self.commit(wd, x)
    }

    /// ILVEV: interleave even-indexed lanes of wt and ws.
    pub fn ilvev(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, 2 * i, wt_v.lane_unsigned(df, 2 * i));
            x.set_lane(df, 2 * i + 1, ws_v.lane_unsigned(df, 2 * i));
        }
        self.commit(wd, x)
    }

    /// ILVOD: interleave odd-indexed lanes of wt and ws.
    pub fn ilvod(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let half = df.elements() / 2;
        let mut x = WideReg::default();
        for i in 0..half {
            x.set_lane(df, 2 * i, wt_v.lane_unsigned(df, 2 * i + 1));
            x.set_lane(df, 2 * i + 1, ws_v.lane_unsigned(df, 2 * i + 1));
        }
        self.commit(wd, x)
    }

    /// VSHF: generic two-register shuffle. Selector lanes come from the
    /// destination register; set high control bits force a zero lane,
    /// otherwise the selector modulo 2n picks from wt ([0,n)) or ws
    /// ([n,2n)).
    pub fn vshf(&mut self, df: DataFormat, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let wd_v = self.cpu.wreg(wd)?;
        let ws_v = self.cpu.wreg(ws)?;
        let wt_v = self.cpu.wreg(wt)?;
        let n = df.elements();
        let mut x = WideReg::default();
        for i in 0..n {
            let c = wd_v.lane_unsigned(df, i);
            let r = if c & 0xC0 != 0 {
                0
            } else {
                let k = (c as u32 & 0x3F) % (2 * n);
                if k < n {
                    wt_v.lane_unsigned(df, k)
                } else {
                    ws_v.lane_unsigned(df, k - n)
                }
            };
            x.set_lane(df, i, r);
        }
        self.commit(wd, x)
    }

    /// SHF: fixed-pattern shuffle within groups of four lanes. The
    /// doubleword format has no encoding and is reserved.
    pub fn shf(&mut self, df: DataFormat, wd: u32, ws: u32, imm8: u32) -> Result<()> {
        if df == DataFormat::Double {
            return Err(EmulatorError::InvalidOperand);
        }
        let ws_v = self.cpu.wreg(ws)?;
        let mut x = WideReg::default();
        for i in 0..df.elements() {
            let k = (imm8 >> (2 * (i & 3))) & 3;
            x.set_lane(df, i, ws_v.lane_unsigned(df, (i & !3) + k));
        }
        self.commit(wd, x)
    }

    /// SLD: slide ws into wd by a register-derived byte amount, reduced
    /// modulo the group size.
    pub fn sld(&mut self, df: DataFormat, wd: u32, ws: u32, rt: u64) -> Result<()> {
        let n = (rt % df.elements() as u64) as u32;
        df.check_lane(n)?;
        self.sld_common(df, wd, ws, n)
    }

    /// SLDI: slide by an immediate amount, range-checked directly.
    pub fn sldi(&mut self, df: DataFormat, wd: u32, ws: u32, n: u32) -> Result<()> {
        df.check_lane(n)?;
        self.sld_common(df, wd, ws, n)
    }

    /// Concatenate ws and wd byte arrays in independent format-sized
    /// groups, rotate each group left by `n` bytes, and keep the half
    /// aligned with the destination's original layout.
    fn sld_common(&mut self, df: DataFormat, wd: u32, ws: u32, n: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        let wd_v = self.cpu.wreg(wd)?;
        let s = df.elements() as usize;
        let mut x = WideReg::default();
        let mut v = [0u8; 2 * WR_BYTES];
        for k in 0..WR_BYTES / s {
            for i in 0..s {
                v[i] = ws_v.byte(s * k + i);
                v[i + s] = wd_v.byte(s * k + i);
            }
            for i in 0..s {
                x.set_byte(s * k + i, v[i + n as usize]);
            }
        }
        self.commit(wd, x)
    }

    /// SPLAT: broadcast the ws lane selected by a register-derived index,
    /// reduced modulo the lane count.
    pub fn splat(&mut self, df: DataFormat, wd: u32, ws: u32, rt: u64) -> Result<()> {
        let n = (rt % df.elements() as u64) as u32;
        let value = self.cpu.load_unsigned(ws, df, n)?;
        self.broadcast(df, wd, value)
    }

    /// SPLATI: broadcast the ws lane at an immediate index, range-checked
    /// directly.
    pub fn splati(&mut self, df: DataFormat, wd: u32, ws: u32, n: u32) -> Result<()> {
        df.check_lane(n)?;
        let value = self.cpu.load_unsigned(ws, df, n)?;
        self.broadcast(df, wd, value)
    }

    /// FILL: broadcast a scalar-register-derived value.
    pub fn fill(&mut self, df: DataFormat, wd: u32, value: u64) -> Result<()> {
        self.broadcast(df, wd, value)
    }

    /// LDI: broadcast a signed 10-bit immediate. Byte format keeps the raw
    /// low 8 bits; wider formats broadcast the sign-extended 10-bit value.
    pub fn ldi(&mut self, df: DataFormat, wd: u32, s10: i32) -> Result<()> {
        let value = match df {
            DataFormat::Byte => s10 as i64,
            _ => ((s10 << 22) >> 22) as i64,
        };
        self.broadcast(df, wd, value as u64)
    }

    /// INSERT: write a scalar into the lane at an immediate index, leaving
    /// the other lanes untouched.
    pub fn insert(&mut self, df: DataFormat, wd: u32, n: u32, value: u64) -> Result<()> {
        df.check_lane(n)?;
        self.cpu.store(wd, df, n, value)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// COPY_S: read the lane at an immediate index, sign-extended.
    pub fn copy_s(&mut self, df: DataFormat, ws: u32, n: u32) -> Result<i64> {
        df.check_lane(n)?;
        self.cpu.load_signed(ws, df, n)
    }

    /// COPY_U: read the lane at an immediate index, zero-extended.
    pub fn copy_u(&mut self, df: DataFormat, ws: u32, n: u32) -> Result<u64> {
        df.check_lane(n)?;
        self.cpu.load_unsigned(ws, df, n)
    }

    /// MOVE_V: whole-register copy.
    pub fn move_v(&mut self, wd: u32, ws: u32) -> Result<()> {
        let ws_v = self.cpu.wreg(ws)?;
        self.commit(wd, ws_v)
    }

    fn broadcast(&mut self, df: DataFormat, wd: u32, value: u64) -> Result<()> {
        for i in 0..df.elements() {
            self.cpu.store(wd, df, i, value)?;
        }
        self.mark_modified(wd);
        Ok(())
    }

    fn commit(&mut self, wd: u32, x: WideReg) -> Result<()> {
        self.cpu.set_wreg(wd, x)?;
        self.mark_modified(wd);
        Ok(())
    }
}
