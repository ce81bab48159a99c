use crate::engine::Engine;
use crate::error::Result;

// Whole-register bitwise forms; lane width is irrelevant so these operate
// on the full 128 bits at once.

impl Engine {
    /// AND_V: bitwise and.
    pub fn and_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let r = self.wr_read(ws)? & self.wr_read(wt)?;
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// OR_V: bitwise or.
    pub fn or_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let r = self.wr_read(ws)? | self.wr_read(wt)?;
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// NOR_V: bitwise not-or.
    pub fn nor_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let r = !(self.wr_read(ws)? | self.wr_read(wt)?);
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// XOR_V: bitwise exclusive-or.
    pub fn xor_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let r = self.wr_read(ws)? ^ self.wr_read(wt)?;
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// BMNZ_V: move ws bits to wd where wt is set.
    pub fn bmnz_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let mask = self.wr_read(wt)?;
        let r = (self.wr_read(ws)? & mask) | (self.wr_read(wd)? & !mask);
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// BMZ_V: move ws bits to wd where wt is clear.
    pub fn bmz_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let mask = self.wr_read(wt)?;
        let r = (self.wr_read(ws)? & !mask) | (self.wr_read(wd)? & mask);
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }

    /// BSEL_V: select wt bits where wd is set, ws bits elsewhere.
    pub fn bsel_v(&mut self, wd: u32, ws: u32, wt: u32) -> Result<()> {
        let sel = self.wr_read(wd)?;
        let r = (self.wr_read(ws)? & !sel) | (self.wr_read(wt)? & sel);
        self.wr_write(wd, r)?;
        self.mark_modified(wd);
        Ok(())
    }
}
