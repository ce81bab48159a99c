pub mod cpu;
pub mod engine;
pub mod error;
pub mod format;

mod kernel;

pub use cpu::{CpuState, RegisterSet, WideReg, NUM_WREGS, WR_BITS, WR_BYTES};
pub use engine::{Engine, EngineFlags};
pub use error::{EmulatorError, Result};
pub use format::DataFormat;

pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;
