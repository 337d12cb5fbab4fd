//! Run statistics: bytes and records seen versus matched, plus wall, user
//! and system time for the pass.

mod cpu;
mod recorder;


pub use cpu::CpuTimes;
pub use recorder::{DisplayDuration, MIN_DISPLAY_UNIT, RunStats, StatsRecorder};
