//! 统计信息
//!
//! 定义一次仿真运行的累计统计。

/// 机架统计信息
#[derive(Debug, Default)]
pub struct Stats {
    pub pulses_fired: u64,
    pub fills_started: u64,
    pub fills_completed: u64,
    pub bytes_written: u64,
}
