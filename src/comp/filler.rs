//! 缓冲填充器
//!
//! 以固定带宽填满一块缓冲的组件：启动后经过 `buffer_size / write_bandwidth`
//! 的仿真时间一次性完成。

use super::id::FillerId;
use super::phase::Phase;
use crate::sim::SimTime;

/// 缓冲填充器
#[derive(Debug)]
pub struct BufferFiller {
    id: FillerId,
    name: String,
    buffer_size: u64,
    /// 写带宽（字节/仿真秒）
    write_bandwidth: u64,
    /// 0 ≤ bytes_written ≤ buffer_size；完成时一次性等于 buffer_size
    bytes_written: u64,
    phase: Phase,
}

impl BufferFiller {
    /// 由机架在参数校验之后构造
    pub(crate) fn new(
        id: FillerId,
        name: impl Into<String>,
        buffer_size: u64,
        write_bandwidth: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            buffer_size,
            write_bandwidth,
            bytes_written: 0,
            phase: Phase::Configured,
        }
    }

    pub fn id(&self) -> FillerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer_size(&self) -> u64 {
        self.buffer_size
    }

    pub fn write_bandwidth(&self) -> u64 {
        self.write_bandwidth
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// 计算填满缓冲所需的仿真时间
    pub(crate) fn fill_time(&self) -> SimTime {
        // ceil(bytes / Bps) 秒 -> 纳秒；带宽为正由构造期校验保证
        let bytes = self.buffer_size as u128;
        let nanos = (bytes.saturating_mul(1_000_000_000u128)
            + (self.write_bandwidth as u128 - 1))
            / self.write_bandwidth as u128;
        SimTime(nanos.min(u64::MAX as u128) as u64)
    }

    /// 完成填充，返回写入的字节数
    pub(crate) fn finish(&mut self) -> u64 {
        self.bytes_written = self.buffer_size;
        self.bytes_written
    }
}
