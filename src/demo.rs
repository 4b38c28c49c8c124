//! 演示和示例代码
//!
//! 包含单对组件的构建函数和共享配置。

use crate::comp::{ConfigError, EmitterConfig, EmitterId, FillerConfig, FillerId, RigWorld};
use crate::sim::SimTime;

/// 单对组件配置选项
#[derive(Debug, Clone)]
pub struct PairOpts {
    /// 相邻两次脉冲的间隔
    pub time_to_wait: SimTime,
    pub fires: u64,
    pub buffer_bytes: u64,
    /// 写带宽（字节/仿真秒）
    pub write_bandwidth: u64,
    /// 仿真最长运行时间；None 表示运行到事件耗尽
    pub until: Option<SimTime>,
}

impl Default for PairOpts {
    fn default() -> Self {
        Self {
            time_to_wait: SimTime::from_micros(100),
            fires: 1,
            buffer_bytes: 1024,
            write_bandwidth: 100_000_000,
            until: None,
        }
    }
}

/// 构建一对组件
///
/// 结构：emitter --(最后一次脉冲)--> filler
/// 返回：(发射器, 填充器)
pub fn build_pair(
    world: &mut RigWorld,
    opts: &PairOpts,
) -> Result<(EmitterId, FillerId), ConfigError> {
    let filler = world.rig.add_filler(
        "f0",
        FillerConfig {
            buffer_size: opts.buffer_bytes,
            write_bandwidth: opts.write_bandwidth,
        },
    )?;

    let mut cfg = EmitterConfig::new(opts.time_to_wait, filler);
    cfg.number_of_fires = opts.fires;
    let emitter = world.rig.add_emitter("e0", cfg)?;

    Ok((emitter, filler))
}
