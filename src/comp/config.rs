//! 组件参数
//!
//! 定义两类组件的静态参数及其构造期校验。所有校验在加入机架时完成，
//! 运行期不再产生配置类错误。

use thiserror::Error;

use super::id::FillerId;
use crate::sim::SimTime;

/// 发射次数默认值
pub const DEFAULT_NUMBER_OF_FIRES: u64 = 1;
/// 缓冲大小默认值（bytes）
pub const DEFAULT_BUFFER_BYTES: u64 = 1024;
/// 写带宽默认值（字节/仿真秒，即 100MB/s）
pub const DEFAULT_WRITE_BANDWIDTH: u64 = 100_000_000;

/// 构造期参数错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time_to_wait must be positive")]
    NonPositiveWait,
    #[error("write_bandwidth must be positive (bytes/sec)")]
    NonPositiveBandwidth,
    #[error("emitter references unknown filler id {0}")]
    UnknownFiller(usize),
    #[error("filler id {0} is already linked to another emitter")]
    FillerAlreadyLinked(usize),
    #[error("duplicate filler id {0} in scenario")]
    DuplicateFillerId(usize),
    #[error("duplicate emitter id {0} in scenario")]
    DuplicateEmitterId(usize),
}

/// 脉冲发射器参数
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 相邻两次脉冲的间隔，必须为正
    pub time_to_wait: SimTime,
    /// 触发填充器之前的脉冲次数；0 表示启动时立即触发
    pub number_of_fires: u64,
    /// 被驱动的填充器
    pub filler: FillerId,
}

impl EmitterConfig {
    pub fn new(time_to_wait: SimTime, filler: FillerId) -> Self {
        Self {
            time_to_wait,
            number_of_fires: DEFAULT_NUMBER_OF_FIRES,
            filler,
        }
    }
}

/// 缓冲填充器参数
#[derive(Debug, Clone)]
pub struct FillerConfig {
    /// 待填充的缓冲大小（bytes）
    pub buffer_size: u64,
    /// 写带宽（字节/仿真秒），必须为正
    pub write_bandwidth: u64,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_BYTES,
            write_bandwidth: DEFAULT_WRITE_BANDWIDTH,
        }
    }
}
