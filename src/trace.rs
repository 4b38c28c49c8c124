//! 轨迹记录（用于测试断言与离线查看）
//!
//! 设计目标：
//! - **结构化**：用 JSON 事件而不是解析文本日志
//! - **轻量**：存内存，仿真结束后一次性写文件

use serde::{Deserialize, Serialize};

use crate::sim::SimTime;

/// 轨迹事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceKind {
    /// 发射器的一次脉冲
    PulseFired { emitter: usize, fires_left: u64 },
    /// 填充器开始工作
    FillStarted { filler: usize, buffer_bytes: u64 },
    /// 填充器写满缓冲
    FillCompleted { filler: usize, bytes_written: u64 },
}

/// 一条轨迹（JSON）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// 仿真时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    #[serde(flatten)]
    pub kind: TraceKind,
}

/// 一个简单的轨迹收集器
#[derive(Debug, Default)]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, at: SimTime, kind: TraceKind) {
        self.events.push(TraceEvent { t_ns: at.0, kind });
    }

    /// 某个发射器全部脉冲的触发时刻（按记录顺序）
    pub fn pulse_times(&self, emitter: usize) -> Vec<SimTime> {
        self.events
            .iter()
            .filter(|ev| matches!(ev.kind, TraceKind::PulseFired { emitter: e, .. } if e == emitter))
            .map(|ev| SimTime(ev.t_ns))
            .collect()
    }
}
