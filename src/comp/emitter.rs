//! 脉冲发射器
//!
//! 周期性触发回调的组件：每隔 `time_to_wait` 触发一次，共 `number_of_fires`
//! 次；最后一次触发后启动关联的填充器。

use super::id::{EmitterId, FillerId};
use super::phase::Phase;
use crate::sim::SimTime;

/// 脉冲发射器
#[derive(Debug)]
pub struct PulseEmitter {
    id: EmitterId,
    name: String,
    time_to_wait: SimTime,
    /// 剩余脉冲数，单调递减且不为负
    fires_remaining: u64,
    filler: FillerId,
    phase: Phase,
}

impl PulseEmitter {
    /// 由机架在参数校验之后构造
    pub(crate) fn new(
        id: EmitterId,
        name: impl Into<String>,
        time_to_wait: SimTime,
        number_of_fires: u64,
        filler: FillerId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            time_to_wait,
            fires_remaining: number_of_fires,
            filler,
            phase: Phase::Configured,
        }
    }

    pub fn id(&self) -> EmitterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_to_wait(&self) -> SimTime {
        self.time_to_wait
    }

    pub fn fires_remaining(&self) -> u64 {
        self.fires_remaining
    }

    /// 被此发射器驱动的填充器
    pub fn filler(&self) -> FillerId {
        self.filler
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// 消耗一次脉冲，返回剩余次数。调用方保证 `fires_remaining > 0`。
    pub(crate) fn consume_fire(&mut self) -> u64 {
        debug_assert!(self.fires_remaining > 0, "fire with no fires remaining");
        self.fires_remaining -= 1;
        self.fires_remaining
    }
}
