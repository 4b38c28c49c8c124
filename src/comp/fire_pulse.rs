//! 脉冲触发事件
//!
//! 发射器的周期回调：由 `Rig::start_emitter` 调度第一次，之后自行续约。

use super::id::EmitterId;
use super::rig_world::RigWorld;
use crate::sim::{Event, Simulator, World};
use tracing::trace;

/// 事件：某个发射器的一次脉冲到期。
#[derive(Debug)]
pub struct FirePulse {
    pub emitter: EmitterId,
}

impl Event for FirePulse {
    #[tracing::instrument(skip(self, sim, world), fields(emitter = ?self.emitter))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let FirePulse { emitter } = *self;

        let w = world
            .as_any_mut()
            .downcast_mut::<RigWorld>()
            .expect("world must be RigWorld");
        w.rig.fire(emitter, sim);

        trace!("FirePulse::execute 完成");
    }
}
