//! 填充完成事件
//!
//! 填充器启动时一次性调度，到期即表示整块缓冲写满。

use super::id::FillerId;
use super::rig_world::RigWorld;
use crate::sim::{Event, Simulator, World};
use tracing::trace;

/// 事件：某个填充器的缓冲写满。
#[derive(Debug)]
pub struct FillComplete {
    pub filler: FillerId,
}

impl Event for FillComplete {
    #[tracing::instrument(skip(self, sim, world), fields(filler = ?self.filler))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let FillComplete { filler } = *self;

        let w = world
            .as_any_mut()
            .downcast_mut::<RigWorld>()
            .expect("world must be RigWorld");
        w.rig.complete_fill(filler, sim);

        trace!("FillComplete::execute 完成");
    }
}
