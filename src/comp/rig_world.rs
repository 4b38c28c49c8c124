//! 机架世界实现
//!
//! 定义组件仿真的世界（World）实现，持有机架。

use super::rig::Rig;
use crate::sim::World;
use std::any::Any;

/// 一个默认的机架世界实现：持有 Rig。
#[derive(Default)]
pub struct RigWorld {
    pub rig: Rig,
}

impl World for RigWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
