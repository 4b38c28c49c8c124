//! 组件模块
//!
//! 此模块包含被仿真的组件：脉冲发射器、缓冲填充器，以及装配它们的机架。

// 子模块声明
mod build;
mod config;
mod emitter;
mod fill_complete;
mod filler;
mod fire_pulse;
mod id;
mod phase;
mod rig;
mod rig_world;
mod stats;

// 重新导出公共接口
pub use build::{ScenarioHandles, build_scenario};
pub use config::{
    ConfigError, DEFAULT_BUFFER_BYTES, DEFAULT_NUMBER_OF_FIRES, DEFAULT_WRITE_BANDWIDTH,
    EmitterConfig, FillerConfig,
};
pub use emitter::PulseEmitter;
pub use fill_complete::FillComplete;
pub use filler::BufferFiller;
pub use fire_pulse::FirePulse;
pub use id::{EmitterId, FillerId};
pub use phase::Phase;
pub use rig::Rig;
pub use rig_world::RigWorld;
pub use stats::Stats;
