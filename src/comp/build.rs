//! 场景装配
//!
//! 把 `ScenarioSpec` 实例化为机架中的组件：单个条目缺省的参数先回退到
//! 场景默认值，再回退到内置默认值。

use std::collections::HashMap;

use tracing::debug;

use super::config::{
    ConfigError, DEFAULT_BUFFER_BYTES, DEFAULT_NUMBER_OF_FIRES, DEFAULT_WRITE_BANDWIDTH,
    EmitterConfig, FillerConfig,
};
use super::id::{EmitterId, FillerId};
use super::rig_world::RigWorld;
use crate::sim::{ScenarioSpec, SimTime};

/// 场景 spec id 到机架内部 id 的映射
#[derive(Debug, Default)]
pub struct ScenarioHandles {
    pub emitters: HashMap<usize, EmitterId>,
    pub fillers: HashMap<usize, FillerId>,
}

/// 根据场景描述装配机架
pub fn build_scenario(
    world: &mut RigWorld,
    spec: &ScenarioSpec,
) -> Result<ScenarioHandles, ConfigError> {
    let d_fires = spec
        .defaults
        .as_ref()
        .and_then(|d| d.number_of_fires)
        .unwrap_or(DEFAULT_NUMBER_OF_FIRES);
    let d_buffer = spec
        .defaults
        .as_ref()
        .and_then(|d| d.buffer_size_bytes)
        .unwrap_or(DEFAULT_BUFFER_BYTES);
    let d_bandwidth = spec
        .defaults
        .as_ref()
        .and_then(|d| d.write_bandwidth)
        .unwrap_or(DEFAULT_WRITE_BANDWIDTH);

    let mut handles = ScenarioHandles::default();

    for f in &spec.fillers {
        if handles.fillers.contains_key(&f.id) {
            return Err(ConfigError::DuplicateFillerId(f.id));
        }
        let name = f.name.clone().unwrap_or_else(|| format!("filler{}", f.id));
        let id = world.rig.add_filler(
            name,
            FillerConfig {
                buffer_size: f.buffer_size_bytes.unwrap_or(d_buffer),
                write_bandwidth: f.write_bandwidth.unwrap_or(d_bandwidth),
            },
        )?;
        handles.fillers.insert(f.id, id);
    }

    for e in &spec.emitters {
        if handles.emitters.contains_key(&e.id) {
            return Err(ConfigError::DuplicateEmitterId(e.id));
        }
        let filler = *handles
            .fillers
            .get(&e.filler)
            .ok_or(ConfigError::UnknownFiller(e.filler))?;
        let name = e.name.clone().unwrap_or_else(|| format!("emitter{}", e.id));
        let id = world.rig.add_emitter(
            name,
            EmitterConfig {
                time_to_wait: SimTime(e.time_to_wait_ns),
                number_of_fires: e.number_of_fires.unwrap_or(d_fires),
                filler,
            },
        )?;
        handles.emitters.insert(e.id, id);
    }

    debug!(
        fillers = handles.fillers.len(),
        emitters = handles.emitters.len(),
        "场景装配完成"
    );
    Ok(handles)
}
