//! 场景描述
//!
//! 以 JSON 描述一组发射器/填充器及其参数，未给出的参数在构建时回退到默认值。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    #[serde(default)]
    pub defaults: Option<ScenarioDefaults>,
    pub fillers: Vec<FillerSpec>,
    pub emitters: Vec<EmitterSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// 场景级默认值；单个条目上的取值优先。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub number_of_fires: Option<u64>,
    #[serde(default)]
    pub buffer_size_bytes: Option<u64>,
    /// 写带宽（字节/仿真秒）
    #[serde(default)]
    pub write_bandwidth: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerSpec {
    pub id: usize,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub buffer_size_bytes: Option<u64>,
    #[serde(default)]
    pub write_bandwidth: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterSpec {
    pub id: usize,
    #[serde(default)]
    pub name: Option<String>,
    /// 相邻两次脉冲的间隔（纳秒），必填且必须为正
    pub time_to_wait_ns: u64,
    #[serde(default)]
    pub number_of_fires: Option<u64>,
    /// 被此发射器驱动的填充器（`FillerSpec.id`）
    pub filler: usize,
}
