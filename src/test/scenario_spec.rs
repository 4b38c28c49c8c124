use crate::comp::{ConfigError, RigWorld, build_scenario};
use crate::sim::{EmitterSpec, FillerSpec, ScenarioSpec, SimTime};

#[test]
fn scenario_spec_parses_minimal_json_with_defaults() {
    let raw = r#"
    {
        "schema_version": 1,
        "fillers": [ { "id": 0 } ],
        "emitters": [ { "id": 0, "time_to_wait_ns": 100, "filler": 0 } ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    assert_eq!(spec.schema_version, 1);
    assert!(spec.meta.is_none());
    assert!(spec.defaults.is_none());
    assert_eq!(spec.fillers.len(), 1);
    assert!(spec.fillers[0].name.is_none());
    assert!(spec.fillers[0].buffer_size_bytes.is_none());
    assert_eq!(spec.emitters.len(), 1);
    assert_eq!(spec.emitters[0].time_to_wait_ns, 100);
    assert!(spec.emitters[0].number_of_fires.is_none());
    assert_eq!(spec.emitters[0].filler, 0);
}

#[test]
fn scenario_spec_parses_meta_and_defaults() {
    let raw = r#"
    {
        "schema_version": 1,
        "meta": { "source": "tutorial", "label": "pair" },
        "defaults": { "number_of_fires": 5, "write_bandwidth": 1000 },
        "fillers": [ { "id": 0, "name": "sink" } ],
        "emitters": [ { "id": 0, "name": "clock", "time_to_wait_ns": 100, "filler": 0 } ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    assert_eq!(
        spec.meta.as_ref().and_then(|m| m.source.as_deref()),
        Some("tutorial")
    );
    let d = spec.defaults.as_ref().expect("defaults");
    assert_eq!(d.number_of_fires, Some(5));
    assert_eq!(d.buffer_size_bytes, None);
    assert_eq!(d.write_bandwidth, Some(1000));
    assert_eq!(spec.fillers[0].name.as_deref(), Some("sink"));
    assert_eq!(spec.emitters[0].name.as_deref(), Some("clock"));
}

#[test]
fn scenario_spec_serializes_roundtrip() {
    let spec = ScenarioSpec {
        schema_version: 1,
        meta: None,
        defaults: None,
        fillers: vec![FillerSpec {
            id: 0,
            name: None,
            buffer_size_bytes: Some(64),
            write_bandwidth: None,
        }],
        emitters: vec![EmitterSpec {
            id: 0,
            name: None,
            time_to_wait_ns: 250,
            number_of_fires: Some(4),
            filler: 0,
        }],
    };

    let raw = serde_json::to_string(&spec).expect("serialize scenario");
    let decoded: ScenarioSpec = serde_json::from_str(&raw).expect("deserialize scenario");
    assert_eq!(decoded.schema_version, 1);
    assert_eq!(decoded.fillers[0].buffer_size_bytes, Some(64));
    assert_eq!(decoded.emitters[0].time_to_wait_ns, 250);
    assert_eq!(decoded.emitters[0].number_of_fires, Some(4));
}

#[test]
fn build_resolves_entry_then_scenario_then_builtin_defaults() {
    let raw = r#"
    {
        "schema_version": 1,
        "defaults": { "buffer_size_bytes": 64 },
        "fillers": [
            { "id": 0 },
            { "id": 1, "buffer_size_bytes": 32, "write_bandwidth": 8 }
        ],
        "emitters": [
            { "id": 0, "time_to_wait_ns": 10, "filler": 0 },
            { "id": 1, "time_to_wait_ns": 10, "number_of_fires": 7, "filler": 1 }
        ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");

    let mut world = RigWorld::default();
    let handles = build_scenario(&mut world, &spec).expect("build scenario");

    // 条目值 > 场景默认值 > 内置默认值
    let f0 = world.rig.filler(handles.fillers[&0]);
    assert_eq!(f0.buffer_size(), 64);
    assert_eq!(f0.write_bandwidth(), 100_000_000);
    let f1 = world.rig.filler(handles.fillers[&1]);
    assert_eq!(f1.buffer_size(), 32);
    assert_eq!(f1.write_bandwidth(), 8);

    let e0 = world.rig.emitter(handles.emitters[&0]);
    assert_eq!(e0.fires_remaining(), 1);
    assert_eq!(e0.time_to_wait(), SimTime(10));
    let e1 = world.rig.emitter(handles.emitters[&1]);
    assert_eq!(e1.fires_remaining(), 7);

    // 未命名条目得到按 id 生成的名字
    assert_eq!(f0.name(), "filler0");
    assert_eq!(e1.name(), "emitter1");
}

#[test]
fn build_rejects_duplicate_ids() {
    let raw = r#"
    {
        "schema_version": 1,
        "fillers": [ { "id": 0 }, { "id": 0 } ],
        "emitters": []
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    let mut world = RigWorld::default();
    let err = build_scenario(&mut world, &spec).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateFillerId(0));
}

#[test]
fn build_rejects_unknown_filler_reference() {
    let raw = r#"
    {
        "schema_version": 1,
        "fillers": [ { "id": 0 } ],
        "emitters": [ { "id": 0, "time_to_wait_ns": 10, "filler": 9 } ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    let mut world = RigWorld::default();
    let err = build_scenario(&mut world, &spec).unwrap_err();
    assert_eq!(err, ConfigError::UnknownFiller(9));
}

#[test]
fn build_rejects_zero_wait_from_spec() {
    let raw = r#"
    {
        "schema_version": 1,
        "fillers": [ { "id": 0 } ],
        "emitters": [ { "id": 0, "time_to_wait_ns": 0, "filler": 0 } ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    let mut world = RigWorld::default();
    let err = build_scenario(&mut world, &spec).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveWait);
}
