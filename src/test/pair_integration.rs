use crate::comp::{EmitterConfig, FillerConfig, RigWorld, build_scenario};
use crate::sim::{ScenarioSpec, SimTime, Simulator};
use crate::trace::TraceKind;

/// 两对组件同时运行：同一时刻的脉冲按启动（插入）顺序执行，
/// 最后一次脉冲在同一时刻同步启动各自的填充器。
#[test]
fn two_pairs_interleave_deterministically() {
    let mut world = RigWorld::default();
    let f0 = world
        .rig
        .add_filler(
            "f0",
            FillerConfig {
                buffer_size: 100,
                write_bandwidth: 100,
            },
        )
        .expect("f0");
    let f1 = world
        .rig
        .add_filler(
            "f1",
            FillerConfig {
                buffer_size: 200,
                write_bandwidth: 100,
            },
        )
        .expect("f1");

    let mut cfg0 = EmitterConfig::new(SimTime::from_secs(1), f0);
    cfg0.number_of_fires = 2;
    world.rig.add_emitter("e0", cfg0).expect("e0");
    let mut cfg1 = EmitterConfig::new(SimTime::from_secs(1), f1);
    cfg1.number_of_fires = 2;
    world.rig.add_emitter("e1", cfg1).expect("e1");

    let mut sim = Simulator::default();
    world.rig.start_all(&mut sim);
    sim.run(&mut world);

    let s = 1_000_000_000u64;
    let got: Vec<(u64, TraceKind)> = world
        .rig
        .trace
        .events
        .iter()
        .map(|ev| (ev.t_ns, ev.kind))
        .collect();
    assert_eq!(
        got,
        vec![
            (
                s,
                TraceKind::PulseFired {
                    emitter: 0,
                    fires_left: 1
                }
            ),
            (
                s,
                TraceKind::PulseFired {
                    emitter: 1,
                    fires_left: 1
                }
            ),
            (
                2 * s,
                TraceKind::PulseFired {
                    emitter: 0,
                    fires_left: 0
                }
            ),
            (
                2 * s,
                TraceKind::FillStarted {
                    filler: 0,
                    buffer_bytes: 100
                }
            ),
            (
                2 * s,
                TraceKind::PulseFired {
                    emitter: 1,
                    fires_left: 0
                }
            ),
            (
                2 * s,
                TraceKind::FillStarted {
                    filler: 1,
                    buffer_bytes: 200
                }
            ),
            (
                3 * s,
                TraceKind::FillCompleted {
                    filler: 0,
                    bytes_written: 100
                }
            ),
            (
                4 * s,
                TraceKind::FillCompleted {
                    filler: 1,
                    bytes_written: 200
                }
            ),
        ]
    );

    assert_eq!(world.rig.stats.pulses_fired, 4);
    assert_eq!(world.rig.stats.fills_completed, 2);
    assert_eq!(world.rig.stats.bytes_written, 300);
    assert!(world.rig.all_done());
    assert_eq!(sim.now(), SimTime::from_secs(4));
}

/// 场景 JSON -> 装配 -> 运行的端到端路径
#[test]
fn scenario_runs_end_to_end() {
    let raw = r#"
    {
        "schema_version": 1,
        "defaults": { "number_of_fires": 2 },
        "fillers": [
            { "id": 0, "buffer_size_bytes": 100, "write_bandwidth": 100 }
        ],
        "emitters": [
            { "id": 0, "time_to_wait_ns": 1000000000, "filler": 0 }
        ]
    }
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");

    let mut world = RigWorld::default();
    let handles = build_scenario(&mut world, &spec).expect("build scenario");
    assert_eq!(handles.emitters.len(), 1);
    assert_eq!(handles.fillers.len(), 1);

    let mut sim = Simulator::default();
    world.rig.start_all(&mut sim);
    sim.run(&mut world);

    // 脉冲在 1s/2s，填充 2s 启动、3s 完成
    assert_eq!(world.rig.stats.pulses_fired, 2);
    assert_eq!(world.rig.stats.fills_completed, 1);
    assert_eq!(world.rig.stats.bytes_written, 100);
    assert_eq!(sim.now(), SimTime::from_secs(3));
    assert!(world.rig.all_done());
}
