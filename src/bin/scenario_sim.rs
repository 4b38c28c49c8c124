//! 场景仿真
//!
//! 读取 scenario.json，装配机架并运行，结束后打印统计；可选把轨迹写成 JSON。

use clap::Parser;
use pulsim_rs::comp::{RigWorld, build_scenario};
use pulsim_rs::sim::{ScenarioSpec, SimTime, Simulator};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scenario-sim", about = "Run scenario.json on pulsim-rs")]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// Output trace JSON file
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// Run until this time (ms); defaults to running until completion
    #[arg(long)]
    until_ms: Option<u64>,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.scenario).expect("read scenario file");
    let spec: ScenarioSpec = serde_json::from_str(&raw).expect("parse scenario json");

    let mut sim = Simulator::default();
    let mut world = RigWorld::default();

    let handles = build_scenario(&mut world, &spec).expect("valid scenario");

    // 所有发射器在 t=0 启动
    world.rig.start_all(&mut sim);

    match args.until_ms {
        Some(ms) => sim.run_until(SimTime::from_millis(ms), &mut world),
        None => sim.run(&mut world),
    }

    println!(
        "scenario done @ {:?}, emitters={}, fillers={}, pulses_fired={}, fills_completed={}, bytes_written={}, all_done={}",
        sim.now(),
        handles.emitters.len(),
        handles.fillers.len(),
        world.rig.stats.pulses_fired,
        world.rig.stats.fills_completed,
        world.rig.stats.bytes_written,
        world.rig.all_done()
    );

    if let Some(path) = args.trace_json {
        let json =
            serde_json::to_string_pretty(&world.rig.trace.events).expect("serialize trace");
        fs::write(&path, json).expect("write trace json");
        println!("trace written to {}", path.display());
    }
}
