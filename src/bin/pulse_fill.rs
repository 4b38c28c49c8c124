//! 单对组件仿真
//!
//! 运行一个脉冲发射器驱动一个缓冲填充器的示例

use clap::Parser;
use pulsim_rs::comp::RigWorld;
use pulsim_rs::demo::{PairOpts, build_pair};
use pulsim_rs::sim::{SimTime, Simulator};

#[derive(Debug, Parser)]
#[command(name = "pulse-fill", about = "单对组件仿真：发射器最后一次脉冲触发填充器")]
struct Args {
    /// 相邻两次脉冲的间隔（微秒）
    #[arg(long, default_value_t = 100)]
    wait_us: u64,
    #[arg(long, default_value_t = 3)]
    fires: u64,
    #[arg(long, default_value_t = 1024)]
    buffer_bytes: u64,
    /// 写带宽（字节/秒）
    #[arg(long, default_value_t = 100_000_000)]
    bandwidth: u64,
    /// 仿真运行到多少毫秒（默认运行到事件耗尽）
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

    let mut sim = Simulator::default();
    let mut world = RigWorld::default();

    let opts = PairOpts {
        time_to_wait: SimTime::from_micros(args.wait_us),
        fires: args.fires,
        buffer_bytes: args.buffer_bytes,
        write_bandwidth: args.bandwidth,
        until: args.until_ms.map(SimTime::from_millis),
    };

    let (emitter, _filler) = build_pair(&mut world, &opts).expect("valid pair config");

    world.rig.start_emitter(emitter, &mut sim);

    match opts.until {
        Some(until) => sim.run_until(until, &mut world),
        None => sim.run(&mut world),
    }

    println!(
        "done @ {:?}, pulses_fired={}, fills_completed={}, bytes_written={}",
        sim.now(),
        world.rig.stats.pulses_fired,
        world.rig.stats.fills_completed,
        world.rig.stats.bytes_written
    );
}
