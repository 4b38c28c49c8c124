//! 组件机架
//!
//! 装配发射器与填充器：构造期校验参数，运行期驱动两类组件的
//! 阶段迁移、统计与轨迹记录。

use tracing::{debug, info, warn};

use super::config::{ConfigError, EmitterConfig, FillerConfig};
use super::emitter::PulseEmitter;
use super::fill_complete::FillComplete;
use super::filler::BufferFiller;
use super::fire_pulse::FirePulse;
use super::id::{EmitterId, FillerId};
use super::phase::Phase;
use super::stats::Stats;
use crate::sim::Simulator;
use crate::trace::{TraceKind, TraceLog};

/// 组件机架
#[derive(Default)]
pub struct Rig {
    emitters: Vec<PulseEmitter>,
    fillers: Vec<BufferFiller>,
    pub stats: Stats,
    pub trace: TraceLog,
}

impl Rig {
    /// 添加填充器。构造期校验：带宽必须为正。
    pub fn add_filler(
        &mut self,
        name: impl Into<String>,
        cfg: FillerConfig,
    ) -> Result<FillerId, ConfigError> {
        if cfg.write_bandwidth == 0 {
            return Err(ConfigError::NonPositiveBandwidth);
        }
        let id = FillerId(self.fillers.len());
        let filler = BufferFiller::new(id, name, cfg.buffer_size, cfg.write_bandwidth);
        debug!(
            id = ?id,
            name = %filler.name(),
            buffer_size = cfg.buffer_size,
            write_bandwidth = cfg.write_bandwidth,
            "创建填充器"
        );
        self.fillers.push(filler);
        Ok(id)
    }

    /// 添加发射器。构造期校验：脉冲间隔必须为正，关联的填充器必须
    /// 存在且未被其他发射器占用（发射器独占其填充器）。
    pub fn add_emitter(
        &mut self,
        name: impl Into<String>,
        cfg: EmitterConfig,
    ) -> Result<EmitterId, ConfigError> {
        if cfg.time_to_wait.is_zero() {
            return Err(ConfigError::NonPositiveWait);
        }
        if cfg.filler.0 >= self.fillers.len() {
            return Err(ConfigError::UnknownFiller(cfg.filler.0));
        }
        if self.emitters.iter().any(|e| e.filler() == cfg.filler) {
            return Err(ConfigError::FillerAlreadyLinked(cfg.filler.0));
        }
        let id = EmitterId(self.emitters.len());
        let em = PulseEmitter::new(id, name, cfg.time_to_wait, cfg.number_of_fires, cfg.filler);
        debug!(
            id = ?id,
            name = %em.name(),
            time_to_wait = ?cfg.time_to_wait,
            number_of_fires = cfg.number_of_fires,
            filler = ?cfg.filler,
            "创建发射器"
        );
        self.emitters.push(em);
        Ok(id)
    }

    pub fn emitter(&self, id: EmitterId) -> &PulseEmitter {
        &self.emitters[id.0]
    }

    pub fn filler(&self, id: FillerId) -> &BufferFiller {
        &self.fillers[id.0]
    }

    /// 所有组件均到达终态
    pub fn all_done(&self) -> bool {
        self.emitters.iter().all(|e| e.phase() == Phase::Done)
            && self.fillers.iter().all(|f| f.phase() == Phase::Done)
    }

    /// 启动一个发射器：调度第一次脉冲。
    ///
    /// 重复 start 是 no-op（记一条 warn）；发射次数为 0 时不产生任何
    /// 脉冲，立即启动填充器并直接进入终态。
    #[tracing::instrument(skip(self, sim), fields(emitter = ?id))]
    pub fn start_emitter(&mut self, id: EmitterId, sim: &mut Simulator) {
        let em = &mut self.emitters[id.0];
        if em.phase() != Phase::Configured {
            warn!(name = %em.name(), phase = ?em.phase(), "发射器已启动过，忽略重复 start");
            return;
        }
        if em.fires_remaining() == 0 {
            em.set_phase(Phase::Done);
            let filler = em.filler();
            info!(name = %em.name(), "发射次数为 0，立即启动填充器");
            self.start_filler(filler, sim);
            return;
        }
        em.set_phase(Phase::Scheduled);
        let wait = em.time_to_wait();
        debug!(name = %em.name(), first_at = ?sim.now().after(wait), "调度第一次脉冲");
        sim.schedule_in(wait, FirePulse { emitter: id });
    }

    /// 启动所有尚未启动的发射器
    pub fn start_all(&mut self, sim: &mut Simulator) {
        for i in 0..self.emitters.len() {
            if self.emitters[i].phase() == Phase::Configured {
                self.start_emitter(EmitterId(i), sim);
            }
        }
    }

    /// 发射器的一次脉冲（由 `FirePulse` 事件驱动）。
    ///
    /// 还有剩余次数则续约下一次脉冲；最后一次脉冲在同一时刻启动填充器。
    #[tracing::instrument(skip(self, sim), fields(emitter = ?id, now = ?sim.now()))]
    pub(crate) fn fire(&mut self, id: EmitterId, sim: &mut Simulator) {
        let em = &mut self.emitters[id.0];
        let left = em.consume_fire();
        let wait = em.time_to_wait();
        let filler = em.filler();
        info!(name = %em.name(), fires_left = left, "⏰ 脉冲触发");
        if left == 0 {
            em.set_phase(Phase::Done);
        }

        self.stats.pulses_fired += 1;
        self.trace.push(
            sim.now(),
            TraceKind::PulseFired {
                emitter: id.0,
                fires_left: left,
            },
        );

        if left > 0 {
            sim.schedule_in(wait, FirePulse { emitter: id });
        } else {
            info!("脉冲发射完毕，启动填充器");
            self.start_filler(filler, sim);
        }
    }

    /// 启动一个填充器：计算填满时长并一次性调度完成事件。
    ///
    /// 重复 start 是 no-op（记一条 warn）；缓冲为 0 时完成事件落在当前时刻。
    #[tracing::instrument(skip(self, sim), fields(filler = ?id))]
    pub fn start_filler(&mut self, id: FillerId, sim: &mut Simulator) {
        let f = &mut self.fillers[id.0];
        if f.phase() != Phase::Configured {
            warn!(name = %f.name(), phase = ?f.phase(), "填充器已启动过，忽略重复 start");
            return;
        }
        f.set_phase(Phase::Scheduled);
        let dur = f.fill_time();
        let buffer_bytes = f.buffer_size();
        info!(name = %f.name(), buffer_bytes, fill_time = ?dur, "📝 开始填充缓冲");

        self.stats.fills_started += 1;
        self.trace.push(
            sim.now(),
            TraceKind::FillStarted {
                filler: id.0,
                buffer_bytes,
            },
        );

        sim.schedule_in(dur, FillComplete { filler: id });
    }

    /// 填充完成（由 `FillComplete` 事件驱动）。完成恰好发生一次，
    /// 因为完成事件只会在 Configured → Scheduled 迁移时调度一次。
    #[tracing::instrument(skip(self, sim), fields(filler = ?id))]
    pub(crate) fn complete_fill(&mut self, id: FillerId, sim: &mut Simulator) {
        let f = &mut self.fillers[id.0];
        let written = f.finish();
        f.set_phase(Phase::Done);
        info!(name = %f.name(), bytes_written = written, "✅ 缓冲填充完成");

        self.stats.fills_completed += 1;
        self.stats.bytes_written += written;
        self.trace.push(
            sim.now(),
            TraceKind::FillCompleted {
                filler: id.0,
                bytes_written: written,
            },
        );
    }
}
