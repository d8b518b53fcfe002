//! FPS 采样器
//!
//! [`FpsSampler`] 持有一次测试（Session）的全部状态，把宿主投递的帧事件
//! 转换成最小、最大和平均帧率。
//!
//! # 状态机
//!
//! ```text
//!            start()                       stop() / 达到目标帧数
//!   Idle ─────────────────▶ Running ─────────────────────────────▶ Idle
//!    ▲                        │ ▲
//!    └── 忽略帧事件            │ └── on_frame_tick()
//!                             └──── start()：丢弃当前会话并重置
//! ```
//!
//! 前 `warmup_frames` 帧只推进帧计数和时间基线，不参与统计。
//!
//! ```
//! use viewport_fps::host::SharedPlayback;
//! use viewport_fps::sampler::FpsSampler;
//!
//! let playback = SharedPlayback::new();
//! let mut sampler = FpsSampler::new(|| 0.0, playback.clone());
//!
//! sampler.start(8);
//! assert!(playback.is_playing());
//!
//! for t in 1..=8 {
//!     sampler.on_frame_tick(t as f64);
//! }
//!
//! assert!(!sampler.is_running());
//! assert_eq!(sampler.average_fps(), Some(1.0));
//! ```

mod report;

pub use report::{progress_percent, FpsReport};

use crate::core::event::{Event, EventHandler, EventType};
use crate::core::Clock;
use crate::host::PlaybackController;
use crate::{sampler_info, sampler_trace, sampler_warn};

/// 默认预热帧数
pub const DEFAULT_WARMUP_FRAMES: u32 = 5;

/// 一次测试的会话数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// 测试是否正在进行
    pub is_running: bool,

    /// 测试长度（帧），运行期间不变
    pub target_frame_count: u32,

    /// 自 `start` 以来收到的帧数，包含预热帧
    pub frames_elapsed: u32,

    /// 上一帧（或 `start`）的时间戳
    pub last_tick_timestamp: f64,

    /// 所有计入统计的瞬时帧率之和
    pub cumulative_fps: f64,

    /// 计入统计的样本数
    pub counted_frames: u32,

    pub minimum_fps: Option<f64>,
    pub maximum_fps: Option<f64>,
    pub average_fps: Option<f64>,
}

/// 单个帧事件的处理结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// 没有正在进行的测试
    Ignored,

    /// 预热帧，不计入统计
    WarmUp,

    /// 样本已计入统计
    Counted { fps: f64 },

    /// 帧间隔为零、负数或无法计算，样本被丢弃
    Rejected { frame_time: f64 },

    /// 测试在此前已达到目标帧数，本帧触发停止
    Finished,
}

/// FPS 采样器
pub struct FpsSampler {
    session: Session,
    warmup_frames: u32,
    clock: Box<dyn Clock>,
    playback: Box<dyn PlaybackController>,
}

impl FpsSampler {
    /// 创建采样器
    ///
    /// * `clock` - 时间源，`start` 用它确定第一帧的时间基线
    /// * `playback` - 宿主的播放控制，`start`/`stop` 时开始或停止播放
    pub fn new<C, P>(clock: C, playback: P) -> Self
    where
        C: Clock + 'static,
        P: PlaybackController + 'static,
    {
        Self {
            session: Session::default(),
            warmup_frames: DEFAULT_WARMUP_FRAMES,
            clock: Box::new(clock),
            playback: Box::new(playback),
        }
    }

    /// 设置预热帧数
    pub fn with_warmup_frames(mut self, warmup_frames: u32) -> Self {
        self.warmup_frames = warmup_frames;
        self
    }

    /// 开始一次测试
    ///
    /// 重置会话数据并开始播放。测试进行中再次调用会丢弃当前会话。
    /// 小于预热帧数的目标会被提升到预热帧数。
    pub fn start(&mut self, target_frame_count: u32) {
        let target_frame_count = if target_frame_count < self.warmup_frames {
            sampler_warn!(
                requested = target_frame_count,
                minimum = self.warmup_frames,
                "Test length below warm-up frame count, clamping"
            );
            self.warmup_frames
        } else {
            target_frame_count
        };

        if self.session.is_running {
            sampler_info!(
                frames_elapsed = self.session.frames_elapsed,
                "Restarting FPS test, discarding in-flight session"
            );
        }

        self.session = Session {
            is_running: true,
            target_frame_count,
            last_tick_timestamp: self.clock.now(),
            ..Session::default()
        };

        self.playback.play();

        sampler_info!(
            target_frames = target_frame_count,
            warmup_frames = self.warmup_frames,
            "FPS test started"
        );
    }

    /// 停止测试
    ///
    /// 统计结果保持可读。未运行时调用是安全的。
    pub fn stop(&mut self) {
        if self.session.is_running {
            sampler_info!(
                frames_elapsed = self.session.frames_elapsed,
                target_frames = self.session.target_frame_count,
                "FPS test stopped"
            );
        }

        self.session.is_running = false;
        self.playback.cancel();
    }

    /// 处理一帧
    ///
    /// `current_time` 必须来自单调时钟，单位为秒。
    pub fn on_frame_tick(&mut self, current_time: f64) -> TickOutcome {
        if !self.session.is_running {
            return TickOutcome::Ignored;
        }

        if self.session.frames_elapsed >= self.session.target_frame_count {
            self.finish();
            return TickOutcome::Finished;
        }

        let session = &mut self.session;
        session.frames_elapsed += 1;

        // 预热帧也要更新时间基线；非有限的时间戳不能成为基线
        let frame_time = current_time - session.last_tick_timestamp;
        if current_time.is_finite() {
            session.last_tick_timestamp = current_time;
        }

        let outcome = if session.frames_elapsed <= self.warmup_frames {
            sampler_trace!(frame = session.frames_elapsed, frame_time, "Warm-up frame");
            TickOutcome::WarmUp
        } else {
            self.record(frame_time)
        };

        if self.session.frames_elapsed >= self.session.target_frame_count {
            self.finish();
        }

        outcome
    }

    fn record(&mut self, frame_time: f64) -> TickOutcome {
        let fps = 1.0 / frame_time;
        if !frame_time.is_finite() || frame_time <= 0.0 || !fps.is_finite() {
            sampler_warn!(
                frame = self.session.frames_elapsed,
                frame_time,
                "Discarding sample with invalid frame interval"
            );
            return TickOutcome::Rejected { frame_time };
        }

        let session = &mut self.session;
        session.cumulative_fps += fps;
        session.counted_frames += 1;

        let minimum = session.minimum_fps.map_or(fps, |m| m.min(fps));
        let maximum = session.maximum_fps.map_or(fps, |m| m.max(fps));
        let average = session.cumulative_fps / f64::from(session.counted_frames);

        session.minimum_fps = Some(minimum);
        session.maximum_fps = Some(maximum);
        // 累加误差不能让平均值越过极值
        session.average_fps = Some(average.clamp(minimum, maximum));

        sampler_trace!(frame = session.frames_elapsed, fps, "Counted frame");
        TickOutcome::Counted { fps }
    }

    fn finish(&mut self) {
        let report = self.report();
        sampler_info!(
            frames = report.frames_elapsed,
            min_fps = report.display_minimum(),
            max_fps = report.display_maximum(),
            avg_fps = report.display_average(),
            "FPS test finished"
        );
        self.session.is_running = false;
        self.playback.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running
    }

    pub fn warmup_frames(&self) -> u32 {
        self.warmup_frames
    }

    pub fn target_frame_count(&self) -> u32 {
        self.session.target_frame_count
    }

    pub fn frames_elapsed(&self) -> u32 {
        self.session.frames_elapsed
    }

    /// 测试进度（百分比）
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.session.frames_elapsed, self.session.target_frame_count)
    }

    pub fn minimum_fps(&self) -> Option<f64> {
        self.session.minimum_fps
    }

    pub fn maximum_fps(&self) -> Option<f64> {
        self.session.maximum_fps
    }

    pub fn average_fps(&self) -> Option<f64> {
        self.session.average_fps
    }

    /// 当前会话数据
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 当前状态的快照，供界面显示
    pub fn report(&self) -> FpsReport {
        FpsReport::from_session(&self.session)
    }
}

impl EventHandler for FpsSampler {
    /// 帧事件驱动采样；视口关闭时停止测试。两者都不消费事件。
    fn handle_event(&mut self, event: &mut dyn Event) -> bool {
        match event.event_type() {
            EventType::Tick => {
                if let Some(tick) = event.as_tick() {
                    self.on_frame_tick(tick.timestamp);
                }
                false
            }
            EventType::WindowClose => {
                if self.is_running() {
                    self.stop();
                }
                false
            }
        }
    }
}
