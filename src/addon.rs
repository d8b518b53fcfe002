//! Viewport FPS 插件
//!
//! 把采样器接到宿主上：启用时把采样器注册为帧事件处理器，
//! 禁用时注销；"Run FPS test" / "Cancel FPS test" 两个操作驱动采样器的
//! 生命周期；测试长度只能在空闲时修改。
//!
//! ```
//! use viewport_fps::addon::{PanelAction, TestSettings, ViewportFps};
//! use viewport_fps::core::event::TickEvent;
//! use viewport_fps::host::{FrameHandlers, SharedPlayback};
//!
//! let playback = SharedPlayback::new();
//! let mut handlers = FrameHandlers::new();
//! let mut addon = ViewportFps::new(|| 0.0, playback.clone(), TestSettings::default());
//! addon.register(&mut handlers);
//!
//! addon.apply(PanelAction::RunTest);
//! let mut frame = 0;
//! while playback.is_playing() {
//!     frame += 1;
//!     handlers.notify(&mut TickEvent::new(frame, frame as f64 / 60.0));
//! }
//!
//! assert_eq!(frame, 500);
//! assert!(addon.report().has_samples());
//! ```

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::core::config::TestConfig;
use crate::core::Clock;
use crate::host::{FrameHandlers, HandlerId, PlaybackController};
use crate::sampler::{FpsReport, FpsSampler, DEFAULT_WARMUP_FRAMES};
use crate::{app_info, app_warn};

/// 默认测试长度（帧）
pub const DEFAULT_TEST_LENGTH: u32 = 500;

/// 面板上的两个操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// 开始测试
    RunTest,
    /// 取消当前测试
    CancelTest,
}

impl PanelAction {
    /// 按钮文字
    pub fn label(&self) -> &'static str {
        match self {
            PanelAction::RunTest => "Run FPS test",
            PanelAction::CancelTest => "Cancel FPS test",
        }
    }

    /// 按钮提示
    pub fn description(&self) -> &'static str {
        match self {
            PanelAction::RunTest => "Run an FPS test",
            PanelAction::CancelTest => "Cancel the current FPS test",
        }
    }

    /// 当前状态下面板显示的操作
    pub fn for_state(is_running: bool) -> Self {
        if is_running {
            PanelAction::CancelTest
        } else {
            PanelAction::RunTest
        }
    }
}

/// 测试设置
///
/// 测试长度不小于预热帧数，越界的值会被提升到下限。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSettings {
    length: u32,
    warmup_frames: u32,
}

impl TestSettings {
    pub fn new(length: u32, warmup_frames: u32) -> Self {
        Self {
            length: length.max(warmup_frames),
            warmup_frames,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.length, config.warmup_frames)
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn warmup_frames(&self) -> u32 {
        self.warmup_frames
    }

    /// 修改测试长度，返回实际生效的值
    pub fn set_length(&mut self, length: u32) -> u32 {
        self.length = length.max(self.warmup_frames);
        self.length
    }
}

impl Default for TestSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_LENGTH, DEFAULT_WARMUP_FRAMES)
    }
}

/// 插件实例
pub struct ViewportFps {
    sampler: Rc<RefCell<FpsSampler>>,
    settings: TestSettings,
    handler: Option<HandlerId>,
}

impl ViewportFps {
    pub fn new<C, P>(clock: C, playback: P, settings: TestSettings) -> Self
    where
        C: Clock + 'static,
        P: PlaybackController + 'static,
    {
        let sampler =
            FpsSampler::new(clock, playback).with_warmup_frames(settings.warmup_frames());

        Self {
            sampler: Rc::new(RefCell::new(sampler)),
            settings,
            handler: None,
        }
    }

    /// 启用插件：注册帧事件处理器
    pub fn register(&mut self, handlers: &mut FrameHandlers) {
        if self.handler.is_some() {
            app_warn!("Viewport FPS is already registered");
            return;
        }

        self.handler = Some(handlers.register(self.sampler.clone()));
        app_info!(handlers = handlers.len(), "Viewport FPS registered");
    }

    /// 禁用插件：停止测试并注销处理器
    pub fn unregister(&mut self, handlers: &mut FrameHandlers) {
        let Some(id) = self.handler.take() else {
            return;
        };

        self.sampler.borrow_mut().stop();
        if !handlers.unregister(id) {
            app_warn!("Viewport FPS handler was not found in the handler list");
        }
        app_info!("Viewport FPS unregistered");
    }

    pub fn is_registered(&self) -> bool {
        self.handler.is_some()
    }

    /// "Run FPS test"
    pub fn run_test(&mut self) {
        self.sampler.borrow_mut().start(self.settings.length());
    }

    /// "Cancel FPS test"
    pub fn cancel_test(&mut self) {
        self.sampler.borrow_mut().stop();
    }

    /// 执行面板操作
    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::RunTest => self.run_test(),
            PanelAction::CancelTest => self.cancel_test(),
        }
    }

    /// 修改测试长度
    ///
    /// 测试进行中修改会被忽略，返回 `false`。
    pub fn set_test_length(&mut self, length: u32) -> bool {
        if self.is_running() {
            return false;
        }
        self.settings.set_length(length);
        true
    }

    pub fn settings(&self) -> &TestSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.sampler.borrow().is_running()
    }

    pub fn report(&self) -> FpsReport {
        self.sampler.borrow().report()
    }

    pub fn sampler(&self) -> Ref<'_, FpsSampler> {
        self.sampler.borrow()
    }
}
