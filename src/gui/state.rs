//! GUI 状态管理
//!
//! GuiState 保存面板读写的全部数据，与具体的图形后端无关。
//! 每次重绘前从插件同步一次，重绘后把用户的操作交回插件。

use crate::addon::{PanelAction, ViewportFps};
use crate::core::Config;
use crate::sampler::FpsReport;

/// GUI 状态（与后端无关）
pub struct GuiState {
    /// 采样器快照
    pub report: FpsReport,

    /// 测试帧数编辑框的值
    pub test_length: u32,
    pub warmup_frames: u32,

    /// 本帧点击的按钮
    pub pending_action: Option<PanelAction>,

    // 视口信息
    pub viewport_frame: u64,
    pub vsync: bool,
}

impl GuiState {
    /// 从配置创建 GUI 状态
    pub fn new(config: &Config) -> Self {
        Self {
            report: FpsReport::default(),
            test_length: config.test.length.max(config.test.warmup_frames),
            warmup_frames: config.test.warmup_frames,
            pending_action: None,
            viewport_frame: 0,
            vsync: config.graphics.vsync,
        }
    }

    /// 从插件同步测试状态
    pub fn sync(&mut self, addon: &ViewportFps, viewport_frame: u64) {
        self.report = addon.report();
        self.test_length = addon.settings().length();
        self.warmup_frames = addon.settings().warmup_frames();
        self.viewport_frame = viewport_frame;
    }

    /// 把面板上的修改交回插件
    ///
    /// 帧数的修改先于按钮操作生效，同一帧内改完长度再点击运行时
    /// 测试使用新的长度。
    pub fn apply_to(&mut self, addon: &mut ViewportFps) {
        if self.test_length != addon.settings().length() {
            addon.set_test_length(self.test_length);
        }
        if let Some(action) = self.pending_action.take() {
            addon.apply(action);
        }
    }

    /// 当前应显示的按钮
    pub fn action(&self) -> PanelAction {
        PanelAction::for_state(self.report.is_running)
    }

    pub fn progress_label(&self) -> String {
        format!("Progress: {:.1}%", self.report.progress_percent)
    }

    /// 结果表格的三行
    pub fn result_rows(&self) -> [(&'static str, String); 3] {
        [
            ("Minimum", format_fps(self.report.display_minimum())),
            ("Maximum", format_fps(self.report.display_maximum())),
            ("Average", format_fps(self.report.display_average())),
        ]
    }
}

pub fn format_fps(value: f64) -> String {
    format!("{:.2} FPS", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::TestSettings;
    use crate::core::event::TickEvent;
    use crate::host::{FrameHandlers, SharedPlayback};

    #[test]
    fn test_labels_before_any_sample() {
        let state = GuiState::new(&Config::default());
        assert_eq!(state.test_length, 500);
        assert_eq!(state.progress_label(), "Progress: 0.0%");
        assert_eq!(state.action(), PanelAction::RunTest);
        assert_eq!(state.result_rows()[0], ("Minimum", "0.00 FPS".to_string()));
    }

    #[test]
    fn test_format_fps() {
        assert_eq!(format_fps(35.0 / 3.0), "11.67 FPS");
    }

    #[test]
    fn test_round_trip_with_addon() {
        let playback = SharedPlayback::new();
        let mut handlers = FrameHandlers::new();
        let mut addon = ViewportFps::new(|| 0.0, playback.clone(), TestSettings::new(10, 5));
        addon.register(&mut handlers);

        let mut state = GuiState::new(&Config::default());
        state.sync(&addon, 0);
        assert_eq!(state.test_length, 10);

        state.test_length = 3;
        state.apply_to(&mut addon);
        assert_eq!(addon.settings().length(), 5);

        state.pending_action = Some(PanelAction::RunTest);
        state.apply_to(&mut addon);
        assert!(playback.is_playing());

        handlers.notify(&mut TickEvent::new(1, 0.1));
        state.sync(&addon, 1);
        assert_eq!(state.action(), PanelAction::CancelTest);
        assert_eq!(state.progress_label(), "Progress: 20.0%");
    }

    #[test]
    fn test_length_edit_and_run_in_same_frame() {
        let playback = SharedPlayback::new();
        let mut handlers = FrameHandlers::new();
        let mut addon = ViewportFps::new(|| 0.0, playback.clone(), TestSettings::new(10, 5));
        addon.register(&mut handlers);

        let mut state = GuiState::new(&Config::default());
        state.sync(&addon, 0);

        state.test_length = 40;
        state.pending_action = Some(PanelAction::RunTest);
        state.apply_to(&mut addon);

        assert!(playback.is_playing());
        assert_eq!(addon.settings().length(), 40);
        assert_eq!(addon.sampler().target_frame_count(), 40);

        handlers.notify(&mut TickEvent::new(1, 0.1));
        state.sync(&addon, 1);
        assert_eq!(state.test_length, 40);
        assert_eq!(state.progress_label(), "Progress: 2.5%");
    }
}
