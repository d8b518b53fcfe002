//! 测试结果快照

use super::Session;

/// 采样器状态的只读快照
///
/// 界面每次重绘时获取一份，按值传递，不持有采样器的借用。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FpsReport {
    pub is_running: bool,
    pub frames_elapsed: u32,
    pub target_frame_count: u32,
    pub progress_percent: f64,
    pub minimum_fps: Option<f64>,
    pub maximum_fps: Option<f64>,
    pub average_fps: Option<f64>,
}

impl FpsReport {
    pub(crate) fn from_session(session: &Session) -> Self {
        Self {
            is_running: session.is_running,
            frames_elapsed: session.frames_elapsed,
            target_frame_count: session.target_frame_count,
            progress_percent: progress_percent(session.frames_elapsed, session.target_frame_count),
            minimum_fps: session.minimum_fps,
            maximum_fps: session.maximum_fps,
            average_fps: session.average_fps,
        }
    }

    /// 是否已有计入统计的样本
    pub fn has_samples(&self) -> bool {
        self.average_fps.is_some()
    }

    /// 最小帧率，尚无样本时为 0
    pub fn display_minimum(&self) -> f64 {
        self.minimum_fps.unwrap_or(0.0)
    }

    /// 最大帧率，尚无样本时为 0
    pub fn display_maximum(&self) -> f64 {
        self.maximum_fps.unwrap_or(0.0)
    }

    /// 平均帧率，尚无样本时为 0
    pub fn display_average(&self) -> f64 {
        self.average_fps.unwrap_or(0.0)
    }
}

/// 测试进度（百分比），目标为 0 时按 1 计算
pub fn progress_percent(frames_elapsed: u32, target_frame_count: u32) -> f64 {
    let length = target_frame_count.max(1);
    f64::from(frames_elapsed) / f64::from(length) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 500), 0.0);
        assert_eq!(progress_percent(250, 500), 50.0);
        assert_eq!(progress_percent(3, 0), 300.0);
    }

    #[test]
    fn test_placeholders_before_samples() {
        let report = FpsReport::default();
        assert!(!report.has_samples());
        assert_eq!(report.display_minimum(), 0.0);
        assert_eq!(report.display_maximum(), 0.0);
        assert_eq!(report.display_average(), 0.0);
    }

    #[test]
    fn test_from_session() {
        let session = Session {
            is_running: true,
            target_frame_count: 8,
            frames_elapsed: 6,
            minimum_fps: Some(10.0),
            maximum_fps: Some(20.0),
            average_fps: Some(15.0),
            ..Session::default()
        };

        let report = FpsReport::from_session(&session);
        assert!(report.is_running);
        assert_eq!(report.progress_percent, 75.0);
        assert!(report.has_samples());
        assert_eq!(report.display_maximum(), 20.0);
    }
}
