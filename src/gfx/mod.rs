//! 视口图形模块
//!
//! 宿主视口的最小实现：每帧清屏（颜色随播放帧号变化），再叠加 GUI。

mod context;

pub use context::ViewportContext;

/// 播放帧号对应的清屏颜色
///
/// 颜色以 240 帧为周期循环，便于肉眼确认播放是否在推进。
pub fn clear_color_for_frame(frame: u64) -> wgpu::Color {
    let phase = (frame % 240) as f64 / 240.0 * std::f64::consts::TAU;
    wgpu::Color {
        r: 0.10 + 0.08 * phase.sin(),
        g: 0.12 + 0.08 * (phase + 2.0).sin(),
        b: 0.18 + 0.08 * (phase + 4.0).sin(),
        a: 1.0,
    }
}
