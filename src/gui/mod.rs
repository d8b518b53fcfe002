//! GUI 系统模块
//!
//! 基于 egui + wgpu 的面板，显示采样器状态并提供测试操作。

mod manager;
mod state;
pub mod panels;

pub use manager::GuiManager;
pub use state::{format_fps, GuiState};
