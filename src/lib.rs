//! Viewport FPS - 视口帧率测试
//!
//! 在交互式 3D 视口中连续播放指定数量的帧，统计最小、最大和平均帧率。
//! 前几帧（预热帧）的时间间隔不可靠，不计入统计。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理、事件系统、时间源）
//! - `sampler`: 采样器状态机，唯一的统计逻辑
//! - `host`: 宿主接口（播放控制、帧事件处理器注册表）
//! - `addon`: 插件本体，把采样器接到宿主上
//! - `gui`: egui 面板
//! - `gfx`: wgpu 视口
//!
//! # 使用示例
//!
//! ```
//! use viewport_fps::host::SharedPlayback;
//! use viewport_fps::sampler::FpsSampler;
//!
//! let mut sampler = FpsSampler::new(|| 0.0, SharedPlayback::new());
//! sampler.start(8);
//!
//! let mut t = 0.0;
//! for dt in [1.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.05, 0.2] {
//!     t += dt;
//!     sampler.on_frame_tick(t);
//! }
//!
//! let report = sampler.report();
//! assert!(!report.is_running);
//! assert!((report.display_minimum() - 5.0).abs() < 1e-6);
//! assert!((report.display_maximum() - 20.0).abs() < 1e-6);
//! ```

pub mod addon;
pub mod core;
pub mod gfx;
pub mod gui;
pub mod host;
pub mod sampler;
