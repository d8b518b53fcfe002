//! 核心功能模块
//!
//! 本模块提供插件的基础功能，包括日志系统、配置管理、错误处理、
//! 事件系统和时间源。这些模块独立于宿主和图形 API。
//!
//! # 模块组织
//!
//! - `log`：日志系统，基于 tracing 的结构化日志
//! - `config`：配置管理，支持从配置文件和命令行加载设置
//! - `error`：错误处理，定义统一的错误类型
//! - `event`：事件系统，宿主投递帧事件的统一接口
//! - `clock`：单调时间源

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod log;

// 重新导出常用类型，方便使用
pub use clock::{Clock, MonotonicClock};
pub use config::{Config, LogLevel};
pub use error::{ConfigError, GraphicsError, Result, ViewportFpsError};
pub use event::{Event, EventHandler, EventType, TickEvent, WindowCloseEvent};
