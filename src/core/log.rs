//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//!
//! # 日志目标
//!
//! - `viewport_fps::sampler`：采样器状态迁移、被丢弃的样本
//! - `viewport_fps::app`：宿主程序（窗口、播放、配置）
//!
//! # 使用示例
//!
//! ```no_run
//! use viewport_fps::core::{log, LogLevel};
//!
//! log::init_logger(LogLevel::Info, false, None);
//! viewport_fps::app_info!(frames = 500, "Test configured");
//! ```

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use std::path::Path;

use super::config::LogLevel;

/// 初始化日志系统
///
/// 必须在程序开始时调用一次。设置了 `RUST_LOG` 时以环境变量为准。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "viewport_fps.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    if file_output {
        let log_path = log_file_path.unwrap_or("viewport_fps.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("viewport_fps.log");

        // 每天滚动
        let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, filename);

        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

impl LogLevel {
    /// `EnvFilter` 使用的指令字符串
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 采样器日志 - Info 级别
#[macro_export]
macro_rules! sampler_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "viewport_fps::sampler", $($arg)*)
    };
}

/// 采样器日志 - Warn 级别
#[macro_export]
macro_rules! sampler_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "viewport_fps::sampler", $($arg)*)
    };
}

/// 采样器日志 - Trace 级别（每帧）
#[macro_export]
macro_rules! sampler_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "viewport_fps::sampler", $($arg)*)
    };
}

/// 应用层日志 - Info 级别
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "viewport_fps::app", $($arg)*)
    };
}

/// 应用层日志 - Warn 级别
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "viewport_fps::app", $($arg)*)
    };
}

/// 应用层日志 - Error 级别
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "viewport_fps::app", $($arg)*)
    };
}
