//! 配置管理模块
//!
//! 提供插件配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//! title = "Viewport FPS"
//! resizable = true
//!
//! [graphics]
//! vsync = true
//!
//! [test]
//! length = 500        # 测试帧数
//! warmup_frames = 5   # 预热帧数（不计入统计）
//!
//! [playback]
//! simulated_fps = 60.0
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result, ViewportFpsError};
use crate::sampler::DEFAULT_WARMUP_FRAMES;

/// 插件配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 图形配置
    #[serde(default)]
    pub graphics: GraphicsConfig,

    /// 测试配置
    #[serde(default)]
    pub test: TestConfig,

    /// 模拟播放配置（仅无界面宿主使用）
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度
    #[serde(default = "default_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_height")]
    pub height: u32,

    /// 窗口标题
    #[serde(default = "default_title")]
    pub title: String,

    /// 是否可调整大小
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

/// 图形配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// 垂直同步
    #[serde(default = "default_vsync")]
    pub vsync: bool,
}

/// 测试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// 测试帧数（包含预热帧）
    #[serde(default = "default_test_length")]
    pub length: u32,

    /// 预热帧数
    #[serde(default = "default_warmup_frames")]
    pub warmup_frames: u32,
}

/// 模拟播放配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// 模拟的帧率
    #[serde(default = "default_simulated_fps")]
    pub simulated_fps: f64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// 模拟播放帧率的下限
pub const MIN_SIMULATED_FPS: f64 = 0.001;

// 默认值函数
fn default_width() -> u32 { 1280 }
fn default_height() -> u32 { 720 }
fn default_title() -> String { "Viewport FPS".to_string() }
fn default_resizable() -> bool { true }
fn default_vsync() -> bool { true }
fn default_test_length() -> u32 { 500 }
fn default_warmup_frames() -> u32 { DEFAULT_WARMUP_FRAMES }
fn default_simulated_fps() -> f64 { 60.0 }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "viewport_fps.log".to_string() }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            resizable: default_resizable(),
        }
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            vsync: default_vsync(),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            length: default_test_length(),
            warmup_frames: default_warmup_frames(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            simulated_fps: default_simulated_fps(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// ```no_run
    /// use viewport_fps::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), viewport_fps::core::ViewportFpsError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    ///
    /// 文件存在但无法解析时同样回退到默认配置，并输出警告。
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => config,
            Err(ViewportFpsError::Config(ConfigError::FileNotFound(_))) => Self::default(),
            Err(e) => {
                crate::app_warn!(
                    path = %path.as_ref().display(),
                    "{}, using default configuration",
                    e
                );
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--frames <value>`: 测试帧数
    /// - `--warmup <value>`: 预热帧数
    /// - `--simulated-fps <value>`: 模拟播放帧率
    /// - `--no-vsync`: 关闭垂直同步
    /// - `--width <value>` / `--height <value>`: 窗口尺寸
    ///
    /// 无法解析的数值会被忽略。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--no-vsync") {
            self.graphics.vsync = false;
        }

        if let Some(frames) = arg_value(&args, "--frames") {
            self.test.length = frames;
        }
        if let Some(warmup) = arg_value(&args, "--warmup") {
            self.test.warmup_frames = warmup;
        }
        if let Some(fps) = arg_value(&args, "--simulated-fps") {
            self.playback.simulated_fps = fps;
        }
        if let Some(width) = arg_value(&args, "--width") {
            self.window.width = width;
        }
        if let Some(height) = arg_value(&args, "--height") {
            self.window.height = height;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window.width/height".to_string(),
                reason: "Window dimensions must be greater than 0".to_string(),
            }
            .into());
        }

        if self.test.length < self.test.warmup_frames {
            return Err(ConfigError::InvalidValue {
                field: "test.length".to_string(),
                reason: format!(
                    "Test length must be at least the warm-up frame count ({})",
                    self.test.warmup_frames
                ),
            }
            .into());
        }

        let fps = self.playback.simulated_fps;
        if !fps.is_finite() || fps < MIN_SIMULATED_FPS {
            return Err(ConfigError::InvalidValue {
                field: "playback.simulated_fps".to_string(),
                reason: format!(
                    "Simulated frame rate must be a finite number of at least {}",
                    MIN_SIMULATED_FPS
                ),
            }
            .into());
        }

        Ok(())
    }
}

fn arg_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.test.length, 500);
        assert_eq!(config.test.warmup_frames, 5);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [test]
            length = 120

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.test.length, 120);
        assert_eq!(config.test.warmup_frames, 5);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("[test]\nlength = \"many\"").is_err());
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args([
            "viewport_fps",
            "--frames",
            "240",
            "--warmup",
            "10",
            "--simulated-fps",
            "144",
            "--no-vsync",
            "--width",
            "oops",
        ]);

        assert_eq!(config.test.length, 240);
        assert_eq!(config.test.warmup_frames, 10);
        assert_eq!(config.playback.simulated_fps, 144.0);
        assert!(!config.graphics.vsync);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("viewport_fps_{}.toml", std::process::id()));
        let mut config = Config::default();
        config.test.length = 42;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.test.length, 42);
        assert!(matches!(
            Config::from_file(&path),
            Err(ViewportFpsError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.test.length = 3;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.playback.simulated_fps = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.playback.simulated_fps = 1e-300;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.playback.simulated_fps = MIN_SIMULATED_FPS;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let path = std::env::temp_dir().join(format!(
            "viewport_fps_malformed_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[test]\nlength = \"many\"\n").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ViewportFpsError::Config(ConfigError::ParseError(_)))
        ));
        let config = Config::from_file_or_default(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(config.test.length, 500);

        let missing = Config::from_file_or_default(&path);
        assert_eq!(missing.test.length, 500);
    }
}
