//! 错误处理模块
//!
//! 定义了插件中使用的统一错误类型。
//!
//! 采样器本身的所有操作都是全函数（不会失败），错误只会出现在
//! 配置加载和宿主（窗口、图形设备）初始化阶段。

use std::fmt;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, ViewportFpsError>;

/// Viewport FPS 的错误类型
#[derive(Debug)]
pub enum ViewportFpsError {
    /// 配置错误
    Config(ConfigError),

    /// 图形 API 错误
    Graphics(GraphicsError),

    /// IO 错误
    Io(std::io::Error),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 图形 API 相关的错误
#[derive(Debug)]
pub enum GraphicsError {
    /// 设备创建失败
    DeviceCreation(String),

    /// 交换链错误
    SwapchainError(String),
}

impl fmt::Display for ViewportFpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportFpsError::Config(e) => write!(f, "Configuration error: {}", e),
            ViewportFpsError::Graphics(e) => write!(f, "Graphics error: {}", e),
            ViewportFpsError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::DeviceCreation(msg) => write!(f, "Device creation failed: {}", msg),
            GraphicsError::SwapchainError(msg) => write!(f, "Swapchain error: {}", msg),
        }
    }
}

impl std::error::Error for ViewportFpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewportFpsError::Config(e) => Some(e),
            ViewportFpsError::Graphics(e) => Some(e),
            ViewportFpsError::Io(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for GraphicsError {}

impl From<std::io::Error> for ViewportFpsError {
    fn from(err: std::io::Error) -> Self {
        ViewportFpsError::Io(err)
    }
}

impl From<ConfigError> for ViewportFpsError {
    fn from(err: ConfigError) -> Self {
        ViewportFpsError::Config(err)
    }
}

impl From<GraphicsError> for ViewportFpsError {
    fn from(err: GraphicsError) -> Self {
        ViewportFpsError::Graphics(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_value_message() {
        let err: ViewportFpsError = ConfigError::InvalidValue {
            field: "test.length".to_string(),
            reason: "must be at least 5".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for 'test.length': must be at least 5"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_every_variant_has_message_and_source() {
        let errors: [ViewportFpsError; 4] = [
            ConfigError::FileNotFound("config.toml".to_string()).into(),
            ConfigError::ParseError("bad".to_string()).into(),
            GraphicsError::DeviceCreation("no adapter".to_string()).into(),
            GraphicsError::SwapchainError("lost".to_string()).into(),
        ];
        for err in &errors {
            assert!(!err.to_string().is_empty());
            assert!(err.source().is_some());
        }
        assert_eq!(
            errors[2].to_string(),
            "Graphics error: Device creation failed: no adapter"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ViewportFpsError::from(io);
        assert!(matches!(err, ViewportFpsError::Io(_)));
    }
}
