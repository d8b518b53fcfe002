//! 事件系统模块
//!
//! 宿主向插件投递的通知都以事件的形式出现：每渲染完一帧投递一个
//! [`TickEvent`]，视口关闭时投递一个 [`WindowCloseEvent`]。
//!
//! # 使用示例
//!
//! ```
//! use viewport_fps::core::event::*;
//!
//! struct FrameCounter(u64);
//!
//! impl EventHandler for FrameCounter {
//!     fn handle_event(&mut self, event: &mut dyn Event) -> bool {
//!         if let Some(tick) = event.as_tick() {
//!             self.0 = tick.frame;
//!         }
//!         false
//!     }
//! }
//!
//! let mut counter = FrameCounter(0);
//! counter.handle_event(&mut TickEvent::new(42, 1.5));
//! assert_eq!(counter.0, 42);
//! ```

use std::fmt;

/// 事件类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// 帧事件
    ///
    /// 视口每渲染完一帧触发一次（类似 frame_change_post）
    Tick,

    /// 视口关闭事件
    WindowClose,
}

impl EventType {
    /// 获取事件类型的名称，用于日志记录
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Tick => "Tick",
            EventType::WindowClose => "WindowClose",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 事件 trait
///
/// 所有事件类型都需要实现此 trait。`handled` 标志用于实现处理链：
/// 处理器返回 `true` 后，后续处理器通常不再收到该事件。
pub trait Event: fmt::Debug {
    /// 获取事件类型
    fn event_type(&self) -> EventType;

    /// 获取事件详细信息（用于调试和日志）
    fn detail(&self) -> String {
        format!("{:?}", self)
    }

    /// 事件是否已被处理
    fn is_handled(&self) -> bool;

    /// 设置事件处理状态
    fn set_handled(&mut self, handled: bool);

    /// 向下转型为帧事件
    fn as_tick(&self) -> Option<&TickEvent> {
        None
    }
}

/// 帧事件
///
/// 一帧渲染完成的通知。`timestamp` 来自宿主的单调时钟（秒），
/// 采样器用两次帧事件的时间差计算瞬时帧率。
#[derive(Debug, Clone)]
pub struct TickEvent {
    /// 宿主的帧序号
    pub frame: u64,

    /// 单调时间戳（秒）
    pub timestamp: f64,

    /// 事件是否已处理
    handled: bool,
}

impl TickEvent {
    /// 创建新的帧事件
    ///
    /// ```
    /// use viewport_fps::core::event::TickEvent;
    ///
    /// let event = TickEvent::new(3, 0.05);
    /// assert_eq!(event.frame, 3);
    /// assert_eq!(event.timestamp, 0.05);
    /// ```
    pub fn new(frame: u64, timestamp: f64) -> Self {
        Self {
            frame,
            timestamp,
            handled: false,
        }
    }
}

impl Event for TickEvent {
    fn event_type(&self) -> EventType {
        EventType::Tick
    }

    fn detail(&self) -> String {
        format!("Tick: frame={}, t={:.4}s", self.frame, self.timestamp)
    }

    fn is_handled(&self) -> bool {
        self.handled
    }

    fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }

    fn as_tick(&self) -> Option<&TickEvent> {
        Some(self)
    }
}

/// 视口关闭事件
#[derive(Debug, Clone, Default)]
pub struct WindowCloseEvent {
    handled: bool,
}

impl WindowCloseEvent {
    pub fn new() -> Self {
        Self { handled: false }
    }
}

impl Event for WindowCloseEvent {
    fn event_type(&self) -> EventType {
        EventType::WindowClose
    }

    fn detail(&self) -> String {
        "WindowClose".to_string()
    }

    fn is_handled(&self) -> bool {
        self.handled
    }

    fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}

/// 事件处理器 trait
///
/// 注册到 [`FrameHandlers`](crate::host::FrameHandlers) 的对象实现此 trait。
pub trait EventHandler {
    /// 处理事件，返回是否已处理
    fn handle_event(&mut self, event: &mut dyn Event) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        assert_eq!(EventType::Tick.name(), "Tick");
        assert_eq!(EventType::WindowClose.to_string(), "WindowClose");
    }

    #[test]
    fn test_tick_event() {
        let mut event = TickEvent::new(7, 1.25);
        assert_eq!(event.event_type(), EventType::Tick);
        assert_eq!(event.detail(), "Tick: frame=7, t=1.2500s");
        assert!(event.as_tick().is_some());
        assert!(!event.is_handled());

        event.set_handled(true);
        assert!(event.is_handled());
    }

    #[test]
    fn test_window_close_is_not_tick() {
        let event = WindowCloseEvent::new();
        assert_eq!(event.event_type(), EventType::WindowClose);
        assert!(event.as_tick().is_none());
    }
}
