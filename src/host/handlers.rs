//! 帧事件处理器注册表
//!
//! 插件启用时注册处理器，禁用时用注册返回的 [`HandlerId`] 注销，
//! 宿主每渲染完一帧调用一次 [`FrameHandlers::notify`]。

use std::cell::RefCell;
use std::rc::Rc;

use crate::app_warn;
use crate::core::event::{Event, EventHandler};

/// 已注册处理器的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// 帧事件处理器列表，按注册顺序调用
#[derive(Default)]
pub struct FrameHandlers {
    next_id: u64,
    handlers: Vec<(HandlerId, Box<dyn EventHandler>)>,
}

impl FrameHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册处理器
    pub fn register<H>(&mut self, handler: H) -> HandlerId
    where
        H: EventHandler + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// 注销处理器，返回该处理器是否存在
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// 把事件依次交给处理器，直到某个处理器消费了它
    pub fn notify(&mut self, event: &mut dyn Event) -> bool {
        for (_, handler) in self.handlers.iter_mut() {
            if handler.handle_event(event) {
                event.set_handled(true);
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// 共享的处理器
///
/// 处理器注册到宿主后，界面仍需读取它的状态，所以以 `Rc<RefCell<_>>`
/// 的形式注册。处理器已被借用时（重入）跳过本次事件。
impl<H: EventHandler> EventHandler for Rc<RefCell<H>> {
    fn handle_event(&mut self, event: &mut dyn Event) -> bool {
        match self.try_borrow_mut() {
            Ok(mut handler) => handler.handle_event(event),
            Err(_) => {
                app_warn!(detail = %event.detail(), "Handler already borrowed, skipping event");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{EventType, TickEvent, WindowCloseEvent};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<u64>,
        consume: bool,
    }

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &mut dyn Event) -> bool {
            if let Some(tick) = event.as_tick() {
                self.frames.push(tick.frame);
            }
            self.consume && event.event_type() == EventType::Tick
        }
    }

    #[test]
    fn test_register_and_notify() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut handlers = FrameHandlers::new();
        handlers.register(recorder.clone());
        assert_eq!(handlers.len(), 1);

        handlers.notify(&mut TickEvent::new(1, 0.0));
        handlers.notify(&mut TickEvent::new(2, 0.1));
        assert_eq!(recorder.borrow().frames, vec![1, 2]);
    }

    #[test]
    fn test_unregister() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut handlers = FrameHandlers::new();
        let id = handlers.register(recorder.clone());

        assert!(handlers.unregister(id));
        assert!(!handlers.unregister(id));
        assert!(handlers.is_empty());

        handlers.notify(&mut TickEvent::new(1, 0.0));
        assert!(recorder.borrow().frames.is_empty());
    }

    #[test]
    fn test_consumed_event_stops_propagation() {
        let first = Rc::new(RefCell::new(Recorder {
            consume: true,
            ..Recorder::default()
        }));
        let second = Rc::new(RefCell::new(Recorder::default()));

        let mut handlers = FrameHandlers::new();
        handlers.register(first.clone());
        handlers.register(second.clone());

        let mut event = TickEvent::new(9, 0.0);
        assert!(handlers.notify(&mut event));
        assert!(event.is_handled());
        assert!(second.borrow().frames.is_empty());

        assert!(!handlers.notify(&mut WindowCloseEvent::new()));
    }

    #[test]
    fn test_borrowed_handler_is_skipped() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut handlers = FrameHandlers::new();
        handlers.register(recorder.clone());

        let _guard = recorder.borrow_mut();
        assert!(!handlers.notify(&mut TickEvent::new(1, 0.0)));
    }
}
