//! 播放控制

use std::cell::Cell;
use std::rc::Rc;

/// 宿主提供的播放控制
///
/// 采样器只负责发出开始/停止的请求，实际推进帧的是宿主的主循环。
pub trait PlaybackController {
    /// 开始连续播放
    fn play(&mut self);

    /// 停止连续播放
    fn cancel(&mut self);

    /// 当前是否在播放
    fn is_playing(&self) -> bool;
}

#[derive(Debug, Default)]
struct PlaybackState {
    playing: Cell<bool>,
    play_requests: Cell<u32>,
    cancel_requests: Cell<u32>,
}

/// 共享的播放标志
///
/// 克隆出的句柄指向同一份状态：采样器持有一份用于发出请求，
/// 宿主主循环持有另一份，每帧查询是否需要继续重绘。
#[derive(Debug, Clone, Default)]
pub struct SharedPlayback {
    state: Rc<PlaybackState>,
}

impl SharedPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing.get()
    }

    /// 收到的开始请求次数
    pub fn play_requests(&self) -> u32 {
        self.state.play_requests.get()
    }

    /// 收到的停止请求次数
    pub fn cancel_requests(&self) -> u32 {
        self.state.cancel_requests.get()
    }
}

impl PlaybackController for SharedPlayback {
    fn play(&mut self) {
        self.state.playing.set(true);
        self.state.play_requests.set(self.state.play_requests.get() + 1);
    }

    fn cancel(&mut self) {
        self.state.playing.set(false);
        self.state.cancel_requests.set(self.state.cancel_requests.get() + 1);
    }

    fn is_playing(&self) -> bool {
        SharedPlayback::is_playing(self)
    }
}
