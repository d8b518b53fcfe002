//! 宿主接口
//!
//! 采样器与宿主之间的两条边界：
//!
//! - [`PlaybackController`]：开始/停止连续播放
//! - [`FrameHandlers`]：帧事件处理器的注册表（frame_change_post）

mod handlers;
mod playback;

pub use handlers::{FrameHandlers, HandlerId};
pub use playback::{PlaybackController, SharedPlayback};
