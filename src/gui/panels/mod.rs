//! GUI 面板模块

pub mod viewport_fps;
