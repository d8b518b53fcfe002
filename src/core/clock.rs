//! 时间源
//!
//! 采样器不直接读取系统时钟，而是通过 [`Clock`] 获取当前时间（秒），
//! 测试中可以传入返回合成时间戳的闭包。

use std::time::Instant;

/// 单调时间源，返回以秒为单位的时间戳
pub trait Clock {
    fn now(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    fn now(&self) -> f64 {
        self()
    }
}

/// 基于 [`Instant`] 的单调时钟，时间从创建时刻开始计算
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
