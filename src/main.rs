//! Viewport FPS - 交互式视口
//!
//! 打开一个 wgpu 视口窗口，左侧是 Viewport FPS 面板。点击 "Run FPS test"
//! 后视口开始连续播放，每呈现一帧向插件投递一个帧事件，测试结束后
//! 播放自动停止。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件
//! cargo run
//!
//! # 关闭垂直同步，测试 1000 帧
//! cargo run -- --no-vsync --frames 1000
//! ```
//!
//! # 主循环
//!
//! ```text
//! RedrawRequested ─▶ 同步面板 ─▶ 绘制并呈现 ─▶ 应用面板操作 ─▶ 播放中？投递帧事件
//! AboutToWait     ─▶ 播放中：Poll + 请求重绘；空闲：Wait
//! ```

use anyhow::Context;
use viewport_fps::addon::{TestSettings, ViewportFps};
use viewport_fps::core::{log, Clock, Config, MonotonicClock, TickEvent, WindowCloseEvent};
use viewport_fps::gfx::{clear_color_for_frame, ViewportContext};
use viewport_fps::gui::{GuiManager, GuiState};
use viewport_fps::host::{FrameHandlers, SharedPlayback};
use viewport_fps::{app_error, app_info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

/// 应用程序入口点
///
/// # 初始化流程
///
/// 1. 加载配置文件（config.toml）并应用命令行参数
/// 2. 初始化日志系统
/// 3. 创建视口和 GUI
/// 4. 注册插件并启动主循环
fn main() -> anyhow::Result<()> {
    let mut config = Config::from_file_or_default("config.toml");
    config.apply_args(std::env::args());
    config.validate().context("Invalid configuration")?;

    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    app_info!(version = env!("CARGO_PKG_VERSION"), "Viewport FPS starting...");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut viewport = ViewportContext::new(&event_loop, &config)?;

    let clock = MonotonicClock::new();
    let playback = SharedPlayback::new();
    let mut handlers = FrameHandlers::new();
    let mut addon = ViewportFps::new(clock, playback.clone(), TestSettings::from_config(&config.test));
    addon.register(&mut handlers);

    let mut gui = GuiManager::new(
        &viewport.device,
        viewport.surface_config.format,
        viewport.window(),
        GuiState::new(&config),
    );

    // 播放帧号，只在播放时推进
    let mut frame: u64 = 0;

    app_info!("Entering main loop...");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            if !matches!(event, WindowEvent::RedrawRequested)
                && gui.handle_event(viewport.window(), &event)
            {
                viewport.window().request_redraw();
            }

            match event {
                WindowEvent::CloseRequested => {
                    app_info!("Close requested, shutting down...");
                    handlers.notify(&mut WindowCloseEvent::new());
                    addon.unregister(&mut handlers);
                    elwt.exit();
                }
                WindowEvent::Resized(size) => {
                    viewport.resize(size.width, size.height);
                    viewport.window().request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    gui.state_mut().sync(&addon, frame);

                    if let Err(e) = viewport.draw(clear_color_for_frame(frame), &mut gui) {
                        app_error!("Draw failed: {}", e);
                        elwt.exit();
                        return;
                    }

                    gui.state_mut().apply_to(&mut addon);

                    if playback.is_playing() {
                        frame += 1;
                        handlers.notify(&mut TickEvent::new(frame, clock.now()));
                    }
                }
                _ => (),
            }
        }
        Event::AboutToWait => {
            if playback.is_playing() {
                elwt.set_control_flow(ControlFlow::Poll);
                viewport.window().request_redraw();
            } else {
                elwt.set_control_flow(ControlFlow::Wait);
            }
        }
        _ => (),
    })?;

    Ok(())
}
