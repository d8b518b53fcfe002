//! 无界面的 FPS 测试
//!
//! 用固定帧率模拟宿主的播放循环，跑完一次测试后输出结果。
//! 适合在没有显示设备的环境中检查插件的行为。
//!
//! ```bash
//! cargo run --bin viewport_fps_headless -- --frames 300 --simulated-fps 120
//! ```

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use viewport_fps::addon::{PanelAction, TestSettings, ViewportFps};
use viewport_fps::core::{log, Clock, Config, MonotonicClock, TickEvent, WindowCloseEvent};
use viewport_fps::gui::format_fps;
use viewport_fps::host::{FrameHandlers, SharedPlayback};
use viewport_fps::{app_info, app_warn};

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

    let frame_duration = Duration::try_from_secs_f64(1.0 / config.playback.simulated_fps)
        .context("Invalid simulated frame rate")?;
    app_info!(
        frames = config.test.length,
        warmup = config.test.warmup_frames,
        simulated_fps = config.playback.simulated_fps,
        "Starting headless FPS test"
    );

    let clock = MonotonicClock::new();
    let playback = SharedPlayback::new();
    let mut handlers = FrameHandlers::new();
    let mut addon = ViewportFps::new(clock, playback.clone(), TestSettings::from_config(&config.test));
    addon.register(&mut handlers);

    addon.apply(PanelAction::RunTest);

    let mut frame: u64 = 0;
    let mut next_frame = Instant::now() + frame_duration;
    while playback.is_playing() {
        let now = Instant::now();
        if next_frame > now {
            thread::sleep(next_frame - now);
        } else if now - next_frame > frame_duration {
            app_warn!(frame, "Simulated playback fell behind schedule");
        }
        next_frame += frame_duration;

        frame += 1;
        handlers.notify(&mut TickEvent::new(frame, clock.now()));
    }

    handlers.notify(&mut WindowCloseEvent::new());
    addon.unregister(&mut handlers);

    let report = addon.report();
    println!("Viewport FPS ({} frames)", report.frames_elapsed);
    println!("  Minimum  {}", format_fps(report.display_minimum()));
    println!("  Maximum  {}", format_fps(report.display_maximum()));
    println!("  Average  {}", format_fps(report.display_average()));

    Ok(())
}
