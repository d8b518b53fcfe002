//! Viewport FPS 面板
//!
//! 空闲时显示测试帧数编辑框，测试进行中显示进度；
//! 下方是运行/取消按钮和最小、最大、平均帧率。

use egui;
use crate::gui::state::GuiState;

/// 渲染 Viewport FPS 面板
pub fn render(ui: &mut egui::Ui, state: &mut GuiState) {
    ui.collapsing("Viewport FPS", |ui| {
        if state.report.is_running {
            ui.label(state.progress_label());
        } else {
            let minimum = state.warmup_frames;
            ui.horizontal(|ui| {
                ui.label("Test frame length");
                ui.add(
                    egui::DragValue::new(&mut state.test_length)
                        .clamp_range(minimum..=u32::MAX)
                        .speed(1.0),
                );
            });
        }

        let action = state.action();
        if ui
            .button(action.label())
            .on_hover_text(action.description())
            .clicked()
        {
            state.pending_action = Some(action);
        }

        ui.group(|ui| {
            egui::Grid::new("viewport_fps_results")
                .num_columns(2)
                .show(ui, |ui| {
                    for (name, value) in state.result_rows() {
                        ui.label(name);
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });

        ui.label(format!("Viewport frame: {}", state.viewport_frame));
        if state.vsync {
            ui.colored_label(egui::Color32::YELLOW, "⚠ VSync is on, FPS is capped by the display");
        }
    });
}
