//! GUI 管理器
//!
//! GuiManager 集成 egui 和 wgpu，处理输入事件，构建面板并把 GUI
//! 绘制到视口上。

use egui;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiState;
use winit::window::Window;

use crate::gui::panels;
use crate::gui::state::GuiState;

/// GUI 管理器（使用 egui + wgpu）
pub struct GuiManager {
    // egui 核心组件
    context: egui::Context,
    state: EguiState,
    renderer: EguiRenderer,

    gui_state: GuiState,
}

impl GuiManager {
    /// 创建 GUI 管理器
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
        gui_state: GuiState,
    ) -> Self {
        let context = egui::Context::default();
        let viewport_id = context.viewport_id();

        let state = EguiState::new(
            context.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = EguiRenderer::new(device, surface_format, None, 1);

        Self {
            context,
            state,
            renderer,
            gui_state,
        }
    }

    /// 处理输入事件
    /// 返回 true 如果 GUI 需要重绘
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.repaint
    }

    /// 构建面板并录制 GUI 绘制命令
    ///
    /// 返回 egui 需要先于 `encoder` 提交的命令缓冲。
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let gui_state = &mut self.gui_state;

        let full_output = self.context.run(raw_input, |ctx| {
            egui::SidePanel::left("control_panel")
                .default_width(280.0)
                .show(ctx, |ui| {
                    ui.heading("Viewport FPS");
                    ui.separator();

                    panels::viewport_fps::render(ui, gui_state);
                });
        });

        // 处理平台输出（光标、复制粘贴等）
        self.state.handle_platform_output(window, full_output.platform_output);

        let pixels_per_point = full_output.pixels_per_point;
        let paint_jobs = self.context.tessellate(full_output.shapes, pixels_per_point);
        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let command_buffers =
            self.renderer.update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load, // 保留视口渲染结果
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        command_buffers
    }

    /// 获取 GUI 状态可变引用
    pub fn state_mut(&mut self) -> &mut GuiState {
        &mut self.gui_state
    }
}
