pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;
pub mod text;

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::StartupError;
use pipeline::PipelineState;
use pong_core::platform::{Color, Rect, Renderer};
use pong_core::RenderError;
use resources::{GameBuffers, InstanceData};
use text::ScoreFont;
use wgpu::*;
use winit::window::Window;

/// Quads reserved up front; score text grows the buffer on first draw
const INITIAL_INSTANCE_CAPACITY: usize = 1024;

/// wgpu implementation of the game's drawing surface.
///
/// Drawing calls only queue quads. `present` uploads them and submits a
/// single instanced draw.
pub struct GpuRenderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub window: Arc<Window>,

    pub pipeline: PipelineState,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub instance_buffer: Buffer,
    pub instance_capacity: usize,

    // Frame being built
    pub clear_color: wgpu::Color,
    pub instances: Vec<InstanceData>,

    font: ScoreFont,
}

impl GpuRenderer {
    /// `width` x `height` is the logical field size, whatever the window's
    /// physical pixel size
    pub async fn new(
        window: Arc<Window>,
        width: f32,
        height: f32,
        font: ScoreFont,
    ) -> Result<Self, StartupError> {
        let ctx = init::init_wgpu(window.clone()).await?;
        let camera = Camera::screen(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipeline = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let instance_buffer = draw::create_instance_buffer(&ctx.device, INITIAL_INSTANCE_CAPACITY);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipeline.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            window,
            pipeline,
            camera_bind_group,
            buffers,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            clear_color: wgpu::Color::BLACK,
            instances: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            font,
        })
    }
}

impl Renderer for GpuRenderer {
    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = resources::tint(color);
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
        self.instances.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.instances.push(InstanceData::new(rect, color));
    }

    fn measure_text(&mut self, text: &str) -> Result<(f32, f32), RenderError> {
        self.font.measure(text)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) -> Result<(), RenderError> {
        let quads = self.font.rasterize(text, x, y, color)?;
        self.instances.extend(quads);
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let result = draw::draw_frame(self);
        self.instances.clear();
        result
    }
}
