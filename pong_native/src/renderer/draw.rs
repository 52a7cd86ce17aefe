use tracing::{debug, warn};
use wgpu::*;
use winit::dpi::PhysicalSize;

use super::resources::InstanceData;
use super::GpuRenderer;
use pong_core::RenderError;

/// Upload the queued quads and draw them over the clear color
pub fn draw_frame(renderer: &mut GpuRenderer) -> Result<(), RenderError> {
    if sync_surface_size(&mut renderer.surface_config, renderer.window.inner_size()) {
        debug!(
            width = renderer.surface_config.width,
            height = renderer.surface_config.height,
            "window resized, reconfiguring surface"
        );
        renderer
            .surface
            .configure(&renderer.device, &renderer.surface_config);
    }

    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(err) => return Err(surface_error(renderer, err)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    update_instances(renderer);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(renderer.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !renderer.instances.is_empty() {
            pass.set_pipeline(&renderer.pipeline.quad_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.buffers.quad_vertex.slice(..));
            pass.set_vertex_buffer(1, renderer.instance_buffer.slice(..));
            pass.set_index_buffer(renderer.buffers.quad_index.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..6, 0, 0..renderer.instances.len() as u32);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Grow the instance buffer if needed, then write this frame's quads
fn update_instances(renderer: &mut GpuRenderer) {
    let needed = renderer.instances.len();
    if needed > renderer.instance_capacity {
        let capacity = needed.next_power_of_two();
        renderer.instance_buffer = create_instance_buffer(&renderer.device, capacity);
        renderer.instance_capacity = capacity;
    }
    if needed > 0 {
        renderer.queue.write_buffer(
            &renderer.instance_buffer,
            0,
            bytemuck::cast_slice(&renderer.instances),
        );
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Copy the window's current physical size into `config`.
/// Returns true if it changed. A minimised window reports zero, which
/// wgpu rejects, so each side is at least 1.
pub fn sync_surface_size(config: &mut SurfaceConfiguration, size: PhysicalSize<u32>) -> bool {
    let width = size.width.max(1);
    let height = size.height.max(1);
    if config.width == width && config.height == height {
        return false;
    }
    config.width = width;
    config.height = height;
    true
}

/// Lost and outdated surfaces are reconfigured at the window's current
/// size and cost one frame
fn surface_error(renderer: &mut GpuRenderer, err: SurfaceError) -> RenderError {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => {
            warn!(error = %err, "surface needs reconfiguring");
            sync_surface_size(&mut renderer.surface_config, renderer.window.inner_size());
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            RenderError::Surface(err.to_string())
        }
        SurfaceError::OutOfMemory => RenderError::Fatal(err.to_string()),
        other => RenderError::Surface(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: u32, height: u32) -> SurfaceConfiguration {
        SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: TextureFormat::Bgra8UnormSrgb,
            width,
            height,
            present_mode: PresentMode::AutoNoVsync,
            alpha_mode: CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    #[test]
    fn test_surface_follows_window_size() {
        let mut surface = config(640, 480);
        // Window moved to a 2x display
        assert!(sync_surface_size(&mut surface, PhysicalSize::new(1280, 960)));
        assert_eq!((surface.width, surface.height), (1280, 960));

        assert!(!sync_surface_size(&mut surface, PhysicalSize::new(1280, 960)));
    }

    #[test]
    fn test_minimised_window_keeps_a_valid_surface() {
        let mut surface = config(640, 480);
        assert!(sync_surface_size(&mut surface, PhysicalSize::new(0, 0)));
        assert_eq!((surface.width, surface.height), (1, 1));
    }
}
