use crate::camera::{Camera, CameraUniform};
use pong_core::platform::{Color, Rect};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Unit quad corner (matches shader VertexInput)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            transform: [rect.x, rect.y, rect.w, rect.h],
            tint: tint(color),
        }
    }
}

pub fn tint(color: Color) -> [f32; 4] {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a as f32 / 255.0,
    ]
}

/// Unit quad from (0, 0) to (1, 1), two triangles
const QUAD_VERTICES: [Vertex; 4] = [
    Vertex { position: [0.0, 0.0] },
    Vertex { position: [1.0, 0.0] },
    Vertex { position: [1.0, 1.0] },
    Vertex { position: [0.0, 1.0] },
];
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

pub struct GameBuffers {
    pub camera: Buffer,
    pub quad_vertex: Buffer,
    pub quad_index: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let quad_vertex = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&QUAD_VERTICES),
        usage: BufferUsages::VERTEX,
    });

    let quad_index = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Index Buffer"),
        contents: bytemuck::cast_slice(&QUAD_INDICES),
        usage: BufferUsages::INDEX,
    });

    GameBuffers {
        camera: camera_buffer,
        quad_vertex,
        quad_index,
    }
}
