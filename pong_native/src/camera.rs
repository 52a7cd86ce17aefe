//! Camera for SuperPong
//!
//! Screen-space orthographic camera: one unit per logical pixel, origin top-left

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map `width` x `height` screen units onto clip space with y pointing down
    pub fn screen(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
