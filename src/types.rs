use glam::{Mat4, Vec3};

use crate::scene::{DrawCommand, PointLight, MAX_LIGHTS};

/// Per-frame uniform: camera matrices and point lights
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub light_positions: [[f32; 4]; MAX_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_LIGHTS],
}

impl SceneUniform {
    pub fn new(view: Mat4, projection: Mat4, camera_position: Vec3, lights: &[PointLight]) -> Self {
        let mut light_positions = [[0.0; 4]; MAX_LIGHTS];
        let mut light_colors = [[0.0; 4]; MAX_LIGHTS];

        // Unused slots stay black
        for (i, light) in lights.iter().take(MAX_LIGHTS).enumerate() {
            light_positions[i] = light.position.extend(1.0).to_array();
            light_colors[i] = light.color.extend(1.0).to_array();
        }

        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            camera_position: camera_position.extend(1.0).to_array(),
            light_positions,
            light_colors,
        }
    }
}

/// Per-draw uniform, bound with a dynamic offset
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
    /// x: unlit flag
    pub params: [f32; 4],
}

impl From<&DrawCommand> for ModelUniform {
    fn from(draw: &DrawCommand) -> Self {
        Self {
            model: draw.model.to_cols_array_2d(),
            tint: draw.tint,
            params: [if draw.unlit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

/// Round `size` up to the next multiple of `alignment`
pub fn align_to(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment) * alignment
}
