use glam::Vec3;

use crate::flight::orientation::{NOSE_OFFSET, TAIL_OFFSET};

/// Vertex layout shared by every mesh: position, normal, uv (32 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
    };

    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }
}

/// CPU-side indexed triangle mesh, counter-clockwise front faces
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Unit cube centered at the origin
    pub fn cube() -> Self {
        let mut mesh = Self::default();
        mesh.push_box(Vec3::ZERO, Vec3::splat(0.5), 1.0);
        mesh
    }

    /// Horizontal square at height `y`, texture repeated `tiles` times per side
    pub fn floor(half_extent: f32, y: f32, tiles: f32) -> Self {
        let mut mesh = Self::default();
        mesh.push_quad(
            [
                Vec3::new(-half_extent, y, half_extent),
                Vec3::new(half_extent, y, half_extent),
                Vec3::new(half_extent, y, -half_extent),
                Vec3::new(-half_extent, y, -half_extent),
            ],
            tiles,
        );
        mesh
    }

    /// Procedural airplane in local space: nose at +Z, tail at -Z, wings along X
    pub fn airplane() -> Self {
        const NOSE_BASE: f32 = 1.1;
        const FUSELAGE_HALF_WIDTH: f32 = 0.22;

        let mut mesh = Self::default();

        // Fuselage from the tail up to the base of the nose cone
        let fuselage_half_len = (NOSE_BASE + TAIL_OFFSET) * 0.5;
        mesh.push_box(
            Vec3::new(0.0, 0.0, NOSE_BASE - fuselage_half_len),
            Vec3::new(FUSELAGE_HALF_WIDTH, FUSELAGE_HALF_WIDTH, fuselage_half_len),
            1.0,
        );

        // Nose cone
        let w = FUSELAGE_HALF_WIDTH;
        let tip = Vec3::new(0.0, 0.0, NOSE_OFFSET);
        let base = [
            Vec3::new(-w, -w, NOSE_BASE),
            Vec3::new(w, -w, NOSE_BASE),
            Vec3::new(w, w, NOSE_BASE),
            Vec3::new(-w, w, NOSE_BASE),
        ];
        for i in 0..base.len() {
            mesh.push_triangle(base[i], base[(i + 1) % base.len()], tip);
        }

        // Main wing
        mesh.push_box(Vec3::new(0.0, 0.0, 0.2), Vec3::new(2.0, 0.04, 0.45), 1.0);
        // Tailplane
        mesh.push_box(Vec3::new(0.0, 0.0, -1.25), Vec3::new(0.8, 0.03, 0.2), 1.0);
        // Vertical fin
        mesh.push_box(Vec3::new(0.0, 0.45, -1.3), Vec3::new(0.03, 0.4, 0.18), 1.0);

        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all vertices
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    fn push_box(&mut self, center: Vec3, half: Vec3, tiles: f32) {
        let corner = |x: f32, y: f32, z: f32| center + half * Vec3::new(x, y, z);

        #[rustfmt::skip]
        let faces = [
            // +Z
            [corner(-1.0, -1.0,  1.0), corner( 1.0, -1.0,  1.0), corner( 1.0,  1.0,  1.0), corner(-1.0,  1.0,  1.0)],
            // -Z
            [corner( 1.0, -1.0, -1.0), corner(-1.0, -1.0, -1.0), corner(-1.0,  1.0, -1.0), corner( 1.0,  1.0, -1.0)],
            // +Y
            [corner(-1.0,  1.0,  1.0), corner( 1.0,  1.0,  1.0), corner( 1.0,  1.0, -1.0), corner(-1.0,  1.0, -1.0)],
            // -Y
            [corner(-1.0, -1.0, -1.0), corner( 1.0, -1.0, -1.0), corner( 1.0, -1.0,  1.0), corner(-1.0, -1.0,  1.0)],
            // +X
            [corner( 1.0, -1.0,  1.0), corner( 1.0, -1.0, -1.0), corner( 1.0,  1.0, -1.0), corner( 1.0,  1.0,  1.0)],
            // -X
            [corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0,  1.0), corner(-1.0,  1.0,  1.0), corner(-1.0,  1.0, -1.0)],
        ];

        for face in faces {
            self.push_quad(face, tiles);
        }
    }

    /// Quad with corners in counter-clockwise order
    fn push_quad(&mut self, corners: [Vec3; 4], tiles: f32) {
        let normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]).normalize();
        let uvs = [[0.0, 0.0], [tiles, 0.0], [tiles, tiles], [0.0, tiles]];
        let base = self.vertices.len() as u32;

        self.vertices
            .extend(corners.iter().zip(uvs).map(|(&p, uv)| Vertex::new(p, normal, uv)));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a).normalize();
        let base = self.vertices.len() as u32;

        self.vertices.extend([
            Vertex::new(a, normal, [0.0, 0.0]),
            Vertex::new(b, normal, [1.0, 0.0]),
            Vertex::new(c, normal, [0.5, 1.0]),
        ]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}
