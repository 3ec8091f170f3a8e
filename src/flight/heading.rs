use glam::Vec3;

use super::orientation::WORLD_UP;

/// Pitch limit in degrees; the basis inverts at the poles
pub const MAX_PITCH: f32 = 89.0;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

/// Euler heading (degrees) with its derived facing basis.
///
/// The basis only steers displacement. It is deliberately separate from the
/// travel-derived `Orientation` that the renderer and chase camera read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Heading {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut heading = Self {
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        heading.update_vectors();
        heading
    }

    /// Apply a look offset scaled by `sensitivity`, clamping pitch
    pub fn apply_look_input(&mut self, d_yaw: f32, d_pitch: f32, sensitivity: f32) {
        self.yaw += d_yaw * sensitivity;
        self.pitch = (self.pitch + d_pitch * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self::new(DEFAULT_YAW, DEFAULT_PITCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heading_looks_down_negative_z() {
        let heading = Heading::default();
        assert!((heading.front() - Vec3::NEG_Z).length() < 1e-6);
        assert!((heading.right() - Vec3::X).length() < 1e-6);
        assert!((heading.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn look_input_is_scaled() {
        let mut heading = Heading::default();
        heading.apply_look_input(100.0, 50.0, 0.1);
        assert!((heading.yaw() - -80.0).abs() < 1e-4);
        assert!((heading.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut heading = Heading::default();
        heading.apply_look_input(0.0, 10_000.0, 0.1);
        assert_eq!(heading.pitch(), MAX_PITCH);
        heading.apply_look_input(0.0, -50_000.0, 0.1);
        assert_eq!(heading.pitch(), -MAX_PITCH);
        assert!(heading.front().is_finite());
        assert!(heading.right().is_finite());
    }

    #[test]
    fn constructor_clamps_pitch() {
        assert_eq!(Heading::new(0.0, 120.0).pitch(), MAX_PITCH);
    }

    #[test]
    fn basis_is_orthonormal() {
        let heading = Heading::new(37.0, -21.0);
        let (f, r, u) = (heading.front(), heading.right(), heading.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
    }
}
