use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::flight::{Airplane, Direction, Directions, Heading, WORLD_UP};

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// First-person fly camera
    #[default]
    Free,
    /// Sits on the airplane's tail anchor, looking at its nose anchor
    Chase,
}

impl CameraMode {
    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Free => "Free",
            CameraMode::Chase => "Chase",
        }
    }
}

/// Camera rig. Reads airplane anchors in chase mode, never writes flight state.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    heading: Heading,
    /// Look-at point while chasing
    target: Vec3,
    zoom: f32,
    mode: CameraMode,
    speed: f32,
    sensitivity: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let heading = Heading::new(config.yaw, config.pitch);
        Self {
            position: config.start_position,
            target: config.start_position + heading.front(),
            heading,
            zoom: config.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            mode: CameraMode::Free,
            speed: config.speed,
            sensitivity: config.sensitivity,
            near: config.near,
            far: config.far,
        }
    }

    /// Free-fly movement; forward follows the view direction
    pub fn process_keyboard(&mut self, directions: &Directions, dt: f32) {
        let velocity = self.speed * dt;
        let (front, right) = (self.heading.front(), self.heading.right());

        for direction in directions.iter() {
            self.position += match direction {
                Direction::Forward => front * velocity,
                Direction::Backward => -front * velocity,
                Direction::Left => -right * velocity,
                Direction::Right => right * velocity,
                Direction::Up => WORLD_UP * velocity,
            };
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.heading.apply_look_input(x_offset, y_offset, self.sensitivity);
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Returns true when the mode changed
    pub fn enter_free(&mut self) -> bool {
        if self.mode == CameraMode::Free {
            return false;
        }
        log::info!("Camera mode: {} -> {}", self.mode.label(), CameraMode::Free.label());
        self.mode = CameraMode::Free;
        true
    }

    /// Snap behind the airplane. Returns true when the mode changed.
    pub fn enter_chase(&mut self, airplane: &Airplane) -> bool {
        self.follow(airplane);
        if self.mode == CameraMode::Chase {
            return false;
        }
        log::info!("Camera mode: {} -> {}", self.mode.label(), CameraMode::Chase.label());
        self.mode = CameraMode::Chase;
        true
    }

    /// Track the airplane's anchors
    pub fn follow(&mut self, airplane: &Airplane) {
        self.position = airplane.tail_anchor();
        self.target = airplane.nose_anchor();
    }

    pub fn view_matrix(&self) -> Mat4 {
        match self.mode {
            CameraMode::Free => Mat4::look_at_rh(
                self.position,
                self.position + self.heading.front(),
                self.heading.up(),
            ),
            CameraMode::Chase => Mat4::look_at_rh(self.position, self.target, WORLD_UP),
        }
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect_ratio, self.near, self.far)
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
