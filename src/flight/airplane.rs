use glam::{Mat4, Vec3};

use super::heading::Heading;
use super::mode::{Direction, Directions, FlightMode};
use super::orientation::{Orientation, WORLD_UP};
use crate::config::FlightConfig;
use crate::frame::FrameInfo;

/// Rigid flight state of the airplane.
///
/// Two orientation representations are kept apart:
/// - `heading` (yaw/pitch) steers displacement in manual mode only
/// - `orientation` (from the direction of travel) feeds rendering and the chase anchors
#[derive(Debug, Clone)]
pub struct Airplane {
    position: Vec3,
    previous_position: Vec3,
    heading: Heading,
    orientation: Orientation,
    mode: FlightMode,
    config: FlightConfig,
}

impl Airplane {
    pub fn new(config: FlightConfig) -> Self {
        let position = config.start_position;
        Self {
            position,
            previous_position: position,
            heading: Heading::new(config.yaw, config.pitch),
            orientation: Orientation::identity(position),
            mode: FlightMode::Scripted,
            config,
        }
    }

    /// Run the update rule of the active mode for one frame.
    /// Returns the mode whose rule ran.
    pub fn update(&mut self, frame: &FrameInfo, input: &Directions) -> FlightMode {
        match self.mode {
            FlightMode::Scripted => {
                let (radius, speed) = (self.config.figure_eight_radius, self.config.figure_eight_speed);
                self.fly_figure_eight(frame.time, radius, speed);
            }
            FlightMode::Manual if self.config.cruise => self.fly_forward(frame.delta),
            FlightMode::Manual => self.process_directional_input(input, frame.delta),
        }
        self.mode
    }

    /// Place the airplane on the figure-eight at absolute time `t`.
    ///
    /// x = r sin(s t), z = r sin(2 s t); y is left untouched.
    pub fn fly_figure_eight(&mut self, t: f32, radius: f32, speed: f32) {
        self.begin_step();
        self.position.x = radius * (speed * t).sin();
        self.position.z = radius * (2.0 * speed * t).sin();
        self.end_step();
    }

    /// Move along the heading basis for every held direction.
    ///
    /// Forward subtracts `front`: the mesh nose points along +Z while the
    /// default heading faces -Z.
    pub fn process_directional_input(&mut self, directions: &Directions, dt: f32) {
        self.begin_step();
        let velocity = self.config.speed * dt;
        let (front, right) = (self.heading.front(), self.heading.right());

        for direction in directions.iter() {
            self.position += match direction {
                Direction::Forward => -front * velocity,
                Direction::Backward => front * velocity,
                Direction::Left => right * velocity,
                Direction::Right => -right * velocity,
                Direction::Up => WORLD_UP * velocity,
            };
        }
        self.end_step();
    }

    /// Input-free straight flight
    pub fn fly_forward(&mut self, dt: f32) {
        self.process_directional_input(&Directions::only(Direction::Forward), dt);
    }

    /// Steer the heading. Ignored unless piloting manually.
    pub fn apply_look_input(&mut self, d_yaw: f32, d_pitch: f32) -> bool {
        if self.mode != FlightMode::Manual {
            return false;
        }
        self.heading.apply_look_input(d_yaw, d_pitch, self.config.sensitivity);
        true
    }

    /// Returns true when the mode changed
    pub fn enter_manual(&mut self) -> bool {
        self.set_mode(FlightMode::Manual)
    }

    /// Returns true when the mode changed
    pub fn enter_scripted(&mut self) -> bool {
        self.set_mode(FlightMode::Scripted)
    }

    fn set_mode(&mut self, mode: FlightMode) -> bool {
        if self.mode == mode {
            return false;
        }
        log::info!("Airplane flight mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        true
    }

    fn begin_step(&mut self) {
        self.previous_position = self.position;
    }

    fn end_step(&mut self) {
        self.orientation = self.orientation.update(self.position, self.previous_position);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at the start of the latest step
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Move the airplane without a motion step; the next step starts from here
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.previous_position = position;
        self.orientation = self.orientation.update(position, position);
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn direction(&self) -> Vec3 {
        self.orientation.direction
    }

    /// Model matrix for rendering
    pub fn model_matrix(&self) -> Mat4 {
        self.orientation.rotation
    }

    pub fn nose_anchor(&self) -> Vec3 {
        self.orientation.nose_anchor
    }

    pub fn tail_anchor(&self) -> Vec3 {
        self.orientation.tail_anchor
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }
}

impl Default for Airplane {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}
