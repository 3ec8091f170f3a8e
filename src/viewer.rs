use crate::camera::{Camera, CameraMode};
use crate::config::ViewerConfig;
use crate::core::{Button, Controller};
use crate::flight::{Airplane, Direction, Directions, FlightMode};
use crate::frame::FrameInfo;
use crate::scene::{DrawCommand, SceneLayout};

/// Scene state owned by the main loop: the airplane, the camera and the static layout
#[derive(Debug, Clone)]
pub struct Viewer {
    pub airplane: Airplane,
    pub camera: Camera,
    pub scene: SceneLayout,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            airplane: Airplane::new(config.flight.clone()),
            camera: Camera::new(&config.camera),
            scene: SceneLayout::new(&config.scene),
        }
    }

    /// Route one frame of input, step the airplane once and let the camera follow.
    /// Returns the flight mode whose update rule ran.
    pub fn update(&mut self, frame: &FrameInfo, controller: &dyn Controller) -> FlightMode {
        self.apply_toggles(controller);

        let piloting = self.is_piloting();
        let directions = directions_from(controller);

        let (dx, dy) = controller.mouse_delta();
        // Screen y grows downward, pitch grows upward
        let (d_yaw, d_pitch) = (dx, -dy);
        if d_yaw != 0.0 || d_pitch != 0.0 {
            if piloting {
                self.airplane.apply_look_input(d_yaw, d_pitch);
            } else if self.camera.mode() == CameraMode::Free {
                self.camera.process_mouse_movement(d_yaw, d_pitch);
            }
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        if self.camera.mode() == CameraMode::Free {
            self.camera.process_keyboard(&directions, frame.delta);
        }

        let flight_input = if piloting {
            directions
        } else {
            Directions::default()
        };
        let ran = self.airplane.update(frame, &flight_input);

        if self.camera.mode() == CameraMode::Chase {
            self.camera.follow(&self.airplane);
        }

        ran
    }

    /// Camera and flight mode switches. Manual flight is only reachable from the chase view.
    fn apply_toggles(&mut self, controller: &dyn Controller) {
        if controller.is_down(Button::KeyF) && self.airplane.mode() != FlightMode::Manual {
            self.camera.enter_free();
        }
        if controller.is_down(Button::KeyO) {
            self.camera.enter_chase(&self.airplane);
        }
        if self.camera.mode() == CameraMode::Chase {
            if controller.is_down(Button::KeyC) {
                self.airplane.enter_manual();
            }
            if controller.is_down(Button::KeyV) {
                self.airplane.enter_scripted();
            }
        }
    }

    /// Keyboard and mouse steer the airplane
    pub fn is_piloting(&self) -> bool {
        self.camera.mode() == CameraMode::Chase && self.airplane.mode() == FlightMode::Manual
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        self.scene.draw_list(&self.airplane)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

fn directions_from(controller: &dyn Controller) -> Directions {
    let mut directions = Directions::default();
    for (button, direction) in [
        (Button::KeyW, Direction::Forward),
        (Button::KeyS, Direction::Backward),
        (Button::KeyA, Direction::Left),
        (Button::KeyD, Direction::Right),
        (Button::Space, Direction::Up),
    ] {
        directions.set(direction, controller.is_down(button));
    }
    directions
}
