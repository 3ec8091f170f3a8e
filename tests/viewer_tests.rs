use flight_viewer::camera::CameraMode;
use flight_viewer::config::ViewerConfig;
use flight_viewer::core::{Button, Controller};
use flight_viewer::flight::FlightMode;
use flight_viewer::frame::FrameInfo;
use flight_viewer::scene::MeshKind;
use flight_viewer::viewer::Viewer;
use glam::Vec3;

#[derive(Default)]
struct ScriptedInput {
    pressed: Vec<Button>,
    mouse: (f32, f32),
}

impl ScriptedInput {
    fn keys(buttons: &[Button]) -> Self {
        Self {
            pressed: buttons.to_vec(),
            mouse: (0.0, 0.0),
        }
    }
}

impl Controller for ScriptedInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse
    }
}

/// Drive the viewer through a fixed-rate session
struct Session {
    viewer: Viewer,
    frame: u64,
    dt: f32,
}

impl Session {
    fn new(config: &ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(config),
            frame: 0,
            dt: 1.0 / 60.0,
        }
    }

    fn step(&mut self, input: &ScriptedInput) -> FlightMode {
        let frame = FrameInfo::new(self.frame, self.frame as f32 * self.dt, self.dt);
        self.frame += 1;
        self.viewer.update(&frame, input)
    }

    fn run(&mut self, frames: usize, input: &ScriptedInput) {
        for _ in 0..frames {
            self.step(input);
        }
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_full_piloting_session() {
        let mut session = Session::new(&ViewerConfig::default());
        let idle = ScriptedInput::default();

        // Watch the scripted flight from the free camera
        session.run(60, &idle);
        assert_eq!(session.viewer.camera.mode(), CameraMode::Free);
        assert_eq!(session.viewer.airplane.position().y, 7.0);

        // Chase, then take control
        session.step(&ScriptedInput::keys(&[Button::KeyO]));
        session.step(&ScriptedInput::keys(&[Button::KeyC]));
        assert!(session.viewer.is_piloting());

        let before = session.viewer.airplane.position();
        session.run(60, &ScriptedInput::keys(&[Button::KeyW, Button::Space]));
        let climbed = session.viewer.airplane.position().y - before.y;
        assert!((climbed - 2.5).abs() < 1e-3, "climbed {}", climbed);
        assert_eq!(
            session.viewer.camera.position,
            session.viewer.airplane.tail_anchor()
        );

        // Hand control back and return to the free camera
        assert_eq!(session.step(&ScriptedInput::keys(&[Button::KeyV])), FlightMode::Scripted);
        session.step(&ScriptedInput::keys(&[Button::KeyF]));
        assert_eq!(session.viewer.camera.mode(), CameraMode::Free);
    }

    #[test]
    fn test_scripted_flight_keeps_its_altitude_after_manual_climb() {
        let mut session = Session::new(&ViewerConfig::default());
        session.step(&ScriptedInput::keys(&[Button::KeyO, Button::KeyC]));
        session.run(30, &ScriptedInput::keys(&[Button::Space]));
        let altitude = session.viewer.airplane.position().y;
        assert!(altitude > 7.0);

        session.step(&ScriptedInput::keys(&[Button::KeyV]));
        session.run(30, &ScriptedInput::default());
        assert_eq!(session.viewer.airplane.position().y, altitude);
    }

    #[test]
    fn test_mouse_look_while_piloting_turns_the_airplane() {
        let mut session = Session::new(&ViewerConfig::default());
        session.step(&ScriptedInput::keys(&[Button::KeyO, Button::KeyC]));

        // Yaw -90 -> 0: heading front becomes +X, forward travels along -X
        let look = ScriptedInput {
            pressed: vec![],
            mouse: (900.0, 0.0),
        };
        session.step(&look);
        session.run(10, &ScriptedInput::keys(&[Button::KeyW]));

        let direction = session.viewer.airplane.direction();
        assert!((direction - Vec3::NEG_X).length() < 1e-3, "direction {}", direction);
    }

    #[test]
    fn test_draw_list_tracks_airplane() {
        let mut session = Session::new(&ViewerConfig::default());
        session.run(10, &ScriptedInput::default());

        let draws = session.viewer.draw_list();
        let airplane = draws
            .iter()
            .find(|d| d.mesh == MeshKind::Airplane)
            .expect("airplane draw");
        assert_eq!(airplane.model, session.viewer.airplane.model_matrix());
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_file_overrides_start_position() {
        let path = std::env::temp_dir().join(format!("flight-viewer-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "flight": { "start_position": [0.0, 20.0, 0.0] }, "camera": { "zoom": 30.0 } }"#,
        )
        .unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let viewer = Viewer::new(&config);
        assert_eq!(viewer.airplane.position(), Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(viewer.camera.zoom(), 30.0);
    }

    #[test]
    fn test_custom_spacing_moves_cubes() {
        let mut config = ViewerConfig::default();
        config.scene.spacing = 4.0;
        let viewer = Viewer::new(&config);
        assert!(viewer.scene.cubes.contains(&Vec3::new(4.0, 0.0, 4.0)));
    }
}
