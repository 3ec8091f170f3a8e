use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixel-delta scroll events are converted to lines at this rate
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    pressed_keys: HashSet<Button>,
    /// Same content as `pressed_keys`, in press order
    pressed_vec: Vec<Button>,
    /// Raw pointer motion since last reset. Device events keep arriving while
    /// the cursor is grabbed, window cursor events do not.
    mouse_delta: (f32, f32),
    scroll_delta: f32,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => {
                        position.y as f32 / PIXELS_PER_SCROLL_LINE
                    }
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Process a Winit DeviceEvent (raw mouse motion)
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_delta.0 += delta.0 as f32;
            self.mouse_delta.1 += delta.1 as f32;
        }
    }

    /// Reset per-frame state. Call at the end of each frame after input is consumed.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::KeyV => Some(Button::KeyV),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit window events carry private fields, so key handling is driven
    // through set_button directly.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyC, ElementState::Pressed);
        controller.set_button(Button::KeyC, ElementState::Pressed);
        assert!(controller.is_down(Button::KeyC));
        assert_eq!(controller.get_down_keys(), &[Button::KeyC]);

        controller.set_button(Button::KeyC, ElementState::Released);
        assert!(!controller.is_down(Button::KeyC));
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_mouse_motion_accumulates() {
        let mut controller = WinitController::new();
        controller.process_device_event(&DeviceEvent::MouseMotion { delta: (3.0, -2.0) });
        controller.process_device_event(&DeviceEvent::MouseMotion { delta: (1.5, 4.0) });
        assert_eq!(controller.mouse_delta(), (4.5, 2.0));
    }

    #[test]
    fn test_delta_reset_keeps_buttons() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.mouse_delta = (10.0, 5.0);
        controller.scroll_delta = 2.0;

        controller.reset_deltas();
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
        assert!(controller.is_down(Button::KeyW));
    }

    #[test]
    fn test_release_all_on_focus_loss() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.set_button(Button::Space, ElementState::Pressed);

        controller.process_event(&WindowEvent::Focused(false));
        assert!(controller.get_down_keys().is_empty());
        assert!(!controller.is_down(Button::Space));
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyV), Some(Button::KeyV));
        assert_eq!(WinitController::keycode_to_button(KeyCode::Space), Some(Button::Space));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyQ), None);
    }
}
