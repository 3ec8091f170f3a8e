/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    /// Free camera
    KeyF,
    /// Chase camera
    KeyO,
    /// Manual piloting
    KeyC,
    /// Scripted flight
    KeyV,
    Escape,
}

/// Controller - handles button input states and per-frame pointer offsets
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer movement accumulated this frame, in screen pixels (x right, y down)
    fn mouse_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Scroll wheel movement accumulated this frame, in lines
    fn scroll_delta(&self) -> f32 {
        0.0
    }
}
