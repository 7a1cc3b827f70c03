//! Platform-agnostic input state
//!
//! Defines input types and a state container that do not depend on any GUI
//! library. Platform adapters (e.g. the winit adapter in [`crate::app`])
//! translate native events into these types through the `inject_*` calls;
//! game logic only reads the query API and never sees the windowing layer.

use glam::Vec2;
use std::collections::HashSet;

/// Keyboard key enumeration (platform-agnostic).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    // Letter keys
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Control keys
    Space,
    Enter,
    Escape,
    Tab,

    // Modifier keys
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Mouse button enumeration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Button state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Input state container, owned by the application and read fresh each frame.
#[derive(Debug, Clone, Default)]
pub struct Input {
    // Keyboard state
    pressed_keys: HashSet<Key>,
    just_pressed_keys: HashSet<Key>,
    just_released_keys: HashSet<Key>,

    // Mouse state
    pressed_mouse: HashSet<MouseButton>,
    cursor_position: Vec2,
    cursor_delta: Vec2,
    scroll_delta: Vec2,

    // Window state
    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== System API (called by the adapter) ==========

    /// Clears transient state at the frame boundary (edge triggers and deltas).
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    /// Injects a keyboard event. Key repeats while held do not re-trigger
    /// the just-pressed edge.
    pub fn inject_key(&mut self, key: Key, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_keys.insert(key) {
                    self.just_pressed_keys.insert(key);
                }
            }
            ButtonState::Released => {
                if self.pressed_keys.remove(&key) {
                    self.just_released_keys.insert(key);
                }
            }
        }
    }

    /// Injects a mouse button event.
    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                self.pressed_mouse.insert(button);
            }
            ButtonState::Released => {
                self.pressed_mouse.remove(&button);
            }
        }
    }

    /// Injects a cursor position update. The first update establishes the
    /// position without producing a delta.
    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    /// Injects a scroll wheel event.
    pub fn inject_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta += Vec2::new(delta_x, delta_y);
    }

    /// Injects a window resize event.
    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== Query API (for game logic) ==========

    /// Whether a key is currently held down.
    #[must_use]
    pub fn get_key(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Whether a key was pressed this frame.
    #[must_use]
    pub fn get_key_down(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Whether a key was released this frame.
    #[must_use]
    pub fn get_key_up(&self, key: Key) -> bool {
        self.just_released_keys.contains(&key)
    }

    /// Whether a mouse button is currently held down.
    #[must_use]
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    /// Cursor movement accumulated since the last frame boundary.
    #[must_use]
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// Scroll accumulated since the last frame boundary.
    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}
