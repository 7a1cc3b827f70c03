//! Winit input event adapter.
//!
//! Translates winit input events into the crate's platform-agnostic input
//! types so game logic never sees the windowing layer.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{ButtonState, Input, Key, MouseButton};

/// Maps a winit physical key to the engine [`Key`], if it is one we bind.
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key = match code {
        // Letter keys
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        // Control keys
        KeyCode::Space => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,

        // Modifier keys
        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::ControlLeft => Key::ControlLeft,
        KeyCode::ControlRight => Key::ControlRight,
        KeyCode::AltLeft => Key::AltLeft,
        KeyCode::AltRight => Key::AltRight,

        // Arrow keys
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        _ => return None,
    };

    Some(key)
}

#[must_use]
pub fn translate_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[must_use]
pub fn translate_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Feeds one winit window event into the [`Input`] state.
pub fn process_window_event(input: &mut Input, event: &WindowEvent) {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            if let Some(key) = translate_key(event.physical_key) {
                input.inject_key(key, translate_element_state(event.state));
            }
        }

        WindowEvent::CursorMoved { position, .. } => {
            input.inject_mouse_position(position.x as f32, position.y as f32);
        }

        WindowEvent::MouseInput { state, button, .. } => {
            input.inject_mouse_button(
                translate_mouse_button(*button),
                translate_element_state(*state),
            );
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => {
                    const PIXEL_SCALE: f32 = 0.01;
                    (pos.x as f32 * PIXEL_SCALE, pos.y as f32 * PIXEL_SCALE)
                }
            };
            input.inject_scroll(dx, dy);
        }

        WindowEvent::Resized(size) => {
            input.inject_resize(size.width, size.height);
        }

        _ => {}
    }
}
