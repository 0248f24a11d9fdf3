use macroquad::prelude::KeyCode as NativeKey;

use crate::kit::KeyCode;

/// Translate a window key into the numeric key code kits are written against.
/// Modifiers and keys without a stable code map to `None`.
pub fn key_code(key: NativeKey) -> Option<KeyCode> {
    let code = match key {
        NativeKey::Backspace => 8,
        NativeKey::Tab => 9,
        NativeKey::Enter | NativeKey::KpEnter => 13,
        NativeKey::Pause => 19,
        NativeKey::CapsLock => 20,
        NativeKey::Escape => 27,
        NativeKey::Space => 32,
        NativeKey::PageUp => 33,
        NativeKey::PageDown => 34,
        NativeKey::End => 35,
        NativeKey::Home => 36,
        NativeKey::Left => 37,
        NativeKey::Up => 38,
        NativeKey::Right => 39,
        NativeKey::Down => 40,
        NativeKey::Insert => 45,
        NativeKey::Delete => 46,
        NativeKey::Key0 => 48,
        NativeKey::Key1 => 49,
        NativeKey::Key2 => 50,
        NativeKey::Key3 => 51,
        NativeKey::Key4 => 52,
        NativeKey::Key5 => 53,
        NativeKey::Key6 => 54,
        NativeKey::Key7 => 55,
        NativeKey::Key8 => 56,
        NativeKey::Key9 => 57,
        NativeKey::A => 65,
        NativeKey::B => 66,
        NativeKey::C => 67,
        NativeKey::D => 68,
        NativeKey::E => 69,
        NativeKey::F => 70,
        NativeKey::G => 71,
        NativeKey::H => 72,
        NativeKey::I => 73,
        NativeKey::J => 74,
        NativeKey::K => 75,
        NativeKey::L => 76,
        NativeKey::M => 77,
        NativeKey::N => 78,
        NativeKey::O => 79,
        NativeKey::P => 80,
        NativeKey::Q => 81,
        NativeKey::R => 82,
        NativeKey::S => 83,
        NativeKey::T => 84,
        NativeKey::U => 85,
        NativeKey::V => 86,
        NativeKey::W => 87,
        NativeKey::X => 88,
        NativeKey::Y => 89,
        NativeKey::Z => 90,
        NativeKey::Kp0 => 96,
        NativeKey::Kp1 => 97,
        NativeKey::Kp2 => 98,
        NativeKey::Kp3 => 99,
        NativeKey::Kp4 => 100,
        NativeKey::Kp5 => 101,
        NativeKey::Kp6 => 102,
        NativeKey::Kp7 => 103,
        NativeKey::Kp8 => 104,
        NativeKey::Kp9 => 105,
        NativeKey::KpMultiply => 106,
        NativeKey::KpAdd => 107,
        NativeKey::KpSubtract => 109,
        NativeKey::KpDecimal => 110,
        NativeKey::KpDivide => 111,
        NativeKey::F1 => 112,
        NativeKey::F2 => 113,
        NativeKey::F3 => 114,
        NativeKey::F4 => 115,
        NativeKey::F5 => 116,
        NativeKey::F6 => 117,
        NativeKey::F7 => 118,
        NativeKey::F8 => 119,
        NativeKey::F9 => 120,
        NativeKey::F10 => 121,
        NativeKey::F11 => 122,
        NativeKey::F12 => 123,
        NativeKey::NumLock => 144,
        NativeKey::ScrollLock => 145,
        NativeKey::Semicolon => 186,
        NativeKey::Equal | NativeKey::KpEqual => 187,
        NativeKey::Comma => 188,
        NativeKey::Minus => 189,
        NativeKey::Period => 190,
        NativeKey::Slash => 191,
        NativeKey::GraveAccent => 192,
        NativeKey::LeftBracket => 219,
        NativeKey::Backslash => 220,
        NativeKey::RightBracket => 221,
        NativeKey::Apostrophe => 222,
        _ => return None,
    };
    Some(KeyCode(code))
}
