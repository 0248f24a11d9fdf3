use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric key identifier, numbered like the legacy DOM `keyCode`
/// (`A` = 65, `0` = 48, space = 32, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);

    /// Key code of an ASCII letter or digit, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(Self(c.to_ascii_uppercase() as u32)),
            'A'..='Z' | '0'..='9' => Some(Self(c as u32)),
            ' ' => Some(Self::SPACE),
            _ => None,
        }
    }

    /// Short caption printed on a pad.
    pub fn label(self) -> String {
        let code = self.0;
        match code {
            48..=57 | 65..=90 => char::from_u32(code).map(String::from).unwrap_or_default(),
            96..=105 => format!("NUM{}", code - 96),
            112..=123 => format!("F{}", code - 111),
            8 => "BKSP".to_string(),
            9 => "TAB".to_string(),
            13 => "ENTER".to_string(),
            27 => "ESC".to_string(),
            32 => "SPACE".to_string(),
            37 => "LEFT".to_string(),
            38 => "UP".to_string(),
            39 => "RIGHT".to_string(),
            40 => "DOWN".to_string(),
            186 => ";".to_string(),
            187 => "=".to_string(),
            188 => ",".to_string(),
            189 => "-".to_string(),
            190 => ".".to_string(),
            191 => "/".to_string(),
            192 => "`".to_string(),
            219 => "[".to_string(),
            220 => "\\".to_string(),
            221 => "]".to_string(),
            222 => "'".to_string(),
            _ => format!("#{code}"),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}
