use crate::kit::Indicator;

const PAD_SIZE: f32 = 100.0;
const PAD_GAP: f32 = 20.0;
/// Fraction of the screen width the row may use.
const MAX_ROW_FRACTION: f32 = 0.95;
pub const HIGHLIGHT_SCALE: f32 = 1.1;

/// Screen rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PadRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Same center, sides multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        let (cx, cy) = self.center();
        let w = self.w * factor;
        let h = self.h * factor;
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }
}

/// Pads in one centered row, shrunk to fit narrow windows.
pub fn row_layout(pad_count: usize, screen_w: f32, screen_h: f32) -> Vec<PadRect> {
    if pad_count == 0 {
        return Vec::new();
    }
    let natural = pad_count as f32 * PAD_SIZE + (pad_count - 1) as f32 * PAD_GAP;
    let scale = (screen_w * MAX_ROW_FRACTION / natural).min(1.0);
    let size = PAD_SIZE * scale;
    let gap = PAD_GAP * scale;
    let row_w = natural * scale;
    let left = (screen_w - row_w) / 2.0;
    let top = (screen_h - size) / 2.0;

    (0..pad_count)
        .map(|i| PadRect {
            x: left + i as f32 * (size + gap),
            y: top,
            w: size,
            h: size,
        })
        .collect()
}

/// How a pad looks at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadVisual {
    /// 0.0 before the pad is revealed, rising to 1.0 over the fade.
    pub alpha: f32,
    pub scale: f32,
    pub highlighted: bool,
}

impl PadVisual {
    pub fn of(indicator: &Indicator, now_ms: u64, fade_ms: u64) -> Self {
        let alpha = match indicator.visible_since_ms() {
            None => 0.0,
            Some(_) if fade_ms == 0 => 1.0,
            Some(since) => (now_ms.saturating_sub(since) as f32 / fade_ms as f32).min(1.0),
        };
        let highlighted = indicator.is_highlighted();
        Self {
            alpha,
            scale: if highlighted { HIGHLIGHT_SCALE } else { 1.0 },
            highlighted,
        }
    }
}
