use macroquad::prelude::*;

use super::layout::{PadRect, PadVisual, row_layout};
use crate::kit::IndicatorBoard;

const BACKGROUND: Color = Color::new(0.08, 0.08, 0.1, 1.0);
const PAD_FILL: Color = Color::new(0.0, 0.0, 0.0, 0.4);
const PAD_BORDER: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const HIGHLIGHT_BORDER: Color = Color::new(1.0, 0.776, 0.0, 1.0);
const CAPTION_COLOR: Color = WHITE;
const NAME_COLOR: Color = Color::new(1.0, 0.776, 0.0, 1.0);

/// Draws the pad row.
pub struct PadRenderer {
    fade_ms: u64,
}

impl PadRenderer {
    pub fn new(fade_ms: u64) -> Self {
        Self { fade_ms }
    }

    pub fn draw(&self, board: &IndicatorBoard, now_ms: u64) {
        clear_background(BACKGROUND);
        let rects = row_layout(board.len(), screen_width(), screen_height());
        for ((_, indicator), rect) in board.iter().zip(rects) {
            let visual = PadVisual::of(indicator, now_ms, self.fade_ms);
            if visual.alpha <= 0.0 {
                continue;
            }
            self.draw_pad(&rect.scaled(visual.scale), &visual, &indicator.caption, &indicator.name);
        }
    }

    fn draw_pad(&self, rect: &PadRect, visual: &PadVisual, caption: &str, name: &str) {
        let fade = |c: Color| Color::new(c.r, c.g, c.b, c.a * visual.alpha);

        draw_rectangle(rect.x, rect.y, rect.w, rect.h, fade(PAD_FILL));
        let (border, thickness) = if visual.highlighted {
            (HIGHLIGHT_BORDER, 6.0)
        } else {
            (PAD_BORDER, 4.0)
        };
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, fade(border));

        let (cx, cy) = rect.center();
        let caption_size = (rect.h * 0.4) as u16;
        let dims = measure_text(caption, None, caption_size, 1.0);
        draw_text(
            caption,
            cx - dims.width / 2.0,
            cy,
            caption_size as f32,
            fade(CAPTION_COLOR),
        );

        let name_size = (rect.h * 0.16) as u16;
        let label = name.to_uppercase();
        let dims = measure_text(&label, None, name_size, 1.0);
        draw_text(
            &label,
            cx - dims.width / 2.0,
            cy + rect.h * 0.3,
            name_size as f32,
            fade(NAME_COLOR),
        );
    }
}
