mod layout;
mod pad_renderer;

pub use layout::{HIGHLIGHT_SCALE, PadRect, PadVisual, row_layout};
pub use pad_renderer::PadRenderer;
