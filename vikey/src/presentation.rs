use crate::state::{EditorState, Mode};

const MIN_CARET_WIDTH: f64 = 6.0;
const MAX_CARET_WIDTH: f64 = 18.0;
const THIN_CARET_WIDTH: f64 = 1.0;

/// Caret width for the current mode: a block the width of `W` in the
/// typing font (clamped to `[6, 18]`) in Normal/Visual/VisualLine, a
/// 1px bar otherwise.
pub fn caret_width(mode: Mode, glyph_w_width: f64) -> f64 {
    if mode.uses_block_caret() {
        glyph_w_width.clamp(MIN_CARET_WIDTH, MAX_CARET_WIDTH)
    } else {
        THIN_CARET_WIDTH
    }
}

/// The status-line text for the current state: `INSERT`, `NORMAL [n]`,
/// `VISUAL`, `VISUAL LINE`, or the literal command buffer including its
/// prefix.
pub fn status_line(state: &EditorState) -> String {
    match state.mode {
        Mode::Command => state.command_buffer.clone(),
        mode => mode.display_name(state.count_prefix),
    }
}
