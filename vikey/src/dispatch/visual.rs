use crate::host::Host;
use crate::key::Key;
use crate::operator;
use crate::state::{EditorState, Mode, Operator};
use crate::types::Span;

/// Handles one key in Visual or VisualLine mode.
pub fn handle(state: &mut EditorState, host: &mut dyn Host, key: Key) -> bool {
    let Key::Char(c) = key else {
        if key == Key::Escape {
            state.return_to_normal();
            return true;
        }
        return false;
    };

    if c == 'v' || c == 'V' {
        state.return_to_normal();
        return true;
    }

    let linewise = state.mode == Mode::VisualLine;
    let free_end = current_free_end(state, host);

    match c {
        'h' => {
            let target = host.move_left(free_end, 1);
            update_selection(state, host, target, linewise);
            true
        }
        'l' => {
            let target = host.move_right(free_end, 1);
            update_selection(state, host, target, linewise);
            true
        }
        'j' => {
            let target = host.move_line_down(free_end, 1);
            update_selection(state, host, target, linewise);
            true
        }
        'k' => {
            let target = host.move_line_up(free_end, 1);
            update_selection(state, host, target, linewise);
            true
        }
        'y' => {
            let range = selection_span(state, host, linewise);
            let result = operator::apply(host, Operator::Yank, range, false);
            if result.applied {
                host.set_selection(Span::caret(range.start.0));
            }
            state.return_to_normal();
            true
        }
        'd' => {
            let range = selection_span(state, host, linewise);
            let result = operator::apply(host, Operator::Delete, range, false);
            if result.applied {
                host.set_selection(Span::caret(result.cursor));
            }
            state.return_to_normal();
            true
        }
        _ => false,
    }
}

fn current_free_end(state: &EditorState, host: &dyn Host) -> usize {
    let sel = host.selection();
    if sel.start.0 == state.visual_anchor {
        sel.end.0.saturating_sub(1).max(sel.start.0)
    } else {
        sel.start.0
    }
}

fn selection_span(state: &EditorState, host: &dyn Host, linewise: bool) -> Span {
    let free_end = current_free_end(state, host);
    let (lo, hi) = if state.visual_anchor <= free_end {
        (state.visual_anchor, free_end)
    } else {
        (free_end, state.visual_anchor)
    };
    if linewise {
        let start = host.line_range(lo).start.0;
        let end = host.line_range(hi).end.0;
        Span::new(start, end)
    } else {
        Span::new(lo, (hi + 1).min(host.len()))
    }
}

fn update_selection(state: &mut EditorState, host: &mut dyn Host, new_free_end: usize, linewise: bool) {
    let span = {
        let (lo, hi) = if state.visual_anchor <= new_free_end {
            (state.visual_anchor, new_free_end)
        } else {
            (new_free_end, state.visual_anchor)
        };
        if linewise {
            let start = host.line_range(lo).start.0;
            let end = host.line_range(hi).end.0;
            Span::new(start, end)
        } else {
            Span::new(lo, (hi + 1).min(host.len()))
        }
    };
    host.set_selection(span);
}
