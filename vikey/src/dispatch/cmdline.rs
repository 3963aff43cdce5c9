use crate::host::Host;
use crate::key::Key;
use crate::search;
use crate::state::{CommandKind, EditorState};
use crate::types::{Direction, Span};

/// Handles one key in Command mode.
pub fn handle(state: &mut EditorState, host: &mut dyn Host, key: Key) -> bool {
    match key {
        Key::Escape => {
            state.return_to_normal();
            true
        }
        Key::Enter => {
            execute(state, host);
            state.return_to_normal();
            true
        }
        Key::Backspace => {
            if state.command_buffer.len() > 1 {
                state.command_buffer.pop();
            } else {
                state.return_to_normal();
            }
            true
        }
        Key::Char(c) => {
            if is_acceptable(state, c) {
                state.command_buffer.push(c);
            }
            true
        }
        _ => false,
    }
}

fn is_acceptable(state: &EditorState, c: char) -> bool {
    match state.command_kind {
        Some(CommandKind::Ex) => c.is_alphanumeric() || c == ' ',
        _ => !c.is_control(),
    }
}

fn execute(state: &mut EditorState, host: &mut dyn Host) {
    let Some(kind) = state.command_kind else {
        return;
    };
    let body = &state.command_buffer[1..];

    match kind {
        CommandKind::Ex => {
            let normalized = body.trim().to_lowercase();
            match normalized.as_str() {
                "w" => host.save(),
                "wq" | "x" => {
                    host.save();
                    host.close_window();
                }
                "q" => host.close_window(),
                _ => host.beep(),
            }
        }
        CommandKind::SearchForward | CommandKind::SearchBackward => {
            let pattern = body.to_string();
            let forward = kind == CommandKind::SearchForward;
            let cursor = host.selection().start.0;
            match search::find_next(host, &pattern, cursor, if forward { Direction::Forward } else { Direction::Backward }) {
                Some(target) => {
                    host.set_selection(Span::caret(target));
                    state.search_pattern = pattern;
                    state.search_forward = forward;
                }
                None => host.beep(),
            }
        }
    }
}
