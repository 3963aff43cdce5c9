use std::time::Instant;

use crate::host::Host;
use crate::key::Key;
use crate::motion;
use crate::operator::{self, OperatorResult};
use crate::search;
use crate::state::{CommandKind, EditorState, Operator};
use crate::types::{Direction, Span};

/// Handles one key in Normal mode, in a fixed precedence order.
/// Returns whether the key was consumed.
pub fn handle(state: &mut EditorState, host: &mut dyn Host, key: Key, now: Instant) -> bool {
    let cursor = host.selection().start.0;

    if let Key::Char(c) = key {
        // Rule 1: count digit.
        if let Some(d) = c.to_digit(10) {
            if d >= 1 || state.count_prefix > 0 {
                state.count_prefix = state.count_prefix.saturating_mul(10).saturating_add(d);
                return true;
            }
        }
    }

    // Rule 2: pending character consumers.
    if state.pending_r {
        state.pending_r = false;
        state.count_prefix = 0;
        if let Key::Char(c) = key {
            if cursor < host.len() {
                host.guarded_replace(Span::new(cursor, cursor + 1), &c.to_string());
                host.set_selection(Span::caret(cursor));
            }
        } else {
            host.beep();
        }
        return true;
    }
    if let Some(dir) = state.pending_f {
        state.pending_f = None;
        state.count_prefix = 0;
        if let Key::Char(c) = key {
            match motion::char_search(host, cursor, c, dir) {
                Some(target) => {
                    host.set_selection(Span::caret(target));
                    state.last_f_char = Some(c);
                    state.last_f_forward = dir == Direction::Forward;
                }
                None => host.beep(),
            }
        } else {
            host.beep();
        }
        return true;
    }

    // Rule 3: motion key when an operator is pending.
    if let Some(op) = state.pending_operator {
        if let Key::Char(c) = key {
            if Operator::from_key(c) == Some(op) {
                let n = state.count() as usize;
                let range = linewise_span(host, cursor, n);
                let result = operator::apply(host, op, range, op == Operator::Change);
                finish_operator(state, host, result, true);
                return true;
            }
            if c == 'G' {
                let line_start = motion::line_start(host, cursor);
                let range = Span::new(line_start, host.len());
                let result = operator::apply(host, op, range, false);
                finish_operator(state, host, result, true);
                return true;
            }
            if operator_motion_exists(c) {
                let n = state.count() as usize;
                let mut target = cursor;
                for _ in 0..n {
                    match resolve_operator_motion(host, target, c) {
                        Some(next) => target = next,
                        None => break,
                    }
                }
                let range = Span::normalized(cursor, target);
                let result = operator::apply(host, op, range, false);
                // A plain y<motion> leaves the cursor exactly where it
                // was; only the linewise forms reposition it.
                finish_operator(state, host, result, op != Operator::Yank);
                return true;
            }
        }
        // Unmapped key with a pending operator: beep and clear.
        host.beep();
        state.pending_operator = None;
        state.count_prefix = 0;
        return true;
    }

    // Rule 4: command table.
    let n = state.count() as usize;
    let Key::Char(c) = key else {
        return false;
    };

    let consumed = match c {
        'h' => {
            let target = host.move_left(cursor, n);
            host.set_selection(Span::caret(target));
            state.reset_acceleration();
            true
        }
        'l' => {
            let target = host.move_right(cursor, n);
            host.set_selection(Span::caret(target));
            state.reset_acceleration();
            true
        }
        'j' => {
            let mult = state.accelerate(now) as usize;
            let target = host.move_line_down(cursor, n * mult);
            host.set_selection(Span::caret(target));
            true
        }
        'k' => {
            let mult = state.accelerate(now) as usize;
            let target = host.move_line_up(cursor, n * mult);
            host.set_selection(Span::caret(target));
            true
        }
        '0' => {
            host.set_selection(Span::caret(motion::line_start(host, cursor)));
            true
        }
        '^' => {
            host.set_selection(Span::caret(motion::first_non_blank(host, cursor)));
            true
        }
        '$' => {
            host.set_selection(Span::caret(motion::line_end_content(host, cursor)));
            true
        }
        'w' => repeat_motion(host, cursor, n, |h, c| motion::forward_word(h, c, false)),
        'W' => repeat_motion(host, cursor, n, |h, c| motion::forward_word(h, c, true)),
        'b' => repeat_motion(host, cursor, n, |h, c| motion::backward_word(h, c, false)),
        'B' => repeat_motion(host, cursor, n, |h, c| motion::backward_word(h, c, true)),
        'e' => repeat_motion(host, cursor, n, |h, c| motion::end_of_word(h, c, false)),
        'E' => repeat_motion(host, cursor, n, |h, c| motion::end_of_word(h, c, true)),
        'G' => {
            let target = if host.len() == 0 { 0 } else { host.len() - 1 };
            host.set_selection(Span::caret(target));
            true
        }
        'g' => {
            if state.pending_g_still_armed(now) {
                state.pending_g = false;
                host.set_selection(Span::caret(host.start_of_document()));
            } else {
                state.arm_pending_g(now);
            }
            true
        }
        'i' => {
            state.enter_insert();
            true
        }
        'I' => {
            let target = motion::first_non_blank(host, cursor);
            host.set_selection(Span::caret(target));
            state.enter_insert();
            true
        }
        'a' => {
            let target = host.move_right(cursor, 1);
            host.set_selection(Span::caret(target));
            state.enter_insert();
            true
        }
        'A' => {
            let target = motion::line_end_content(host, cursor);
            let target = if host.char_at(target) == Some('\n') || host.char_at(target) == Some('\r') {
                target
            } else {
                target + 1
            };
            host.set_selection(Span::caret(target));
            state.enter_insert();
            true
        }
        'o' => {
            let line = host.line_range(cursor);
            host.guarded_replace(Span::caret(line.end.0), "\n");
            host.set_selection(Span::caret(line.end.0));
            state.enter_insert();
            true
        }
        'O' => {
            let line = host.line_range(cursor);
            host.guarded_replace(Span::caret(line.start.0), "\n");
            host.set_selection(Span::caret(line.start.0));
            state.enter_insert();
            true
        }
        'x' => {
            let end = (cursor + n).min(host.len());
            if end > cursor {
                host.guarded_replace(Span::new(cursor, end), "");
            }
            let len = host.len();
            let target = if len == 0 { 0 } else { cursor.min(len - 1) };
            host.set_selection(Span::caret(target));
            true
        }
        'D' => {
            let end = motion::line_end_exclusive(host, cursor);
            let result = operator::apply(host, Operator::Delete, Span::normalized(cursor, end.max(cursor)), false);
            finish_operator(state, host, result, true);
            true
        }
        'C' => {
            let end = motion::line_end_exclusive(host, cursor);
            let result = operator::apply(host, Operator::Change, Span::normalized(cursor, end.max(cursor)), false);
            finish_operator(state, host, result, true);
            true
        }
        'd' | 'y' | 'c' => {
            state.pending_operator = Operator::from_key(c);
            true
        }
        'p' => {
            paste(state, host, cursor, true);
            true
        }
        'P' => {
            paste(state, host, cursor, false);
            true
        }
        'r' => {
            state.pending_r = true;
            true
        }
        'u' => {
            host.undo();
            true
        }
        'J' => {
            match motion::join_lines(host, cursor) {
                Some((range, text, new_cursor)) => {
                    if host.guarded_replace(range, &text) {
                        host.set_selection(Span::caret(new_cursor));
                    }
                }
                None => host.beep(),
            }
            true
        }
        'f' => {
            state.pending_f = Some(Direction::Forward);
            true
        }
        'F' => {
            state.pending_f = Some(Direction::Backward);
            true
        }
        '/' => {
            state.enter_command(CommandKind::SearchForward);
            true
        }
        '?' => {
            state.enter_command(CommandKind::SearchBackward);
            true
        }
        'n' => {
            repeat_search(state, host, cursor, true);
            true
        }
        'N' => {
            repeat_search(state, host, cursor, false);
            true
        }
        '*' => {
            search_word_under_cursor(state, host, cursor, Direction::Forward);
            true
        }
        '#' => {
            search_word_under_cursor(state, host, cursor, Direction::Backward);
            true
        }
        ':' => {
            state.enter_command(CommandKind::Ex);
            true
        }
        'v' => {
            host.set_selection(Span::caret(cursor));
            state.enter_visual(cursor);
            true
        }
        'V' => {
            let line = host.line_range(cursor);
            host.set_selection(line);
            state.enter_visual_line(line.start.0);
            true
        }
        _ => false,
    };

    // Prefix keys preserve count_prefix while the multi-key command is
    // still being composed.
    if !matches!(c, 'g' | 'd' | 'y' | 'c' | 'r' | 'f' | 'F') {
        state.count_prefix = 0;
    }
    if !matches!(c, 'j' | 'k') {
        state.reset_acceleration();
    }

    consumed
}

fn operator_motion_exists(c: char) -> bool {
    matches!(c, '$' | '^' | 'w' | 'W' | 'b' | 'B')
}

fn resolve_operator_motion(host: &dyn Host, cursor: usize, c: char) -> Option<usize> {
    match c {
        '$' => Some(motion::line_end_exclusive(host, cursor)),
        '^' => Some(motion::first_non_blank(host, cursor)),
        'w' => Some(motion::forward_word(host, cursor, false)),
        'W' => Some(motion::forward_word(host, cursor, true)),
        'b' => Some(motion::backward_word(host, cursor, false)),
        'B' => Some(motion::backward_word(host, cursor, true)),
        _ => None,
    }
}

fn repeat_motion(host: &mut dyn Host, cursor: usize, n: usize, f: impl Fn(&dyn Host, usize) -> usize) -> bool {
    let mut target = cursor;
    for _ in 0..n {
        let next = f(host, target);
        if next == target {
            break;
        }
        target = next;
    }
    host.set_selection(Span::caret(target));
    true
}

/// Range spanning `n` whole lines starting at the line containing `cursor`.
fn linewise_span(host: &dyn Host, cursor: usize, n: usize) -> Span {
    let start = motion::line_start(host, cursor);
    let mut end = host.line_range(cursor).end.0;
    for _ in 1..n {
        if end >= host.len() {
            break;
        }
        end = host.line_range(end).end.0;
    }
    Span::new(start, end)
}

fn finish_operator(state: &mut EditorState, host: &mut dyn Host, result: OperatorResult, move_cursor: bool) {
    state.pending_operator = None;
    state.count_prefix = 0;
    if result.applied {
        if move_cursor {
            host.set_selection(Span::caret(result.cursor));
        }
        if result.enter_insert {
            state.enter_insert();
        }
    }
}

fn paste(state: &mut EditorState, host: &mut dyn Host, cursor: usize, after: bool) {
    let Some(text) = host.clipboard_get() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    let linewise = text.ends_with('\n');

    let (at, landing) = if linewise {
        let insert_at = if after {
            host.line_range(cursor).end.0
        } else {
            host.line_range(cursor).start.0
        };
        (insert_at, insert_at)
    } else {
        let insert_at = if after {
            (cursor + 1).min(host.len())
        } else {
            cursor
        };
        (insert_at, insert_at)
    };

    if !host.guarded_replace(Span::caret(at), &text) {
        return;
    }

    let new_cursor = if linewise {
        // Land on the first non-blank of the last pasted line.
        let last_line_start = last_inserted_line_start(&text, landing);
        motion::first_non_blank(host, last_line_start)
    } else {
        (landing + text.chars().map(char::len_utf16).sum::<usize>()).saturating_sub(1)
    };
    host.set_selection(Span::caret(new_cursor));
    let _ = state;
}

/// The start offset of the last line within pasted linewise `text`
/// inserted at `insert_at`. Degrades correctly for single-line content
/// of length 1 (`"\n"`): the "last line" is then the newly inserted
/// empty line itself, offset 0 into it (see DESIGN.md open question 1).
fn last_inserted_line_start(text: &str, insert_at: usize) -> usize {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    if lines.len() <= 1 {
        return insert_at;
    }
    let offset: usize = lines[..lines.len() - 1]
        .iter()
        .map(|l| l.chars().map(char::len_utf16).sum::<usize>() + 1)
        .sum();
    insert_at + offset
}

fn repeat_search(state: &mut EditorState, host: &mut dyn Host, cursor: usize, same_direction: bool) {
    if state.search_pattern.is_empty() {
        host.beep();
        return;
    }
    let base_dir = if state.search_forward { Direction::Forward } else { Direction::Backward };
    let dir = if same_direction { base_dir } else { base_dir.reverse() };
    match search::find_next(host, &state.search_pattern, cursor, dir) {
        Some(target) => host.set_selection(Span::caret(target)),
        None => host.beep(),
    }
}

fn search_word_under_cursor(state: &mut EditorState, host: &mut dyn Host, cursor: usize, dir: Direction) {
    let Some(word) = search::word_under_cursor(host, cursor) else {
        host.beep();
        return;
    };
    state.search_pattern = word.clone();
    state.search_forward = dir == Direction::Forward;
    match search::find_next(host, &word, cursor, dir) {
        Some(target) => host.set_selection(Span::caret(target)),
        None => host.beep(),
    }
}
