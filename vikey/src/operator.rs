use crate::host::Host;
use crate::state::Operator;
use crate::types::Span;

/// Outcome of applying an operator: whether the edit actually happened
/// (it may have been refused by the host's permission gate, or the
/// range may have been empty) and, for `Change`, whether Insert mode
/// should be entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorResult {
    pub applied: bool,
    pub cursor: usize,
    pub enter_insert: bool,
}

/// Applies `op` to `range`. `preserve_indent` is only meaningful for
/// `Change` applied line-wise (`cc`): the leading whitespace of the
/// first line in range is kept and the cursor lands just after it.
pub fn apply(host: &mut dyn Host, op: Operator, range: Span, preserve_indent: bool) -> OperatorResult {
    if range.is_empty() {
        return OperatorResult {
            applied: false,
            cursor: range.start.0,
            enter_insert: false,
        };
    }

    match op {
        Operator::Yank => {
            let text = host.substring(range);
            host.clipboard_set(text);
            OperatorResult {
                applied: true,
                cursor: range.start.0,
                enter_insert: false,
            }
        }
        Operator::Delete => {
            if host.guarded_replace(range, "") {
                OperatorResult {
                    applied: true,
                    cursor: range.start.0,
                    enter_insert: false,
                }
            } else {
                OperatorResult {
                    applied: false,
                    cursor: range.start.0,
                    enter_insert: false,
                }
            }
        }
        Operator::Change => {
            let replacement = if preserve_indent {
                let original = host.substring(range);
                let indent = leading_whitespace(&original);
                // `cc`'s range is the whole line including its terminator;
                // put the terminator back so the next line stays separate.
                let terminator = if original.ends_with('\n') {
                    "\n"
                } else if original.ends_with('\r') {
                    "\r"
                } else {
                    ""
                };
                format!("{indent}{terminator}")
            } else {
                String::new()
            };
            let indent_len = replacement.trim_end_matches(['\n', '\r']).chars().count();
            if host.guarded_replace(range, &replacement) {
                OperatorResult {
                    applied: true,
                    cursor: range.start.0 + indent_len,
                    enter_insert: true,
                }
            } else {
                OperatorResult {
                    applied: false,
                    cursor: range.start.0,
                    enter_insert: false,
                }
            }
        }
    }
}

fn leading_whitespace(s: &str) -> String {
    s.chars().take_while(|c| *c == ' ' || *c == '\t').collect()
}
