use crate::host::Host;
use crate::motion::classify;
use crate::motion::CharClass;
use crate::types::Direction;

/// Literal substring search from `cursor + 1` (forward) or `cursor - 1`
/// (backward), wrapping on miss. `None` if `pattern` is empty or does not
/// occur anywhere in the buffer.
pub fn find_next(host: &dyn Host, pattern: &str, cursor: usize, dir: Direction) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    let len = host.len();
    if len == 0 {
        return None;
    }
    let text: String = (0..len).map(|i| host.char_at(i).unwrap_or('\u{0}')).collect();
    let chars: Vec<char> = text.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();

    match dir {
        Direction::Forward => {
            let start = (cursor + 1).min(chars.len());
            find_from(&chars, &pat, start, chars.len())
                .or_else(|| find_from(&chars, &pat, 0, start))
        }
        Direction::Backward => {
            let before = cursor.min(chars.len());
            rfind_from(&chars, &pat, 0, before)
                .or_else(|| rfind_from(&chars, &pat, before, chars.len()))
        }
    }
}

fn find_from(haystack: &[char], needle: &[char], from: usize, to: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let upper = to.min(haystack.len() - needle.len() + 1);
    (from..upper).find(|&i| haystack[i..i + needle.len()] == *needle)
}

fn rfind_from(haystack: &[char], needle: &[char], from: usize, to: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let upper = to.min(haystack.len() - needle.len() + 1);
    (from..upper).rev().find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// The word under `cursor` for `*`/`#`: the maximal run of word-class
/// characters containing `cursor`, or `None` if `cursor` is not on one.
pub fn word_under_cursor(host: &dyn Host, cursor: usize) -> Option<String> {
    let len = host.len();
    if cursor >= len {
        return None;
    }
    if host.char_at(cursor).map(classify) != Some(CharClass::Word) {
        return None;
    }
    let mut start = cursor;
    while start > 0 && host.char_at(start - 1).map(classify) == Some(CharClass::Word) {
        start -= 1;
    }
    let mut end = cursor;
    while end + 1 < len && host.char_at(end + 1).map(classify) == Some(CharClass::Word) {
        end += 1;
    }
    Some((start..=end).map(|i| host.char_at(i).unwrap()).collect())
}
