use std::time::{Duration, Instant};

/// One of the five editor modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Normal,
    Visual,
    VisualLine,
    Command,
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::Normal
    }
}

impl Mode {
    pub fn display_name(self, count_prefix: u32) -> String {
        match self {
            Mode::Insert => "INSERT".to_string(),
            Mode::Normal if count_prefix > 0 => format!("NORMAL [{count_prefix}]"),
            Mode::Normal => "NORMAL".to_string(),
            Mode::Visual => "VISUAL".to_string(),
            Mode::VisualLine => "VISUAL LINE".to_string(),
            Mode::Command => String::new(),
        }
    }

    pub fn is_visual(self) -> bool {
        matches!(self, Mode::Visual | Mode::VisualLine)
    }

    pub fn uses_block_caret(self) -> bool {
        matches!(self, Mode::Normal | Mode::Visual | Mode::VisualLine)
    }
}

/// An operator awaiting a motion (or already resolved against `dd`/`yy`/
/// `cc`/a visual selection) to define its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Delete,
    Yank,
    Change,
}

impl Operator {
    pub fn key(self) -> char {
        match self {
            Operator::Delete => 'd',
            Operator::Yank => 'y',
            Operator::Change => 'c',
        }
    }

    pub fn from_key(c: char) -> Option<Operator> {
        match c {
            'd' => Some(Operator::Delete),
            'y' => Some(Operator::Yank),
            'c' => Some(Operator::Change),
            _ => None,
        }
    }

    pub fn enters_insert(self) -> bool {
        matches!(self, Operator::Change)
    }
}

/// Which ex-style prefix opened Command mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Ex,
    SearchForward,
    SearchBackward,
}

impl CommandKind {
    pub fn prefix(self) -> char {
        match self {
            CommandKind::Ex => ':',
            CommandKind::SearchForward => '/',
            CommandKind::SearchBackward => '?',
        }
    }
}

const PENDING_G_TIMEOUT: Duration = Duration::from_millis(500);

/// All state owned by the interpreter. No buffer content lives here —
/// only the bookkeeping the host's opaque buffer can't be expected to
/// track on the interpreter's behalf.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub mode: Mode,
    pub pending_operator: Option<Operator>,
    pub pending_g: bool,
    pending_g_armed_at: Option<Instant>,
    pub pending_r: bool,
    pub pending_f: Option<crate::types::Direction>,
    pub count_prefix: u32,
    pub visual_anchor: usize,
    pub command_buffer: String,
    pub command_kind: Option<CommandKind>,
    pub search_pattern: String,
    pub search_forward: bool,
    pub last_f_char: Option<char>,
    pub last_f_forward: bool,
    last_jk_time: Option<Instant>,
    pub jk_repeat_count: u32,
}

impl Default for EditorState {
    fn default() -> EditorState {
        EditorState {
            mode: Mode::Normal,
            pending_operator: None,
            pending_g: false,
            pending_g_armed_at: None,
            pending_r: false,
            pending_f: None,
            count_prefix: 0,
            visual_anchor: 0,
            command_buffer: String::new(),
            command_kind: None,
            search_pattern: String::new(),
            search_forward: true,
            last_f_char: None,
            last_f_forward: true,
            last_jk_time: None,
            jk_repeat_count: 0,
        }
    }
}

impl EditorState {
    pub fn new() -> EditorState {
        EditorState::default()
    }

    /// Effective repeat count: `max(1, count_prefix)`.
    pub fn count(&self) -> u32 {
        self.count_prefix.max(1)
    }

    /// Clears every `pending_*` flag and the count prefix. Called on
    /// every mode transition.
    pub fn clear_pending(&mut self) {
        self.pending_operator = None;
        self.pending_g = false;
        self.pending_g_armed_at = None;
        self.pending_r = false;
        self.pending_f = None;
        self.count_prefix = 0;
    }

    /// Arms the `gg` soft timeout starting at `now`.
    pub fn arm_pending_g(&mut self, now: Instant) {
        self.pending_g = true;
        self.pending_g_armed_at = Some(now);
    }

    /// Returns whether the armed `gg` window is still open at `now`,
    /// clearing the flag if it has elapsed. Must be checked before
    /// acting on a stale timer, and before treating a second `g` as
    /// completing the sequence.
    pub fn pending_g_still_armed(&mut self, now: Instant) -> bool {
        if !self.pending_g {
            return false;
        }
        match self.pending_g_armed_at {
            Some(armed_at) if now.duration_since(armed_at) < PENDING_G_TIMEOUT => true,
            _ => {
                self.pending_g = false;
                self.pending_g_armed_at = None;
                false
            }
        }
    }

    /// Whether any of `pending_operator`, `pending_g`, `pending_r`,
    /// `pending_f` is armed — at most one should ever be armed at a time.
    pub fn has_pending(&self) -> bool {
        self.pending_operator.is_some() || self.pending_g || self.pending_r || self.pending_f.is_some()
    }

    /// Updates the `j`/`k` acceleration window, returning the multiplier
    /// to apply this keystroke.
    pub fn accelerate(&mut self, now: Instant) -> u32 {
        let elapsed = self.last_jk_time.map(|prev| now.duration_since(prev));
        let (multiplier, repeat_count) = crate::accel::step(elapsed, self.jk_repeat_count);
        self.jk_repeat_count = repeat_count;
        self.last_jk_time = Some(now);
        multiplier
    }

    /// Resets acceleration — any mode change or non-`j`/`k` key does this.
    pub fn reset_acceleration(&mut self) {
        self.last_jk_time = None;
        self.jk_repeat_count = 0;
    }

    pub fn enter_visual(&mut self, cursor: usize) {
        self.transition(Mode::Visual);
        self.visual_anchor = cursor;
    }

    pub fn enter_visual_line(&mut self, line_start: usize) {
        self.transition(Mode::VisualLine);
        self.visual_anchor = line_start;
    }

    pub fn enter_command(&mut self, kind: CommandKind) {
        self.transition(Mode::Command);
        self.command_kind = Some(kind);
        self.command_buffer = kind.prefix().to_string();
    }

    pub fn enter_insert(&mut self) {
        self.transition(Mode::Insert);
    }

    pub fn return_to_normal(&mut self) {
        self.transition(Mode::Normal);
    }

    fn transition(&mut self, to: Mode) {
        debug_assert!(is_valid_transition(self.mode, to));
        self.mode = to;
        self.clear_pending();
        self.reset_acceleration();
    }
}

/// Whether `to` is reachable from `from` in one step, per the
/// transition table. Self-transitions (e.g. `Normal` handling a digit)
/// are always valid — they aren't transitions at all.
pub fn is_valid_transition(from: Mode, to: Mode) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (Mode::Normal, Mode::Insert) => true,
        (Mode::Normal, Mode::Visual) => true,
        (Mode::Normal, Mode::VisualLine) => true,
        (Mode::Normal, Mode::Command) => true,
        (Mode::Insert, Mode::Normal) => true,
        (Mode::Visual, Mode::Normal) => true,
        (Mode::VisualLine, Mode::Normal) => true,
        (Mode::Command, Mode::Normal) => true,
        _ => false,
    }
}
