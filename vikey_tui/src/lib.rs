//! # vikey_tui - terminal host for vikey
//!
//! Wires the `vikey` modal keystroke interpreter to a real terminal: a
//! UTF-8 text buffer presenting a UTF-16-indexed view, the system
//! clipboard, and crossterm key translation.

pub mod buffer;
pub mod clipboard;
pub mod host;
pub mod key;

pub use host::TuiHost;
