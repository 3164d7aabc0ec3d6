//! Terminal-facing pieces: console I/O, prompts and menus

pub mod console;
pub mod menus;
pub mod prompts;

pub use console::{Console, Key, TerminalConsole, Tone};
