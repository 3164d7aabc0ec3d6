//! Line and keypress I/O against the terminal
//!
//! Everything the menu prints or reads goes through [`Console`], so the
//! same flows run against the real terminal and against scripted input in
//! tests.

use crate::config::AppConfig;
use crate::utils::colors::ColorTheme;
use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// How a piece of output should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Prompt,
    Error,
    Result,
    Hint,
}

/// A single keypress, as far as the menu cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Write text without a trailing newline
    fn write(&mut self, text: &str, tone: Tone) -> Result<()>;

    /// Read one line, without its line terminator
    fn read_line(&mut self) -> Result<String>;

    /// Block until a single key is pressed, without echoing it
    fn read_key(&mut self) -> Result<Key>;

    fn clear(&mut self) -> Result<()>;

    fn write_line(&mut self, text: &str, tone: Tone) -> Result<()> {
        self.write(&format!("{}\n", text), tone)
    }
}

/// Strip a trailing `\n` or `\r\n`
pub fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Disables raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Console backed by stdin/stdout
pub struct TerminalConsole {
    clear_screen: bool,
    styled: bool,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new(config: &AppConfig) -> Self {
        let stdout_tty = io::stdout().is_terminal();
        Self {
            clear_screen: config.clear_screen && stdout_tty,
            styled: config.color && stdout_tty,
            interactive: io::stdin().is_terminal(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_key_event(&mut self) -> Result<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(match key.code {
                    KeyCode::Enter => Key::Enter,
                    _ => Key::Other,
                });
            }
        }
    }
}

impl Console for TerminalConsole {
    fn write(&mut self, text: &str, tone: Tone) -> Result<()> {
        let mut stdout = io::stdout();
        if self.styled && tone != Tone::Plain {
            write!(stdout, "{}", ColorTheme::for_tone(tone).apply_to(text))?;
        } else {
            write!(stdout, "{}", text)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(anyhow!("standard input was closed"));
        }
        strip_line_ending(&mut line);
        Ok(line)
    }

    fn read_key(&mut self) -> Result<Key> {
        if self.interactive {
            return self.read_key_event();
        }

        // Piped input has no keypresses; an empty line stands in for Enter
        let line = self.read_line()?;
        Ok(if line.is_empty() { Key::Enter } else { Key::Other })
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
