//! Test support: a console that replays scripted input
//!
//! Used by unit tests and by the integration tests under `tests/`.

use crate::ui::console::{Console, Key, Tone};
use anyhow::{anyhow, Result};
use std::collections::VecDeque;

/// Console that answers from queued lines and keys and records what was
/// written, split into one screen per clear.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    screens: Vec<String>,
    tones: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self {
            screens: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::new();
        console.lines = lines.into_iter().map(Into::into).collect();
        console
    }

    pub fn with_keys<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Everything written, ignoring clears
    pub fn transcript(&self) -> String {
        self.screens.concat()
    }

    /// Output between clears; index 0 is what was written before the first clear
    pub fn screens(&self) -> &[String] {
        &self.screens
    }

    pub fn last_screen(&self) -> &str {
        self.screens.last().map(String::as_str).unwrap_or("")
    }

    pub fn clear_count(&self) -> usize {
        self.screens.len().saturating_sub(1)
    }

    /// Written text tagged with the given tone
    pub fn written_as(&self, tone: Tone) -> Vec<&str> {
        self.tones
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str, tone: Tone) -> Result<()> {
        if self.screens.is_empty() {
            self.screens.push(String::new());
        }
        if let Some(screen) = self.screens.last_mut() {
            screen.push_str(text);
        }
        self.tones.push((tone, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input ran out of lines"))
    }

    fn read_key(&mut self) -> Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input ran out of keys"))
    }

    fn clear(&mut self) -> Result<()> {
        if self.screens.is_empty() {
            self.screens.push(String::new());
        }
        self.screens.push(String::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screens_split_on_clear() {
        let mut console = ScriptedConsole::new();
        console.write("before", Tone::Plain).unwrap();
        console.clear().unwrap();
        console.write("after", Tone::Error).unwrap();

        assert_eq!(console.clear_count(), 1);
        assert_eq!(console.screens(), ["before".to_string(), "after".to_string()]);
        assert_eq!(console.last_screen(), "after");
        assert_eq!(console.written_as(Tone::Error), vec!["after"]);
    }

    #[test]
    fn test_runs_out_of_input() {
        let mut console = ScriptedConsole::with_lines(["x"]).with_keys([Key::Enter]);
        assert_eq!(console.read_line().unwrap(), "x");
        assert!(console.read_line().is_err());
        assert_eq!(console.read_key().unwrap(), Key::Enter);
        assert!(console.read_key().is_err());
    }

    #[test]
    fn test_push_input() {
        let mut console = ScriptedConsole::new();
        console.push_line("1");
        console.push_key(Key::Other);
        assert_eq!(console.remaining_lines(), 1);
        assert_eq!(console.remaining_keys(), 1);
    }
}
