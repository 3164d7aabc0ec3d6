//! The numbered main menu

use crate::errors::{parse_int, InputError};
use crate::tasks::Task;
use crate::ui::console::{Console, Tone};
use crate::ui::menus::common::MenuOption;
use crate::utils::logger;
use anyhow::Result;

pub const MENU_HEADER: &str =
    "Welcome to the main menu.\nTo test the functions, write the corresponding number.\n\n";

pub const MENU_PROMPT: &str = "Enter option: ";

/// Where a menu answer leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Show the menu again, with whatever error is current
    Redisplay,
    Exit,
    /// Run the option at this index
    Run(usize),
}

/// Main menu handler
///
/// The last input error stays on screen across empty answers until a new
/// error replaces it or an option runs.
pub struct MainMenu {
    options: Vec<MenuOption>,
    error: Option<String>,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            options: Task::all().into_iter().map(MenuOption::new).collect(),
            error: None,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    /// Error shown above the prompt, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Header followed by one `"<index> - <name>"` line per option
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{} - {}", i, option))
            .collect();

        format!("{}{}", MENU_HEADER, lines.join("\n"))
    }

    /// Interpret one trimmed answer to the menu prompt
    pub fn select(&mut self, input: &str) -> Selection {
        if input.is_empty() {
            return Selection::Redisplay;
        }

        let number = match parse_int(input) {
            Ok(number) => number,
            Err(err) => return self.reject(err),
        };

        let found = usize::try_from(number)
            .ok()
            .and_then(|index| self.options.get(index).map(|option| (index, option)));

        match found {
            Some((_, option)) if option.is_exit() => Selection::Exit,
            Some((index, _)) => Selection::Run(index),
            None => self.reject(InputError::NotAnOption(input.to_string())),
        }
    }

    fn reject(&mut self, err: InputError) -> Selection {
        logger::warn(&format!("Menu input rejected: {}", err));
        self.error = Some(err.menu_message());
        Selection::Redisplay
    }

    /// Show the menu and dispatch selections until the user picks exit
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        loop {
            console.clear()?;
            console.write_line(&format!("{}\n", self.render()), Tone::Plain)?;
            if let Some(error) = &self.error {
                console.write_line(error, Tone::Error)?;
            }
            console.write(MENU_PROMPT, Tone::Prompt)?;

            let input = console.read_line()?;
            match self.select(input.trim()) {
                Selection::Redisplay => continue,
                Selection::Exit => {
                    logger::info("Exit selected");
                    return Ok(());
                }
                Selection::Run(index) => {
                    let option = self.options[index];
                    logger::info(&format!("Running option {} ({})", index, option));
                    option.run(console)?;
                    self.error = None;
                }
            }
        }
    }
}
