//! Menu entries and the run cycle wrapped around each task

use crate::tasks::Task;
use crate::ui::console::{Console, Key, Tone};
use crate::utils::logger;
use anyhow::Result;
use std::fmt;

/// Shown after a task finishes
pub const CONTINUE_HINT: &str = "\nPress Enter to continue or anything else to go back to the menu.";

/// What happens after a task has run once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleAction {
    RunAgain,
    BackToMenu,
}

impl From<Key> for CycleAction {
    fn from(key: Key) -> Self {
        match key {
            Key::Enter => CycleAction::RunAgain,
            Key::Other => CycleAction::BackToMenu,
        }
    }
}

/// A named, selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    name: &'static str,
    task: Task,
}

impl MenuOption {
    pub fn new(task: Task) -> Self {
        Self {
            name: task.label(),
            task,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn is_exit(&self) -> bool {
        self.task.is_exit()
    }

    /// Run the task until the user presses something other than Enter
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        loop {
            console.clear()?;
            console.write_line(&format!("{}\n", self.name), Tone::Title)?;

            self.task.run(console)?;
            logger::debug(&format!("Finished '{}'", self.name));

            console.write_line(CONTINUE_HINT, Tone::Hint)?;
            if CycleAction::from(console.read_key()?) == CycleAction::BackToMenu {
                break;
            }
        }

        console.clear()
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
