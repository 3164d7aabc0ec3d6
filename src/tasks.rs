//! The actions offered by the main menu

use crate::pricing::{price_by_age, Kronor};
use crate::ui::console::{Console, Tone};
use crate::ui::prompts::{read_int, read_sentence, Prompted};
use crate::utils::logger;
use anyhow::Result;

/// How many times "Repeat 10 Times" repeats the input
pub const REPEAT_COUNT: usize = 10;

/// Separator placed between repetitions
pub const REPEAT_SEPARATOR: &str = ", ";

/// Every menu entry, in menu order. Index 0 is always [`Task::Exit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Exit,
    TicketPriceByAge,
    TicketPriceByQuantityAndAge,
    RepeatTenTimes,
    ThirdWord,
}

impl Task {
    pub fn all() -> Vec<Self> {
        vec![
            Task::Exit,
            Task::TicketPriceByAge,
            Task::TicketPriceByQuantityAndAge,
            Task::RepeatTenTimes,
            Task::ThirdWord,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Task::Exit => "Exit",
            Task::TicketPriceByAge => "Ticket Price by Age",
            Task::TicketPriceByQuantityAndAge => "Ticket Price by Number of People and Age",
            Task::RepeatTenTimes => "Repeat 10 Times",
            Task::ThirdWord => "The Third Word",
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Task::Exit)
    }

    /// Run the task once. All prompting and output goes through `console`.
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        match self {
            Task::Exit => Ok(()),
            Task::TicketPriceByAge => ticket_price_by_age(console),
            Task::TicketPriceByQuantityAndAge => ticket_price_by_quantity_and_age(console),
            Task::RepeatTenTimes => repeat_ten_times(console),
            Task::ThirdWord => third_word(console),
        }
    }
}

/// `text` repeated [`REPEAT_COUNT`] times, joined by [`REPEAT_SEPARATOR`]
pub fn repeat_ten(text: &str) -> String {
    vec![text; REPEAT_COUNT].join(REPEAT_SEPARATOR)
}

/// Summary printed after pricing a group
pub fn group_summary(people: i32, total: Kronor) -> String {
    format!("\nTotal number of people: {}\nTotal price: {}", people, total)
}

fn ticket_price_by_age(console: &mut dyn Console) -> Result<()> {
    let Some(age) = read_int(console, "age", true)?.into_value() else {
        return Ok(());
    };

    let price = price_by_age(age);
    logger::info(&format!("Priced age {} as {}", age, price));
    console.write_line(&price.to_string(), Tone::Result)
}

fn ticket_price_by_quantity_and_age(console: &mut dyn Console) -> Result<()> {
    let Some(people) = read_int(console, "number of people", true)?.into_value() else {
        return Ok(());
    };

    let mut total = Kronor::ZERO;
    for i in 1..=people {
        if let Prompted::Entered { value: age, .. } = read_int(console, &format!("age {}", i), false)? {
            total += price_by_age(age).amount;
        }
    }

    logger::info(&format!("Priced group of {} at {}", people, total));
    console.write_line(&group_summary(people, total), Tone::Result)
}

fn repeat_ten_times(console: &mut dyn Console) -> Result<()> {
    console.write("Write something: ", Tone::Prompt)?;
    let input = console.read_line()?;
    if input.is_empty() {
        return Ok(());
    }

    console.write_line(&repeat_ten(&input), Tone::Result)
}

fn third_word(console: &mut dyn Console) -> Result<()> {
    let Some(words) = read_sentence(console, "Write sentence", true)?.into_value() else {
        return Ok(());
    };

    console.write_line(&format!("Third Word: {}", words[2]), Tone::Result)
}
