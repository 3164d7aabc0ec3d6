//! Integration tests for the individual tasks and their building blocks

use flow_control::pricing::{group_total, price_by_age, Kronor, PriceCategory};
use flow_control::tasks::{repeat_ten, Task};
use flow_control::testing::ScriptedConsole;
use flow_control::ui::prompts::{parse_sentence, read_int, Prompted};
use flow_control::InputError;

#[test]
fn test_price_brackets_at_boundaries() {
    assert_eq!(price_by_age(19).category, PriceCategory::Youth);
    assert_eq!(price_by_age(20).category, PriceCategory::Standard);
    assert_eq!(price_by_age(64).category, PriceCategory::Standard);
    assert_eq!(price_by_age(65).category, PriceCategory::Senior);
}

#[test]
fn test_group_of_two() {
    assert_eq!(group_total(&[10, 70]), Kronor(170));
}

#[test]
fn test_repeat_and_third_word() {
    assert_eq!(repeat_ten("hi"), "hi, hi, hi, hi, hi, hi, hi, hi, hi, hi");
    assert_eq!(parse_sentence("the quick brown fox").unwrap()[2], "brown");
    assert!(matches!(
        parse_sentence("a b"),
        Err(InputError::TooFewWords { found: 2, .. })
    ));
}

#[test]
fn test_large_group_uses_thousands_separator() {
    let mut lines = vec!["12".to_string()];
    lines.extend(std::iter::repeat("40".to_string()).take(12));
    let mut console = ScriptedConsole::with_lines(lines);

    Task::TicketPriceByQuantityAndAge.run(&mut console).unwrap();
    assert!(console.transcript().ends_with("Total price: 1,440kr\n"));
}

#[test]
fn test_prompt_returns_raw_input() {
    let mut console = ScriptedConsole::with_lines([" 007 "]);
    match read_int(&mut console, "age", true).unwrap() {
        Prompted::Entered { value, input } => {
            assert_eq!(value, 7);
            assert_eq!(input, "007");
        }
        Prompted::Aborted => panic!("expected a number"),
    }
}
