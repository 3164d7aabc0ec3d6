//! Color palette for console output

use crate::ui::console::Tone;
use console::Style;

/// Title color - Golden yellow (#E8C547)
pub const PRIMARY_ANSI: u8 = 214;

/// Prompt color - Steel blue (#5C80BC)
pub const PROMPT_ANSI: u8 = 67;

/// Hint color - Light gray (#CDD1C4)
pub const MISC_ANSI: u8 = 251;

/// Color theme struct for consistent styling
pub struct ColorTheme;

impl ColorTheme {
    pub fn title() -> Style {
        Style::new().color256(PRIMARY_ANSI).bold()
    }

    pub fn prompt() -> Style {
        Style::new().color256(PROMPT_ANSI).bold()
    }

    /// Error style (red variant)
    pub fn error() -> Style {
        Style::new().color256(196).bold()
    }

    /// Success style (green variant)
    pub fn result() -> Style {
        Style::new().color256(46).bold()
    }

    pub fn hint() -> Style {
        Style::new().color256(MISC_ANSI).dim()
    }

    /// Style for a tone; `Plain` is unstyled
    pub fn for_tone(tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::new(),
            Tone::Title => Self::title(),
            Tone::Prompt => Self::prompt(),
            Tone::Error => Self::error(),
            Tone::Result => Self::result(),
            Tone::Hint => Self::hint(),
        }
    }
}
