//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Widest column count used for wrapped prose, even on very wide terminals.
pub const MAX_TEXT_WIDTH: usize = 100;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn banner_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn narrative_style(&self) -> ColoredString;
    fn quote_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().bold().underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn narrative_style(&self) -> ColoredString {
        self.truecolor(230, 230, 210)
    }
    fn quote_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(75, 180, 255)
    }
    fn engine_style(&self) -> ColoredString {
        self.truecolor(150, 150, 150)
    }
}

impl GameStyle for String {
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn narrative_style(&self) -> ColoredString {
        self.as_str().narrative_style()
    }
    fn quote_style(&self) -> ColoredString {
        self.as_str().quote_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
}

/// Column width for wrapped text on the current terminal.
pub fn text_width() -> usize {
    termwidth().min(MAX_TEXT_WIDTH)
}

/// Wrapping options for ordinary paragraphs.
pub fn normal_block(width: usize) -> Options<'static> {
    Options::new(width)
}

/// Wrapping options for quoted or listed text, indented four spaces.
pub fn indented_block(width: usize) -> Options<'static> {
    Options::new(width).initial_indent("    ").subsequent_indent("    ")
}
