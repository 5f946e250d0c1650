use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::config::Settings;

fn paint(msg: &str, color: Color, no_color: bool) -> String {
    if no_color {
        msg.to_string()
    } else {
        msg.with(color).to_string()
    }
}

/// Writes one coloured status line. Colour is dropped when `NO_COLOR` is set.
pub fn styled_line<W: Write>(out: &mut W, msg: &str, color: Color) -> io::Result<()> {
    writeln!(out, "{}", paint(msg, color, Settings::get().no_color))
}

// Status lines go to stderr so stdout carries only reports.
fn status(msg: &str, color: Color) {
    let _ = styled_line(&mut io::stderr().lock(), msg, color);
}

/// Print an error message in red to stderr.
pub fn error(msg: &str) {
    status(msg, Color::Red);
}

/// Print a warning message in yellow to stderr.
pub fn warning(msg: &str) {
    status(msg, Color::Yellow);
}
