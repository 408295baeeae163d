//! Terminal styling for diagnostics.
//!
//! Whether escape codes are emitted follows `colored`: `NO_COLOR`,
//! `CLICOLOR` and `CLICOLOR_FORCE` are honored unless overridden with
//! [`set_colors_enabled`].

use colored::Colorize;

pub use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
    Underline,
}

pub fn style(text: &str, weight: Weight, color: Option<Color>) -> String {
    let styled = match color {
        Some(color) => text.color(color),
        None => text.normal(),
    };
    let styled = match weight {
        Weight::Regular => styled,
        Weight::Bold => styled.bold(),
        Weight::Underline => styled.underline(),
    };
    styled.to_string()
}

pub fn set_colors_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
