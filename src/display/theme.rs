//! Terminal display styles.
//!
//! Only named ANSI colors (Cyan, Yellow) are used so the palette adapts
//! to the user's terminal theme; `Color::Rgb` and bright variants would
//! bypass it.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Quote box, session header, and breathing frames.
pub fn accent() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        ..Default::default()
    }
}

/// The per-cycle remaining-time readout.
pub fn countdown() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Yellow),
        ..Default::default()
    }
}

/// The attribution line inside the quote box.
pub fn author() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Italic.into(),
        ..Default::default()
    }
}
