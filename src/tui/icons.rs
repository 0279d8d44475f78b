//! Glyphs and colours for the list controls.
//!
//! Each control has an idle and a hover look; the sort control additionally
//! reflects the direction the next sort will use.

use ratatui::style::Color;

/// Delete control, idle.
pub const DELETE: &str = "✕";
/// Delete control under the pointer.
pub const DELETE_HOVER: &str = "✖";

pub const SORT_ASCENDING: &str = "↑";
pub const SORT_ASCENDING_HOVER: &str = "⇑";
pub const SORT_DESCENDING: &str = "↓";
pub const SORT_DESCENDING_HOVER: &str = "⇓";

/// Accent for buttons and the list border
pub const ACCENT: Color = Color::Rgb(70, 110, 200);
/// Delete controls and the confirmation panel
pub const DANGER: Color = Color::Rgb(160, 30, 30);
/// Drop candidate highlight while dragging
pub const DROP_TARGET: Color = Color::Rgb(0, 80, 0);

/// Glyph for a delete control.
pub fn delete_icon(hovered: bool) -> &'static str {
    if hovered {
        DELETE_HOVER
    } else {
        DELETE
    }
}

/// Glyph for the sort control given the direction of the next sort.
pub fn sort_icon(ascending: bool, hovered: bool) -> &'static str {
    match (ascending, hovered) {
        (true, true) => SORT_ASCENDING_HOVER,
        (false, true) => SORT_DESCENDING_HOVER,
        (true, false) => SORT_ASCENDING,
        (false, false) => SORT_DESCENDING,
    }
}
