//! Colour palette.
//!
//! Nord-derived colours with semantic names for the menu screens.

use ratatui::style::Color;

// === Base shades ===

/// Muted grey for hints and secondary text.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);
/// Default border shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Primary light text.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
/// Cyan accent.
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);

// === Status ===

pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === Semantic Aliases ===

pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
/// Prices.
pub const PRICE: Color = NORD_GREEN;
pub const SUCCESS: Color = NORD_GREEN;
pub const WARNING: Color = NORD_YELLOW;
pub const ERROR: Color = NORD_RED;

// === UI Element Colors ===

pub const BORDER_DEFAULT: Color = NORD_POLAR_NIGHT_3;
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
pub const ROW_SELECTED_BG: Color = Color::Rgb(40, 40, 40);
pub const ROW_SELECTED_FG: Color = NORD_FROST_2;
/// Background of the focused form input.
pub const INPUT_FOCUSED_BG: Color = Color::Rgb(30, 34, 42);
