//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for loaded status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Amber color for loading status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Neutral gray for "nothing to show" status.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(160, 160, 160);

/// Background of a search match inside a cell.
pub const MATCH_BG_COLOR: Color32 = Color32::from_rgb(253, 224, 71);

/// Text on top of [`MATCH_BG_COLOR`].
pub const MATCH_TEXT_COLOR: Color32 = Color32::from_rgb(20, 20, 20);
