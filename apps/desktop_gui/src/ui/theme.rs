//! Visual constants and small widget helpers for the showcase shell.

use egui::{Button, Color32, RichText};

/// Dark slate fill for the five simple role buttons.
pub const ROLE_FILL: Color32 = Color32::from_rgb(30, 41, 59);
/// Amber accent for the Assessor action.
pub const ASSESSOR_FILL: Color32 = Color32::from_rgb(217, 119, 6);
/// Indigo accent for the Genius Remix action.
pub const REMIX_FILL: Color32 = Color32::from_rgb(79, 70, 229);
/// Red accent for the Clear action.
pub const CLEAR_FILL: Color32 = Color32::from_rgb(220, 38, 38);
/// Muted slate for the Copy action.
pub const COPY_FILL: Color32 = Color32::from_rgb(51, 65, 85);

/// Output block colors, light text on a near-black panel.
pub const OUTPUT_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const OUTPUT_TEXT: Color32 = Color32::from_rgb(248, 250, 252);

pub const HISTORY_PANEL_WIDTH: f32 = 300.0;
pub const OUTPUT_MAX_HEIGHT: f32 = 260.0;
pub const SECTION_GAP: f32 = 8.0;

/// Filled action button with a white label, shared by every action row.
pub fn action_button(label: &str, fill: Color32) -> Button<'static> {
    Button::new(RichText::new(label).color(Color32::WHITE)).fill(fill)
}
