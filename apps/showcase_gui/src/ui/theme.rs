//! Night-sky visuals for the shell.

use egui::{Color32, Context};

pub const ACCENT: Color32 = Color32::from_rgb(0, 212, 255);
pub const APP_BACKGROUND: Color32 = Color32::from_rgb(12, 12, 30);
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(24, 26, 48);
pub const CARD_STROKE: Color32 = Color32::from_rgb(56, 60, 96);
pub const LABEL_TEXT: Color32 = Color32::from_rgb(200, 205, 225);

pub fn apply(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = APP_BACKGROUND;
    style.visuals.window_fill = CARD_BACKGROUND;
    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    style.visuals.hyperlink_color = ACCENT;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}
