//! UI theme constants and shared widgets

use egui::{Color32, CornerRadius, RichText, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 41, 59);
pub const BG_SURFACE: Color32 = Color32::from_rgb(51, 65, 85);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(30, 58, 138);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const USER_BUBBLE: Color32 = ACCENT;
pub const ASSISTANT_BUBBLE: Color32 = BG_SURFACE;

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
pub const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.hyperlink_color = ACCENT;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.button_padding = Vec2::new(10.0, 5.0);

    ctx.set_style(style);
}

/// Rounded card used by every page
pub fn card() -> egui::Frame {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .stroke(Stroke::new(1.0, BG_SURFACE))
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(TEXT_PRIMARY).strong())
        .fill(ACCENT)
        .corner_radius(PANEL_ROUNDING)
}

pub fn destructive_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(TEXT_PRIMARY))
        .fill(DESTRUCTIVE)
        .corner_radius(PANEL_ROUNDING)
}

pub fn outline_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(TEXT_PRIMARY))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, BG_SURFACE))
        .corner_radius(PANEL_ROUNDING)
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::default()
        .fill(color.linear_multiply(0.2))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Vec2::new(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).small().strong());
        });
}

/// Page heading with a secondary subtitle
pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(RichText::new(title).color(TEXT_PRIMARY).size(30.0).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(subtitle).color(TEXT_SECONDARY).size(15.0));
        ui.add_space(20.0);
    });
}

/// Centre a column of at most `CONTENT_MAX_WIDTH`
pub fn centered_column<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
