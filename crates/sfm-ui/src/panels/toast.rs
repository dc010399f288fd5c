//! Transient notifications, stacked in the bottom-right corner.

use egui::{self, Align2, RichText, Vec2};
use crate::state::{ToastId, UiState};
use crate::theme::*;

/// Render the toast stack. Returns a toast the user closed.
pub fn toasts(ctx: &egui::Context, state: &UiState) -> Option<ToastId> {
    let mut closed = None;
    if state.toasts.is_empty() {
        return None;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(340.0);
            for toast in &state.toasts {
                let n = &toast.notification;
                let (fill, title_color) = if n.is_destructive() {
                    (DESTRUCTIVE.linear_multiply(0.9), TEXT_PRIMARY)
                } else {
                    (BG_SECONDARY, TEXT_PRIMARY)
                };
                egui::Frame::default()
                    .fill(fill)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(PANEL_PADDING)
                    .stroke(egui::Stroke::new(1.0, BG_SURFACE))
                    .show(ui, |ui| {
                        ui.set_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&n.title).color(title_color).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("✕").clicked() {
                                        closed = Some(toast.id);
                                    }
                                },
                            );
                        });
                        if !n.description.is_empty() {
                            ui.label(RichText::new(&n.description).color(TEXT_PRIMARY).small());
                        }
                    });
                ui.add_space(6.0);
            }
        });

    closed
}
