//! Settings page — Gemini API key and account information.

use egui::{self, RichText, Vec2};
use crate::route::Route;
use crate::state::UiState;
use crate::theme::*;
use super::instructions::AI_STUDIO_URL;

/// What the caller should do after rendering the settings page
pub enum SettingsAction {
    /// Store the entered key
    Save(String),
    /// Remove the stored key
    Remove,
    Navigate(Route),
}

/// Render the settings page. Returns an action for the caller to handle.
pub fn settings_page(ui: &mut egui::Ui, state: &mut UiState) -> Option<SettingsAction> {
    let mut action = None;

    centered_column(ui, |ui| {
        page_header(
            ui,
            "Settings",
            "Manage your SF Manager preferences and API configuration",
        );

        // ── API Key Section ──────────────────────────────
        card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Gemini API Key").color(TEXT_PRIMARY).strong().size(18.0));
                if state.has_api_key {
                    badge(ui, "✔ Configured", SUCCESS);
                }
            });
            ui.label(
                RichText::new("Configure your Google Gemini API key to enable AI chat functionality")
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            egui::Frame::default()
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            RichText::new(
                                "Your API key is stored locally in your browser and never sent to our servers. You can get a free API key from",
                            )
                            .color(TEXT_SECONDARY),
                        );
                        ui.hyperlink_to("Google AI Studio", AI_STUDIO_URL);
                    });
                });
            ui.add_space(8.0);

            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.settings.api_key)
                        .password(!state.settings.show_key)
                        .hint_text("Enter your Gemini API key")
                        .desired_width(ui.available_width() - 60.0),
                );
                let toggle = if state.settings.show_key { "Hide" } else { "Show" };
                if ui.add(outline_button(toggle)).clicked() {
                    state.settings.show_key = !state.settings.show_key;
                }
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add(primary_button("Save API Key").min_size(Vec2::new(120.0, 30.0)))
                    .clicked()
                {
                    action = Some(SettingsAction::Save(state.settings.api_key.clone()));
                }
                if state.has_api_key
                    && ui
                        .add(destructive_button("Remove Key").min_size(Vec2::new(110.0, 30.0)))
                        .clicked()
                {
                    action = Some(SettingsAction::Remove);
                }
            });
        });
        ui.add_space(12.0);

        // ── Account Section ──────────────────────────────
        if let Some(user) = &state.user {
            card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Account Information").color(TEXT_PRIMARY).strong().size(18.0));
                ui.label(RichText::new("Your account details and preferences").color(TEXT_SECONDARY));
                ui.add_space(8.0);
                account_row(ui, "Email", user.email_or_empty());
                account_row(ui, "Account Created", user.creation_time_or_unknown());
                account_row(ui, "Last Sign In", user.last_sign_in_or_unknown());
            });
            ui.add_space(12.0);
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Need help getting your API key?").color(TEXT_SECONDARY));
            if ui.add(outline_button("View Setup Instructions")).clicked() {
                action = Some(SettingsAction::Navigate(Route::Instructions));
            }
        });
    });

    action
}

fn account_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    let mut shown = value.to_string();
    ui.add_enabled(
        false,
        egui::TextEdit::singleline(&mut shown).desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}
