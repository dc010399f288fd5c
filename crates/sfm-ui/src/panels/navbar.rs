//! Top navigation bar.

use egui::{self, Align, Layout, RichText};
use crate::route::Route;
use crate::state::UiState;
use crate::theme::*;

pub enum NavAction {
    Navigate(Route),
    SignOut,
}

pub fn navbar(ui: &mut egui::Ui, state: &UiState) -> Option<NavAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.add_space(8.0);
        if ui
            .add(
                egui::Label::new(
                    RichText::new("SF Manager").strong().color(TEXT_PRIMARY).size(20.0),
                )
                .sense(egui::Sense::click()),
            )
            .clicked()
        {
            action = Some(NavAction::Navigate(Route::Home));
        }
        ui.add_space(24.0);

        for route in Route::nav_links(state.is_signed_in()) {
            let active = state.route == route;
            let text = RichText::new(route.label()).color(if active { ACCENT } else { TEXT_SECONDARY });
            if ui.selectable_label(active, text).clicked() {
                action = Some(NavAction::Navigate(route));
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(8.0);
            if state.is_signed_in() {
                if ui.add(outline_button("Sign Out")).clicked() {
                    action = Some(NavAction::SignOut);
                }
                if ui
                    .selectable_label(state.route == Route::Settings, "Settings")
                    .clicked()
                {
                    action = Some(NavAction::Navigate(Route::Settings));
                }
            } else {
                if ui.add(primary_button("Sign Up")).clicked() {
                    action = Some(NavAction::Navigate(Route::SignUp));
                }
                if ui.add(outline_button("Sign In")).clicked() {
                    action = Some(NavAction::Navigate(Route::Login));
                }
            }
        });
    });

    action
}
