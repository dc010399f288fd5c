//! Landing page: hero, feature cards and the AI-mode picker.

use egui::{self, RichText, Vec2};
use sfm_types::mode::AiMode;
use crate::route::Route;
use crate::theme::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Chat",
        "Engage with advanced AI using Google's Gemini API for intelligent conversations and assistance.",
    ),
    (
        "PDF Analysis",
        "Upload PDF documents and extract insights with AI-powered text analysis and summarization.",
    ),
    (
        "Secure & Fast",
        "Built with modern security practices and optimized for speed with your privacy in mind.",
    ),
];

/// Render the home page. Returns the route to open, if any.
pub fn home_page(ui: &mut egui::Ui) -> Option<Route> {
    let mut target = None;

    centered_column(ui, |ui| {
        if let Some(route) = hero(ui) {
            target = Some(route);
        }
        ui.add_space(32.0);
        features(ui);
        ui.add_space(40.0);
        if let Some(mode) = modes_section(ui) {
            target = Some(Route::Workspace(mode));
        }
        ui.add_space(24.0);
    });

    target
}

fn hero(ui: &mut egui::Ui) -> Option<Route> {
    let mut target = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("SF Manager").color(TEXT_PRIMARY).size(44.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Your AI-powered assistant for intelligent conversations, document analysis, and seamless productivity.",
            )
            .color(TEXT_SECONDARY)
            .size(17.0),
        );
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            let buttons_width = 260.0;
            ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
            if ui
                .add(primary_button("Get Started  →").min_size(Vec2::new(130.0, 36.0)))
                .clicked()
            {
                target = Some(Route::SignUp);
            }
            if ui
                .add(outline_button("Learn More").min_size(Vec2::new(120.0, 36.0)))
                .clicked()
            {
                target = Some(Route::About);
            }
        });
    });
    target
}

fn features(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Powerful Features").color(TEXT_PRIMARY).size(26.0).strong());
    });
    ui.add_space(16.0);
    ui.columns(FEATURES.len(), |columns| {
        for (column, (title, body)) in columns.iter_mut().zip(FEATURES) {
            card().show(column, |ui| {
                ui.set_min_height(110.0);
                ui.label(RichText::new(title).color(TEXT_PRIMARY).strong().size(17.0));
                ui.add_space(4.0);
                ui.label(RichText::new(body).color(TEXT_SECONDARY));
            });
        }
    });
}

fn modes_section(ui: &mut egui::Ui) -> Option<AiMode> {
    let mut selected = None;

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Choose Your AI Mode").color(TEXT_PRIMARY).size(26.0).strong());
        ui.add_space(4.0);
        ui.label(
            RichText::new(
                "Select the perfect AI assistant mode for your specific needs. Each mode is optimized for different types of tasks and complexity levels.",
            )
            .color(TEXT_SECONDARY),
        );
    });
    ui.add_space(16.0);

    let modes = AiMode::selectable();
    ui.columns(modes.len(), |columns| {
        for (column, mode) in columns.iter_mut().zip(modes) {
            if mode_card(column, *mode) {
                selected = Some(*mode);
            }
        }
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Not sure which mode to choose? We'll help you decide based on your input.")
                .color(TEXT_SECONDARY),
        );
        ui.add_space(6.0);
        if ui.add(outline_button("Auto-Detect Mode")).clicked() {
            selected = Some(AiMode::Auto);
        }
    });

    selected
}

fn mode_card(ui: &mut egui::Ui, mode: AiMode) -> bool {
    let mut clicked = false;
    card().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(mode.title()).color(TEXT_PRIMARY).strong().size(18.0));
        });
        badge(ui, mode.card_badge(), ACCENT);
        ui.add_space(6.0);
        ui.label(RichText::new(mode.description()).color(TEXT_SECONDARY));
        ui.add_space(6.0);
        for feature in mode.features() {
            ui.label(RichText::new(format!("•  {}", feature)).color(TEXT_SECONDARY).small());
        }
        ui.add_space(10.0);
        if ui
            .add(outline_button("Select Mode  →").min_size(Vec2::new(ui.available_width(), 30.0)))
            .clicked()
        {
            clicked = true;
        }
    });
    clicked
}
