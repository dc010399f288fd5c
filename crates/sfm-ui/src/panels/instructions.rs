//! How to obtain a Gemini API key.

use egui::{self, RichText, Vec2};
use crate::route::Route;
use crate::theme::*;

pub const AI_STUDIO_URL: &str = "https://aistudio.google.com/";

enum StepLink {
    External(&'static str, &'static str),
    Internal(Route, &'static str),
}

struct Step {
    title: &'static str,
    description: &'static str,
    link: Option<StepLink>,
}

const STEPS: [Step; 5] = [
    Step {
        title: "Visit Google AI Studio",
        description: "Navigate to the Google AI Studio website to get started",
        link: Some(StepLink::External(AI_STUDIO_URL, "Open AI Studio")),
    },
    Step {
        title: "Sign in with Google",
        description: "Use your Google account to access AI Studio",
        link: None,
    },
    Step {
        title: "Get API Key",
        description: "Click on 'Get API Key' button in the AI Studio interface",
        link: None,
    },
    Step {
        title: "Copy Your Key",
        description: "Copy the generated API key to your clipboard",
        link: None,
    },
    Step {
        title: "Add to SF Manager",
        description: "Paste the API key in SF Manager Settings page",
        link: Some(StepLink::Internal(Route::Settings, "Go to Settings")),
    },
];

const NOTES: [&str; 4] = [
    "The Gemini API key is free to use with generous limits",
    "Your API key is stored locally in your browser",
    "We never store or access your API key on our servers",
    "You can update or remove your key anytime in Settings",
];

const BENEFITS: [(&str, &str); 4] = [
    (
        "Direct Access",
        "Connect directly to Google's Gemini AI without intermediaries for the best performance and reliability.",
    ),
    (
        "Your Control",
        "Manage your own usage limits and have full control over your AI interactions.",
    ),
    (
        "Privacy First",
        "Your conversations go directly to Google's servers without passing through our systems.",
    ),
    (
        "Free Tier",
        "Google provides a generous free tier for API usage, perfect for personal and small business use.",
    ),
];

/// Render the setup instructions. Returns an in-app route when a step's
/// button was clicked; external links open in a new tab on their own.
pub fn instructions_page(ui: &mut egui::Ui) -> Option<Route> {
    let mut target = None;

    centered_column(ui, |ui| {
        page_header(
            ui,
            "Setup Instructions",
            "Follow these simple steps to get your Gemini API key and start using SF Manager",
        );

        card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Important Information").color(SUCCESS).strong());
            for note in NOTES {
                ui.label(RichText::new(format!("•  {}", note)).color(TEXT_SECONDARY));
            }
        });
        ui.add_space(12.0);

        for (index, step) in STEPS.iter().enumerate() {
            card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    badge(ui, &(index + 1).to_string(), ACCENT);
                    ui.label(RichText::new(step.title).color(TEXT_PRIMARY).strong().size(17.0));
                });
                ui.label(RichText::new(step.description).color(TEXT_SECONDARY));
                match &step.link {
                    Some(StepLink::External(url, text)) => {
                        ui.hyperlink_to(format!("{} ↗", text), *url);
                    }
                    Some(StepLink::Internal(route, text)) => {
                        if ui.add(primary_button(text).min_size(Vec2::new(120.0, 28.0))).clicked() {
                            target = Some(*route);
                        }
                    }
                    None => {}
                }
            });
            ui.add_space(8.0);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Why Use Your Own API Key?").color(TEXT_PRIMARY).strong().size(20.0));
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            for (index, (title, body)) in BENEFITS.iter().enumerate() {
                let column = &mut columns[index % 2];
                card().show(column, |ui| {
                    ui.set_min_height(80.0);
                    ui.label(RichText::new(*title).color(TEXT_PRIMARY).strong());
                    ui.label(RichText::new(*body).color(TEXT_SECONDARY));
                });
                column.add_space(8.0);
            }
        });
    });

    target
}
