use egui::{self, RichText};
use crate::theme::*;

const TEAM: [(&str, &str, &str); 2] = [
    (
        "Surya B",
        "Co-Founder & Developer",
        "Full-stack developer passionate about AI and user experience design.",
    ),
    (
        "Abishek Raj PR",
        "Co-Founder & Developer",
        "Backend specialist focused on AI integration and system architecture.",
    ),
];

pub fn about_page(ui: &mut egui::Ui) {
    centered_column(ui, |ui| {
        page_header(
            ui,
            "About SF Manager",
            "An intelligent AI chat application powered by Google's Gemini API, designed to revolutionize how you interact with information.",
        );

        card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Overview").color(TEXT_PRIMARY).strong().size(18.0));
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "SF Manager is an AI chat application that uses Google's Gemini API to provide intelligent, context-aware conversations. Whether you're analyzing documents, looking for quick answers, or working through a problem, SF Manager is your digital assistant.",
                )
                .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "It runs entirely in your browser: sign-in is handled by Firebase Authentication and PDFs are read locally before their text is sent for analysis.",
                )
                .color(TEXT_SECONDARY),
            );
        });
        ui.add_space(12.0);

        card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Our Mission").color(TEXT_PRIMARY).strong().size(18.0));
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "To democratize access to advanced AI capabilities and make intelligent document analysis accessible to everyone. Powerful AI tools should be intuitive, secure, and available to users regardless of their technical background.",
                )
                .color(TEXT_SECONDARY),
            );
        });
        ui.add_space(24.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Meet Our Team").color(TEXT_PRIMARY).strong().size(24.0));
            ui.label(RichText::new("The developers behind SF Manager").color(TEXT_SECONDARY));
        });
        ui.add_space(12.0);
        ui.columns(TEAM.len(), |columns| {
            for (column, (name, role, bio)) in columns.iter_mut().zip(TEAM) {
                card().show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(name).color(TEXT_PRIMARY).strong().size(17.0));
                        ui.label(RichText::new(role).color(ACCENT));
                        ui.add_space(4.0);
                        ui.label(RichText::new(bio).color(TEXT_SECONDARY));
                    });
                });
            }
        });
    });
}
