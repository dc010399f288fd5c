//! Contact form and FAQ.

use egui::{self, RichText, Vec2};
use crate::state::UiState;
use crate::theme::*;

pub const FAQS: [(&str, &str); 5] = [
    (
        "How do I get a Gemini API key?",
        "Visit https://aistudio.google.com/, sign in with your Google account, and click \"Get API Key\" to generate your free API key.",
    ),
    (
        "Is SF Manager free to use?",
        "Yes! SF Manager is completely free. You only need a free Gemini API key which comes with generous usage limits from Google.",
    ),
    (
        "What file types are supported?",
        "Currently, we support PDF files for document analysis. We extract text from PDFs and analyze them using AI.",
    ),
    (
        "How is my data handled?",
        "Your API key is stored locally in your browser. Your conversations go directly to Google's servers without passing through our systems.",
    ),
    (
        "Does SF Manager work on mobile?",
        "Yes! SF Manager works in any modern browser on mobile devices, tablets, and desktops.",
    ),
];

pub fn contact_page(ui: &mut egui::Ui, state: &mut UiState) {
    centered_column(ui, |ui| {
        page_header(
            ui,
            "Get in Touch",
            "Have questions, suggestions, or need help? We're here to assist you.",
        );

        ui.columns(2, |columns| {
            contact_form(&mut columns[0], state);
            contact_info(&mut columns[1], state);
        });
    });
}

fn contact_form(ui: &mut egui::Ui, state: &mut UiState) {
    let mut submit = false;

    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Send us a Message").color(TEXT_PRIMARY).strong().size(18.0));
        ui.add_space(8.0);

        let form = &mut state.contact;
        field(ui, "Name *", &mut form.name, "Your name");
        field(ui, "Email *", &mut form.email, "your@email.com");
        field(ui, "Subject *", &mut form.subject, "What's this about?");

        ui.label(RichText::new("Message *").color(TEXT_SECONDARY).small());
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .hint_text("Tell us more...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        if ui
            .add(primary_button("Send Message").min_size(Vec2::new(ui.available_width(), 32.0)))
            .clicked()
        {
            submit = true;
        }
    });

    if submit {
        state.submit_contact();
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

fn contact_info(ui: &mut egui::Ui, state: &mut UiState) {
    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Contact Information").color(TEXT_PRIMARY).strong().size(18.0));
        ui.add_space(6.0);
        ui.label(RichText::new("Email").color(TEXT_SECONDARY).small());
        ui.label(RichText::new("contact@sfmanager.dev").color(TEXT_PRIMARY));
        ui.add_space(4.0);
        ui.label(RichText::new("GitHub").color(TEXT_SECONDARY).small());
        ui.label(RichText::new("github.com/sf-manager").color(TEXT_PRIMARY));
    });
    ui.add_space(12.0);

    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("Frequently Asked Questions")
                .color(TEXT_PRIMARY)
                .strong()
                .size(18.0),
        );
        ui.add_space(6.0);

        let mut toggled = None;
        for (index, (question, answer)) in FAQS.iter().enumerate() {
            let open = state.open_faq == Some(index);
            let marker = if open { "▾" } else { "▸" };
            if ui
                .add(
                    egui::Label::new(
                        RichText::new(format!("{} {}", marker, question)).color(TEXT_PRIMARY),
                    )
                    .sense(egui::Sense::click()),
                )
                .clicked()
            {
                toggled = Some(index);
            }
            if open {
                ui.indent(("faq", index), |ui| {
                    ui.label(RichText::new(*answer).color(TEXT_SECONDARY));
                });
            }
            ui.add_space(4.0);
        }
        if let Some(index) = toggled {
            state.toggle_faq(index);
        }
    });
}
