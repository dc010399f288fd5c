//! Chat page — conversation sidebar, transcript and input row.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, SidePanel, Vec2};
use sfm_core::store::ConversationStore;
use sfm_types::conversation::ConversationId;
use sfm_types::message::Message;
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat page
pub enum ChatAction {
    Send(String),
    UploadPdf,
    NewChat,
    Select(ConversationId),
    OpenSettings,
}

/// Render the chat page. The store is only read.
pub fn chat_page(
    ui: &mut egui::Ui,
    state: &mut UiState,
    store: &ConversationStore,
) -> Option<ChatAction> {
    let mut action = None;

    SidePanel::left("conversations")
        .resizable(false)
        .exact_width(240.0)
        .frame(egui::Frame::default().fill(BG_SECONDARY).inner_margin(PANEL_PADDING))
        .show_inside(ui, |ui| {
            if let Some(a) = sidebar(ui, store) {
                action = Some(a);
            }
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BG_PRIMARY).inner_margin(PANEL_PADDING))
        .show_inside(ui, |ui| {
            if !state.has_api_key {
                if let Some(a) = api_key_banner(ui) {
                    action = Some(a);
                }
                ui.add_space(8.0);
            }

            let available_height = ui.available_height() - 48.0;
            ScrollArea::vertical()
                .max_height(available_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    transcript(ui, state, store);
                });

            ui.add_space(8.0);
            if let Some(a) = input_row(ui, state) {
                action = Some(a);
            }
        });

    action
}

fn sidebar(ui: &mut egui::Ui, store: &ConversationStore) -> Option<ChatAction> {
    let mut action = None;

    if ui
        .add(primary_button("+  New Chat").min_size(Vec2::new(ui.available_width(), 32.0)))
        .clicked()
    {
        action = Some(ChatAction::NewChat);
    }
    ui.add_space(8.0);

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        let active = store.active_id();
        for summary in store.summaries() {
            let is_active = active == Some(summary.id);
            let response = egui::Frame::default()
                .fill(if is_active { BG_PRIMARY } else { Color32::TRANSPARENT })
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(
                        egui::Label::new(RichText::new(&summary.title).color(TEXT_PRIMARY))
                            .truncate(),
                    );
                    ui.label(
                        RichText::new(format!("{} messages", summary.message_count))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                })
                .response
                .interact(egui::Sense::click());
            if response.clicked() && !is_active {
                action = Some(ChatAction::Select(summary.id));
            }
            ui.add_space(2.0);
        }
    });

    action
}

fn api_key_banner(ui: &mut egui::Ui) -> Option<ChatAction> {
    let mut action = None;
    egui::Frame::default()
        .fill(WARNING.linear_multiply(0.15))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("API key not configured. Please add your Gemini API key in")
                        .color(WARNING),
                );
                if ui.link("Settings").clicked() {
                    action = Some(ChatAction::OpenSettings);
                }
            });
        });
    action
}

fn transcript(ui: &mut egui::Ui, state: &UiState, store: &ConversationStore) {
    let messages = store.active().map(|c| c.messages()).unwrap_or_default();

    if messages.is_empty() && !state.chat.thinking {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new("Start a conversation").color(TEXT_PRIMARY).size(20.0).strong());
            ui.label(
                RichText::new("Ask me anything or upload a PDF to analyze").color(TEXT_SECONDARY),
            );
        });
        return;
    }

    for message in messages {
        render_message(ui, message);
        ui.add_space(6.0);
    }

    if state.chat.thinking {
        bubble(ui, ASSISTANT_BUBBLE, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY));
            });
        });
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let layout = if message.is_user() {
        Layout::right_to_left(Align::Min)
    } else {
        Layout::left_to_right(Align::Min)
    };
    let fill = if message.is_user() { USER_BUBBLE } else { ASSISTANT_BUBBLE };

    ui.with_layout(layout, |ui| {
        bubble(ui, fill, |ui| {
            ui.label(
                RichText::new(message.author().label())
                    .color(TEXT_PRIMARY.linear_multiply(0.7))
                    .small()
                    .strong(),
            );
            ui.label(RichText::new(message.content()).color(TEXT_PRIMARY));
        });
    });
}

fn bubble(ui: &mut egui::Ui, fill: Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let max_width = ui.available_width() * 0.8;
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            add_contents(ui);
        });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;
    let enabled = state.chat_enabled();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, outline_button("PDF").min_size(Vec2::new(44.0, 30.0)))
            .on_hover_text("Upload a PDF to analyze")
            .clicked()
        {
            action = Some(ChatAction::UploadPdf);
        }

        let hint = if state.has_api_key {
            "Type your message..."
        } else {
            "Please configure API key in Settings"
        };
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut state.chat.input)
                .hint_text(hint)
                .desired_width(ui.available_width() - 70.0)
                .font(egui::FontId::proportional(14.0)),
        );

        let send_enabled = enabled && !state.chat.input.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 30.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || send_btn.clicked() {
            if let Some(text) = state.take_chat_input() {
                action = Some(ChatAction::Send(text));
                response.request_focus();
            }
        }
    });

    action
}
