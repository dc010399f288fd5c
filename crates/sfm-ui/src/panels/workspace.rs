//! AI-mode workspace: input with reader level on the left, result on the
//! right.

use egui::{self, RichText, ScrollArea, Vec2};
use sfm_types::mode::{AiMode, Complexity};
use crate::state::{OutputTab, UiState};
use crate::theme::*;

pub enum WorkspaceAction {
    Back,
    Process,
    Copy,
    Download,
}

pub fn workspace_page(
    ui: &mut egui::Ui,
    state: &mut UiState,
    mode: AiMode,
) -> Option<WorkspaceAction> {
    let mut action = None;

    centered_column(ui, |ui| {
        ui.add_space(16.0);
        if ui.add(outline_button("←  Back to Modes")).clicked() {
            action = Some(WorkspaceAction::Back);
        }
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(mode.title()).color(TEXT_PRIMARY).strong().size(26.0));
            badge(ui, mode.workspace_badge(), ACCENT);
        });
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            if input_card(&mut columns[0], state, mode) {
                action = Some(WorkspaceAction::Process);
            }
            if let Some(a) = output_card(&mut columns[1], state) {
                action = Some(a);
            }
        });
    });

    action
}

fn input_card(ui: &mut egui::Ui, state: &mut UiState, mode: AiMode) -> bool {
    let mut process = false;
    let view = &mut state.workspace;

    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("Input Content").color(TEXT_PRIMARY).strong().size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("complexity")
                    .selected_text(view.complexity.label())
                    .show_ui(ui, |ui| {
                        for level in Complexity::all() {
                            ui.selectable_value(&mut view.complexity, *level, level.label());
                        }
                    });
            });
        });
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::multiline(&mut view.input)
                .hint_text(mode.placeholder())
                .desired_rows(14)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} characters", view.char_count()))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if view.processing { "Processing..." } else { "✨ Process Content" };
                let enabled = !view.processing && !view.input.trim().is_empty();
                if ui
                    .add_enabled(enabled, primary_button(label).min_size(Vec2::new(150.0, 30.0)))
                    .clicked()
                {
                    process = true;
                }
            });
        });
    });

    process
}

fn output_card(ui: &mut egui::Ui, state: &mut UiState) -> Option<WorkspaceAction> {
    let mut action = None;
    let view = &mut state.workspace;

    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("AI Analysis Result").color(TEXT_PRIMARY).strong().size(18.0));
            if !view.output.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(outline_button("Download")).clicked() {
                        action = Some(WorkspaceAction::Download);
                    }
                    if ui.add(outline_button("Copy")).clicked() {
                        action = Some(WorkspaceAction::Copy);
                    }
                });
            }
        });
        ui.add_space(8.0);

        if view.processing {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.label(RichText::new("Analyzing your content...").color(TEXT_SECONDARY));
            });
            return;
        }

        if view.output.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(RichText::new("AI analysis will appear here").color(TEXT_SECONDARY));
                ui.label(
                    RichText::new("Process your content to get started")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
            return;
        }

        ui.horizontal(|ui| {
            ui.selectable_value(&mut view.tab, OutputTab::Formatted, "Formatted");
            ui.selectable_value(&mut view.tab, OutputTab::Raw, "Raw Text");
        });
        ui.separator();

        ScrollArea::vertical().max_height(320.0).show(ui, |ui| match view.tab {
            OutputTab::Formatted => render_formatted(ui, &view.output),
            OutputTab::Raw => {
                let mut raw = view.output.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut raw)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            }
        });
    });

    action
}

/// Light markdown: headings, bold-only lines and bullets
fn render_formatted(ui: &mut egui::Ui, text: &str) {
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("## ").or_else(|| trimmed.strip_prefix("# ")) {
            ui.add_space(4.0);
            ui.label(RichText::new(heading).color(TEXT_PRIMARY).strong().size(18.0));
        } else if let Some(heading) = trimmed.strip_prefix("### ") {
            ui.label(RichText::new(heading).color(TEXT_PRIMARY).strong());
        } else if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            ui.label(RichText::new(format!("•  {}", item.replace("**", ""))).color(TEXT_PRIMARY));
        } else if trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() > 4 {
            ui.label(RichText::new(trimmed.trim_matches('*')).color(TEXT_PRIMARY).strong());
        } else if trimmed.is_empty() {
            ui.add_space(6.0);
        } else {
            ui.label(RichText::new(trimmed.replace("**", "")).color(TEXT_PRIMARY));
        }
    }
}
