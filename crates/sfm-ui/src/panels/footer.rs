use egui::{self, RichText};
use crate::theme::*;

pub fn footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new("© 2025 SF Manager. All rights reserved.")
                .color(TEXT_SECONDARY)
                .small(),
        );
        ui.label(
            RichText::new("Developed by Surya B and Abishek Raj PR")
                .color(TEXT_SECONDARY)
                .small(),
        );
        ui.add_space(6.0);
    });
}
