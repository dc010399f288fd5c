//! Sign-in and sign-up forms, and the card shown on protected pages.

use egui::{self, RichText, Vec2};
use crate::route::Route;
use crate::state::UiState;
use crate::theme::*;

pub enum AuthAction {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, confirm: String },
    Navigate(Route),
}

const FORM_WIDTH: f32 = 380.0;

pub fn login_page(ui: &mut egui::Ui, state: &mut UiState) -> Option<AuthAction> {
    let mut action = None;

    form_card(ui, "Welcome Back", "Sign in to your SF Manager account", |ui| {
        let form = &mut state.login;
        labelled(ui, "Email", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text("your@email.com")
                    .desired_width(f32::INFINITY),
            );
        });
        let password = labelled(ui, "Password", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(true)
                    .hint_text("Your password")
                    .desired_width(f32::INFINITY),
            )
        });
        ui.add_space(8.0);

        let label = if form.submitting { "Signing In..." } else { "Sign In" };
        let clicked = ui
            .add_enabled(
                !form.submitting,
                primary_button(label).min_size(Vec2::new(ui.available_width(), 34.0)),
            )
            .clicked();
        let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (clicked || enter) && !form.submitting {
            form.submitting = true;
            action = Some(AuthAction::SignIn {
                email: form.email.clone(),
                password: form.password.clone(),
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Don't have an account?").color(TEXT_SECONDARY));
            if ui.link("Sign up").clicked() {
                action = Some(AuthAction::Navigate(Route::SignUp));
            }
        });
    });

    action
}

pub fn signup_page(ui: &mut egui::Ui, state: &mut UiState) -> Option<AuthAction> {
    let mut action = None;

    form_card(ui, "Create Account", "Join SF Manager to start chatting with AI", |ui| {
        let form = &mut state.signup;
        labelled(ui, "Email", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text("your@email.com")
                    .desired_width(f32::INFINITY),
            );
        });
        labelled(ui, "Password", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(true)
                    .hint_text("At least 6 characters")
                    .desired_width(f32::INFINITY),
            );
        });
        labelled(ui, "Confirm Password", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.confirm)
                    .password(true)
                    .hint_text("Repeat your password")
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(8.0);

        let label = if form.submitting { "Creating Account..." } else { "Create Account" };
        if ui
            .add_enabled(
                !form.submitting,
                primary_button(label).min_size(Vec2::new(ui.available_width(), 34.0)),
            )
            .clicked()
        {
            form.submitting = true;
            action = Some(AuthAction::SignUp {
                email: form.email.clone(),
                password: form.password.clone(),
                confirm: form.confirm.clone(),
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Already have an account?").color(TEXT_SECONDARY));
            if ui.link("Sign in").clicked() {
                action = Some(AuthAction::Navigate(Route::Login));
            }
        });
    });

    action
}

/// Shown in place of a protected page when nobody is signed in
pub fn auth_required(ui: &mut egui::Ui, feature: &str, resolved: bool) -> Option<Route> {
    let mut target = None;

    form_card(ui, "Authentication Required", &format!("Please sign in to access {}.", feature), |ui| {
        if !resolved {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Checking your session...").color(TEXT_SECONDARY));
            });
            return;
        }
        ui.horizontal(|ui| {
            if ui.add(primary_button("Sign In")).clicked() {
                target = Some(Route::Login);
            }
            if ui.add(outline_button("Sign Up")).clicked() {
                target = Some(Route::SignUp);
            }
        });
    });

    target
}

fn form_card(ui: &mut egui::Ui, title: &str, subtitle: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.allocate_ui(Vec2::new(FORM_WIDTH, 0.0), |ui| {
            card().show(ui, |ui| {
                ui.set_width(FORM_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).color(TEXT_PRIMARY).strong().size(22.0));
                    ui.label(RichText::new(subtitle).color(TEXT_SECONDARY));
                });
                ui.add_space(12.0);
                add_contents(ui);
            });
        });
    });
}

fn labelled<R>(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    let inner = add_contents(ui);
    ui.add_space(4.0);
    inner
}
