//! Sign-in / sign-up / sign-out on top of the identity port.

use std::rc::Rc;

use sfm_types::{
    event::{AppEvent, Notification},
    user::User,
    AppError, Result,
};
use crate::busy::{BusyFlag, BusyGuard};
use crate::event_bus::EventBus;
use crate::ports::IdentityPort;

/// Shortest password the identity provider accepts
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone)]
pub struct AuthService {
    identity: Rc<dyn IdentityPort>,
    event_bus: EventBus,
    busy: BusyFlag,
}

impl AuthService {
    pub fn new(identity: Rc<dyn IdentityPort>, event_bus: EventBus) -> Self {
        Self {
            identity,
            event_bus,
            busy: BusyFlag::default(),
        }
    }

    /// True while a sign-in or sign-up call is pending
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn claim(&self) -> Result<BusyGuard> {
        self.busy
            .acquire(&self.event_bus, AppEvent::AuthStarted, AppEvent::AuthFinished)
    }

    /// Reload a persisted session at startup. Failures just mean signed out.
    pub async fn restore(&self) -> Option<User> {
        let user = match self.identity.restore().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Session restore failed: {}", e);
                None
            }
        };
        self.event_bus.emit(AppEvent::AuthChanged { user: user.clone() });
        user
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let _guard = self.claim()?;
        let email = email.trim();
        if let Err(e) = validate_email(email).and_then(|_| validate_present(password)) {
            self.event_bus
                .notify(Notification::destructive("Sign In Failed", e.user_message()));
            return Err(e);
        }

        match self.identity.sign_in(email, password).await {
            Ok(user) => {
                log::info!("Signed in as {}", user.email_or_empty());
                self.event_bus.emit(AppEvent::AuthChanged { user: Some(user.clone()) });
                self.event_bus.notify(Notification::info(
                    "Welcome back!",
                    format!("Signed in as {}", user.email_or_empty()),
                ));
                Ok(user)
            }
            Err(e) => {
                log::warn!("Sign in failed: {}", e);
                self.event_bus
                    .notify(Notification::destructive("Sign In Failed", e.user_message()));
                Err(e)
            }
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str, confirm: &str) -> Result<User> {
        let _guard = self.claim()?;
        let email = email.trim();
        if let Err(e) = validate_sign_up(email, password, confirm) {
            self.event_bus
                .notify(Notification::destructive("Sign Up Failed", e.user_message()));
            return Err(e);
        }

        match self.identity.sign_up(email, password).await {
            Ok(user) => {
                log::info!("Created account {}", user.email_or_empty());
                self.event_bus.emit(AppEvent::AuthChanged { user: Some(user.clone()) });
                self.event_bus.notify(Notification::info(
                    "Account Created",
                    "Your account has been created successfully.",
                ));
                Ok(user)
            }
            Err(e) => {
                log::warn!("Sign up failed: {}", e);
                self.event_bus
                    .notify(Notification::destructive("Sign Up Failed", e.user_message()));
                Err(e)
            }
        }
    }

    /// Sign out. Callers fire this and move on; the view follows
    /// `AuthChanged`.
    pub async fn sign_out(&self) {
        if let Err(e) = self.identity.sign_out().await {
            log::warn!("Sign out reported an error: {}", e);
        }
        log::info!("Signed out");
        self.event_bus.emit(AppEvent::AuthChanged { user: None });
    }
}

fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput(
            "Please enter a valid email address.".to_string(),
        ));
    }
    Ok(())
}

fn validate_present(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(AppError::InvalidInput("Please enter your password.".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<()> {
    validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidInput(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }
    if password != confirm {
        return Err(AppError::InvalidInput("Passwords do not match.".to_string()));
    }
    Ok(())
}
