//! AI-mode workspace: one prompt per mode and reader level, sent to the
//! generative collaborator.

use sfm_types::{
    event::{AppEvent, Notification},
    mode::{AiMode, Complexity},
    AppError, Result,
};
use crate::busy::BusyFlag;
use crate::credentials::CredentialStore;
use crate::event_bus::EventBus;
use crate::ports::GenerativeTextPort;

#[derive(Clone)]
pub struct WorkspaceSession {
    credentials: CredentialStore,
    event_bus: EventBus,
    busy: BusyFlag,
}

impl WorkspaceSession {
    pub fn new(credentials: CredentialStore, event_bus: EventBus) -> Self {
        Self {
            credentials,
            event_bus,
            busy: BusyFlag::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub async fn process(
        &self,
        mode: AiMode,
        complexity: Complexity,
        input: &str,
        generator: &dyn GenerativeTextPort,
    ) -> Result<String> {
        if input.trim().is_empty() {
            self.event_bus.notify(Notification::destructive(
                "Input Required",
                "Please provide some content to process.",
            ));
            return Err(AppError::InvalidInput("Workspace input is empty".to_string()));
        }

        let _guard = self.busy.acquire(
            &self.event_bus,
            AppEvent::WorkspaceBusy { busy: true },
            AppEvent::WorkspaceBusy { busy: false },
        )?;

        let credential = match self.credentials.load().await {
            Ok(Some(key)) => key,
            _ => {
                self.event_bus.notify(Notification::api_key_required());
                return Err(AppError::MissingCredential);
            }
        };

        log::info!("Processing {} input ({})", mode.slug(), complexity.label());

        let prompt = mode.build_prompt(complexity, input);
        match generator.generate(&credential, &prompt).await {
            Ok(text) => {
                self.event_bus.emit(AppEvent::WorkspaceOutput { text: text.clone() });
                self.event_bus.notify(Notification::info(
                    "Analysis Complete",
                    "Your content has been processed successfully.",
                ));
                Ok(text)
            }
            Err(e) => {
                log::warn!("Workspace generation failed: {}", e);
                self.event_bus.notify(Notification::destructive(
                    "Error",
                    "Failed to process content. Please check your API key.",
                ));
                Err(e)
            }
        }
    }
}
