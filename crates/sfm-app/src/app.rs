//! Main egui application — routes between pages and dispatches their
//! actions to the services.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, ScrollArea, TopBottomPanel};
use gloo_timers::future::TimeoutFuture;

use sfm_core::auth::AuthService;
use sfm_core::chat::ChatSession;
use sfm_core::credentials::CredentialStore;
use sfm_core::event_bus::EventBus;
use sfm_core::ports::{DocumentTextPort, GenerativeTextPort};
use sfm_core::store::ConversationStore;
use sfm_core::workspace::WorkspaceSession;
use sfm_platform::browser::{download_text, pick_file};
use sfm_platform::identity::FirebaseIdentity;
use sfm_platform::llm::GeminiProvider;
use sfm_platform::pdf::PdfTextExtractor;
use sfm_platform::storage::open_storage;
use sfm_types::config::AppConfig;
use sfm_types::event::{AppEvent, Notification};
use sfm_types::AppError;
use sfm_ui::panels::auth::{self, AuthAction};
use sfm_ui::panels::chat::{self, ChatAction};
use sfm_ui::panels::navbar::{self, NavAction};
use sfm_ui::panels::settings::{self, SettingsAction};
use sfm_ui::panels::workspace::{self, WorkspaceAction};
use sfm_ui::panels::{about, contact, footer, home, instructions, toast};
use sfm_ui::route::Route;
use sfm_ui::state::{ToastId, UiState, TOAST_DURATION_MS};
use sfm_ui::theme;

const PDF_ACCEPT: &str = ".pdf,application/pdf";

/// Something a page asked for this frame
enum PageAction {
    Navigate(Route),
    Chat(ChatAction),
    Settings(SettingsAction),
    Auth(AuthAction),
    Workspace(WorkspaceAction),
}

/// The main application state
pub struct SfmApp {
    ui_state: UiState,
    event_bus: EventBus,
    chat: ChatSession,
    auth: AuthService,
    workspace: WorkspaceSession,
    credentials: CredentialStore,
    generator: Rc<dyn GenerativeTextPort>,
    extractor: Rc<dyn DocumentTextPort>,
    /// Stored API key, filled once by the startup load
    loaded_key: Rc<RefCell<Option<String>>>,
    expired_toasts: Rc<RefCell<Vec<ToastId>>>,
    last_hash: String,
    first_frame: bool,
}

impl SfmApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let event_bus = EventBus::new();

        let storage = open_storage(&config.storage.backend);
        let credentials =
            CredentialStore::new(storage.clone(), config.storage.credential_key.clone());
        let identity = Rc::new(FirebaseIdentity::new(
            config.identity.clone(),
            storage.clone(),
            config.storage.session_key.clone(),
        ));

        let store = Rc::new(RefCell::new(ConversationStore::new()));
        let chat = ChatSession::new(store, credentials.clone(), event_bus.clone());
        let auth = AuthService::new(identity, event_bus.clone());
        let workspace = WorkspaceSession::new(credentials.clone(), event_bus.clone());

        let generator: Rc<dyn GenerativeTextPort> =
            Rc::new(GeminiProvider::new(config.gemini.clone()));
        let extractor: Rc<dyn DocumentTextPort> = Rc::new(PdfTextExtractor::new());

        let last_hash = current_hash();
        let app = Self {
            ui_state: UiState::new(Route::from_hash(&last_hash)),
            event_bus,
            chat,
            auth,
            workspace,
            credentials,
            generator,
            extractor,
            loaded_key: Rc::new(RefCell::new(None)),
            expired_toasts: Rc::new(RefCell::new(Vec::new())),
            last_hash,
            first_frame: true,
        };

        app.restore_session(&cc.egui_ctx);
        app.load_credential(&cc.egui_ctx);
        log::info!("Using model {}", config.gemini.model);

        app
    }

    /// Reload a persisted sign-in (async)
    fn restore_session(&self, ctx: &egui::Context) {
        let auth = self.auth.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            auth.restore().await;
            ctx.request_repaint();
        });
    }

    /// Read the stored API key into the settings form (async)
    fn load_credential(&self, ctx: &egui::Context) {
        let credentials = self.credentials.clone();
        let event_bus = self.event_bus.clone();
        let slot = self.loaded_key.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let key = match credentials.load().await {
                Ok(key) => key,
                Err(e) => {
                    log::warn!("Could not read stored API key: {}", e);
                    None
                }
            };
            event_bus.emit(AppEvent::CredentialChanged { configured: key.is_some() });
            *slot.borrow_mut() = key;
            ctx.request_repaint();
        });
    }

    /// Follow back/forward navigation and keep the hash in step with the
    /// current route.
    fn sync_hash(&mut self) {
        let hash = current_hash();
        if hash != self.last_hash {
            self.last_hash = hash;
            self.ui_state.navigate(Route::from_hash(&self.last_hash));
            return;
        }
        if Route::from_hash(&hash) != self.ui_state.route {
            let path = self.ui_state.route.path();
            if let Err(e) = gloo_utils::window().location().set_hash(&path) {
                log::error!("Could not update location hash: {:?}", e);
            }
            self.last_hash = format!("#{}", path);
        }
    }

    fn schedule_toast_expiry(&mut self, ctx: &egui::Context) {
        for id in self.ui_state.take_new_toasts() {
            let expired = self.expired_toasts.clone();
            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                expired.borrow_mut().push(id);
                ctx.request_repaint();
            });
        }
        let expired: Vec<ToastId> = self.expired_toasts.borrow_mut().drain(..).collect();
        for id in expired {
            self.ui_state.dismiss_toast(id);
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let route = self.ui_state.route;
        if route.requires_auth() && !self.ui_state.is_signed_in() {
            let feature = if route == Route::Chat { "the chat feature" } else { "settings" };
            return auth::auth_required(ui, feature, self.ui_state.auth_resolved)
                .map(PageAction::Navigate);
        }

        match route {
            Route::Chat => {
                let store = self.chat.store().clone();
                let store = store.borrow();
                chat::chat_page(ui, &mut self.ui_state, &store).map(PageAction::Chat)
            }
            other => ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match other {
                    Route::Home => home::home_page(ui).map(PageAction::Navigate),
                    Route::About => {
                        about::about_page(ui);
                        None
                    }
                    Route::Instructions => {
                        instructions::instructions_page(ui).map(PageAction::Navigate)
                    }
                    Route::Contact => {
                        contact::contact_page(ui, &mut self.ui_state);
                        None
                    }
                    Route::Settings => settings::settings_page(ui, &mut self.ui_state)
                        .map(PageAction::Settings),
                    Route::Login => {
                        auth::login_page(ui, &mut self.ui_state).map(PageAction::Auth)
                    }
                    Route::SignUp => {
                        auth::signup_page(ui, &mut self.ui_state).map(PageAction::Auth)
                    }
                    Route::Workspace(mode) => {
                        workspace::workspace_page(ui, &mut self.ui_state, mode)
                            .map(PageAction::Workspace)
                    }
                    Route::Chat => None,
                })
                .inner,
        }
    }
}

impl eframe::App for SfmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the services
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if let Some(key) = self.loaded_key.borrow_mut().take() {
            self.ui_state.settings.api_key = key;
        }

        let chat_busy = self.chat.is_busy();
        let workspace_busy = self.workspace.is_busy();
        self.ui_state.sync_busy(chat_busy, workspace_busy);
        if chat_busy || workspace_busy || self.auth.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        let nav = TopBottomPanel::top("navbar")
            .frame(egui::Frame::default().fill(theme::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| navbar::navbar(ui, &self.ui_state))
            .inner;
        match nav {
            Some(NavAction::Navigate(route)) => self.ui_state.navigate(route),
            Some(NavAction::SignOut) => self.dispatch_sign_out(ctx),
            None => {}
        }

        // ── Footer ───────────────────────────────────────────
        if self.ui_state.route != Route::Chat {
            TopBottomPanel::bottom("footer").show(ctx, footer::footer);
        }

        // ── Main content ─────────────────────────────────────
        let action = CentralPanel::default()
            .show(ctx, |ui| self.render_page(ui))
            .inner;
        if let Some(action) = action {
            self.handle(action, ctx);
        }

        // ── Toasts ───────────────────────────────────────────
        if let Some(id) = toast::toasts(ctx, &self.ui_state) {
            self.ui_state.dismiss_toast(id);
        }
        self.schedule_toast_expiry(ctx);

        self.sync_hash();
    }
}

impl SfmApp {
    fn handle(&mut self, action: PageAction, ctx: &egui::Context) {
        match action {
            PageAction::Navigate(route) => self.ui_state.navigate(route),

            PageAction::Chat(ChatAction::Send(text)) => self.dispatch_message(text, ctx),
            PageAction::Chat(ChatAction::UploadPdf) => self.dispatch_upload(ctx),
            PageAction::Chat(ChatAction::NewChat) => {
                self.chat.new_conversation();
            }
            PageAction::Chat(ChatAction::Select(id)) => {
                self.chat.select_conversation(id);
            }
            PageAction::Chat(ChatAction::OpenSettings) => {
                self.ui_state.navigate(Route::Settings)
            }

            PageAction::Settings(SettingsAction::Save(key)) => self.dispatch_save_key(key, ctx),
            PageAction::Settings(SettingsAction::Remove) => self.dispatch_remove_key(ctx),
            PageAction::Settings(SettingsAction::Navigate(route)) => self.ui_state.navigate(route),

            PageAction::Auth(AuthAction::SignIn { email, password }) => {
                let auth = self.auth.clone();
                spawn_and_repaint(ctx, async move {
                    let _ = auth.sign_in(&email, &password).await;
                });
            }
            PageAction::Auth(AuthAction::SignUp { email, password, confirm }) => {
                let auth = self.auth.clone();
                spawn_and_repaint(ctx, async move {
                    let _ = auth.sign_up(&email, &password, &confirm).await;
                });
            }
            PageAction::Auth(AuthAction::Navigate(route)) => self.ui_state.navigate(route),

            PageAction::Workspace(WorkspaceAction::Back) => self.ui_state.navigate(Route::Home),
            PageAction::Workspace(WorkspaceAction::Process) => self.dispatch_process(ctx),
            PageAction::Workspace(WorkspaceAction::Copy) => {
                ctx.copy_text(self.ui_state.workspace.output.clone());
                self.ui_state.push_toast(Notification::info("Copied to clipboard", ""));
            }
            PageAction::Workspace(WorkspaceAction::Download) => {
                let Route::Workspace(mode) = self.ui_state.route else {
                    return;
                };
                let filename = format!("sf-manager-{}-analysis.txt", mode.slug());
                if let Err(e) = download_text(&filename, &self.ui_state.workspace.output) {
                    log::error!("Download failed: {}", e);
                    self.ui_state.push_toast(Notification::destructive(
                        "Download Failed",
                        e.user_message(),
                    ));
                }
            }
        }
    }

    /// Run a chat turn (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let generator = self.generator.clone();
        spawn_and_repaint(ctx, async move {
            if let Err(e) = chat.send_message(&text, generator.as_ref()).await {
                log_rejected("Chat turn", &e);
            }
        });
    }

    /// Pick a PDF and summarise it in the active conversation (async)
    fn dispatch_upload(&self, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let generator = self.generator.clone();
        let extractor = self.extractor.clone();
        spawn_and_repaint(ctx, async move {
            let file = match pick_file(PDF_ACCEPT).await {
                Ok(Some(file)) => file,
                Ok(None) => return,
                Err(e) => {
                    log::error!("File picker failed: {}", e);
                    return;
                }
            };
            if let Err(e) = chat
                .upload_document(file, generator.as_ref(), extractor.as_ref())
                .await
            {
                log_rejected("PDF upload", &e);
            }
        });
    }

    fn dispatch_process(&self, ctx: &egui::Context) {
        let Route::Workspace(mode) = self.ui_state.route else {
            return;
        };
        let complexity = self.ui_state.workspace.complexity;
        let input = self.ui_state.workspace.input.clone();
        let workspace = self.workspace.clone();
        let generator = self.generator.clone();
        spawn_and_repaint(ctx, async move {
            if let Err(e) = workspace
                .process(mode, complexity, &input, generator.as_ref())
                .await
            {
                log_rejected("Workspace", &e);
            }
        });
    }

    fn dispatch_save_key(&self, key: String, ctx: &egui::Context) {
        let credentials = self.credentials.clone();
        let event_bus = self.event_bus.clone();
        spawn_and_repaint(ctx, async move {
            match credentials.save(&key).await {
                Ok(()) => {
                    event_bus.emit(AppEvent::CredentialChanged { configured: true });
                    event_bus.notify(Notification::info(
                        "API Key Saved",
                        "Your Gemini API key has been saved successfully.",
                    ));
                }
                Err(e) => {
                    log::warn!("Saving API key failed: {}", e);
                    event_bus.notify(Notification::destructive("Error", e.user_message()));
                }
            }
        });
    }

    fn dispatch_remove_key(&self, ctx: &egui::Context) {
        let credentials = self.credentials.clone();
        let event_bus = self.event_bus.clone();
        spawn_and_repaint(ctx, async move {
            match credentials.remove().await {
                Ok(()) => {
                    event_bus.emit(AppEvent::CredentialChanged { configured: false });
                    event_bus.notify(Notification::info(
                        "API Key Removed",
                        "Your API key has been removed from local storage.",
                    ));
                }
                Err(e) => {
                    log::error!("Removing API key failed: {}", e);
                    event_bus.notify(Notification::destructive("Error", e.user_message()));
                }
            }
        });
    }

    fn dispatch_sign_out(&self, ctx: &egui::Context) {
        let auth = self.auth.clone();
        spawn_and_repaint(ctx, async move {
            auth.sign_out().await;
        });
    }
}

/// Run a future on the browser event loop and repaint when it settles
fn spawn_and_repaint(ctx: &egui::Context, fut: impl std::future::Future<Output = ()> + 'static) {
    let ctx = ctx.clone();
    wasm_bindgen_futures::spawn_local(async move {
        fut.await;
        ctx.request_repaint();
    });
}

/// Rejections the user was already told about are not errors
fn log_rejected(what: &str, e: &AppError) {
    match e {
        AppError::InvalidInput(_) | AppError::MissingCredential | AppError::Busy => {
            log::debug!("{} rejected: {}", what, e)
        }
        _ => log::warn!("{} failed: {}", what, e),
    }
}

fn current_hash() -> String {
    gloo_utils::window().location().hash().unwrap_or_default()
}
