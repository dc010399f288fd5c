//! Hash-based routes (`#/chat`, `#/workspace/research`, ...).

use sfm_types::mode::AiMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Chat,
    Settings,
    Instructions,
    Contact,
    Login,
    SignUp,
    Workspace(AiMode),
}

impl Route {
    /// Path without the leading `#`
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Chat => "/chat".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Instructions => "/instructions".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Workspace(mode) => format!("/workspace/{}", mode.slug()),
        }
    }

    /// Parse a location hash or path. Unknown paths land on Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);
        match path {
            "" => Route::Home,
            "about" => Route::About,
            "chat" => Route::Chat,
            "settings" => Route::Settings,
            "instructions" => Route::Instructions,
            "contact" => Route::Contact,
            "login" => Route::Login,
            "signup" => Route::SignUp,
            other => match other.strip_prefix("workspace/") {
                Some(slug) => Route::Workspace(AiMode::from_slug(slug)),
                None => Route::Home,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Chat => "Chat",
            Route::Settings => "Settings",
            Route::Instructions => "Instructions",
            Route::Contact => "Contact",
            Route::Login => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Workspace(mode) => mode.title(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Chat | Route::Settings)
    }

    /// Links in the navbar's centre section. Chat is only offered to
    /// signed-in users.
    pub fn nav_links(signed_in: bool) -> Vec<Route> {
        let mut links = vec![Route::Home, Route::About];
        if signed_in {
            links.push(Route::Chat);
        }
        links.push(Route::Instructions);
        links.push(Route::Contact);
        links
    }
}
