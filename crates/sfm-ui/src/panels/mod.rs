pub mod about;
pub mod auth;
pub mod chat;
pub mod contact;
pub mod footer;
pub mod home;
pub mod instructions;
pub mod navbar;
pub mod settings;
pub mod toast;
pub mod workspace;
