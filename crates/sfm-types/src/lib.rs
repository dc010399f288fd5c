pub mod message;
pub mod conversation;
pub mod user;
pub mod document;
pub mod mode;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
