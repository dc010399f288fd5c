//! SF Manager UI — egui pages, routing and the state they render from.
//!
//! Panels never perform I/O. Each returns an action enum and the app
//! crate turns actions into service calls.

pub mod panels;
pub mod route;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
