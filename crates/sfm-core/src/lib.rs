//! SF Manager core — conversation bookkeeping and the services that sit
//! between the view and the external collaborators.

pub mod auth;
mod busy;
pub mod chat;
pub mod credentials;
pub mod event_bus;
pub mod ports;
pub mod store;
pub mod workspace;
