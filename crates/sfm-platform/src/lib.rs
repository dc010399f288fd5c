//! Browser adapters for the `sfm-core` ports.
//!
//! Everything here talks to the outside world: the Gemini and Firebase REST
//! APIs over `fetch`, `localStorage`, the PDF parser and the DOM helpers
//! for picking and downloading files.

pub mod browser;
pub mod identity;
pub mod llm;
pub mod pdf;
pub mod storage;
