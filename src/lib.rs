//! Ben Lewis Studios landing page.
//!
//! Re-exports the page modules so integration tests under `tests/` can
//! mount components; the binary entry point lives in `main.rs`.

pub mod catalog;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
