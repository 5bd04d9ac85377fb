//! Shared test helpers for E2E tests.
//!
//! Note: We use `helpers/mod.rs` instead of the modern `helpers.rs` + `helpers/` pattern
//! because Cargo auto-discovers top-level `.rs` files in `tests/` as integration tests.

pub mod lsp_client;
pub mod lsp_init;
