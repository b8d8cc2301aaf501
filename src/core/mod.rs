//! # Core Application Logic
//!
//! This module contains shoplist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • items  (list store)  │
//!                    │  • filter (search)      │
//!                    │  • nav    (routes)      │
//!                    │  • App + update()       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`items`]: `ItemStore`, the append-only shopping list
//! - [`filter`]: case-insensitive, order-preserving search
//! - [`nav`]: routes, back stack and drawer
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: TOML config with env and CLI overrides (the one module here that reads files)

pub mod action;
pub mod config;
pub mod filter;
pub mod items;
pub mod nav;
pub mod state;
