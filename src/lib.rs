//! `CartBuddy` - A shopping cart screen served as a Discord bot
//!
//! This crate renders a shopping cart as an interactive Discord message: line items
//! with formatted unit prices and subtotals, a grand total, and buttons to change
//! quantities, remove items or check out. The cart logic in [`crate::core`] is
//! framework-agnostic; the bot layer only renders it and forwards clicks.

#![deny(
    unsafe_code,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::clone_on_ref_ptr,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::unwrap_used,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

// `missing_docs` stays a warning: `poise::command` expands to undocumented items.

/// Discord bot interface - commands, button handlers, rendering and bot context
pub mod bot;
/// Configuration management for settings file and environment
pub mod config;
/// Core cart logic - framework-agnostic display model, formatting, store and view
pub mod core;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
