//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not slash
//! commands, namely the cart's button clicks.

/// Cart button custom ids and click dispatch
pub mod buttons;
