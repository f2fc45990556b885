//! Discord command implementations organized by category.

/// Cart command
pub mod cart;

/// General utility commands
pub mod general;

// Export commands
pub use cart::*;
pub use general::*;
