//! Project document management
//!
//! Handles the read-modify-write cycles over the three project documents:
//! - Initialization from templates
//! - Prompt regeneration from extracted fields
//! - In-place state and phase updates

mod manager;
pub mod patch;

pub use manager::DocumentStateManager;
