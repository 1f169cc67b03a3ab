//! HTTP request handlers for the maintenance API.
//!
//! This module is organized by domain:
//! - `common` - Shared types, query structs, and conversion helpers
//! - `maintenance` - Administrative scheduling endpoints
//! - `status` - Read-only state and banner endpoints

pub mod common;
pub mod maintenance;
pub mod status;

// Re-export all public handler functions for convenience
// Note: common module is internal, used only by sibling modules
pub use maintenance::*;
pub use status::*;
