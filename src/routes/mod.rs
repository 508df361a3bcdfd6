//! REST API routes

pub mod games;

// Re-export all route handlers
pub use games::*;
