//! Document store for game records using tokio-postgres

mod error;
mod games;

// Re-export everything
pub use error::*;
pub use games::*;
