//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a catalog source.

pub mod config;
pub mod feed;
pub mod show;
pub mod walk;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use feed::execute as feed;
pub use show::execute as show;
pub use walk::execute as walk;
