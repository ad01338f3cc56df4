pub mod input;
pub mod repo;

// Re-exports for convenience
pub use input::*;
pub use repo::*;
