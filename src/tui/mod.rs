pub mod update;
pub mod view;

// Re-exports for convenience
pub use update::*;
pub use view::*;
