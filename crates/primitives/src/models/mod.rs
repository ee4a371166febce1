pub mod app_state;
pub mod dtos;
pub mod enum_types;

// Re-export commonly used types
pub use app_state::*;
pub use dtos::*;
pub use enum_types::*;
