pub mod app_config;
pub mod paystack_details;

pub use app_config::*;
pub use paystack_details::*;
