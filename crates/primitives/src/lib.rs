pub mod error;
pub mod models;
pub mod utility;

pub use error::{ApiError, GatewayError};
