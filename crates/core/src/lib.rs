pub mod app_state;
pub mod clients;

pub use app_state::AppState;
pub use clients::PaystackClient;
