use reqwest::Client;
use std::sync::Arc;

use crate::clients::PaystackClient;
use eyre::Result;
pub use paygate_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub paystack: PaystackClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder()
            .timeout(config.paystack_details.paystack_timeout)
            .build()?;

        let paystack = PaystackClient::from_config(http, &config.paystack_details)?;

        Ok(Arc::new(Self { paystack }))
    }
}
