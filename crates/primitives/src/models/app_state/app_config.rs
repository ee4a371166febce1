use crate::models::app_state::paystack_details::PaystackInfo;
use eyre::Report;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paystack_details: PaystackInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            paystack_details: PaystackInfo::new()?,
        })
    }
}
