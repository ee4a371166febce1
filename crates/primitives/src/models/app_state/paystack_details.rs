use eyre::eyre;
use eyre::Report;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

pub const DEFAULT_PAYSTACK_API_URL: &str = "https://api.paystack.co";
pub const DEFAULT_RECIPIENT_NAME: &str = "Recipient Name";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct PaystackInfo {
    pub paystack_secret_key: SecretString,
    pub paystack_api_url: String,
    pub paystack_timeout: Duration,
    /// Name given to transfer recipients when the caller does not supply one.
    pub recipient_name: String,
}

impl PaystackInfo {
    pub fn new() -> Result<Self, Report> {
        let timeout_secs = match env::var("PAYSTACK_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| eyre!("PAYSTACK_TIMEOUT_SECS must be a whole number of seconds: {}", e))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            return Err(eyre!("PAYSTACK_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            paystack_secret_key: SecretString::new(
                env::var("PAYSTACK_SECRET_KEY")
                    .map_err(|_| eyre!("PAYSTACK_SECRET_KEY must be set"))?
                    .into(),
            ),
            paystack_api_url: env::var("PAYSTACK_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYSTACK_API_URL.into()),
            paystack_timeout: Duration::from_secs(timeout_secs),
            recipient_name: env::var("PAYSTACK_RECIPIENT_NAME")
                .unwrap_or_else(|_| DEFAULT_RECIPIENT_NAME.into()),
        })
    }

    pub fn with_secret(secret_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            paystack_secret_key: SecretString::from(secret_key.into()),
            paystack_api_url: api_url.into(),
            paystack_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            recipient_name: DEFAULT_RECIPIENT_NAME.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    fn clear() {
        for key in [
            "PAYSTACK_SECRET_KEY",
            "PAYSTACK_API_URL",
            "PAYSTACK_TIMEOUT_SECS",
            "PAYSTACK_RECIPIENT_NAME",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn secret_key_is_required() {
        clear();
        let err = PaystackInfo::new().unwrap_err();
        assert!(err.to_string().contains("PAYSTACK_SECRET_KEY"));
    }

    #[test]
    #[serial]
    fn defaults_apply() {
        clear();
        unsafe { env::set_var("PAYSTACK_SECRET_KEY", "sk_test_placeholder") };

        let info = PaystackInfo::new().unwrap();
        assert_eq!(info.paystack_api_url, DEFAULT_PAYSTACK_API_URL);
        assert_eq!(info.paystack_timeout, Duration::from_secs(30));
        assert_eq!(info.recipient_name, DEFAULT_RECIPIENT_NAME);
        assert_eq!(info.paystack_secret_key.expose_secret(), "sk_test_placeholder");
        assert!(!format!("{:?}", info).contains("sk_test_placeholder"));
        clear();
    }

    #[test]
    #[serial]
    fn bad_timeout_is_reported() {
        clear();
        unsafe {
            env::set_var("PAYSTACK_SECRET_KEY", "sk_test_placeholder");
            env::set_var("PAYSTACK_TIMEOUT_SECS", "soon");
        }

        assert!(PaystackInfo::new().is_err());
        clear();
    }

    #[test]
    #[serial]
    fn zero_timeout_is_rejected() {
        clear();
        unsafe {
            env::set_var("PAYSTACK_SECRET_KEY", "sk_test_placeholder");
            env::set_var("PAYSTACK_TIMEOUT_SECS", "0");
        }

        let err = PaystackInfo::new().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
        clear();
    }
}
