use eyre::{Report, eyre};
use paygate_primitives::error::{ApiError, GatewayError};
use paygate_primitives::models::app_state::{DEFAULT_RECIPIENT_NAME, PaystackInfo};
use paygate_primitives::models::clients_dto::{
    ChargeCardRequest, CreateTransferRecipientRequest, CreateTransferRecipientResponse,
    InitializeDepositRequest, SubmitOtpRequest,
};
use paygate_primitives::models::enum_types::Operation;
use paygate_primitives::models::withdrawal_dto::WithdrawRequest;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use validator::Validate;

const LOG_SNIPPET_LEN: usize = 200;

/// Thin wrapper over the Paystack REST API. Responses are handed back as raw JSON text.
#[derive(Clone)]
pub struct PaystackClient {
    http: Client,
    base_url: Url,
    secret_key: SecretString,
    recipient_name: String,
    timeout: Option<Duration>,
}

impl PaystackClient {
    pub fn new(http: Client, base_url: &str, secret_key: SecretString) -> Result<Self, Report> {
        let base_url =
            Url::parse(base_url).map_err(|e| eyre!("Invalid Paystack base URL: {}", e))?;

        if base_url.cannot_be_a_base() {
            return Err(eyre!("Paystack base URL cannot carry a path: {}", base_url));
        }

        Ok(Self {
            http,
            base_url,
            secret_key,
            recipient_name: DEFAULT_RECIPIENT_NAME.into(),
            timeout: None,
        })
    }

    pub fn from_config(http: Client, config: &PaystackInfo) -> Result<Self, Report> {
        let mut client = Self::new(
            http,
            &config.paystack_api_url,
            config.paystack_secret_key.clone(),
        )?;
        client.recipient_name = config.recipient_name.clone();
        Ok(client)
    }

    /// Every request made through the returned client is abandoned once `timeout` elapses.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub async fn initialize_deposit(&self, email: &str, amount: i64) -> Result<String, ApiError> {
        let payload = InitializeDepositRequest { email, amount };
        payload.validate()?;

        info!(amount, "Initializing Paystack deposit");

        Ok(self.post(Operation::InitializeDeposit, &payload).await?)
    }

    pub async fn withdraw(
        &self,
        account_number: &str,
        bank_code: &str,
        amount: i64,
    ) -> Result<String, ApiError> {
        self.withdraw_to(&self.recipient_name, account_number, bank_code, amount)
            .await
    }

    /// Creates a fresh transfer recipient, then pays `amount` into it from the balance.
    ///
    /// A failed transfer leaves the recipient behind on the gateway; nothing is rolled back.
    pub async fn withdraw_to(
        &self,
        name: &str,
        account_number: &str,
        bank_code: &str,
        amount: i64,
    ) -> Result<String, ApiError> {
        let req = WithdrawRequest {
            name,
            account_number,
            bank_code,
            amount,
        };
        req.validate()?;

        info!(amount, bank_code, "Starting Paystack withdrawal");

        let recipient_code = self.create_transfer_recipient(req.recipient()).await?;

        let transfer = req.transfer(&recipient_code);
        match self.post(Operation::InitiateTransfer, &transfer).await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!(
                    recipient_code = %recipient_code,
                    "Transfer failed after recipient was created; recipient left in place"
                );
                Err(e.into())
            }
        }
    }

    pub async fn create_transfer_recipient(
        &self,
        payload: CreateTransferRecipientRequest<'_>,
    ) -> Result<String, GatewayError> {
        let operation = Operation::CreateTransferRecipient;
        let body = self.post(operation, &payload).await?;

        let parsed: CreateTransferRecipientResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(
                    error = %e,
                    response = %snippet(&body),
                    "Invalid JSON from Paystack"
                );
                return Err(GatewayError::UnexpectedResponse {
                    operation,
                    reason: format!("invalid JSON in response: {}", e),
                    body,
                });
            }
        };

        match parsed
            .data
            .and_then(|d| d.recipient_code)
            .filter(|code| !code.is_empty())
        {
            Some(code) => Ok(code),
            None => {
                warn!(
                    paystack_message = %parsed.message,
                    "Paystack response has no recipient_code"
                );
                Err(GatewayError::UnexpectedResponse {
                    operation,
                    reason: "missing recipient_code".into(),
                    body,
                })
            }
        }
    }

    pub async fn charge_card<C: Serialize>(
        &self,
        email: &str,
        amount: i64,
        card: &C,
    ) -> Result<String, ApiError> {
        let payload = ChargeCardRequest {
            email,
            amount,
            card,
        };
        payload.validate()?;

        info!(amount, "Charging card through Paystack");

        Ok(self.post(Operation::ChargeCard, &payload).await?)
    }

    pub async fn submit_otp(&self, reference: &str, otp: &str) -> Result<String, ApiError> {
        let payload = SubmitOtpRequest { reference, otp };

        info!(reference, "Submitting charge OTP");

        Ok(self.post(Operation::SubmitOtp, &payload).await?)
    }

    /// Sends one JSON POST and reads the body to completion; the response is
    /// consumed here whatever the outcome.
    async fn post<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        payload: &B,
    ) -> Result<String, GatewayError> {
        let url = self.endpoint(operation);

        let mut request = self
            .http
            .post(url)
            .bearer_auth(self.secret_key.expose_secret())
            .json(payload);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await.map_err(|source| {
            error!(%operation, error = %source, "Failed to reach Paystack");
            GatewayError::Unreachable { operation, source }
        })?;

        let status = resp.status();

        let body = match resp.text().await {
            Ok(body) => body,
            Err(source) if status.is_success() => {
                error!(%operation, error = %source, "Failed to read Paystack response");
                return Err(GatewayError::Unreachable { operation, source });
            }
            // the status already says the gateway refused; keep it over the read error
            Err(e) => {
                warn!(%operation, error = %e, "Failed to read rejected Paystack response");
                String::new()
            }
        };

        if !status.is_success() {
            warn!(
                %operation,
                http_status = status.as_u16(),
                response = %snippet(&body),
                "Paystack request failed"
            );
            return Err(GatewayError::Rejected {
                operation,
                status,
                body,
            });
        }

        debug!(%operation, http_status = status.as_u16(), "Paystack request succeeded");

        Ok(body)
    }

    fn endpoint(&self, operation: Operation) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(operation.path().split('/'));
        }
        url
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(LOG_SNIPPET_LEN).collect()
}
