use crate::utility::validate_email;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const RECIPIENT_TYPE_NUBAN: &str = "nuban";
pub const TRANSFER_SOURCE_BALANCE: &str = "balance";

#[derive(Debug, Serialize, Validate)]
pub struct InitializeDepositRequest<'a> {
    #[validate(custom(function = "validate_email"))]
    pub email: &'a str,
    #[validate(range(min = 1, message = "Amount must be greater than zero."))]
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateTransferRecipientRequest<'a> {
    #[serde(rename = "type")]
    pub recipient_type: &'static str,
    pub name: &'a str,
    pub account_number: &'a str,
    pub bank_code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InitiateTransferRequest<'a> {
    pub source: &'static str,
    pub amount: i64,
    pub recipient: &'a str,
}

/// `card` is serialized as given, so any object the gateway accepts can be passed.
#[derive(Debug, Serialize, Validate)]
pub struct ChargeCardRequest<'a, C: Serialize> {
    pub email: &'a str,
    #[validate(range(min = 1, message = "Amount must be greater than zero."))]
    pub amount: i64,
    pub card: &'a C,
}

#[derive(Debug, Serialize)]
pub struct SubmitOtpRequest<'a> {
    pub reference: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransferRecipientResponse {
    #[serde(default)]
    pub message: String,
    pub data: Option<RecipientData>,
}

#[derive(Debug, Deserialize)]
pub struct RecipientData {
    pub recipient_code: Option<String>,
}
