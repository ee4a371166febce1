use eyre::Report;
use paygate_core::app_state::AppState;
use paygate_primitives::models::card_dto::CardDetails;
use std::env;
use tracing::{error, info};

pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

/// Sample inputs for the walkthrough, each overridable through a `PAYGATE_DEMO_*` variable.
#[derive(Debug, Clone)]
pub struct DemoInputs {
    pub email: String,
    pub deposit_amount: i64,
    pub account_number: String,
    pub bank_code: String,
    pub withdraw_amount: i64,
    pub charge_amount: i64,
    pub card: CardDetails,
    pub otp_reference: String,
    pub otp: String,
}

impl DemoInputs {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            email: var_or("PAYGATE_DEMO_EMAIL", "customer@example.com"),
            deposit_amount: var_or("PAYGATE_DEMO_DEPOSIT_AMOUNT", "50000").parse()?,
            account_number: var_or("PAYGATE_DEMO_ACCOUNT_NUMBER", "1234567890"),
            bank_code: var_or("PAYGATE_DEMO_BANK_CODE", "058"),
            withdraw_amount: var_or("PAYGATE_DEMO_WITHDRAW_AMOUNT", "100000").parse()?,
            charge_amount: var_or("PAYGATE_DEMO_CHARGE_AMOUNT", "50000").parse()?,
            card: CardDetails::new(
                var_or("PAYGATE_DEMO_CARD_NUMBER", "4084084084084081"),
                var_or("PAYGATE_DEMO_CARD_CVV", "408"),
                var_or("PAYGATE_DEMO_CARD_EXPIRY_MONTH", "12"),
                var_or("PAYGATE_DEMO_CARD_EXPIRY_YEAR", "31"),
            ),
            otp_reference: var_or("PAYGATE_DEMO_OTP_REFERENCE", "transaction_reference"),
            otp: var_or("PAYGATE_DEMO_OTP", "123456"),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Runs every gateway operation once. A failed step is logged and the next one still runs.
/// Returns the number of steps that failed.
pub async fn run_demo(state: &AppState, inputs: &DemoInputs) -> usize {
    let paystack = &state.paystack;

    let outcomes = [
        (
            "deposit",
            paystack
                .initialize_deposit(&inputs.email, inputs.deposit_amount)
                .await,
        ),
        (
            "withdrawal",
            paystack
                .withdraw(&inputs.account_number, &inputs.bank_code, inputs.withdraw_amount)
                .await,
        ),
        (
            "charge",
            paystack
                .charge_card(&inputs.email, inputs.charge_amount, &inputs.card)
                .await,
        ),
        (
            "otp",
            paystack
                .submit_otp(&inputs.otp_reference, &inputs.otp)
                .await,
        ),
    ];

    let mut failures = 0;
    for (step, outcome) in outcomes {
        match outcome {
            Ok(body) => info!(step, response = %body, "Gateway call succeeded"),
            Err(e) => {
                failures += 1;
                error!(step, error = %e, "Gateway call failed");
            }
        }
    }
    failures
}
