use strum::{Display, EnumIter};

/// Every call this workspace makes against the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Operation {
    #[strum(serialize = "initialize deposit")]
    InitializeDeposit,
    #[strum(serialize = "create transfer recipient")]
    CreateTransferRecipient,
    #[strum(serialize = "initiate transfer")]
    InitiateTransfer,
    #[strum(serialize = "charge card")]
    ChargeCard,
    #[strum(serialize = "submit OTP")]
    SubmitOtp,
}

impl Operation {
    pub fn path(self) -> &'static str {
        match self {
            Operation::InitializeDeposit => "transaction/initialize",
            Operation::CreateTransferRecipient => "transferrecipient",
            Operation::InitiateTransfer => "transfer",
            Operation::ChargeCard => "charge",
            Operation::SubmitOtp => "charge/submit_otp",
        }
    }
}
