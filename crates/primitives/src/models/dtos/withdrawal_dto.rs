use super::clients_dto::{
    CreateTransferRecipientRequest, InitiateTransferRequest, RECIPIENT_TYPE_NUBAN,
    TRANSFER_SOURCE_BALANCE,
};
use validator::Validate;

/// A payout to a bank account: one recipient creation followed by one transfer.
#[derive(Debug, Clone, Validate)]
pub struct WithdrawRequest<'a> {
    pub name: &'a str,
    pub account_number: &'a str,
    pub bank_code: &'a str,
    #[validate(range(min = 1, message = "Amount must be greater than zero."))]
    pub amount: i64,
}

impl<'a> WithdrawRequest<'a> {
    pub fn recipient(&self) -> CreateTransferRecipientRequest<'a> {
        CreateTransferRecipientRequest {
            recipient_type: RECIPIENT_TYPE_NUBAN,
            name: self.name,
            account_number: self.account_number,
            bank_code: self.bank_code,
        }
    }

    pub fn transfer<'r>(&self, recipient_code: &'r str) -> InitiateTransferRequest<'r> {
        InitiateTransferRequest {
            source: TRANSFER_SOURCE_BALANCE,
            amount: self.amount,
            recipient: recipient_code,
        }
    }
}
