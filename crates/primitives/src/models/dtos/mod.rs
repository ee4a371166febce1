pub mod card_dto;
pub mod clients_dto;
pub mod withdrawal_dto;

pub use card_dto::*;
pub use clients_dto::*;
pub use withdrawal_dto::*;
