pub mod create_account;
pub mod delete_account;
pub mod deposit;
pub mod top_up;
pub mod transfer;
pub mod withdrawal;
