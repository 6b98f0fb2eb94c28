/// A request that is malformed or not allowed: bad amounts, duplicate or
/// missing account ids.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit,
    #[error("Withdraw amount must be positive.")]
    NonPositiveWithdrawal,
    #[error("Transfer amount must be positive.")]
    NonPositiveTransfer,
    #[error("Top-up amount must be positive.")]
    NonPositiveTopUp,
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Amount is too large.")]
    AmountOverflow,
    #[error("Account already exists.")]
    AccountExists,
    #[error("Account does not exist.")]
    AccountMissing,
    #[error("One or both accounts do not exist.")]
    TransferAccountMissing,
}

/// A request that is well formed but conflicts with the current balances.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Not enough funds for this withdrawal.")]
    InsufficientFunds,
}

/// Every failure a ledger operation can report.
///
/// `KeyNotFound` is kept apart from [`InputError`]: it is what a direct
/// lookup of an unknown account or phone number returns, as opposed to the
/// ledger's own existence checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Transfer,
    KeyNotFound,
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::Input(_) => ErrorKind::Input,
            BankError::Transfer(_) => ErrorKind::Transfer,
            BankError::KeyNotFound(_) => ErrorKind::KeyNotFound,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
