use crate::money::format_money;
use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// **An application-specific error type for account operations**
///
/// Every variant is an invalid argument to one of the [`crate::Account`] operations.
/// The rejected amount is carried along so callers can log it.
#[derive(Debug, Error, PartialEq)]
pub enum AccountingError {
    #[error("Initial balance cannot be negative.")]
    NegativeInitialBalance(Decimal),

    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit(Decimal),

    #[error("Deposit would overflow the account balance.")]
    AccountOverFunded(Decimal),

    #[error("Withdrawal amount must be positive.")]
    NonPositiveWithdrawal(Decimal),

    #[error("Withdrawal amount must be a whole number. ATMs only dispense bills.")]
    FractionalWithdrawal(Decimal),

    #[error("Insufficient funds. Available balance: {}", format_money(.available))]
    AccountUnderFunded { requested: Decimal, available: Decimal },
}

/// **Rejections of raw user input at the collection prompts**
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Name should only contain letters and spaces.")]
    NameNotAlphabetic,

    #[error("Account number cannot be empty.")]
    EmptyAccountNumber,

    #[error("Account number should only contain numbers.")]
    AccountNumberNotNumeric,

    #[error("Invalid input. Please enter a valid number.")]
    InvalidNumber,

    #[error("Amount cannot be negative. Please try again.")]
    NegativeAmount,
}

/// **Failures of the interactive session itself**
///
/// `Interrupted` ends the session gracefully;
/// `Io` is reported to the user and the session goes on.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("input interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Classifies a read failure: an interrupted read ends the session like end of input does.
    pub fn from_read(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => CliError::Interrupted,
            _ => CliError::Io(err),
        }
    }
}
