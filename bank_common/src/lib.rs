pub mod account;
pub mod cli;
pub mod errors;
pub mod money;
pub mod validation;

pub use account::Account;
pub use errors::{AccountingError, CliError, InputError};
