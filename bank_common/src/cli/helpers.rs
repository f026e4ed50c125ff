//! Helper functions that are common to the interactive front ends
//!
//! They read from any [`BufRead`] and write to any [`Write`],
//! so the same code drives a terminal session and an in-memory test session.

use crate::cli::constants::*;
use crate::errors::{CliError, InputError};
use crate::validation::parse_amount;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// **Contains the main menu, one line per option.**
///
/// Wrapped by `print_menu()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added option.
pub fn menu_contents() -> String {
    format!(
        "\n{MENU_RULE}\n{MENU_TITLE}\n{MENU_RULE}\n\
         {DEPOSIT}. Deposit Money\n\
         {WITHDRAW}. Withdraw Money\n\
         {CHECK_BALANCE}. Check Balance\n\
         {ACCOUNT_INFO}. Display Account Information\n\
         {EXIT}. Exit\n\
         {MENU_RULE}"
    )
}

/// **Prints the main menu.**
pub fn print_menu(output: &mut impl Write) -> Result<(), CliError> {
    writeln!(output, "{}", menu_contents())?;
    Ok(())
}

/// **Reads one line of input after printing `label`.**
///
/// The returned line is trimmed.
///
/// # Errors
/// - End of input or an interrupted read, `CliError::Interrupted`;
/// - Any other failure to write the label or read the line, `CliError::Io`.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, CliError> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(CliError::Interrupted),
        Ok(_) => Ok(line.trim().to_owned()),
        Err(err) => Err(CliError::from_read(err)),
    }
}

/// **Prompts with `label` until `validate` accepts the line.**
///
/// Every rejection is printed as "Error: <reason> Please try again."
/// before prompting again.
pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    label: &str,
    validate: F,
) -> Result<T, CliError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let line = read_line(input, output, label)?;
        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(output, "Error: {err} Please try again.")?,
        }
    }
}

/// **Prompts with `prompt` until a non-negative number is entered.**
///
/// Zero is accepted; deposit and withdrawal apply their own rules.
/// Never returns an invalid amount: it either returns a valid one
/// or fails because the session itself can't go on.
pub fn get_valid_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Decimal, CliError> {
    loop {
        let line = read_line(input, output, prompt)?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(err) => {
                log::debug!("Rejected amount {:?}: {}", line, err);
                writeln!(output, "Error: {err}")?;
            }
        }
    }
}
