//! Pure input rules shared by the prompts.
//!
//! Nothing here does I/O; the prompt helpers call these and decide how to report a rejection.

use crate::errors::InputError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string (after trimming);
/// - Characters other than letters and whitespace.
///
/// Returns the trimmed name.
pub fn validate_holder_name(name: &str) -> Result<&str, InputError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(InputError::NameNotAlphabetic);
    }

    Ok(name)
}

/// **Basic input validation for an account number**
///
/// The number is an opaque identifier, so leading zeros are kept.
/// Only ASCII digits are allowed.
pub fn validate_account_number(number: &str) -> Result<&str, InputError> {
    let number = number.trim();

    if number.is_empty() {
        return Err(InputError::EmptyAccountNumber);
    }
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::AccountNumberNotNumeric);
    }

    Ok(number)
}

/// **Parses a non-negative amount of money**
///
/// Accepts plain decimals (`500.50`) and scientific notation (`1e3`).
/// Zero is accepted; the account operations apply their own rules on top.
pub fn parse_amount(text: &str) -> Result<Decimal, InputError> {
    let text = text.trim();

    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| InputError::InvalidNumber)?;

    let negative = text.starts_with('-');

    if amount.is_zero() {
        // Folds "-0" into a plain zero; anything else that parsed to zero was rounded away.
        if !has_nonzero_digit(text) {
            return Ok(Decimal::ZERO);
        }
        return Err(if negative {
            InputError::NegativeAmount
        } else {
            InputError::InvalidNumber
        });
    }
    if negative || amount.is_sign_negative() {
        return Err(InputError::NegativeAmount);
    }

    Ok(amount)
}

/// Whether the mantissa (the part before any exponent) has a digit other than zero.
fn has_nonzero_digit(text: &str) -> bool {
    text.split(|c| c == 'e' || c == 'E')
        .next()
        .unwrap_or("")
        .chars()
        .any(|c| matches!(c, '1'..='9'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Juan Dela Cruz", "Juan Dela Cruz")]
    #[case("  Maria  ", "Maria")]
    #[case("José Rizal", "José Rizal")]
    fn valid_names_pass(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_holder_name(input), Ok(expected));
    }

    #[rstest]
    #[case("", InputError::EmptyName)]
    #[case("   ", InputError::EmptyName)]
    #[case("R2D2", InputError::NameNotAlphabetic)]
    #[case("Anne-Marie", InputError::NameNotAlphabetic)]
    fn invalid_names_fail(#[case] input: &str, #[case] expected: InputError) {
        assert_eq!(validate_holder_name(input), Err(expected));
    }

    #[rstest]
    #[case("123456", "123456")]
    #[case(" 007 ", "007")]
    fn valid_account_numbers_pass(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_account_number(input), Ok(expected));
    }

    #[rstest]
    #[case("", InputError::EmptyAccountNumber)]
    #[case("12-34", InputError::AccountNumberNotNumeric)]
    #[case("12a4", InputError::AccountNumberNotNumeric)]
    #[case("-123", InputError::AccountNumberNotNumeric)]
    fn invalid_account_numbers_fail(#[case] input: &str, #[case] expected: InputError) {
        assert_eq!(validate_account_number(input), Err(expected));
    }

    #[rstest]
    #[case("1000", dec!(1000))]
    #[case("500.50", dec!(500.50))]
    #[case(" 42 ", dec!(42))]
    #[case("0", dec!(0))]
    #[case("-0", dec!(0))]
    #[case("-0.00", dec!(0))]
    #[case("-0e5", dec!(0))]
    #[case("1e3", dec!(1000))]
    fn amounts_parse(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input), Ok(expected));
    }

    #[rstest]
    #[case("", InputError::InvalidNumber)]
    #[case("abc", InputError::InvalidNumber)]
    #[case("nan", InputError::InvalidNumber)]
    #[case("12abc", InputError::InvalidNumber)]
    #[case("-5", InputError::NegativeAmount)]
    #[case("-0.01", InputError::NegativeAmount)]
    #[case("-0.00000000000000000000000000001", InputError::NegativeAmount)]
    #[case("0.00000000000000000000000000001", InputError::InvalidNumber)]
    fn bad_amounts_fail(#[case] input: &str, #[case] expected: InputError) {
        assert_eq!(parse_amount(input), Err(expected));
    }
}
