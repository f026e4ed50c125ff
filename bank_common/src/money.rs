//! Currency formatting

use rust_decimal::{Decimal, RoundingStrategy};

/// The symbol of the single currency the simulator works in (Philippine peso).
pub const CURRENCY_SYMBOL: &str = "₱";

/// **Formats an amount for display**
///
/// Always two decimal places, prefixed with [`CURRENCY_SYMBOL`], e.g. `₱1300.50`.
pub fn format_money(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{CURRENCY_SYMBOL}{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::format_money;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "₱0.00")]
    #[case(dec!(1000), "₱1000.00")]
    #[case(dec!(1500.5), "₱1500.50")]
    #[case(dec!(1300.50), "₱1300.50")]
    #[case(dec!(0.125), "₱0.12")]
    #[case(dec!(2.675), "₱2.68")]
    fn formats_with_two_decimals(#[case] amount: rust_decimal::Decimal, #[case] expected: &str) {
        assert_eq!(format_money(&amount), expected);
    }
}
