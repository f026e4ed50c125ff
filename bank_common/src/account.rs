use crate::cli::constants::{ACCOUNT_INFO_TITLE, INFO_RULE};
use crate::errors::AccountingError;
use crate::money::format_money;
use rust_decimal::Decimal;
use std::io::{self, Write};

/// **A single simulated bank account**
///
/// Holds the holder's name, an opaque account number, and the current balance.
///
/// The balance never goes below zero: it only changes through
/// [`Account::deposit`] and [`Account::withdraw`], which reject anything that would break that.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder: String,
    number: String,
    balance: Decimal,
}

impl Account {
    /// Opens an account with the given initial balance.
    ///
    /// # Errors
    /// - Negative initial balance, `AccountingError::NegativeInitialBalance`
    pub fn new(
        holder: impl Into<String>,
        number: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, AccountingError> {
        if initial_balance < Decimal::ZERO {
            return Err(AccountingError::NegativeInitialBalance(initial_balance));
        }

        let account = Account {
            holder: holder.into(),
            number: number.into(),
            balance: initial_balance,
        };
        log::info!(
            "Opened account {} for {} with {}",
            account.number,
            account.holder,
            format_money(&account.balance)
        );

        Ok(account)
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Retrieves the current balance.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds a positive `amount` to the balance and returns the new balance.
    ///
    /// # Errors
    /// - Zero or negative amount, `AccountingError::NonPositiveDeposit`;
    /// - Attempted overflow (account over-funded), `AccountingError::AccountOverFunded`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountingError> {
        if amount <= Decimal::ZERO {
            return Err(AccountingError::NonPositiveDeposit(amount));
        }

        self.balance
            .checked_add(amount)
            .map(|r| {
                self.balance = r;
                log::debug!("Deposited {} into {}", format_money(&amount), self.number);
                r
            })
            .ok_or(AccountingError::AccountOverFunded(amount))
    }

    /// Takes a positive, whole `amount` out of the balance and returns the new balance.
    ///
    /// Only whole amounts can be withdrawn, as an ATM only dispenses bills.
    ///
    /// # Errors
    /// - Zero or negative amount, `AccountingError::NonPositiveWithdrawal`;
    /// - Amount with a fractional part, `AccountingError::FractionalWithdrawal`;
    /// - Amount larger than the balance (account under-funded), `AccountingError::AccountUnderFunded`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountingError> {
        if amount <= Decimal::ZERO {
            return Err(AccountingError::NonPositiveWithdrawal(amount));
        }
        if !amount.fract().is_zero() {
            return Err(AccountingError::FractionalWithdrawal(amount));
        }
        if amount > self.balance {
            return Err(AccountingError::AccountUnderFunded {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        log::debug!("Withdrew {} from {}", format_money(&amount), self.number);

        Ok(self.balance)
    }

    /// **Renders the account information banner**
    ///
    /// Wrapped by `display_info()` so we can unit-test the contents.
    pub fn info_banner(&self) -> String {
        format!(
            "\n{INFO_RULE}\n{ACCOUNT_INFO_TITLE}\n{INFO_RULE}\n\
             Account Holder: {}\n\
             Account Number: {}\n\
             Current Balance: {}\n\
             {INFO_RULE}",
            self.holder,
            self.number,
            format_money(&self.balance)
        )
    }

    /// **Prints the holder, the number, and the balance**
    pub fn display_info(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.info_banner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn account_with(balance: Decimal) -> Account {
        Account::new("Juan Dela Cruz", "1234567890", balance).unwrap()
    }

    /// Amounts with up to two decimal places, like the ones typed at the prompts.
    fn cents() -> impl Strategy<Value = Decimal> {
        (0i64..100_000_000).prop_map(|c| Decimal::new(c, 2))
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(0.01))]
    #[case(dec!(1000.00))]
    fn new_ok(#[case] initial: Decimal) {
        let account = Account::new("Maria", "42", initial).unwrap();
        assert_eq!(initial, account.balance());
        assert_eq!("Maria", account.holder());
        assert_eq!("42", account.number());
    }

    #[rstest]
    #[case(dec!(-0.01))]
    #[case(dec!(-1000))]
    fn new_err_negative(#[case] initial: Decimal) {
        assert_eq!(
            Err(AccountingError::NegativeInitialBalance(initial)),
            Account::new("Maria", "42", initial)
        );
    }

    #[test]
    fn deposit_multiple_ok() {
        let mut account = account_with(dec!(0));

        assert_eq!(Ok(dec!(25)), account.deposit(dec!(25)));
        assert_eq!(Ok(dec!(75.50)), account.deposit(dec!(50.50)));
        assert_eq!(dec!(75.50), account.balance());
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-10))]
    fn deposit_err_non_positive(#[case] amount: Decimal) {
        let mut account = account_with(dec!(100));

        assert_eq!(
            Err(AccountingError::NonPositiveDeposit(amount)),
            account.deposit(amount)
        );
        assert_eq!(dec!(100), account.balance());
    }

    #[test]
    fn deposit_err_over_funded() {
        let mut account = account_with(Decimal::MAX);

        assert_eq!(
            Err(AccountingError::AccountOverFunded(dec!(10))),
            account.deposit(dec!(10))
        );
        assert_eq!(Decimal::MAX, account.balance());
    }

    #[test]
    fn withdraw_multiple_ok() {
        let mut account = account_with(dec!(25));

        assert_eq!(Ok(dec!(20)), account.withdraw(dec!(5)));
        assert_eq!(Ok(dec!(0)), account.withdraw(dec!(20)));
        assert_eq!(dec!(0), account.balance());
    }

    #[rstest]
    #[case(dec!(0), AccountingError::NonPositiveWithdrawal(dec!(0)))]
    #[case(dec!(-5), AccountingError::NonPositiveWithdrawal(dec!(-5)))]
    #[case(dec!(50.25), AccountingError::FractionalWithdrawal(dec!(50.25)))]
    #[case(
        dec!(125),
        AccountingError::AccountUnderFunded { requested: dec!(125), available: dec!(100) }
    )]
    fn withdraw_err(#[case] amount: Decimal, #[case] expected: AccountingError) {
        let mut account = account_with(dec!(100));

        assert_eq!(Err(expected), account.withdraw(amount));
        assert_eq!(dec!(100), account.balance());
    }

    #[test]
    fn withdraw_whole_amount_with_trailing_zeros_ok() {
        let mut account = account_with(dec!(100));

        assert_eq!(Ok(dec!(50)), account.withdraw(dec!(50.00)));
    }

    #[test]
    fn scenario_deposit_then_withdrawals() {
        let mut account = account_with(dec!(1000.00));

        assert_eq!(Ok(dec!(1500.50)), account.deposit(dec!(500.50)));
        assert_eq!(Ok(dec!(1300.50)), account.withdraw(dec!(200)));
        assert_eq!(
            Err(AccountingError::FractionalWithdrawal(dec!(50.25))),
            account.withdraw(dec!(50.25))
        );
        assert_eq!(dec!(1300.50), account.balance());
    }

    #[test]
    fn info_banner_contents() {
        let account = account_with(dec!(1300.5));
        let rule = "=".repeat(40);
        let expected = format!(
            "\n{rule}\n       ACCOUNT INFORMATION\n{rule}\n\
             Account Holder: Juan Dela Cruz\n\
             Account Number: 1234567890\n\
             Current Balance: ₱1300.50\n\
             {rule}"
        );

        assert_eq!(expected, account.info_banner());
    }

    #[test]
    fn display_info_writes_banner_line() {
        let account = account_with(dec!(5));
        let mut out = Vec::new();

        account.display_info(&mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(format!("{}\n", account.info_banner()), printed);
    }

    proptest! {
        #[test]
        fn deposit_adds_exactly(balance in cents(), amount in cents()) {
            prop_assume!(amount > Decimal::ZERO);
            let mut account = account_with(balance);

            prop_assert_eq!(Ok(balance + amount), account.deposit(amount));
            prop_assert_eq!(balance + amount, account.balance());
        }

        #[test]
        fn deposit_non_positive_leaves_balance(balance in cents(), amount in cents()) {
            let mut account = account_with(balance);

            prop_assert!(account.deposit(-amount).is_err());
            prop_assert_eq!(balance, account.balance());
        }

        #[test]
        fn withdraw_fractional_leaves_balance(balance in cents(), whole in 0i64..1_000_000, frac in 1i64..100) {
            let mut account = account_with(balance);
            let amount = Decimal::new(whole * 100 + frac, 2);

            prop_assert_eq!(
                Err(AccountingError::FractionalWithdrawal(amount)),
                account.withdraw(amount)
            );
            prop_assert_eq!(balance, account.balance());
        }

        #[test]
        fn withdraw_whole_within_balance_subtracts(
            units in 1i64..1_000_000,
            frac in 0i64..100,
            pick in any::<prop::sample::Index>()
        ) {
            let balance = Decimal::new(units * 100 + frac, 2);
            let amount = Decimal::from(pick.index(units as usize) as i64 + 1);
            let mut account = account_with(balance);

            prop_assert_eq!(Ok(balance - amount), account.withdraw(amount));
            prop_assert_eq!(balance - amount, account.balance());
        }

        #[test]
        fn withdraw_over_balance_leaves_balance(balance in cents(), extra in 1i64..1_000_000) {
            let amount = balance.trunc() + Decimal::from(extra);
            let mut account = account_with(balance);

            prop_assert!(account.withdraw(amount).is_err());
            prop_assert_eq!(balance, account.balance());
        }
    }
}
