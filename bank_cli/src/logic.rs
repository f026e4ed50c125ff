//! The interactive session
//!
//! A session walks through a fixed sequence of states:
//! it collects the holder's name, the account number, and the initial balance,
//! opens the account, and then serves the main menu until the user exits
//! or the input is interrupted.

use bank_common::cli::constants::*;
use bank_common::cli::helpers::{get_valid_amount, print_menu, prompt_until_valid, read_line};
use bank_common::errors::CliError;
use bank_common::money::format_money;
use bank_common::validation::{validate_account_number, validate_holder_name};
use bank_common::Account;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Unexpected menu failures in a row after which the session gives up.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

/// **How a session ended**
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Exit" from the menu.
    Exited,

    /// Input ended or was interrupted.
    Interrupted,

    /// The account couldn't be opened.
    AccountNotCreated,

    /// Too many unexpected failures, or a failure before the menu was reached.
    Failed,
}

#[derive(Debug)]
enum State {
    CollectName,
    CollectNumber {
        holder: String,
    },
    CollectInitialBalance {
        holder: String,
        number: String,
    },
    CreateAccount {
        holder: String,
        number: String,
        initial_balance: Decimal,
    },
    MenuLoop(Account),
    Exit(SessionEnd),
}

/// What the menu loop does after an action.
enum Flow {
    Continue,
    Exit,
}

/// **A single-user, single-account interactive session**
///
/// Reads from any [`BufRead`] and writes to any [`Write`].
pub struct Shell<R, W> {
    input: R,
    output: W,
    account: Option<Account>,
    failures: u32,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell {
            input,
            output,
            account: None,
            failures: 0,
        }
    }

    /// The account as it was when the session ended, if one was opened.
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// **Runs the session to its end.**
    pub fn run(&mut self) -> SessionEnd {
        if let Err(err) = self.welcome() {
            return self.fail(err);
        }

        let mut state = State::CollectName;
        loop {
            state = match state {
                State::Exit(end) => return end,
                state => self.step(state),
            };
        }
    }

    fn welcome(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "\n{WELCOME_RULE}\n{WELCOME_TITLE}\n{WELCOME_RULE}")?;
        Ok(())
    }

    fn step(&mut self, state: State) -> State {
        match state {
            State::CollectName => match self.collect_holder_name() {
                Ok(holder) => State::CollectNumber { holder },
                Err(err) => State::Exit(self.fail(err)),
            },
            State::CollectNumber { holder } => match self.collect_account_number() {
                Ok(number) => State::CollectInitialBalance { holder, number },
                Err(err) => State::Exit(self.fail(err)),
            },
            State::CollectInitialBalance { holder, number } => {
                match get_valid_amount(&mut self.input, &mut self.output, INITIAL_BALANCE_PROMPT) {
                    Ok(initial_balance) => State::CreateAccount {
                        holder,
                        number,
                        initial_balance,
                    },
                    Err(err) => State::Exit(self.fail(err)),
                }
            }
            State::CreateAccount {
                holder,
                number,
                initial_balance,
            } => self.create_account(holder, number, initial_balance),
            State::MenuLoop(mut account) => {
                let next = self.menu_round(&mut account);
                self.after_menu_round(account, next)
            }
            State::Exit(end) => State::Exit(end),
        }
    }

    fn collect_holder_name(&mut self) -> Result<String, CliError> {
        prompt_until_valid(&mut self.input, &mut self.output, NAME_PROMPT, |line| {
            validate_holder_name(line).map(str::to_owned)
        })
    }

    fn collect_account_number(&mut self) -> Result<String, CliError> {
        prompt_until_valid(&mut self.input, &mut self.output, NUMBER_PROMPT, |line| {
            validate_account_number(line).map(str::to_owned)
        })
    }

    /// Opening can only fail on a negative balance, which the amount prompt already rules out,
    /// so there is no retry: the session ends instead.
    fn create_account(&mut self, holder: String, number: String, initial_balance: Decimal) -> State {
        match Account::new(holder.as_str(), number, initial_balance) {
            Ok(account) => {
                let msg = format!("\nAccount created successfully for {holder}!");
                match self.say(msg) {
                    Ok(()) => State::MenuLoop(account),
                    Err(err) => {
                        self.account = Some(account);
                        State::Exit(self.fail(err))
                    }
                }
            }
            Err(err) => {
                log::error!("Account creation failed: {:?}", err);
                self.say_best_effort(format!("Error creating account: {err}"));
                State::Exit(SessionEnd::AccountNotCreated)
            }
        }
    }

    /// Decides where the menu loop goes after one round.
    ///
    /// Unexpected failures are reported and the menu is shown again,
    /// up to [`MAX_CONSECUTIVE_FAILURES`] in a row.
    fn after_menu_round(&mut self, account: Account, round: Result<Flow, CliError>) -> State {
        match round {
            Ok(Flow::Continue) => {
                self.failures = 0;
                State::MenuLoop(account)
            }
            Ok(Flow::Exit) => {
                self.account = Some(account);
                State::Exit(SessionEnd::Exited)
            }
            Err(CliError::Interrupted) => {
                self.account = Some(account);
                State::Exit(self.interrupted())
            }
            Err(CliError::Io(err)) => {
                self.failures += 1;
                log::error!("Menu action failed ({} in a row): {}", self.failures, err);
                self.say_best_effort(format!("An unexpected error occurred: {err}\nPlease try again."));

                if self.failures >= MAX_CONSECUTIVE_FAILURES {
                    self.account = Some(account);
                    State::Exit(SessionEnd::Failed)
                } else {
                    State::MenuLoop(account)
                }
            }
        }
    }

    /// Shows the menu once and carries out the chosen action.
    fn menu_round(&mut self, account: &mut Account) -> Result<Flow, CliError> {
        print_menu(&mut self.output)?;
        let choice = read_line(&mut self.input, &mut self.output, CHOICE_PROMPT)?;

        match choice.as_str() {
            DEPOSIT => self.deposit(account)?,
            WITHDRAW => self.withdraw(account)?,
            CHECK_BALANCE => self.say(format!(
                "\nCurrent Balance: {}",
                format_money(&account.balance())
            ))?,
            ACCOUNT_INFO => account.display_info(&mut self.output)?,
            EXIT => {
                self.say(FAREWELL_MSG)?;
                return Ok(Flow::Exit);
            }
            _ => {
                log::debug!("Invalid menu choice: {:?}", choice);
                self.say(INVALID_CHOICE_MSG)?
            }
        }

        Ok(Flow::Continue)
    }

    /// **Deposit funds to the account**
    ///
    /// Prints a confirmation and the new balance on success,
    /// or the reason the deposit was rejected.
    fn deposit(&mut self, account: &mut Account) -> Result<(), CliError> {
        let amount = get_valid_amount(&mut self.input, &mut self.output, DEPOSIT_PROMPT)?;

        match account.deposit(amount) {
            Ok(new_balance) => {
                self.say(format!("Successfully deposited {}", format_money(&amount)))?;
                self.say(format!("New balance: {}", format_money(&new_balance)))
            }
            Err(err) => {
                log::warn!("Deposit rejected: {:?}", err);
                self.say(format!("Deposit failed: {err}"))
            }
        }
    }

    /// **Withdraw funds from the account**
    ///
    /// Prints a confirmation and the new balance on success,
    /// or the reason the withdrawal was rejected.
    fn withdraw(&mut self, account: &mut Account) -> Result<(), CliError> {
        let amount = get_valid_amount(&mut self.input, &mut self.output, WITHDRAW_PROMPT)?;

        match account.withdraw(amount) {
            Ok(new_balance) => {
                self.say(format!("Successfully withdrew {}", format_money(&amount)))?;
                self.say(format!("New balance: {}", format_money(&new_balance)))
            }
            Err(err) => {
                log::warn!("Withdrawal rejected: {:?}", err);
                self.say(format!("Withdrawal failed: {err}"))
            }
        }
    }

    fn interrupted(&mut self) -> SessionEnd {
        self.say_best_effort(INTERRUPTED_MSG);
        SessionEnd::Interrupted
    }

    /// Ends the session on a failure outside the menu loop.
    fn fail(&mut self, err: CliError) -> SessionEnd {
        match err {
            CliError::Interrupted => self.interrupted(),
            CliError::Io(err) => {
                log::error!("Session failed: {}", err);
                self.say_best_effort(format!("An unexpected error occurred: {err}"));
                SessionEnd::Failed
            }
        }
    }

    fn say(&mut self, msg: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Reports on a path that is already ending or failing, so a write error is only logged.
    fn say_best_effort(&mut self, msg: impl Display) {
        if let Err(err) = self.say(msg) {
            log::debug!("Couldn't write to the output: {}", err);
        }
    }
}
