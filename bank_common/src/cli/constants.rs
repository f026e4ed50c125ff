/// Menu choices

pub const DEPOSIT: &str = "1";
pub const WITHDRAW: &str = "2";
pub const CHECK_BALANCE: &str = "3";
pub const ACCOUNT_INFO: &str = "4";
pub const EXIT: &str = "5";

/// Prompts

pub const NAME_PROMPT: &str = "\nEnter account holder name: ";
pub const NUMBER_PROMPT: &str = "Enter account number: ";
pub const INITIAL_BALANCE_PROMPT: &str = "Enter initial balance: ₱";
pub const DEPOSIT_PROMPT: &str = "Enter deposit amount: ₱";
pub const WITHDRAW_PROMPT: &str = "Enter withdrawal amount: ₱";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

/// Banners

pub const WELCOME_RULE: &str = "==================================================";
pub const WELCOME_TITLE: &str = "    WELCOME TO THE BANK ACCOUNT MANAGEMENT SYSTEM";
pub const MENU_RULE: &str = "----------------------------------------";
pub const MENU_TITLE: &str = "              MAIN MENU";
pub const INFO_RULE: &str = "========================================";
pub const ACCOUNT_INFO_TITLE: &str = "       ACCOUNT INFORMATION";

/// Various messages

pub const INVALID_CHOICE_MSG: &str = "Invalid choice. Please enter a number between 1 and 5.";
pub const INTERRUPTED_MSG: &str = "\n\nProgram interrupted. Exiting...";
pub const FAREWELL_MSG: &str = "\nThank you for using the Bank Account Management System!\nGoodbye!";
