// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank;
mod checksum;
mod error;
mod normalization;

// This is the public API of the validation library
pub use bank::{Bank, MASAV_RULES_REVISION};
pub use checksum::AccountRule;
pub use error::InvalidAccountError;

/// Validates an Israeli bank account against the MASAV per-bank checksum
/// rules.
///
/// `Ok(false)` is the normal negative outcome: the input is a well-formed
/// account that fails its bank's checksum. Errors are reserved for input that
/// cannot be checked at all (empty or non-digit account number, unknown bank
/// code).
pub fn validate(
    bank_code: u32,
    branch_code: u32,
    account_number: &str,
) -> Result<bool, InvalidAccountError> {
    let account = normalization::normalize_account_number(account_number)?;
    let bank =
        Bank::from_code(bank_code).ok_or(InvalidAccountError::UnsupportedBank(bank_code))?;
    Ok(bank.is_valid_account(branch_code, account))
}
