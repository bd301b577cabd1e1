use crate::checksum::{has_valid_mod97_check_digits, AccountRule};

/// Ofek credit union (15). Same mod-97 check-digit scheme as One Zero.
pub(crate) struct OfekCheckDigits;

impl AccountRule for OfekCheckDigits {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        has_valid_mod97_check_digits(branch_code, account, true)
    }
}
