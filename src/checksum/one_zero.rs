use crate::checksum::{has_valid_mod97_check_digits, AccountRule};

/// One Zero Digital Bank (18). Two trailing check digits over the zero-padded
/// branch and account body, mod 97.
pub(crate) struct OneZeroCheckDigits;

impl AccountRule for OneZeroCheckDigits {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        has_valid_mod97_check_digits(branch_code, account, true)
    }
}
