use crate::checksum::{has_valid_mod97_check_digits, left_pad, AccountRule};

/// 019 Payment Services (79). The account is zero-padded to nine digits
/// (seven body digits plus two check digits), then checked under the One
/// Zero mod-97 scheme.
pub(crate) struct PaymentServicesCheckDigits;

impl AccountRule for PaymentServicesCheckDigits {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        has_valid_mod97_check_digits(branch_code, &left_pad(account, 9), true)
    }
}
