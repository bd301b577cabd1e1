use crate::checksum::{weighted_sum_rtl, AccountRule, STANDARD_WEIGHTS};

/// Postal Bank (09). Weighted mod-10 over the account alone, no padding; the
/// branch never participates.
pub(crate) struct PostalBankChecksum;

impl AccountRule for PostalBankChecksum {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        weighted_sum_rtl(account, STANDARD_WEIGHTS) % 10 == 0
    }
}
