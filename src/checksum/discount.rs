use crate::checksum::{is_weighted_mod11_valid, left_pad, AccountRule, STANDARD_WEIGHTS};

/// Discount group: Israel Discount Bank (11) and Mercantile Discount (17).
/// Weighted mod-11 over the 9-digit account alone; the branch does not
/// participate.
pub(crate) struct DiscountChecksum;

const VALID_REMAINDERS: &[u32] = &[0, 2, 4];

impl AccountRule for DiscountChecksum {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        is_weighted_mod11_valid(&left_pad(account, 9), STANDARD_WEIGHTS, VALID_REMAINDERS)
    }
}
