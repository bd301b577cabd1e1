use crate::checksum::{
    branch_digits, is_weighted_mod11_valid, left_pad, AccountRule, STANDARD_WEIGHTS,
};

/// Bank Hapoalim (12). Weighted mod-11 over the 3 branch digits followed by
/// the 6-digit account, remainders 0/2/4/6 accepted.
pub(crate) struct HapoalimChecksum;

const VALID_REMAINDERS: &[u32] = &[0, 2, 4, 6];

impl AccountRule for HapoalimChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let full = branch_digits(branch_code) + &left_pad(account, 6);
        is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, VALID_REMAINDERS)
    }
}
