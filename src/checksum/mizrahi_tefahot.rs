use crate::checksum::{
    branch_digits, is_weighted_mod11_valid, left_pad, AccountRule, STANDARD_WEIGHTS,
};

/// Mizrahi-Tefahot (20). Hapoalim-style weighting with remainders 0/2/4, but
/// branches 401-799 (former Tefahot branches) are checked under their
/// pre-merger number, 400 below.
pub(crate) struct MizrahiTefahotChecksum;

const VALID_REMAINDERS: &[u32] = &[0, 2, 4];

impl AccountRule for MizrahiTefahotChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let branch = if (401..=799).contains(&branch_code) {
            branch_code - 400
        } else {
            branch_code
        };
        let full = branch_digits(branch) + &left_pad(account, 6);
        is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, VALID_REMAINDERS)
    }
}
