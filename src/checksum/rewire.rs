use crate::checksum::{branch_digits, weighted_sum_rtl, AccountRule};

/// Rewire (58). Weighted mod-11 over the 3 branch digits and exactly nine
/// account digits, with the standard 1..9 weighting continued across the
/// branch (weights repeat from the right).
pub(crate) struct RewireChecksum;

const WEIGHTS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

impl AccountRule for RewireChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        if account.len() != 9 {
            return false;
        }
        let full = branch_digits(branch_code) + account;
        weighted_sum_rtl(&full, WEIGHTS) % 11 == 0
    }
}
