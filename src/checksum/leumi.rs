use crate::checksum::{branch_digits, left_pad, weighted_sum_ltr, AccountRule};

/// Bank Leumi (10). The 8-digit account ends in two check digits; the
/// weighted sum runs left-to-right over the branch and the first six account
/// digits, then one of several documented constants is added and the
/// 100-complement of the result must match the check digits.
///
/// The constants correspond to account types; 110 is excluded for the types
/// whose fifth and sixth digits are 00, 20 or 23.
pub(crate) struct LeumiChecksum;

const WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const TYPE_CONSTANTS: &[u32] = &[128, 180, 330, 340];
const TYPES_WITHOUT_110: &[&str] = &["00", "20", "23"];

impl AccountRule for LeumiChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let account = left_pad(account, 8);
        // Leumi rejects overlong accounts rather than truncating.
        if account.len() != 8 {
            return false;
        }

        let base = weighted_sum_ltr(&(branch_digits(branch_code) + &account[..6]), WEIGHTS);
        let Ok(check) = account[6..8].parse::<u32>() else {
            return false;
        };

        let with_110 = !TYPES_WITHOUT_110.contains(&&account[4..6]);
        TYPE_CONSTANTS
            .iter()
            .chain(with_110.then_some(&110))
            .any(|constant| (100 - (base + constant) % 100) % 100 == check)
    }
}
