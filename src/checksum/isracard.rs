use crate::checksum::{branch_digits, left_pad, weighted_sum_rtl, AccountRule};

/// Isracard (01). Weighted mod-11 over the 3 branch digits and the 7-digit
/// account, weights 1..10 applied right-to-left as the MASAV text specifies.
///
/// Known discrepancy: the document's own worked example does not satisfy its
/// textual rule. The text is implemented as written; forcing the example to
/// pass would change the verdict for every other account.
pub(crate) struct IsracardChecksum;

const WEIGHTS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

impl AccountRule for IsracardChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let full = branch_digits(branch_code) + &left_pad(account, 7);
        weighted_sum_rtl(&full, WEIGHTS) % 11 == 0
    }
}
