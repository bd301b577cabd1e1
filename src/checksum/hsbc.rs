use crate::checksum::AccountRule;

/// HSBC Israel (23). No weighted checksum; the document constrains the
/// account shape at two specific branches and accepts everything else.
pub(crate) struct HsbcBranchRule;

impl AccountRule for HsbcBranchRule {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        if account.len() != 9 {
            return false;
        }
        match branch_code {
            // Private banking: the seventh digit marks the account class.
            101 => matches!(account.as_bytes()[6], b'4' | b'9'),
            // Business banking accounts end in 001.
            102 => account.ends_with("001"),
            _ => true,
        }
    }
}
