use crate::checksum::{weighted_sum_rtl, AccountRule};

/// Nima Shefa Israel (21). Weighted mod-11 over exactly eight account
/// digits, remainders 0/2 accepted.
pub(crate) struct NimaChecksum;

const WEIGHTS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8];

impl AccountRule for NimaChecksum {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        if account.len() != 8 {
            return false;
        }
        matches!(weighted_sum_rtl(account, WEIGHTS) % 11, 0 | 2)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accounts() {
        // First entry is the MASAV document example.
        let valid = vec!["16632427", "79690256", "75395179", "85364225", "62845227"];
        for account in valid {
            assert!(NimaChecksum.is_valid_account(1, account), "{account}");
        }
    }

    #[test]
    fn invalid_accounts() {
        for account in ["16632426", "16632428", "6632427", "016632427"] {
            assert!(!NimaChecksum.is_valid_account(1, account), "{account}");
        }
    }
}
