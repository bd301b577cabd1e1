use crate::checksum::{has_valid_mod97_check_digits, AccountRule};

/// Grow payment services (35). Mod-97 check digits with the branch taken
/// as-is (no zero padding); branches 900 and above are internal and exempt
/// from the check.
pub(crate) struct GrowCheckDigits;

const EXEMPT_BRANCH_FLOOR: u32 = 900;

impl AccountRule for GrowCheckDigits {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        if branch_code >= EXEMPT_BRANCH_FLOOR {
            return true;
        }
        has_valid_mod97_check_digits(branch_code, account, false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accounts() {
        // First entry is the MASAV document example.
        let valid = vec![
            (100, "1234593"),
            (100, "7962039"),
            (100, "4545956"),
            (100, "9268767"),
        ];
        for (branch, account) in valid {
            assert!(
                GrowCheckDigits.is_valid_account(branch, account),
                "{branch}/{account}"
            );
        }
    }

    #[test]
    fn exempt_branches_accept_everything() {
        assert!(GrowCheckDigits.is_valid_account(900, "1234593"));
        assert!(GrowCheckDigits.is_valid_account(999, "000000001"));
    }

    #[test]
    fn invalid_accounts() {
        for (branch, account) in [(100, "1234594"), (101, "1234593"), (899, "12")] {
            assert!(
                !GrowCheckDigits.is_valid_account(branch, account),
                "{branch}/{account}"
            );
        }
    }
}
