use crate::checksum::{weighted_sum_rtl, AccountRule, STANDARD_WEIGHTS};

/// Bank Esh Israel (03). Weighted mod-11 over exactly nine account digits;
/// shorter or longer input is invalid rather than padded.
pub(crate) struct EshChecksum;

impl AccountRule for EshChecksum {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        account.len() == 9 && weighted_sum_rtl(account, STANDARD_WEIGHTS) % 11 == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accounts() {
        // First entry is the MASAV document example.
        let valid = vec![
            "247652342",
            "246155884",
            "038577925",
            "238171310",
            "695152521",
        ];
        for account in valid {
            assert!(EshChecksum.is_valid_account(1, account), "{account}");
        }
    }

    #[test]
    fn invalid_accounts() {
        let invalid = vec![
            // wrong check digit
            "247652341",
            "247652343",
            // length is exact, no padding
            "47652342",
            "0247652342",
        ];
        for account in invalid {
            assert!(!EshChecksum.is_valid_account(1, account), "{account}");
        }
    }

    #[test]
    fn all_zeros_goes_through_the_weighted_sum() {
        assert!(EshChecksum.is_valid_account(1, "000000000"));
    }
}
