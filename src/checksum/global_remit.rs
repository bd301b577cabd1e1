use crate::checksum::{left_pad, weighted_sum_rtl, AccountRule};

/// Global Remit (47). Nine-digit account, check digit over the first eight
/// with the document's irregular weight table, applied right-to-left.
pub(crate) struct GlobalRemitCheckDigit;

const WEIGHTS: &[u32] = &[5, 2, 7, 3, 4, 6, 8, 9];

impl AccountRule for GlobalRemitCheckDigit {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        let account = left_pad(account, 9);
        if account.len() != 9 {
            return false;
        }
        let Some(check) = account[8..].chars().next().and_then(|c| c.to_digit(10)) else {
            return false;
        };
        let sum = weighted_sum_rtl(&account[..8], WEIGHTS);
        (11 - sum % 11) % 11 == check
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accounts() {
        // First entry is the MASAV document example.
        let valid = vec![
            "700241014",
            "244079266",
            "576145656",
            "608485295",
            "541025607",
        ];
        for account in valid {
            assert!(
                GlobalRemitCheckDigit.is_valid_account(1, account),
                "{account}"
            );
        }
    }

    #[test]
    fn invalid_accounts() {
        for account in ["700241015", "700241013", "1700241014"] {
            assert!(
                !GlobalRemitCheckDigit.is_valid_account(1, account),
                "{account}"
            );
        }
    }
}
