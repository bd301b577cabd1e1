use crate::checksum::{left_pad, weighted_sum_ltr, AccountRule};

/// Citibank Israel (22). Nine-digit account whose last digit is a check
/// digit over the first eight, weights applied left-to-right.
pub(crate) struct CitibankCheckDigit;

const WEIGHTS: &[u32] = &[3, 2, 7, 6, 5, 4, 3, 2];

impl AccountRule for CitibankCheckDigit {
    fn is_valid_account(&self, _branch_code: u32, account: &str) -> bool {
        let account = left_pad(account, 9);
        if account.len() != 9 {
            return false;
        }
        let Some(check) = account[8..].chars().next().and_then(|c| c.to_digit(10)) else {
            return false;
        };
        let sum = weighted_sum_ltr(&account[..8], WEIGHTS);
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
            "700241017",
            "590630500",
            "711422846",
            "379022464",
            "579077859",
        ];
        for account in valid {
            assert!(CitibankCheckDigit.is_valid_account(1, account), "{account}");
        }
    }

    #[test]
    fn invalid_accounts() {
        let invalid = vec![
            // wrong check digit
            "700241018",
            "700241016",
            // overlong accounts are rejected
            "1700241017",
        ];
        for account in invalid {
            assert!(!CitibankCheckDigit.is_valid_account(1, account), "{account}");
        }
    }

    #[test]
    fn branch_does_not_participate() {
        assert!(CitibankCheckDigit.is_valid_account(999, "700241017"));
    }
}
