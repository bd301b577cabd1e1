use crate::checksum::{
    branch_digits, is_weighted_mod11_valid, left_pad, AccountRule, STANDARD_WEIGHTS,
};

/// Bank Yahav (04). Same weighting as Hapoalim but only remainders 0/2 are
/// accepted.
pub(crate) struct YahavChecksum;

const VALID_REMAINDERS: &[u32] = &[0, 2];

impl AccountRule for YahavChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let full = branch_digits(branch_code) + &left_pad(account, 6);
        is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, VALID_REMAINDERS)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accounts() {
        // First entry is the MASAV document example.
        let valid = vec![
            (284, "50067"),
            (284, "835503"),
            (284, "246400"),
            (284, "873200"),
            (284, "598749"),
        ];
        for (branch, account) in valid {
            assert!(
                YahavChecksum.is_valid_account(branch, account),
                "{branch}/{account}"
            );
        }
    }

    #[test]
    fn invalid_accounts() {
        let invalid = vec![(284, "50068"), (284, "50066"), (285, "50067")];
        for (branch, account) in invalid {
            assert!(
                !YahavChecksum.is_valid_account(branch, account),
                "{branch}/{account}"
            );
        }
    }
}
