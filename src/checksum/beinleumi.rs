use crate::checksum::{
    branch_digits, is_weighted_mod11_valid, left_pad, AccountRule, STANDARD_WEIGHTS,
};

/// Beinleumi group: First International (31), Pagi (52), Otsar Hahayal (14)
/// and Masad (46).
///
/// A handful of branches carry their own remainder sets from pre-merger
/// rules; everywhere else the 9-digit check accepts remainders 0/6, with a
/// second chance on the 6-digit account alone.
pub(crate) struct BeinleumiChecksum;

const WEIGHTS_ACCOUNT_ONLY: &[u32] = &[1, 2, 3, 4, 5, 6];

/// Former Poaley Agudat Israel branches.
const BRANCHES_REMAINDERS_0_2: &[u32] = &[347, 365, 384, 385];
/// Former Otsar Hahayal branches.
const BRANCHES_REMAINDERS_0_2_4: &[u32] = &[361, 362, 363];

impl AccountRule for BeinleumiChecksum {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        let full = branch_digits(branch_code) + &left_pad(account, 6);

        if BRANCHES_REMAINDERS_0_2.contains(&branch_code) {
            return is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, &[0, 2]);
        }
        if BRANCHES_REMAINDERS_0_2_4.contains(&branch_code) {
            return is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, &[0, 2, 4]);
        }

        if is_weighted_mod11_valid(&full, STANDARD_WEIGHTS, &[0, 6]) {
            return true;
        }
        is_weighted_mod11_valid(&left_pad(account, 6), WEIGHTS_ACCOUNT_ONLY, &[0, 6])
    }
}
