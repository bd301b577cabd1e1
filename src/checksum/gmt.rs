use crate::checksum::{has_valid_mod97_check_digits, AccountRule};

/// GMT Tech Innovation (69). One Zero's mod-97 scheme; branches 900 and
/// above are internal and exempt.
pub(crate) struct GmtCheckDigits;

const EXEMPT_BRANCH_FLOOR: u32 = 900;

impl AccountRule for GmtCheckDigits {
    fn is_valid_account(&self, branch_code: u32, account: &str) -> bool {
        if branch_code >= EXEMPT_BRANCH_FLOOR {
            return true;
        }
        has_valid_mod97_check_digits(branch_code, account, true)
    }
}
