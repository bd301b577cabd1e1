use crate::error::InvalidAccountError;

/// Coerces a raw account number into a digit-only string, rejecting anything
/// a checksum cannot be computed on. Bank-specific zero-padding and length
/// limits stay inside the individual rules since the MASAV document does not
/// define them uniformly.
pub(crate) fn normalize_account_number(raw: &str) -> Result<&str, InvalidAccountError> {
    let account = raw.trim();
    if account.is_empty() {
        return Err(InvalidAccountError::EmptyAccountNumber);
    }
    if !account.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidAccountError::NonDigitAccountNumber);
    }
    Ok(account)
}
