use thiserror::Error;

/// Input that cannot be checked at all, as opposed to a well-formed account
/// that fails its bank's checksum (which is reported as `Ok(false)`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAccountError {
    #[error("Account number is empty")]
    EmptyAccountNumber,

    #[error("Account number must contain only digits")]
    NonDigitAccountNumber,

    /// The bank code is not in the MASAV registry of supported banks
    #[error("Bank with code '{0}' is not supported or does not exist")]
    UnsupportedBank(u32),
}
