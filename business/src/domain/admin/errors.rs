#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("admin.incorrect_password")]
    IncorrectPassword,
    #[error("admin.locked")]
    Locked,
    #[error("admin.invalid_digest")]
    InvalidDigest,
}
