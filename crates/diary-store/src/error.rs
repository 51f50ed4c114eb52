use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found")]
    UserNotFound,

    #[error("log not found")]
    LogNotFound,

    #[error("secret code space exhausted after {0} attempts")]
    SecretCodesExhausted(usize),
}

pub type Result<T> = std::result::Result<T, StoreError>;
