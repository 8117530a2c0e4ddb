use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Zone transfer failed: {0}")]
    TransferFailed(String),

    #[error("Connection already handed off")]
    ConnectionHijacked,

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
