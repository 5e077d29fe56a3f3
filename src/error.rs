use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid PEM format: {0}")]
    InvalidPemFormat(String),

    #[error("Wrong PEM type: expected \"{expected}\" block, found \"{found}\"")]
    WrongPemType {
        expected: &'static str,
        found: String,
    },

    #[error("Key is empty")]
    EmptyKey,

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("Key parse failed: {0}")]
    KeyParseFailed(String),

    #[error("Invalid public key - too short: {bits} bits, please use at least {min} bits")]
    KeyTooShort { bits: usize, min: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Could not determine key length: {0}")]
    KeyLengthUnavailable(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::InvalidPemFormat(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for Error {
    fn from(err: rsa::pkcs1::Error) -> Self {
        Error::KeyParseFailed(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        Error::KeyParseFailed(err.to_string())
    }
}
