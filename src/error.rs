// Error types
// Covers key reconstruction, key generation and cipher failures

use thiserror::Error;

/// Errors that can occur while building key material or transforming data
#[derive(Debug, Error)]
pub enum RsaError {
    /// A required textual argument was empty or whitespace-only
    #[error("{0} must not be blank")]
    BlankInput(&'static str),

    #[error("hex decode failed: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("base64 decode failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The decoded material does not form a valid RSA key
    #[error("invalid key material: {0}")]
    KeySpec(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),

    /// A chunk transform was rejected: corrupted ciphertext or a key
    /// unrelated to the one that produced it
    #[error("cipher operation failed: {0}")]
    Cipher(#[source] rsa::Error),

    #[error("decrypted data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type for all fallible operations in this crate
pub type RsaResult<T> = Result<T, RsaError>;
