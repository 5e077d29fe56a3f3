//! PEM armor (RFC 7468) for the key blocks handled by this crate.
//!
//! Only the format transform lives here: a block is a label plus raw bytes,
//! with no knowledge of what the bytes mean.

use pem_rfc7468::LineEnding;

use crate::error::Error;

/// Label of a PKCS#1 `RSAPrivateKey` block.
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Label of an X.509 `SubjectPublicKeyInfo` block.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// A single decoded PEM block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PemBlock {
    /// Type label between `-----BEGIN ` and `-----`
    pub label: String,
    /// Decoded DER bytes
    pub content: Vec<u8>,
}

impl PemBlock {
    /// Consume the block and return its content if the label is `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongPemType`] when the label differs.
    pub fn expect_label(self, expected: &'static str) -> Result<Vec<u8>, Error> {
        if self.label != expected {
            return Err(Error::WrongPemType {
                expected,
                found: self.label,
            });
        }
        Ok(self.content)
    }
}

/// Decode exactly one PEM block.
///
/// Surrounding whitespace and explanatory text before the `BEGIN` line are
/// tolerated. Anything after the `END` line, including a second block, is not.
///
/// # Errors
///
/// Returns [`Error::InvalidPemFormat`] when no block is found, the boundaries
/// are malformed or the base64 payload is corrupt.
pub fn decode(pem: &[u8]) -> Result<PemBlock, Error> {
    let pem = pem.trim_ascii();
    if pem.is_empty() {
        return Err(Error::InvalidPemFormat("no PEM data found".to_string()));
    }

    let (label, content) = pem_rfc7468::decode_vec(pem)?;
    Ok(PemBlock {
        label: label.to_string(),
        content,
    })
}

/// Encode `content` as a PEM block labelled `label`.
///
/// Base64 lines are wrapped at 64 columns, lines end with `\n` and the output
/// ends with a trailing newline.
///
/// # Errors
///
/// Returns [`Error::InvalidPemFormat`] if `label` is not a valid RFC 7468 label.
pub fn encode(label: &str, content: &[u8]) -> Result<String, Error> {
    Ok(pem_rfc7468::encode_string(label, LineEnding::LF, content)?)
}
