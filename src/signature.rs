//! Detached RSASSA-PKCS1-v1_5 / SHA-256 signatures.

use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use rsa::pkcs1v15::VerifyingKey;
use rsa::signature::Verifier;
use sha2::Sha256;
use tracing::debug;

use crate::error::Error;
use crate::public_key::PublicKey;

/// Raw signature bytes. Nothing is validated until [`Signature::verify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    raw: Vec<u8>,
}

impl Signature {
    pub fn from_bytes(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Decode the standard base64 wire form produced by [`Signature::to_base64`].
    pub fn from_base64(data: impl AsRef<[u8]>) -> Result<Self, Error> {
        let raw = general_purpose::STANDARD.decode(data.as_ref().trim_ascii())?;
        Ok(Self { raw })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.raw)
    }

    /// Check this signature over `message` against `public_key`.
    ///
    /// # Returns
    ///
    /// `true` if the signature is valid, `false` for any mismatch: wrong key,
    /// altered message, altered or truncated signature.
    ///
    /// # Errors
    ///
    /// Only when `public_key` itself is unusable: [`Error::EmptyKey`] or
    /// [`Error::KeyParseFailed`].
    pub fn verify(&self, public_key: &PublicKey, message: &[u8]) -> Result<bool, Error> {
        let verifying_key = VerifyingKey::<Sha256>::new(public_key.to_rsa()?);

        let signature = match rsa::pkcs1v15::Signature::try_from(self.raw.as_slice()) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };

        match verifying_key.verify(message, &signature) {
            Ok(()) => Ok(true),
            Err(e) => {
                debug!(error = %e, "signature did not verify");
                Ok(false)
            }
        }
    }

    /// Verify against the UTF-8 bytes of `message`.
    pub fn verify_str(&self, public_key: &PublicKey, message: &str) -> Result<bool, Error> {
        self.verify(public_key, message.as_bytes())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::policy::KeyPolicy;
    use crate::private_key::PrivateKey;

    fn fixture_public_key() -> PublicKey {
        PublicKey::from_pem_with_policy(fixtures::RSA2048_PUBLIC_PEM, &KeyPolicy::new(2048))
            .unwrap()
    }

    #[test]
    fn test_verify_openssl_signature() {
        let signature = Signature::from_base64(fixtures::HELLO_WORLD_SIGNATURE_B64).unwrap();
        assert!(signature
            .verify_str(&fixture_public_key(), "hello,world")
            .unwrap());
    }

    #[test]
    fn test_verify_openssl_signature_8192() {
        let public_key = PublicKey::from_pem(fixtures::RSA8192_PUBLIC_PEM).unwrap();
        let signature =
            Signature::from_base64(fixtures::RSA8192_HELLO_WORLD_SIGNATURE_B64).unwrap();

        assert!(signature.verify_str(&public_key, "hello,world").unwrap());
        assert!(!signature.verify_str(&public_key, "hello,world!").unwrap());
        assert!(!signature
            .verify_str(&fixture_public_key(), "hello,world")
            .unwrap());
    }

    #[test]
    fn test_message_mutation_rejected() {
        let signature = Signature::from_base64(fixtures::HELLO_WORLD_SIGNATURE_B64).unwrap();
        let public_key = fixture_public_key();
        let message = b"hello,world".to_vec();

        for i in 0..message.len() {
            let mut tampered = message.clone();
            tampered[i] ^= 0x01;
            assert!(
                !signature.verify(&public_key, &tampered).unwrap(),
                "tampered byte {} still verified",
                i
            );
        }
    }

    #[test]
    fn test_signature_mutation_rejected() {
        let signature = Signature::from_base64(fixtures::HELLO_WORLD_SIGNATURE_B64).unwrap();
        let public_key = fixture_public_key();

        for i in [0, 1, 127, 128, 254, 255] {
            let mut raw = signature.as_bytes().to_vec();
            raw[i] ^= 0x80;
            let tampered = Signature::from_bytes(raw);
            assert!(
                !tampered.verify_str(&public_key, "hello,world").unwrap(),
                "tampered signature byte {} still verified",
                i
            );
        }
    }

    #[test]
    fn test_truncated_and_empty_signatures_are_false() {
        let signature = Signature::from_base64(fixtures::HELLO_WORLD_SIGNATURE_B64).unwrap();
        let public_key = fixture_public_key();

        let truncated = Signature::from_bytes(&signature.as_bytes()[..255]);
        assert!(!truncated.verify_str(&public_key, "hello,world").unwrap());

        let empty = Signature::default();
        assert!(empty.is_empty());
        assert!(!empty.verify_str(&public_key, "hello,world").unwrap());

        let oversized = Signature::from_bytes(vec![0xff; 256]);
        assert!(!oversized.verify_str(&public_key, "hello,world").unwrap());
    }

    #[test]
    fn test_wrong_key_is_false() {
        let other = PrivateKey::from_pem(fixtures::RSA4096_PRIVATE_PEM).unwrap();
        let signature = other.sign_str("hello,world").unwrap();

        assert!(signature
            .verify_str(&other.public_key().unwrap(), "hello,world")
            .unwrap());
        assert!(!signature
            .verify_str(&fixture_public_key(), "hello,world")
            .unwrap());
    }

    #[test]
    fn test_empty_public_key_is_error() {
        let signature = Signature::from_base64(fixtures::HELLO_WORLD_SIGNATURE_B64).unwrap();
        assert!(matches!(
            signature.verify(&PublicKey::default(), b"hello,world"),
            Err(Error::EmptyKey)
        ));
    }

    #[test]
    fn test_base64_wire_form() {
        let signature = Signature::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(signature.to_base64(), "3q2+7w==");
        assert_eq!(signature.to_string(), "3q2+7w==");
        assert_eq!(Signature::from_base64("3q2+7w==\n").unwrap(), signature);
    }

    #[test]
    fn test_from_base64_invalid() {
        assert!(matches!(
            Signature::from_base64("%%%"),
            Err(Error::Base64(_))
        ));
    }
}
