//! RSA public keys held as X.509 `SubjectPublicKeyInfo` DER.

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use rsa::pkcs8::{EncodePublicKey, SubjectPublicKeyInfoRef};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Error;
use crate::pem::{self, PUBLIC_KEY_LABEL};
use crate::policy::KeyPolicy;

/// Largest modulus accepted from key material, in bits.
const MAX_MODULUS_BITS: usize = 16384;

/// An RSA public key.
///
/// Keys imported from text (PEM or base64) have passed a [`KeyPolicy`] size
/// check. Keys derived from a private key or wrapped from an
/// [`rsa::RsaPublicKey`] have not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PublicKey {
    raw: Vec<u8>,
}

impl PublicKey {
    /// Import a `PUBLIC KEY` PEM block under the default [`KeyPolicy`].
    pub fn from_pem(pem: impl AsRef<[u8]>) -> Result<Self, Error> {
        Self::from_pem_with_policy(pem, &KeyPolicy::default())
    }

    /// Import a `PUBLIC KEY` PEM block.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidPemFormat`] if the text is not a single PEM block
    /// * [`Error::WrongPemType`] if the block is not labelled `PUBLIC KEY`
    /// * [`Error::KeyParseFailed`] if the block does not hold an RSA key
    /// * [`Error::Configuration`] if `policy` is below the absolute floor
    /// * [`Error::KeyTooShort`] if the modulus is shorter than `policy` allows
    pub fn from_pem_with_policy(pem: impl AsRef<[u8]>, policy: &KeyPolicy) -> Result<Self, Error> {
        let raw = pem::decode(pem.as_ref())?.expect_label(PUBLIC_KEY_LABEL)?;
        Self::from_der_checked(raw, policy)
    }

    /// Read and import a PEM file.
    pub fn from_pem_file(path: impl AsRef<Path>, policy: &KeyPolicy) -> Result<Self, Error> {
        let data = std::fs::read(path)?;
        Self::from_pem_with_policy(data, policy)
    }

    /// Import an unarmored base64 `SubjectPublicKeyInfo` under the default
    /// [`KeyPolicy`].
    pub fn from_base64(data: impl AsRef<[u8]>) -> Result<Self, Error> {
        Self::from_base64_with_policy(data, &KeyPolicy::default())
    }

    /// Import an unarmored base64 `SubjectPublicKeyInfo`.
    ///
    /// Fails like [`PublicKey::from_pem_with_policy`], with corrupt base64
    /// reported as [`Error::InvalidPemFormat`].
    pub fn from_base64_with_policy(
        data: impl AsRef<[u8]>,
        policy: &KeyPolicy,
    ) -> Result<Self, Error> {
        let raw = general_purpose::STANDARD
            .decode(data.as_ref().trim_ascii())
            .map_err(|e| Error::InvalidPemFormat(format!("invalid base64 public key: {}", e)))?;
        Self::from_der_checked(raw, policy)
    }

    /// Build a key from a big-endian modulus and public exponent.
    ///
    /// No size policy is applied. Moduli longer than 16384 bits are refused.
    pub fn from_modulus_exponent(n: &[u8], e: &[u8]) -> Result<Self, Error> {
        Self::from_rsa(&rsa_from_parts(n, e)?)
    }

    /// Wrap an [`rsa::RsaPublicKey`]. No size policy is applied.
    pub fn from_rsa(key: &RsaPublicKey) -> Result<Self, Error> {
        let der = key.to_public_key_der()?;
        Ok(Self {
            raw: der.as_bytes().to_vec(),
        })
    }

    fn from_der_checked(raw: Vec<u8>, policy: &KeyPolicy) -> Result<Self, Error> {
        let bits = parse_spki(&raw)?.n().bits();
        policy.check(bits)?;
        debug!(bits, "imported public key");
        Ok(Self { raw })
    }

    /// Parse into an [`rsa::RsaPublicKey`] for use with the provider directly.
    pub fn to_rsa(&self) -> Result<RsaPublicKey, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        parse_spki(&self.raw)
    }

    /// Raw `SubjectPublicKeyInfo` DER.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Modulus length in bits.
    pub fn key_length(&self) -> Result<usize, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        let key = parse_spki(&self.raw).map_err(|e| match e {
            Error::KeyParseFailed(msg) => Error::KeyLengthUnavailable(msg),
            other => other,
        })?;
        Ok(key.n().bits())
    }

    pub fn to_pem(&self) -> Result<String, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        pem::encode(PUBLIC_KEY_LABEL, &self.raw)
    }

    /// Standard base64 of the DER, without line wrapping.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.raw)
    }

    /// Lowercase hex SHA-256 of the key's PEM text, as ASCII bytes.
    ///
    /// The result is the 64-character hex string, not the 32-byte digest.
    pub fn fingerprint(&self) -> Result<Vec<u8>, Error> {
        let pem = self.to_pem()?;
        let digest = Sha256::digest(pem.as_bytes());
        Ok(hex::encode(digest).into_bytes())
    }
}

fn rsa_from_parts(n: &[u8], e: &[u8]) -> Result<RsaPublicKey, Error> {
    RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(n),
        BigUint::from_bytes_be(e),
        MAX_MODULUS_BITS,
    )
    .map_err(|e| Error::KeyParseFailed(e.to_string()))
}

/// Decode an rsaEncryption `SubjectPublicKeyInfo` down to its PKCS#1 key.
fn parse_spki(der: &[u8]) -> Result<RsaPublicKey, Error> {
    let spki = SubjectPublicKeyInfoRef::try_from(der)?;
    spki.algorithm.assert_algorithm_oid(rsa::pkcs1::ALGORITHM_OID)?;

    let key_bytes = spki.subject_public_key.as_bytes().ok_or_else(|| {
        Error::KeyParseFailed("public key bit string has unused bits".to_string())
    })?;
    let key = rsa::pkcs1::RsaPublicKey::try_from(key_bytes)?;
    rsa_from_parts(key.modulus.as_bytes(), key.public_exponent.as_bytes())
}
