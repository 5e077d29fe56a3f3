//! RSA private keys held as PKCS#1 `RSAPrivateKey` DER.

use std::fmt;
use std::path::Path;

use rand::rngs::OsRng;
use rsa::pkcs1::der::Decode;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{BigUint, RsaPrivateKey};
use sha2::Sha256;
use tracing::{debug, warn};

use crate::error::Error;
use crate::pem::{self, RSA_PRIVATE_KEY_LABEL};
use crate::public_key::PublicKey;
use crate::signature::Signature;

/// An RSA private key.
///
/// `PrivateKey::default()` is the empty key: [`PrivateKey::is_empty`] is the
/// only meaningful operation on it and everything else fails. Keys built by
/// [`PrivateKey::generate`] or [`PrivateKey::from_pem`] always hold a
/// structurally valid PKCS#1 encoding and never change afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PrivateKey {
    raw: Vec<u8>,
}

impl PrivateKey {
    /// Generate a fresh key with a `bit_length`-bit modulus from the OS RNG.
    ///
    /// No size policy is applied here; callers wanting a minimum should check
    /// `bit_length` before calling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyGenerationFailed`] if the provider rejects the size.
    pub fn generate(bit_length: usize) -> Result<Self, Error> {
        let mut rng = OsRng;

        let key = RsaPrivateKey::new(&mut rng, bit_length).map_err(|e| {
            warn!(bit_length, error = %e, "RSA key generation failed");
            Error::KeyGenerationFailed(e.to_string())
        })?;
        let der = key
            .to_pkcs1_der()
            .map_err(|e| Error::KeyGenerationFailed(e.to_string()))?;

        debug!(bit_length, "generated private key");
        Ok(Self {
            raw: der.as_bytes().to_vec(),
        })
    }

    /// Import an `RSA PRIVATE KEY` PEM block. The block content is kept verbatim.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidPemFormat`] if the text is not a single PEM block
    /// * [`Error::WrongPemType`] if the block is not labelled `RSA PRIVATE KEY`
    /// * [`Error::KeyParseFailed`] if the content is not PKCS#1 DER
    pub fn from_pem(pem: impl AsRef<[u8]>) -> Result<Self, Error> {
        let raw = pem::decode(pem.as_ref())?.expect_label(RSA_PRIVATE_KEY_LABEL)?;
        let key = Self { raw };

        // Content that is not PKCS#1 never becomes a key.
        let pkcs1 = key.pkcs1()?;
        debug!(bits = modulus_bits(&pkcs1), "imported private key");
        Ok(key)
    }

    /// Read and import a PEM file.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = std::fs::read(path)?;
        Self::from_pem(data)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw PKCS#1 DER.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn to_pem(&self) -> Result<String, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        pem::encode(RSA_PRIVATE_KEY_LABEL, &self.raw)
    }

    /// Parse into an [`rsa::RsaPrivateKey`] for use with the provider directly.
    pub fn to_rsa(&self) -> Result<RsaPrivateKey, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(RsaPrivateKey::from_pkcs1_der(&self.raw)?)
    }

    /// Derive the matching public key from the modulus and public exponent.
    ///
    /// The result is trusted and skips the import size policy.
    pub fn public_key(&self) -> Result<PublicKey, Error> {
        let key = self.pkcs1()?;
        PublicKey::from_modulus_exponent(key.modulus.as_bytes(), key.public_exponent.as_bytes())
    }

    /// Sign `message` with RSASSA-PKCS1-v1_5 over its SHA-256 digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SigningFailed`] if the key is empty or the provider
    /// cannot sign with it.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, Error> {
        if self.is_empty() {
            return Err(Error::SigningFailed("private key is empty".to_string()));
        }

        let key = RsaPrivateKey::from_pkcs1_der(&self.raw)
            .map_err(|e| Error::SigningFailed(e.to_string()))?;
        let signing_key = SigningKey::<Sha256>::new(key);

        let signature = signing_key.try_sign(message).map_err(|e| {
            warn!(error = %e, "RSA signing failed");
            Error::SigningFailed(e.to_string())
        })?;

        Ok(Signature::from_bytes(signature.to_vec()))
    }

    /// Sign the UTF-8 bytes of `message`.
    pub fn sign_str(&self, message: &str) -> Result<Signature, Error> {
        self.sign(message.as_bytes())
    }

    /// Modulus length in bits.
    pub fn key_length(&self) -> Result<usize, Error> {
        let key = self.pkcs1().map_err(|e| match e {
            Error::KeyParseFailed(msg) => Error::KeyLengthUnavailable(msg),
            other => other,
        })?;
        Ok(modulus_bits(&key))
    }

    fn pkcs1(&self) -> Result<rsa::pkcs1::RsaPrivateKey<'_>, Error> {
        if self.is_empty() {
            return Err(Error::EmptyKey);
        }
        rsa::pkcs1::RsaPrivateKey::from_der(&self.raw)
            .map_err(|e| Error::KeyParseFailed(e.to_string()))
    }
}

fn modulus_bits(key: &rsa::pkcs1::RsaPrivateKey<'_>) -> usize {
    BigUint::from_bytes_be(key.modulus.as_bytes()).bits()
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("empty", &self.is_empty())
            .finish_non_exhaustive()
    }
}

/// A private key together with its derived public key.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new key pair; see [`PrivateKey::generate`].
    pub fn generate(bit_length: usize) -> Result<Self, Error> {
        let private_key = PrivateKey::generate(bit_length)?;
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
        })
    }
}
