//! # rsakit
//!
//! RSA key material in PEM form, with SHA-256 RSASSA-PKCS1-v1_5 signatures.
//!
//! The crate wraps the RustCrypto `rsa` provider in small immutable value types
//! that speak the formats clients exchange: PKCS#1 `RSA PRIVATE KEY` blocks
//! for private keys, X.509 `PUBLIC KEY` blocks (or bare base64) for public
//! keys, and base64 for signatures.
//!
//! ## Features
//!
//! - **Key Generation**: fresh RSA keys of any size the provider accepts
//! - **PEM Import/Export**: lossless round trips for both key types
//! - **Public Key Derivation**: recover the public half from a private key
//! - **Signing and Verification**: deterministic PKCS#1 v1.5 over SHA-256
//! - **Fingerprints**: hex SHA-256 of a public key's PEM text
//! - **Size Policy**: imported public keys must meet a [`KeyPolicy`] minimum
//!
//! ## Quick Start
//!
//! ```rust
//! use rsakit::{KeyPolicy, PrivateKey, PublicKey, Signature};
//!
//! let private_key = PrivateKey::generate(2048).unwrap();
//! let signature = private_key.sign(b"hello,world").unwrap();
//!
//! // Ship the public key and signature as text...
//! let public_pem = private_key.public_key().unwrap().to_pem().unwrap();
//! let signature_b64 = signature.to_base64();
//!
//! // ...and check them on the other side. 2048-bit keys are below the
//! // default 4096-bit minimum, so the verifier opts into a smaller one.
//! let public_key = PublicKey::from_pem_with_policy(&public_pem, &KeyPolicy::new(2048)).unwrap();
//! let signature = Signature::from_base64(&signature_b64).unwrap();
//! assert!(signature.verify(&public_key, b"hello,world").unwrap());
//!
//! let fingerprint = public_key.fingerprint().unwrap();
//! assert_eq!(fingerprint.len(), 64);
//! ```
//!
//! ## Size Policy
//!
//! [`KeyPolicy`] is passed explicitly wherever a public key is imported from
//! text. Its minimum may be raised freely but never set below
//! [`ABSOLUTE_MIN_PUBLIC_KEY_SIZE`]; a policy that tries is rejected with
//! [`Error::Configuration`] at the point of use. Keys derived from a private
//! key are not re-checked.
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, Error>`. A signature that simply
//! does not match is not an error: [`Signature::verify`] returns `Ok(false)`.

pub mod error;
pub mod pem;
pub mod policy;
pub mod private_key;
pub mod public_key;
pub mod signature;

#[cfg(test)]
mod fixtures;

pub use error::Error;
pub use pem::PemBlock;
pub use policy::{KeyPolicy, ABSOLUTE_MIN_PUBLIC_KEY_SIZE, DEFAULT_MIN_PUBLIC_KEY_SIZE};
pub use private_key::{KeyPair, PrivateKey};
pub use public_key::PublicKey;
pub use signature::Signature;
