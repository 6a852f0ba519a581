//! Shared secret type for KEM operations

use crate::algorithm::KemAlgorithm;
use crate::error::{PqError, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A shared secret produced by KEM encapsulation or decapsulation.
///
/// Wraps the raw secret bytes together with the algorithm that produced them
/// and zeroizes the bytes on drop. Equality is constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    #[zeroize(skip)]
    algorithm: KemAlgorithm,
    secret: Vec<u8>,
}

impl SharedSecret {
    pub(crate) fn new(algorithm: KemAlgorithm, secret: Vec<u8>) -> Self {
        debug_assert_eq!(secret.len(), algorithm.shared_secret_len());
        Self { algorithm, secret }
    }

    /// Import a shared secret from raw bytes.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the length does not match the algorithm's
    /// shared secret length.
    pub fn from_bytes(algorithm: KemAlgorithm, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != algorithm.shared_secret_len() {
            return Err(PqError::invalid_length(
                "shared secret",
                algorithm.shared_secret_len(),
                bytes.len(),
            ));
        }
        Ok(Self::new(algorithm, bytes.to_vec()))
    }

    /// The algorithm that produced this shared secret
    #[must_use]
    pub fn algorithm(&self) -> KemAlgorithm {
        self.algorithm
    }

    /// The shared secret as a byte slice
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// Copy the shared secret into a fresh vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.secret.clone()
    }

    /// Length of the shared secret in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// Whether the shared secret is empty (never true for a real secret)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Hex encoding of the shared secret
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.secret)
    }

    /// Base64 encoding of the shared secret
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.secret)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("algorithm", &self.algorithm)
            .field("length", &self.secret.len())
            .finish()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.algorithm == other.algorithm && self.secret.ct_eq(&other.secret).into()
    }
}

impl Eq for SharedSecret {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use hex_literal::hex;

    #[test]
    fn from_bytes_enforces_algorithm_length() {
        let err = SharedSecret::from_bytes(KemAlgorithm::MlKem768, &[0u8; 31]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let ss = SharedSecret::from_bytes(KemAlgorithm::MlKem768, &[0u8; 32]).unwrap();
        assert_eq!(ss.len(), 32);
        assert_eq!(ss.algorithm(), KemAlgorithm::MlKem768);
    }

    #[test]
    fn hex_export_roundtrips() {
        let bytes = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let ss = SharedSecret::from_bytes(KemAlgorithm::MlKem512, &bytes).unwrap();
        assert_eq!(hex::decode(ss.to_hex()).unwrap(), bytes);
    }

    #[test]
    fn debug_does_not_leak_bytes() {
        let ss = SharedSecret::from_bytes(KemAlgorithm::MlKem768, &[0xAB; 32]).unwrap();
        let rendered = format!("{ss:?}");
        assert!(!rendered.contains("ab"));
        assert!(rendered.contains("length"));
    }

    #[test]
    fn equality_requires_same_algorithm() {
        let a = SharedSecret::from_bytes(KemAlgorithm::MlKem512, &[1u8; 32]).unwrap();
        let b = SharedSecret::from_bytes(KemAlgorithm::MlKem768, &[1u8; 32]).unwrap();
        assert_ne!(a, b);
    }
}
