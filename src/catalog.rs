//! Algorithm catalog queries
//!
//! Pure queries over the set of algorithms compiled into the engine, split
//! into a [`kems`] and a [`sigs`] namespace. Unknown algorithm names are an
//! expected, recoverable condition: [`kems::is_algorithm_enabled`] answers
//! `Ok(false)` rather than failing. Only a malformed name (empty or
//! non-ASCII) is an error.

use crate::algorithm::{KemAlgorithm, SignatureAlgorithm};
use crate::error::{PqError, Result};
use serde::Serialize;

/// Metadata describing one KEM algorithm, as reported by [`kems::describe`]
/// and [`crate::KeyEncapsulation::details`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KemDetails {
    /// Canonical algorithm name
    pub name: &'static str,
    /// Specification version implemented by the engine
    pub version: &'static str,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the algorithm provides IND-CCA security
    pub ind_cca: bool,
    /// Public key length in bytes
    pub public_key_len: usize,
    /// Secret key length in bytes
    pub secret_key_len: usize,
    /// Ciphertext length in bytes
    pub ciphertext_len: usize,
    /// Shared secret length in bytes
    pub shared_secret_len: usize,
}

impl From<KemAlgorithm> for KemDetails {
    fn from(alg: KemAlgorithm) -> Self {
        Self {
            name: alg.name(),
            version: alg.version(),
            claimed_nist_level: alg.claimed_nist_level(),
            ind_cca: alg.is_ind_cca(),
            public_key_len: alg.public_key_len(),
            secret_key_len: alg.secret_key_len(),
            ciphertext_len: alg.ciphertext_len(),
            shared_secret_len: alg.shared_secret_len(),
        }
    }
}

/// Metadata describing one signature algorithm, as reported by
/// [`sigs::describe`] and [`crate::Signature::details`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignatureDetails {
    /// Canonical algorithm name
    pub name: &'static str,
    /// Specification version implemented by the engine
    pub version: &'static str,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the algorithm provides EUF-CMA security
    pub euf_cma: bool,
    /// Public key length in bytes
    pub public_key_len: usize,
    /// Secret key length in bytes
    pub secret_key_len: usize,
    /// Maximum signature length in bytes; actual signatures may be shorter
    pub max_signature_len: usize,
}

impl From<SignatureAlgorithm> for SignatureDetails {
    fn from(alg: SignatureAlgorithm) -> Self {
        Self {
            name: alg.name(),
            version: alg.version(),
            claimed_nist_level: alg.claimed_nist_level(),
            euf_cma: alg.is_euf_cma(),
            public_key_len: alg.public_key_len(),
            secret_key_len: alg.secret_key_len(),
            max_signature_len: alg.max_signature_len(),
        }
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PqError::invalid_argument("algorithm name is empty"));
    }
    if !name.is_ascii() {
        return Err(PqError::invalid_argument(
            "algorithm name contains non-ASCII characters",
        ));
    }
    Ok(())
}

/// Queries over the compiled-in KEM algorithms
pub mod kems {
    use super::{check_name, KemAlgorithm, KemDetails, PqError, Result};

    /// Names of all enabled KEM algorithms, in stable listing order
    #[must_use]
    pub fn enabled_algorithms() -> Vec<&'static str> {
        KemAlgorithm::ALL.into_iter().map(|alg| alg.name()).collect()
    }

    /// Check whether a KEM algorithm is enabled.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `name` is empty or not ASCII. An unknown name
    /// is not an error; it answers `Ok(false)`.
    pub fn is_algorithm_enabled(name: &str) -> Result<bool> {
        check_name(name)?;
        Ok(KemAlgorithm::from_name(name).is_some())
    }

    /// Full descriptor for an enabled KEM algorithm.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` when the name is unknown, `InvalidArgument`
    /// when it is malformed.
    pub fn describe(name: &str) -> Result<KemDetails> {
        check_name(name)?;
        KemAlgorithm::from_name(name)
            .map(KemDetails::from)
            .ok_or_else(|| PqError::unsupported_algorithm(name))
    }
}

/// Queries over the compiled-in signature algorithms
pub mod sigs {
    use super::{check_name, PqError, Result, SignatureAlgorithm, SignatureDetails};

    /// Names of all enabled signature algorithms, in stable listing order
    #[must_use]
    pub fn enabled_algorithms() -> Vec<&'static str> {
        SignatureAlgorithm::ALL
            .into_iter()
            .map(|alg| alg.name())
            .collect()
    }

    /// Check whether a signature algorithm is enabled.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `name` is empty or not ASCII. An unknown name
    /// is not an error; it answers `Ok(false)`.
    pub fn is_algorithm_enabled(name: &str) -> Result<bool> {
        check_name(name)?;
        Ok(SignatureAlgorithm::from_name(name).is_some())
    }

    /// Full descriptor for an enabled signature algorithm.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` when the name is unknown, `InvalidArgument`
    /// when it is malformed.
    pub fn describe(name: &str) -> Result<SignatureDetails> {
        check_name(name)?;
        SignatureAlgorithm::from_name(name)
            .map(SignatureDetails::from)
            .ok_or_else(|| PqError::unsupported_algorithm(name))
    }
}
