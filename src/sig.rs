//! Digital signature sessions
//!
//! A [`Signature`] session follows the same lifecycle as a KEM session: bound
//! to one algorithm, empty until a keypair is generated or a secret key is
//! imported, exclusive owner of its key material. Verification needs no key
//! state at all; it is a pure function of message, signature, and public key.

use crate::algorithm::SignatureAlgorithm;
use crate::catalog::SignatureDetails;
use crate::engine;
use crate::error::{PqError, Result};
use tracing::debug;
use zeroize::Zeroizing;

/// A signature session bound to one algorithm, owning at most one keypair
pub struct Signature {
    algorithm: SignatureAlgorithm,
    secret_key: Option<Zeroizing<Vec<u8>>>,
    public_key: Option<Vec<u8>>,
}

impl Signature {
    /// Create an empty session for the named algorithm.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` when the name is not an enabled signature
    /// algorithm.
    pub fn new(algorithm_name: &str) -> Result<Self> {
        let algorithm = SignatureAlgorithm::from_name(algorithm_name)
            .ok_or_else(|| PqError::unsupported_algorithm(algorithm_name))?;
        Ok(Self::empty(algorithm))
    }

    /// Create an empty session for a known algorithm
    #[must_use]
    pub fn for_algorithm(algorithm: SignatureAlgorithm) -> Self {
        Self::empty(algorithm)
    }

    /// Create a session holding an imported secret key.
    ///
    /// The bytes are validated for length only and otherwise trusted.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` for an unknown name, `InvalidArgument` when the
    /// key length does not match the algorithm.
    pub fn from_secret_key(algorithm_name: &str, secret_key: &[u8]) -> Result<Self> {
        let algorithm = SignatureAlgorithm::from_name(algorithm_name)
            .ok_or_else(|| PqError::unsupported_algorithm(algorithm_name))?;
        if secret_key.len() != algorithm.secret_key_len() {
            return Err(PqError::invalid_length(
                "secret key",
                algorithm.secret_key_len(),
                secret_key.len(),
            ));
        }
        Ok(Self {
            algorithm,
            secret_key: Some(Zeroizing::new(secret_key.to_vec())),
            public_key: None,
        })
    }

    fn empty(algorithm: SignatureAlgorithm) -> Self {
        Self {
            algorithm,
            secret_key: None,
            public_key: None,
        }
    }

    /// Generate a fresh keypair and return the public key.
    ///
    /// Legal only while the session holds no secret key; a second call fails
    /// rather than silently replacing the keypair.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the session already holds a secret key,
    /// `EngineFailure` when the engine cannot produce a keypair.
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        if self.secret_key.is_some() {
            return Err(PqError::InvalidState(
                "session already holds a keypair; create a new session to rotate keys",
            ));
        }
        let (public_key, secret_key) = engine::sig::keypair(self.algorithm)?;
        debug!(algorithm = %self.algorithm, "generated signature keypair");
        self.secret_key = Some(Zeroizing::new(secret_key));
        self.public_key = Some(public_key.clone());
        Ok(public_key)
    }

    /// Export the secret key.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the session holds no secret key.
    pub fn export_secret_key(&self) -> Result<Vec<u8>> {
        self.secret_key
            .as_ref()
            .map(|sk| sk.to_vec())
            .ok_or(PqError::InvalidState("session holds no secret key"))
    }

    /// The generated public key, when this session produced one
    #[must_use]
    pub fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_deref()
    }

    /// Whether the session currently holds a secret key
    #[must_use]
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Sign a message of any length, including empty.
    ///
    /// The returned signature is at most
    /// [`SignatureAlgorithm::max_signature_len`] bytes; variable-length
    /// schemes such as Falcon report the actual used length, so callers must
    /// not assume a fixed size.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the session holds no secret key.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(PqError::InvalidState("session holds no secret key"))?;
        let signature = engine::sig::sign(self.algorithm, secret_key, message)?;
        debug!(
            algorithm = %self.algorithm,
            message_len = message.len(),
            signature_len = signature.len(),
            "signed message"
        );
        Ok(signature)
    }

    /// Verify a detached signature against a message and public key.
    ///
    /// Pure in its three inputs; no session key state is consulted. Any
    /// cryptographic rejection, including tampered messages, wrong keys, and
    /// malformed signature bytes, answers `Ok(false)`. Errors are reserved
    /// for structurally invalid arguments.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `public_key` has the wrong length.
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let valid = engine::sig::verify(self.algorithm, public_key, message, signature)?;
        debug!(algorithm = %self.algorithm, valid, "verified signature");
        Ok(valid)
    }

    /// The algorithm this session is bound to
    #[must_use]
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Full descriptor of this session's algorithm
    #[must_use]
    pub fn details(&self) -> SignatureDetails {
        SignatureDetails::from(self.algorithm)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("algorithm", &self.algorithm)
            .field("has_secret_key", &self.has_secret_key())
            .finish()
    }
}
