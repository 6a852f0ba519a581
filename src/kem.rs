//! Key encapsulation sessions
//!
//! A [`KeyEncapsulation`] session is bound to one algorithm and owns at most
//! one keypair. Sessions start empty, gain a secret key through
//! [`KeyEncapsulation::generate_keypair`] or by importing one at construction,
//! and never share key material with other sessions. Operations on a single
//! session are not internally synchronized; independent sessions are fully
//! independent and safe to use concurrently.

use crate::algorithm::KemAlgorithm;
use crate::catalog::KemDetails;
use crate::engine;
use crate::error::{PqError, Result};
use crate::shared_secret::SharedSecret;
use tracing::debug;
use zeroize::Zeroizing;

/// Result of a KEM encapsulation: the ciphertext to transmit and the shared
/// secret the encapsulating party keeps
#[derive(Debug)]
pub struct Encapsulation {
    ciphertext: Vec<u8>,
    shared_secret: SharedSecret,
}

impl Encapsulation {
    /// The ciphertext to send to the holder of the secret key
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The locally derived shared secret
    #[must_use]
    pub fn shared_secret(&self) -> &SharedSecret {
        &self.shared_secret
    }

    /// Split into owned ciphertext and shared secret
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, SharedSecret) {
        (self.ciphertext, self.shared_secret)
    }
}

/// A KEM session bound to one algorithm, owning at most one keypair
pub struct KeyEncapsulation {
    algorithm: KemAlgorithm,
    secret_key: Option<Zeroizing<Vec<u8>>>,
    public_key: Option<Vec<u8>>,
}

impl KeyEncapsulation {
    /// Create an empty session for the named algorithm.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` when the name is not an enabled KEM algorithm.
    pub fn new(algorithm_name: &str) -> Result<Self> {
        let algorithm = KemAlgorithm::from_name(algorithm_name)
            .ok_or_else(|| PqError::unsupported_algorithm(algorithm_name))?;
        Ok(Self::empty(algorithm))
    }

    /// Create an empty session for a known algorithm
    #[must_use]
    pub fn for_algorithm(algorithm: KemAlgorithm) -> Self {
        Self::empty(algorithm)
    }

    /// Create a session holding an imported secret key.
    ///
    /// The bytes are validated for length only and otherwise trusted; the
    /// session has no public key until a caller supplies one out of band.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` for an unknown name, `InvalidArgument` when the
    /// key length does not match the algorithm.
    pub fn from_secret_key(algorithm_name: &str, secret_key: &[u8]) -> Result<Self> {
        let algorithm = KemAlgorithm::from_name(algorithm_name)
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

    fn empty(algorithm: KemAlgorithm) -> Self {
        Self {
            algorithm,
            secret_key: None,
            public_key: None,
        }
    }

    /// Generate a fresh keypair and return the public key.
    ///
    /// Legal only while the session holds no secret key; a second call fails
    /// rather than silently replacing the keypair. Create a new session to
    /// rotate keys.
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
        let (public_key, secret_key) = engine::kem::keypair(self.algorithm)?;
        debug!(algorithm = %self.algorithm, "generated KEM keypair");
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

    /// The generated public key, when this session produced one.
    ///
    /// Absent for empty sessions and for sessions built from an imported
    /// secret key.
    #[must_use]
    pub fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_deref()
    }

    /// Whether the session currently holds a secret key
    #[must_use]
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Encapsulate a fresh shared secret against a peer's public key.
    ///
    /// Requires no local key material. Each call consumes fresh engine
    /// randomness, so repeated calls with the same public key produce
    /// unrelated ciphertexts.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `peer_public_key` has the wrong length.
    pub fn encapsulate_secret(&self, peer_public_key: &[u8]) -> Result<Encapsulation> {
        let (ciphertext, secret_bytes) =
            engine::kem::encapsulate(self.algorithm, peer_public_key)?;
        debug!(algorithm = %self.algorithm, "encapsulated shared secret");
        Ok(Encapsulation {
            ciphertext,
            shared_secret: SharedSecret::new(self.algorithm, secret_bytes),
        })
    }

    /// Decapsulate a ciphertext with this session's secret key.
    ///
    /// A malformed but correctly-sized ciphertext still yields a shared
    /// secret (implicit rejection); it will simply fail to match the
    /// encapsulating party's. Callers must not treat the result as
    /// authenticated.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the session holds no secret key,
    /// `InvalidArgument` when `ciphertext` has the wrong length.
    pub fn decapsulate_secret(&self, ciphertext: &[u8]) -> Result<SharedSecret> {
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(PqError::InvalidState("session holds no secret key"))?;
        let secret_bytes = engine::kem::decapsulate(self.algorithm, secret_key, ciphertext)?;
        debug!(algorithm = %self.algorithm, "decapsulated shared secret");
        Ok(SharedSecret::new(self.algorithm, secret_bytes))
    }

    /// The algorithm this session is bound to
    #[must_use]
    pub fn algorithm(&self) -> KemAlgorithm {
        self.algorithm
    }

    /// Full descriptor of this session's algorithm
    #[must_use]
    pub fn details(&self) -> KemDetails {
        KemDetails::from(self.algorithm)
    }
}

impl std::fmt::Debug for KeyEncapsulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyEncapsulation")
            .field("algorithm", &self.algorithm)
            .field("has_secret_key", &self.has_secret_key())
            .finish()
    }
}
