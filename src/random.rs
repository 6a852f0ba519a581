//! Randomness sources
//!
//! [`RandomSource`] is a cloneable capability handle over a swappable backing
//! source. The default backing draws from the operating system; a deterministic
//! backing exists solely for known-answer-test validation and must be opted
//! into explicitly with [`RandomSource::init_deterministic`].
//!
//! The free functions at the bottom of this module operate on a single
//! process-wide source, mirroring the classic global `Random` surface. Swapping
//! that source is not atomic with respect to concurrent consumers elsewhere in
//! the process; call [`switch_algorithm`] and [`init_deterministic`] only
//! during single-threaded startup or test setup. Code that needs isolation
//! (tests in particular) should hold its own [`RandomSource`] instead.

use crate::error::{PqError, Result};
use once_cell::sync::Lazy;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Identifier of the operating-system entropy backing
pub const SYSTEM: &str = "system";

/// Identifier of the deterministic known-answer-test backing
pub const NIST_KAT: &str = "nist-kat";

/// Required entropy length for seeding the deterministic backing, in bytes
pub const KAT_ENTROPY_LEN: usize = 48;

enum Backing {
    System,
    NistKat(ChaCha20Rng),
}

impl Backing {
    fn id(&self) -> &'static str {
        match self {
            Self::System => SYSTEM,
            Self::NistKat(_) => NIST_KAT,
        }
    }
}

/// A pluggable source of random bytes.
///
/// Clones share the same backing, so a source can be handed to several
/// consumers while remaining switchable from one place.
#[derive(Clone)]
pub struct RandomSource {
    inner: Arc<RwLock<Backing>>,
}

impl RandomSource {
    /// Create a source backed by the operating system's entropy
    #[must_use]
    pub fn system() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Backing::System)),
        }
    }

    /// Handle to the process-wide source shared by the module-level functions
    #[must_use]
    pub fn process() -> Self {
        PROCESS_SOURCE.clone()
    }

    /// Generate `n` random bytes. `n = 0` yields an empty buffer.
    ///
    /// # Errors
    ///
    /// `EngineFailure` when the backing entropy source fails.
    pub fn random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Fill `buf` with random bytes from the current backing.
    ///
    /// # Errors
    ///
    /// `EngineFailure` when the backing entropy source fails.
    pub fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut backing = self.inner.write().map_err(|_| lock_poisoned())?;
        match &mut *backing {
            Backing::System => getrandom::fill(buf)
                .map_err(|e| PqError::engine_failure(format!("system entropy source: {e}"))),
            Backing::NistKat(rng) => {
                rng.fill_bytes(buf);
                Ok(())
            }
        }
    }

    /// Switch the backing source by identifier.
    ///
    /// Known identifiers are [`SYSTEM`] and [`NIST_KAT`].
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` for an unknown identifier. Switching to
    /// [`NIST_KAT`] before [`Self::init_deterministic`] has seeded the
    /// deterministic backing is `InvalidState`.
    pub fn switch_algorithm(&self, id: &str) -> Result<()> {
        let mut backing = self.inner.write().map_err(|_| lock_poisoned())?;
        match id {
            SYSTEM => {
                debug!(source = SYSTEM, "switching random source");
                *backing = Backing::System;
                Ok(())
            }
            NIST_KAT => match *backing {
                Backing::NistKat(_) => Ok(()),
                Backing::System => Err(PqError::InvalidState(
                    "deterministic source not seeded; call init_deterministic first",
                )),
            },
            other => Err(PqError::unsupported_algorithm(other)),
        }
    }

    /// Seed the deterministic known-answer-test backing and switch to it.
    ///
    /// The output stream is a pure function of `entropy` and
    /// `personalization`: reseeding with equal inputs reproduces the same
    /// bytes. Never enable this in a production configuration.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `entropy` is exactly [`KAT_ENTROPY_LEN`]
    /// bytes and `personalization`, when present, is at least that long.
    pub fn init_deterministic(
        &self,
        entropy: &[u8],
        personalization: Option<&[u8]>,
    ) -> Result<()> {
        if entropy.len() != KAT_ENTROPY_LEN {
            return Err(PqError::invalid_length(
                "entropy",
                KAT_ENTROPY_LEN,
                entropy.len(),
            ));
        }
        if let Some(pers) = personalization {
            if pers.len() < KAT_ENTROPY_LEN {
                return Err(PqError::invalid_argument(format!(
                    "personalization string must be at least {KAT_ENTROPY_LEN} bytes, got {}",
                    pers.len()
                )));
            }
        }

        let mut xof = Shake256::default();
        xof.update(entropy);
        if let Some(pers) = personalization {
            xof.update(pers);
        }
        let mut seed = [0u8; 32];
        xof.finalize_xof().read(&mut seed);

        let mut backing = self.inner.write().map_err(|_| lock_poisoned())?;
        debug!(source = NIST_KAT, "seeding deterministic random source");
        *backing = Backing::NistKat(ChaCha20Rng::from_seed(seed));
        Ok(())
    }

    /// Identifier of the currently active backing
    #[must_use]
    pub fn current_algorithm(&self) -> &'static str {
        self.inner
            .read()
            .map(|backing| backing.id())
            .unwrap_or(SYSTEM)
    }

    /// Whether the deterministic test backing is active
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.current_algorithm() == NIST_KAT
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource")
            .field("backing", &self.current_algorithm())
            .finish()
    }
}

fn lock_poisoned() -> PqError {
    PqError::engine_failure("random source lock poisoned")
}

static PROCESS_SOURCE: Lazy<RandomSource> = Lazy::new(RandomSource::system);

/// Generate `n` random bytes from the process-wide source.
///
/// # Errors
///
/// `EngineFailure` when the backing entropy source fails.
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    PROCESS_SOURCE.random_bytes(n)
}

/// Switch the process-wide source by identifier. See
/// [`RandomSource::switch_algorithm`].
///
/// # Errors
///
/// `UnsupportedAlgorithm` for an unknown identifier, `InvalidState` when
/// switching to an unseeded deterministic backing.
pub fn switch_algorithm(id: &str) -> Result<()> {
    PROCESS_SOURCE.switch_algorithm(id)
}

/// Seed the process-wide deterministic backing and switch to it. See
/// [`RandomSource::init_deterministic`].
///
/// # Errors
///
/// `InvalidArgument` on malformed seed material.
pub fn init_deterministic(entropy: &[u8], personalization: Option<&[u8]>) -> Result<()> {
    PROCESS_SOURCE.init_deterministic(entropy, personalization)
}
