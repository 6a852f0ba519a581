//! Post-quantum KEMs and digital signatures behind a small, uniform API
//!
//! Construct an algorithm session by name, generate a keypair, run the core
//! operation (encapsulate/decapsulate or sign/verify), and query algorithm
//! metadata. The cryptographic algorithms themselves come from the audited
//! PQClean implementations via the `pqcrypto` family of crates; this crate
//! supplies the registry, session lifecycle, and operation contract on top.
//!
//! # Supported Algorithms
//!
//! ## Key Encapsulation Mechanisms (KEMs)
//! - ML-KEM (FIPS 203, formerly CRYSTALS-Kyber)
//!   - ML-KEM-512 (NIST security level 1)
//!   - ML-KEM-768 (NIST security level 3)
//!   - ML-KEM-1024 (NIST security level 5)
//!
//! ## Digital Signature Algorithms
//! - ML-DSA (FIPS 204, formerly CRYSTALS-Dilithium)
//!   - ML-DSA-44, ML-DSA-65, ML-DSA-87
//! - Falcon (compact lattice signatures over NTRU)
//!   - Falcon-512, Falcon-1024
//! - SPHINCS+ (stateless hash-based signatures)
//!   - SHA2 "simple" parameter sets, fast and small variants
//!
//! # Example
//!
//! ```no_run
//! use pqkit::{KeyEncapsulation, Signature};
//!
//! # fn main() -> pqkit::Result<()> {
//! // Alice prepares to receive; Bob encapsulates against her public key.
//! let mut alice = KeyEncapsulation::new("ML-KEM-768")?;
//! let alice_pk = alice.generate_keypair()?;
//!
//! let bob = KeyEncapsulation::new("ML-KEM-768")?;
//! let (ciphertext, bob_secret) = bob.encapsulate_secret(&alice_pk)?.into_parts();
//! let alice_secret = alice.decapsulate_secret(&ciphertext)?;
//! assert_eq!(alice_secret, bob_secret);
//!
//! let mut signer = Signature::new("ML-DSA-65")?;
//! let pk = signer.generate_keypair()?;
//! let sig = signer.sign(b"test")?;
//! assert!(signer.verify(b"test", &sig, &pk)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Sessions are not internally synchronized: concurrent operations on one
//! session instance require external mutual exclusion. Independent sessions,
//! including sessions of the same algorithm, are fully independent. The
//! process-wide random source in [`random`] is shared mutable state; switch
//! it only during single-threaded startup or test setup.

mod algorithm;
pub mod catalog;
mod engine;
mod error;
mod kem;
pub mod random;
mod shared_secret;
mod sig;

pub use self::algorithm::{KemAlgorithm, SignatureAlgorithm};
pub use self::catalog::{KemDetails, SignatureDetails};
pub use self::error::{ErrorKind, PqError, Result};
pub use self::kem::{Encapsulation, KeyEncapsulation};
pub use self::random::RandomSource;
pub use self::shared_secret::SharedSecret;
pub use self::sig::Signature;

/// Prelude for post-quantum cryptography
pub mod prelude {
    pub use super::{
        KemAlgorithm, KeyEncapsulation, PqError, RandomSource, Result, SharedSecret, Signature,
        SignatureAlgorithm,
    };
}
