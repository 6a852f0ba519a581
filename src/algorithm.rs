//! Algorithm identifiers and their fixed parameter sets
//!
//! Every supported algorithm is a variant of [`KemAlgorithm`] or
//! [`SignatureAlgorithm`]. The byte lengths returned here are constants fixed
//! by the algorithm specification; the engine unit tests cross-check them
//! against what the native implementation reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key Encapsulation Mechanism (KEM) algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KemAlgorithm {
    /// ML-KEM-512 (FIPS 203, NIST security level 1)
    /// Formerly known as Kyber512
    #[serde(rename = "ml-kem-512")]
    MlKem512,

    /// ML-KEM-768 (FIPS 203, NIST security level 3)
    /// Formerly known as Kyber768
    #[serde(rename = "ml-kem-768")]
    #[default]
    MlKem768,

    /// ML-KEM-1024 (FIPS 203, NIST security level 5)
    /// Formerly known as Kyber1024
    #[serde(rename = "ml-kem-1024")]
    MlKem1024,
}

impl KemAlgorithm {
    /// All KEM algorithms compiled into the engine, in stable listing order.
    ///
    /// The order is stable but not contractually meaningful; callers must not
    /// base security decisions on it.
    pub const ALL: [Self; 3] = [Self::MlKem512, Self::MlKem768, Self::MlKem1024];

    /// Look up an algorithm by its canonical name (e.g. "ML-KEM-768")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.name() == name)
    }

    /// Canonical algorithm name as the native engine spells it
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MlKem512 => "ML-KEM-512",
            Self::MlKem768 => "ML-KEM-768",
            Self::MlKem1024 => "ML-KEM-1024",
        }
    }

    /// Specification version implemented by the engine
    #[must_use]
    pub fn version(&self) -> &'static str {
        "FIPS 203"
    }

    /// Claimed NIST security level (1-5)
    #[must_use]
    pub fn claimed_nist_level(&self) -> u8 {
        match self {
            Self::MlKem512 => 1,
            Self::MlKem768 => 3,
            Self::MlKem1024 => 5,
        }
    }

    /// Whether the algorithm provides IND-CCA security
    #[must_use]
    pub fn is_ind_cca(&self) -> bool {
        true
    }

    /// Public key length in bytes
    #[must_use]
    pub fn public_key_len(&self) -> usize {
        match self {
            Self::MlKem512 => 800,
            Self::MlKem768 => 1184,
            Self::MlKem1024 => 1568,
        }
    }

    /// Secret key length in bytes
    #[must_use]
    pub fn secret_key_len(&self) -> usize {
        match self {
            Self::MlKem512 => 1632,
            Self::MlKem768 => 2400,
            Self::MlKem1024 => 3168,
        }
    }

    /// Ciphertext length in bytes
    #[must_use]
    pub fn ciphertext_len(&self) -> usize {
        match self {
            Self::MlKem512 => 768,
            Self::MlKem768 => 1088,
            Self::MlKem1024 => 1568,
        }
    }

    /// Shared secret length in bytes (always 32 for ML-KEM)
    #[must_use]
    pub fn shared_secret_len(&self) -> usize {
        32
    }
}

impl fmt::Display for KemAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digital signature algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SignatureAlgorithm {
    /// ML-DSA-44 (FIPS 204, NIST security level 2)
    /// Formerly known as Dilithium2
    #[serde(rename = "ml-dsa-44")]
    MlDsa44,

    /// ML-DSA-65 (FIPS 204, NIST security level 3)
    /// Formerly known as Dilithium3
    #[serde(rename = "ml-dsa-65")]
    #[default]
    MlDsa65,

    /// ML-DSA-87 (FIPS 204, NIST security level 5)
    /// Formerly known as Dilithium5
    #[serde(rename = "ml-dsa-87")]
    MlDsa87,

    /// Falcon-512 (NIST security level 1)
    #[serde(rename = "falcon-512")]
    Falcon512,

    /// Falcon-1024 (NIST security level 5)
    #[serde(rename = "falcon-1024")]
    Falcon1024,

    /// SPHINCS+-SHA2-128f-simple (NIST security level 1, fast)
    #[serde(rename = "sphincs-sha2-128f-simple")]
    SphincsSha2_128fSimple,

    /// SPHINCS+-SHA2-128s-simple (NIST security level 1, small)
    #[serde(rename = "sphincs-sha2-128s-simple")]
    SphincsSha2_128sSimple,

    /// SPHINCS+-SHA2-192f-simple (NIST security level 3, fast)
    #[serde(rename = "sphincs-sha2-192f-simple")]
    SphincsSha2_192fSimple,

    /// SPHINCS+-SHA2-192s-simple (NIST security level 3, small)
    #[serde(rename = "sphincs-sha2-192s-simple")]
    SphincsSha2_192sSimple,

    /// SPHINCS+-SHA2-256f-simple (NIST security level 5, fast)
    #[serde(rename = "sphincs-sha2-256f-simple")]
    SphincsSha2_256fSimple,

    /// SPHINCS+-SHA2-256s-simple (NIST security level 5, small)
    #[serde(rename = "sphincs-sha2-256s-simple")]
    SphincsSha2_256sSimple,
}

impl SignatureAlgorithm {
    /// All signature algorithms compiled into the engine, in stable listing order
    pub const ALL: [Self; 11] = [
        Self::MlDsa44,
        Self::MlDsa65,
        Self::MlDsa87,
        Self::Falcon512,
        Self::Falcon1024,
        Self::SphincsSha2_128fSimple,
        Self::SphincsSha2_128sSimple,
        Self::SphincsSha2_192fSimple,
        Self::SphincsSha2_192sSimple,
        Self::SphincsSha2_256fSimple,
        Self::SphincsSha2_256sSimple,
    ];

    /// Look up an algorithm by its canonical name (e.g. "ML-DSA-65")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.name() == name)
    }

    /// Canonical algorithm name as the native engine spells it
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
            Self::Falcon512 => "Falcon-512",
            Self::Falcon1024 => "Falcon-1024",
            Self::SphincsSha2_128fSimple => "SPHINCS+-SHA2-128f-simple",
            Self::SphincsSha2_128sSimple => "SPHINCS+-SHA2-128s-simple",
            Self::SphincsSha2_192fSimple => "SPHINCS+-SHA2-192f-simple",
            Self::SphincsSha2_192sSimple => "SPHINCS+-SHA2-192s-simple",
            Self::SphincsSha2_256fSimple => "SPHINCS+-SHA2-256f-simple",
            Self::SphincsSha2_256sSimple => "SPHINCS+-SHA2-256s-simple",
        }
    }

    /// Specification version implemented by the engine
    #[must_use]
    pub fn version(&self) -> &'static str {
        match self {
            Self::MlDsa44 | Self::MlDsa65 | Self::MlDsa87 => "FIPS 204",
            Self::Falcon512 | Self::Falcon1024 => "20211101",
            _ => "SPHINCS+ round 3.1",
        }
    }

    /// Claimed NIST security level (1-5)
    #[must_use]
    pub fn claimed_nist_level(&self) -> u8 {
        match self {
            Self::Falcon512 | Self::SphincsSha2_128fSimple | Self::SphincsSha2_128sSimple => 1,
            Self::MlDsa44 => 2,
            Self::MlDsa65 | Self::SphincsSha2_192fSimple | Self::SphincsSha2_192sSimple => 3,
            Self::MlDsa87
            | Self::Falcon1024
            | Self::SphincsSha2_256fSimple
            | Self::SphincsSha2_256sSimple => 5,
        }
    }

    /// Whether the algorithm provides EUF-CMA security
    #[must_use]
    pub fn is_euf_cma(&self) -> bool {
        true
    }

    /// Public key length in bytes
    #[must_use]
    pub fn public_key_len(&self) -> usize {
        match self {
            Self::MlDsa44 => 1312,
            Self::MlDsa65 => 1952,
            Self::MlDsa87 => 2592,
            Self::Falcon512 => 897,
            Self::Falcon1024 => 1793,
            Self::SphincsSha2_128fSimple | Self::SphincsSha2_128sSimple => 32,
            Self::SphincsSha2_192fSimple | Self::SphincsSha2_192sSimple => 48,
            Self::SphincsSha2_256fSimple | Self::SphincsSha2_256sSimple => 64,
        }
    }

    /// Secret key length in bytes
    #[must_use]
    pub fn secret_key_len(&self) -> usize {
        match self {
            Self::MlDsa44 => 2560,
            Self::MlDsa65 => 4032,
            Self::MlDsa87 => 4896,
            Self::Falcon512 => 1281,
            Self::Falcon1024 => 2305,
            Self::SphincsSha2_128fSimple | Self::SphincsSha2_128sSimple => 64,
            Self::SphincsSha2_192fSimple | Self::SphincsSha2_192sSimple => 96,
            Self::SphincsSha2_256fSimple | Self::SphincsSha2_256sSimple => 128,
        }
    }

    /// Maximum signature length in bytes.
    ///
    /// Falcon signatures are variable-length; [`crate::Signature::sign`]
    /// returns the actual used length, which may be shorter than this bound.
    #[must_use]
    pub fn max_signature_len(&self) -> usize {
        match self {
            Self::MlDsa44 => 2420,
            Self::MlDsa65 => 3309,
            Self::MlDsa87 => 4627,
            Self::Falcon512 => 666,
            Self::Falcon1024 => 1280,
            Self::SphincsSha2_128fSimple => 17088,
            Self::SphincsSha2_128sSimple => 7856,
            Self::SphincsSha2_192fSimple => 35664,
            Self::SphincsSha2_192sSimple => 16224,
            Self::SphincsSha2_256fSimple => 49856,
            Self::SphincsSha2_256sSimple => 29792,
        }
    }

    /// Check if this is a "fast" variant (for SPHINCS+)
    #[must_use]
    pub fn is_fast_variant(&self) -> bool {
        matches!(
            self,
            Self::SphincsSha2_128fSimple
                | Self::SphincsSha2_192fSimple
                | Self::SphincsSha2_256fSimple
        )
    }

    /// Check if this is a "small" variant (for SPHINCS+)
    #[must_use]
    pub fn is_small_variant(&self) -> bool {
        matches!(
            self,
            Self::SphincsSha2_128sSimple
                | Self::SphincsSha2_192sSimple
                | Self::SphincsSha2_256sSimple
        )
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
