//! Adapter over the native cryptographic engine
//!
//! Everything the crate needs from the underlying PQClean implementations goes
//! through this module: keypair generation, encapsulate/decapsulate, sign and
//! verify, plus the engine's compiled-in length table. Buffer lengths are
//! validated against the catalog constants before any slice reaches the engine,
//! and engine-reported failures are mapped onto [`crate::PqError`]. No other
//! module imports the `pqcrypto` crates directly.

use crate::error::PqError;

// Lengths are validated against the catalog before any from_bytes call, so a
// rejection here is the engine disagreeing with its own length table.
fn map_key_error(what: &'static str, err: pqcrypto_traits::Error) -> PqError {
    PqError::engine_failure(format!("engine rejected {what}: {err}"))
}

pub(crate) mod kem {
    use super::map_key_error;
    use crate::algorithm::KemAlgorithm;
    use crate::error::{PqError, Result};
    use pqcrypto_traits::kem::{
        Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _,
    };

    macro_rules! dispatch {
        ($alg:expr, $m:ident, $body:block) => {
            match $alg {
                KemAlgorithm::MlKem512 => {
                    use pqcrypto_mlkem::mlkem512 as $m;
                    $body
                }
                KemAlgorithm::MlKem768 => {
                    use pqcrypto_mlkem::mlkem768 as $m;
                    $body
                }
                KemAlgorithm::MlKem1024 => {
                    use pqcrypto_mlkem::mlkem1024 as $m;
                    $body
                }
            }
        };
    }

    /// Lengths the engine was compiled with: (pk, sk, ct, ss).
    ///
    /// Test-only probe backing the catalog cross-check.
    #[cfg(test)]
    pub(crate) fn lengths(alg: KemAlgorithm) -> (usize, usize, usize, usize) {
        dispatch!(alg, m, {
            (
                m::public_key_bytes(),
                m::secret_key_bytes(),
                m::ciphertext_bytes(),
                m::shared_secret_bytes(),
            )
        })
    }

    /// Generate a fresh keypair, returned as (public key, secret key) bytes.
    ///
    /// Entropy comes from the engine's own compiled-in source.
    pub(crate) fn keypair(alg: KemAlgorithm) -> Result<(Vec<u8>, Vec<u8>)> {
        dispatch!(alg, m, {
            let (pk, sk) = m::keypair();
            Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
        })
    }

    /// Encapsulate against a peer public key, returning (ciphertext, shared secret)
    pub(crate) fn encapsulate(alg: KemAlgorithm, public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        if public_key.len() != alg.public_key_len() {
            return Err(PqError::invalid_length(
                "public key",
                alg.public_key_len(),
                public_key.len(),
            ));
        }
        dispatch!(alg, m, {
            let pk = m::PublicKey::from_bytes(public_key)
                .map_err(|e| map_key_error("public key", e))?;
            let (ss, ct) = m::encapsulate(&pk);
            Ok((ct.as_bytes().to_vec(), ss.as_bytes().to_vec()))
        })
    }

    /// Decapsulate a ciphertext with the given secret key.
    ///
    /// Invalid but correctly-sized ciphertexts still produce a shared secret
    /// (implicit rejection); only structurally invalid inputs fail.
    pub(crate) fn decapsulate(
        alg: KemAlgorithm,
        secret_key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        if secret_key.len() != alg.secret_key_len() {
            return Err(PqError::invalid_length(
                "secret key",
                alg.secret_key_len(),
                secret_key.len(),
            ));
        }
        if ciphertext.len() != alg.ciphertext_len() {
            return Err(PqError::invalid_length(
                "ciphertext",
                alg.ciphertext_len(),
                ciphertext.len(),
            ));
        }
        dispatch!(alg, m, {
            let sk = m::SecretKey::from_bytes(secret_key)
                .map_err(|e| map_key_error("secret key", e))?;
            let ct = m::Ciphertext::from_bytes(ciphertext)
                .map_err(|e| map_key_error("ciphertext", e))?;
            let ss = m::decapsulate(&ct, &sk);
            Ok(ss.as_bytes().to_vec())
        })
    }
}

pub(crate) mod sig {
    use super::map_key_error;
    use crate::algorithm::SignatureAlgorithm;
    use crate::error::{PqError, Result};
    use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

    macro_rules! dispatch {
        ($alg:expr, $m:ident, $body:block) => {
            match $alg {
                SignatureAlgorithm::MlDsa44 => {
                    use pqcrypto_mldsa::mldsa44 as $m;
                    $body
                }
                SignatureAlgorithm::MlDsa65 => {
                    use pqcrypto_mldsa::mldsa65 as $m;
                    $body
                }
                SignatureAlgorithm::MlDsa87 => {
                    use pqcrypto_mldsa::mldsa87 as $m;
                    $body
                }
                SignatureAlgorithm::Falcon512 => {
                    use pqcrypto_falcon::falcon512 as $m;
                    $body
                }
                SignatureAlgorithm::Falcon1024 => {
                    use pqcrypto_falcon::falcon1024 as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_128fSimple => {
                    use pqcrypto_sphincsplus::sphincssha2128fsimple as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_128sSimple => {
                    use pqcrypto_sphincsplus::sphincssha2128ssimple as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_192fSimple => {
                    use pqcrypto_sphincsplus::sphincssha2192fsimple as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_192sSimple => {
                    use pqcrypto_sphincsplus::sphincssha2192ssimple as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_256fSimple => {
                    use pqcrypto_sphincsplus::sphincssha2256fsimple as $m;
                    $body
                }
                SignatureAlgorithm::SphincsSha2_256sSimple => {
                    use pqcrypto_sphincsplus::sphincssha2256ssimple as $m;
                    $body
                }
            }
        };
    }

    /// Lengths the engine was compiled with: (pk, sk, max signature).
    ///
    /// Test-only probe backing the catalog cross-check.
    #[cfg(test)]
    pub(crate) fn lengths(alg: SignatureAlgorithm) -> (usize, usize, usize) {
        dispatch!(alg, m, {
            (
                m::public_key_bytes(),
                m::secret_key_bytes(),
                m::signature_bytes(),
            )
        })
    }

    /// Generate a fresh keypair, returned as (public key, secret key) bytes
    pub(crate) fn keypair(alg: SignatureAlgorithm) -> Result<(Vec<u8>, Vec<u8>)> {
        dispatch!(alg, m, {
            let (pk, sk) = m::keypair();
            Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
        })
    }

    /// Produce a detached signature over `message`
    pub(crate) fn sign(
        alg: SignatureAlgorithm,
        secret_key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>> {
        if secret_key.len() != alg.secret_key_len() {
            return Err(PqError::invalid_length(
                "secret key",
                alg.secret_key_len(),
                secret_key.len(),
            ));
        }
        dispatch!(alg, m, {
            let sk = m::SecretKey::from_bytes(secret_key)
                .map_err(|e| map_key_error("secret key", e))?;
            let sig = m::detached_sign(message, &sk);
            Ok(sig.as_bytes().to_vec())
        })
    }

    /// Verify a detached signature.
    ///
    /// Cryptographic rejection, including signature bytes the engine cannot
    /// even parse, is reported as `Ok(false)`; errors are reserved for
    /// structurally invalid public keys.
    pub(crate) fn verify(
        alg: SignatureAlgorithm,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        if public_key.len() != alg.public_key_len() {
            return Err(PqError::invalid_length(
                "public key",
                alg.public_key_len(),
                public_key.len(),
            ));
        }
        dispatch!(alg, m, {
            let pk = m::PublicKey::from_bytes(public_key)
                .map_err(|e| map_key_error("public key", e))?;
            let Ok(sig) = m::DetachedSignature::from_bytes(signature) else {
                return Ok(false);
            };
            Ok(m::verify_detached_signature(&sig, message, &pk).is_ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::{KemAlgorithm, SignatureAlgorithm};

    #[test]
    fn kem_catalog_lengths_match_engine() {
        for alg in KemAlgorithm::ALL {
            let (pk, sk, ct, ss) = super::kem::lengths(alg);
            assert_eq!(pk, alg.public_key_len(), "{alg} public key");
            assert_eq!(sk, alg.secret_key_len(), "{alg} secret key");
            assert_eq!(ct, alg.ciphertext_len(), "{alg} ciphertext");
            assert_eq!(ss, alg.shared_secret_len(), "{alg} shared secret");
        }
    }

    #[test]
    fn sig_catalog_lengths_match_engine() {
        for alg in SignatureAlgorithm::ALL {
            let (pk, sk, max_sig) = super::sig::lengths(alg);
            assert_eq!(pk, alg.public_key_len(), "{alg} public key");
            assert_eq!(sk, alg.secret_key_len(), "{alg} secret key");
            assert_eq!(max_sig, alg.max_signature_len(), "{alg} signature");
        }
    }
}
