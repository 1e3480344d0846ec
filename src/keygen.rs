// RSA Key Generation
// Generates key pairs and extracts their numeric components as hex text

use std::sync::{PoisonError, RwLock};

use lazy_static::lazy_static;
use rand::rngs::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{RsaError, RsaResult};

/// Default modulus size in bits (a multiple of 64, minimum 512)
pub const DEFAULT_KEY_SIZE: usize = 1024;

/// Hex-encoded modulus and exponent of one key half
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyComponents {
    pub modulus: String,
    pub exponent: String,
}

/// Hex components of both halves of one key pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairComponents {
    pub public: KeyComponents,
    pub private: KeyComponents,
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

lazy_static! {
    // Components of the most recently generated pair. Written only on
    // successful generation, last writer wins.
    static ref LAST_COMPONENTS: RwLock<Option<KeyPairComponents>> = RwLock::new(None);
}

impl RsaKeyPair {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> usize {
        self.public_key.size() * 8
    }

    /// Extract the hex components of both key halves.
    /// The modulus is shared; the exponents differ per half.
    pub fn components(&self) -> KeyPairComponents {
        KeyPairComponents {
            public: KeyComponents {
                modulus: hex::encode(self.public_key.n().to_bytes_be()),
                exponent: hex::encode(self.public_key.e().to_bytes_be()),
            },
            private: KeyComponents {
                modulus: hex::encode(self.private_key.n().to_bytes_be()),
                exponent: hex::encode(self.private_key.d().to_bytes_be()),
            },
        }
    }
}

/// Generate an RSA key pair with the specified modulus bit length.
///
/// Randomness is drawn from the operating system. On success the pair's
/// components are also published to a process-wide cache readable through
/// [`last_generated_components`]; on failure the cache is left untouched.
/// Bit lengths the primitive cannot honor are reported as
/// [`RsaError::KeyGeneration`].
pub fn generate_keypair(bit_length: usize) -> RsaResult<RsaKeyPair> {
    let mut rng = OsRng;
    let private_key =
        RsaPrivateKey::new(&mut rng, bit_length).map_err(RsaError::KeyGeneration)?;
    let public_key = RsaPublicKey::from(&private_key);
    let pair = RsaKeyPair {
        public_key,
        private_key,
    };

    log::debug!("generated {}-bit RSA key pair", bit_length);
    *LAST_COMPONENTS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(pair.components());

    Ok(pair)
}

/// Generate RSA key pair with default settings (1024 bits)
pub fn generate_default_keypair() -> RsaResult<RsaKeyPair> {
    generate_keypair(DEFAULT_KEY_SIZE)
}

/// Components of the most recently generated key pair, if any.
///
/// Callers needing several independent pairs should capture
/// [`RsaKeyPair::components`] from each returned pair instead; this cache
/// is overwritten on every generation.
pub fn last_generated_components() -> Option<KeyPairComponents> {
    LAST_COMPONENTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let pair = generate_keypair(512).unwrap();
        assert_eq!(pair.bit_length(), 512);

        let components = pair.components();
        // One modulus shared between the halves, distinct exponents
        assert_eq!(components.public.modulus, components.private.modulus);
        assert_ne!(components.public.exponent, components.private.exponent);

        // Components are valid hex of the advertised size
        let modulus = hex::decode(&components.public.modulus).unwrap();
        assert_eq!(modulus.len(), 64);

        // The cache holds exactly what was returned
        assert_eq!(last_generated_components(), Some(components));
    }
}
