//! RSA key material and segmented cipher utilities.
//!
//! Raw RSA only transforms messages shorter than its modulus. This crate
//! wraps the [`rsa`] primitive with key-pair generation, hex component
//! extraction, key reconstruction from components or encoded blobs, and
//! chunked encryption/decryption of arbitrary-length payloads.

pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod keys;

pub use decrypt::{decrypt_bytes, decrypt_to_string, max_decrypt_block};
pub use encrypt::{encrypt_bytes, encrypt_string, max_encrypt_block};
pub use error::{RsaError, RsaResult};
pub use keygen::{
    generate_default_keypair, generate_keypair, last_generated_components, KeyComponents,
    KeyPairComponents, RsaKeyPair, DEFAULT_KEY_SIZE,
};
pub use keys::{
    private_key_from_bytes, private_key_from_components, private_key_from_encoded,
    private_key_to_encoded, public_key_from_bytes, public_key_from_components,
    public_key_from_encoded, public_key_to_encoded,
};

// Key object types callers hold between reconstruction and transform
pub use rsa::{RsaPrivateKey, RsaPublicKey};
