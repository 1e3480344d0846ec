// RSA Encryption
// Segmented PKCS#1 v1.5 encryption for payloads larger than one block

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::error::{RsaError, RsaResult};

/// Bytes of every block PKCS#1 v1.5 reserves for padding
const PKCS1_RESERVED: usize = 11;

/// Largest plaintext slice a single transform accepts under `key`
/// (117 bytes for a 1024-bit modulus)
pub fn max_encrypt_block(key: &RsaPublicKey) -> usize {
    key.size() - PKCS1_RESERVED
}

/// Encrypt bytes of arbitrary length using RSA public key.
///
/// The input is split into consecutive chunks of at most
/// [`max_encrypt_block`] bytes; each chunk is transformed independently and
/// the modulus-sized outputs are concatenated in order. Empty input yields
/// empty output. A failing chunk discards all partial output and reports
/// [`RsaError::Cipher`].
pub fn encrypt_bytes(key: &RsaPublicKey, data: &[u8]) -> RsaResult<Vec<u8>> {
    let mut rng = OsRng;
    let block_size = max_encrypt_block(key);
    let blocks = (data.len() + block_size - 1) / block_size;

    let mut ciphertext = Vec::with_capacity(blocks * key.size());
    for chunk in data.chunks(block_size) {
        let encrypted = key
            .encrypt(&mut rng, Pkcs1v15Encrypt, chunk)
            .map_err(RsaError::Cipher)?;
        ciphertext.extend_from_slice(&encrypted);
    }

    Ok(ciphertext)
}

/// Encrypt a string, returning the ciphertext as Base64 text
pub fn encrypt_string(key: &RsaPublicKey, plaintext: &str) -> RsaResult<String> {
    let ciphertext = encrypt_bytes(key, plaintext.as_bytes())?;
    Ok(base64::encode(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::RsaPrivateKey;

    fn test_public_key(bits: usize) -> RsaPublicKey {
        let mut rng = OsRng;
        RsaPublicKey::from(&RsaPrivateKey::new(&mut rng, bits).unwrap())
    }

    #[test]
    fn test_block_limit_follows_key_size() {
        let key = test_public_key(512);
        assert_eq!(max_encrypt_block(&key), 53);
    }

    #[test]
    fn test_encrypt_empty() {
        let key = test_public_key(512);
        let ciphertext = encrypt_bytes(&key, b"").unwrap();
        assert!(ciphertext.is_empty());
    }

    #[test]
    fn test_ciphertext_length_tracks_chunk_count() {
        let key = test_public_key(512);
        let block = max_encrypt_block(&key);

        // One partial block, one exact block, one byte over, two blocks
        for (len, blocks) in [(1, 1), (block, 1), (block + 1, 2), (2 * block, 2)] {
            let data = vec![0x5a; len];
            let ciphertext = encrypt_bytes(&key, &data).unwrap();
            assert_eq!(ciphertext.len(), blocks * key.size());
        }
    }

    #[test]
    fn test_encrypt_string_is_base64() {
        let key = test_public_key(512);
        let encoded = encrypt_string(&key, "Test message").unwrap();

        let raw = base64::decode(&encoded).unwrap();
        assert_eq!(raw.len(), key.size());
    }
}
