// RSA Decryption
// Segmented PKCS#1 v1.5 decryption, the inverse of the encryption half

use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};

use crate::error::{RsaError, RsaResult};

/// Ciphertext chunk size for a single transform under `key`, equal to the
/// modulus byte length (128 bytes for a 1024-bit modulus)
pub fn max_decrypt_block(key: &RsaPrivateKey) -> usize {
    key.size()
}

/// Decrypt ciphertext bytes using RSA private key.
///
/// The input is split into chunks of [`max_decrypt_block`] bytes; plaintext
/// chunk outputs are concatenated in order. Empty input yields empty
/// output. A failing chunk (corrupted data or a key unrelated to the
/// ciphertext) discards all partial output and reports
/// [`RsaError::Cipher`].
pub fn decrypt_bytes(key: &RsaPrivateKey, data: &[u8]) -> RsaResult<Vec<u8>> {
    let block_size = max_decrypt_block(key);

    let mut plaintext = Vec::with_capacity(data.len());
    for chunk in data.chunks(block_size) {
        let decrypted = key
            .decrypt(Pkcs1v15Encrypt, chunk)
            .map_err(RsaError::Cipher)?;
        plaintext.extend_from_slice(&decrypted);
    }

    Ok(plaintext)
}

/// Decrypt Base64 ciphertext and interpret the result as UTF-8 text.
///
/// Blank input is rejected up front. Any failure is logged before being
/// returned, so unattended callers still leave a trace of the cause.
pub fn decrypt_to_string(key: &RsaPrivateKey, ciphertext: &str) -> RsaResult<String> {
    if ciphertext.trim().is_empty() {
        return Err(RsaError::BlankInput("ciphertext"));
    }
    decode_and_decrypt(key, ciphertext).map_err(|e| {
        log::warn!("decryption failed: {}", e);
        e
    })
}

fn decode_and_decrypt(key: &RsaPrivateKey, ciphertext: &str) -> RsaResult<String> {
    let data = base64::decode(ciphertext.trim())?;
    let plaintext = decrypt_bytes(key, &data)?;
    Ok(String::from_utf8(plaintext)?)
}
