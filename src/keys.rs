// RSA Key Reconstruction
// Rebuilds usable key objects from hex components or encoded key blobs

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::error::{RsaError, RsaResult};

/// Public exponent assumed when a private key is rebuilt from its
/// (modulus, private exponent) pair alone. Matches what the generator
/// produces; components from a key with a different public exponent are
/// rejected as a key-spec failure.
const PUBLIC_EXPONENT: u32 = 65537;

fn decode_hex_field(name: &'static str, value: &str) -> RsaResult<Vec<u8>> {
    if value.trim().is_empty() {
        return Err(RsaError::BlankInput(name));
    }
    Ok(hex::decode(value)?)
}

/// Build a public key from hex-encoded modulus and public exponent.
///
/// Blank arguments are rejected before any decode attempt. No relationship
/// to any private half is verified; mismatched components simply produce a
/// key that fails to round-trip.
pub fn public_key_from_components(
    hex_modulus: &str,
    hex_exponent: &str,
) -> RsaResult<RsaPublicKey> {
    let modulus = decode_hex_field("modulus", hex_modulus)?;
    let exponent = decode_hex_field("public exponent", hex_exponent)?;
    public_key_from_bytes(&modulus, &exponent)
}

/// Build a public key from big-endian modulus and exponent bytes
pub fn public_key_from_bytes(modulus: &[u8], exponent: &[u8]) -> RsaResult<RsaPublicKey> {
    RsaPublicKey::new(
        BigUint::from_bytes_be(modulus),
        BigUint::from_bytes_be(exponent),
    )
    .map_err(|e| RsaError::KeySpec(e.to_string()))
}

/// Build a private key from hex-encoded modulus and private exponent.
///
/// Same blank-input and decoding contract as
/// [`public_key_from_components`].
pub fn private_key_from_components(
    hex_modulus: &str,
    hex_exponent: &str,
) -> RsaResult<RsaPrivateKey> {
    let modulus = decode_hex_field("modulus", hex_modulus)?;
    let exponent = decode_hex_field("private exponent", hex_exponent)?;
    private_key_from_bytes(&modulus, &exponent)
}

/// Build a private key from big-endian modulus and private exponent bytes
pub fn private_key_from_bytes(modulus: &[u8], exponent: &[u8]) -> RsaResult<RsaPrivateKey> {
    RsaPrivateKey::from_components(
        BigUint::from_bytes_be(modulus),
        BigUint::from(PUBLIC_EXPONENT),
        BigUint::from_bytes_be(exponent),
        Vec::new(),
    )
    .map_err(|e| RsaError::KeySpec(e.to_string()))
}

/// Parse a Base64 SubjectPublicKeyInfo blob into a public key
pub fn public_key_from_encoded(blob: &str) -> RsaResult<RsaPublicKey> {
    let der = base64::decode(blob.trim())?;
    RsaPublicKey::from_public_key_der(&der).map_err(|e| RsaError::KeySpec(e.to_string()))
}

/// Parse a Base64 PKCS#8 blob into a private key
pub fn private_key_from_encoded(blob: &str) -> RsaResult<RsaPrivateKey> {
    let der = base64::decode(blob.trim())?;
    RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| RsaError::KeySpec(e.to_string()))
}

/// Encode a public key as a Base64 SubjectPublicKeyInfo blob
pub fn public_key_to_encoded(key: &RsaPublicKey) -> RsaResult<String> {
    let der = key
        .to_public_key_der()
        .map_err(|e| RsaError::KeySpec(e.to_string()))?;
    Ok(base64::encode(der.as_bytes()))
}

/// Encode a private key as a Base64 PKCS#8 blob
pub fn private_key_to_encoded(key: &RsaPrivateKey) -> RsaResult<String> {
    let der = key
        .to_pkcs8_der()
        .map_err(|e| RsaError::KeySpec(e.to_string()))?;
    Ok(base64::encode(der.as_bytes()))
}
