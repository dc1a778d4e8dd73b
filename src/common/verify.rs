use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::common::generate::encode_secret_key;
use crate::common::types::{Curve, EcPrivateJwk, KEY_TYPE_EC};
use crate::error::{KeygenError, Result};

/// Parses an EC private JWK and checks its key type and curve.
pub fn decode_private_jwk(text: &str) -> Result<EcPrivateJwk> {
    let jwk: EcPrivateJwk = serde_json::from_str(text)?;
    check_key_type(&jwk)?;
    jwk.curve()?;
    Ok(jwk)
}

/// Checks coordinate lengths and that `d` derives exactly `x` and `y`.
pub fn verify_private_jwk(jwk: &EcPrivateJwk) -> Result<()> {
    check_key_type(jwk)?;
    let curve = jwk.curve()?;

    decode_coordinate("x", &jwk.x, curve)?;
    decode_coordinate("y", &jwk.y, curve)?;
    let d = decode_coordinate("d", &jwk.d, curve)?;

    let rebuilt = match curve {
        Curve::P256 => {
            let secret = p256::SecretKey::from_slice(&d).map_err(bad_scalar)?;
            encode_secret_key(curve, &secret)?
        }
        Curve::P384 => {
            let secret = p384::SecretKey::from_slice(&d).map_err(bad_scalar)?;
            encode_secret_key(curve, &secret)?
        }
        Curve::P521 => {
            let secret = p521::SecretKey::from_slice(&d).map_err(bad_scalar)?;
            encode_secret_key(curve, &secret)?
        }
    };

    if rebuilt.x != jwk.x || rebuilt.y != jwk.y {
        return Err(KeygenError::KeyMismatch(curve));
    }
    Ok(())
}

fn check_key_type(jwk: &EcPrivateJwk) -> Result<()> {
    if jwk.kty != KEY_TYPE_EC {
        return Err(KeygenError::invalid_field(
            "kty",
            format!("expected '{KEY_TYPE_EC}', got '{}'", jwk.kty),
        ));
    }
    Ok(())
}

fn decode_coordinate(field: &'static str, value: &str, curve: Curve) -> Result<Vec<u8>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| KeygenError::invalid_field(field, e.to_string()))?;

    let expected = curve.coordinate_len();
    if bytes.len() != expected {
        return Err(KeygenError::invalid_field(
            field,
            format!("expected length {expected}, but got {}", bytes.len()),
        ));
    }
    Ok(bytes)
}

fn bad_scalar(_: elliptic_curve::Error) -> KeygenError {
    KeygenError::invalid_field("d", "not a valid private scalar")
}
