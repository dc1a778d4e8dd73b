use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{KeygenError, Result};

/// JWA signature algorithms backed by a NIST prime curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Es256,
    Es384,
    Es512,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Es256 => "ES256",
            Algorithm::Es384 => "ES384",
            Algorithm::Es512 => "ES512",
        }
    }

    /// The curve a key for this algorithm must be generated on.
    pub fn curve(self) -> Curve {
        match self {
            Algorithm::Es256 => Curve::P256,
            Algorithm::Es384 => Curve::P384,
            Algorithm::Es512 => Curve::P521,
        }
    }
}

impl FromStr for Algorithm {
    type Err = KeygenError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "ES256" => Ok(Algorithm::Es256),
            "ES384" => Ok(Algorithm::Es384),
            "ES512" => Ok(Algorithm::Es512),
            other => Err(KeygenError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    P256,
    P384,
    P521,
}

impl Curve {
    /// Name used in the JWK `crv` member.
    pub fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
        }
    }

    pub fn bit_size(self) -> usize {
        match self {
            Curve::P256 => 256,
            Curve::P384 => 384,
            Curve::P521 => 521,
        }
    }

    /// Byte length of `x`, `y` and `d` once left-padded to the field size.
    pub fn coordinate_len(self) -> usize {
        (self.bit_size() + 7) / 8
    }

    /// Best guess at the signature algorithm for a key without an `alg` member.
    pub fn algorithm(self) -> Algorithm {
        match self {
            Curve::P256 => Algorithm::Es256,
            Curve::P384 => Algorithm::Es384,
            Curve::P521 => Algorithm::Es512,
        }
    }
}

impl FromStr for Curve {
    type Err = KeygenError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "P-256" => Ok(Curve::P256),
            "P-384" => Ok(Curve::P384),
            "P-521" => Ok(Curve::P521),
            other => Err(KeygenError::UnknownCurve(other.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const KEY_TYPE_EC: &str = "EC";

/// Elliptic-curve private key in JSON Web Key form (RFC 7518 section 6.2).
///
/// Field order matches what `jose` emits for an exported EC private key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcPrivateJwk {
    pub kty: String,
    pub x: String,
    pub y: String,
    pub crv: String,
    pub d: String,
}

impl EcPrivateJwk {
    pub(crate) fn new(curve: Curve, x: &[u8], y: &[u8], d: &[u8]) -> Self {
        Self {
            kty: KEY_TYPE_EC.to_string(),
            x: URL_SAFE_NO_PAD.encode(x),
            y: URL_SAFE_NO_PAD.encode(y),
            crv: curve.name().to_string(),
            d: URL_SAFE_NO_PAD.encode(d),
        }
    }

    pub fn curve(&self) -> Result<Curve> {
        self.crv.parse()
    }

    /// RFC 7638 SHA-256 thumbprint over the required public members.
    pub fn thumbprint(&self) -> String {
        let canonical = format!(
            r#"{{"crv":"{}","kty":"{}","x":"{}","y":"{}"}}"#,
            self.crv, self.kty, self.x, self.y
        );
        URL_SAFE_NO_PAD.encode(Sha256::digest(canonical.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_algorithm_labels_map_to_curves() {
        assert_eq!("ES256".parse::<Algorithm>().unwrap().curve(), Curve::P256);
        assert_eq!("ES384".parse::<Algorithm>().unwrap().curve(), Curve::P384);
        assert_eq!("ES512".parse::<Algorithm>().unwrap().curve(), Curve::P521);
    }

    #[test]
    fn test_unsupported_algorithm() {
        assert_matches!(
            "RS256".parse::<Algorithm>(),
            Err(KeygenError::UnsupportedAlgorithm(label)) if label == "RS256"
        );
        assert_matches!("es384".parse::<Algorithm>(), Err(KeygenError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_curve_guesses_algorithm() {
        for alg in [Algorithm::Es256, Algorithm::Es384, Algorithm::Es512] {
            assert_eq!(alg.curve().algorithm(), alg);
        }
    }

    #[test]
    fn test_coordinate_lengths() {
        assert_eq!(Curve::P256.coordinate_len(), 32);
        assert_eq!(Curve::P384.coordinate_len(), 48);
        assert_eq!(Curve::P521.coordinate_len(), 66);
    }

    #[test]
    fn test_unknown_curve() {
        assert_matches!("secp256k1".parse::<Curve>(), Err(KeygenError::UnknownCurve(_)));
    }

    #[test]
    fn test_thumbprint_ignores_private_scalar() {
        let a = EcPrivateJwk::new(Curve::P384, &[1; 48], &[2; 48], &[3; 48]);
        let mut b = a.clone();
        b.d = URL_SAFE_NO_PAD.encode([4u8; 48]);

        assert_eq!(a.thumbprint(), b.thumbprint());
        assert_eq!(a.thumbprint(), "6_Wj_nmVPFYtU8uKQPXN66l7Gk9DxRK8aI5GObxJPz0");

        b.x = URL_SAFE_NO_PAD.encode([5u8; 48]);
        assert_ne!(a.thumbprint(), b.thumbprint());
    }
}
