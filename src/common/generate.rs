use std::path::{Path, PathBuf};

use elliptic_curve::{
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, SecretKey,
};
use rand::rngs::OsRng;
use tracing::{debug, info};

use crate::common::types::{Algorithm, Curve, EcPrivateJwk};
use crate::common::{output, verify};
use crate::config::KeygenConfig;
use crate::error::{KeygenError, Result};

/// Encodes a secret key and its derived public point as a private JWK.
pub(crate) fn encode_secret_key<C>(curve: Curve, secret: &SecretKey<C>) -> Result<EcPrivateJwk>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let point = secret.public_key().to_encoded_point(false);
    let (x, y) = match (point.x(), point.y()) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            return Err(KeygenError::KeyGeneration(format!(
                "{curve} public key has no affine coordinates"
            )))
        }
    };

    Ok(EcPrivateJwk::new(curve, x, y, &secret.to_bytes()))
}

/// Generates a fresh key pair for `algorithm` and keeps only the private half.
pub fn generate_private_jwk(algorithm: Algorithm) -> Result<EcPrivateJwk> {
    let curve = algorithm.curve();
    debug!(%algorithm, %curve, "generating key pair");

    match curve {
        Curve::P256 => encode_secret_key(curve, &p256::SecretKey::random(&mut OsRng)),
        Curve::P384 => encode_secret_key(curve, &p384::SecretKey::random(&mut OsRng)),
        Curve::P521 => encode_secret_key(curve, &p521::SecretKey::random(&mut OsRng)),
    }
}

/// Generates a private JWK and writes it to `path`, replacing any existing file.
pub fn generate_to_file(algorithm: Algorithm, path: impl AsRef<Path>) -> Result<EcPrivateJwk> {
    let path = path.as_ref();
    let jwk = generate_private_jwk(algorithm)?;
    verify::verify_private_jwk(&jwk)?;
    output::write_jwk(path, &jwk)?;

    info!(
        %algorithm,
        crv = %jwk.crv,
        thumbprint = %jwk.thumbprint(),
        "Private key saved to {}",
        path.display()
    );
    Ok(jwk)
}

/// Runs every configured target in order and stops at the first failure.
pub fn generate_all(config: &KeygenConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let path = config.path_for(target);
        generate_to_file(target.algorithm, &path)?;
        written.push(path);
    }
    Ok(written)
}
