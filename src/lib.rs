pub mod common;
pub mod config;
pub mod error;

#[cfg(test)]
pub mod test_utils;

pub use common::generate::{generate_all, generate_private_jwk, generate_to_file};
pub use common::types::{Algorithm, Curve, EcPrivateJwk};
pub use config::{KeyTarget, KeygenConfig};
pub use error::{KeygenError, Result};
