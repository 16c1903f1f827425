//! Digest computation for the hash operation.

use md5::Md5;
use sha2::{Digest, Sha256, Sha512};
use std::str::FromStr;

/// Default bcrypt cost factor.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Algorithms a caller may request.
///
/// `md5`, `sha256` and `sha512` are always computed; requesting `bcrypt`
/// adds a salted bcrypt hash on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    Md5,
    #[default]
    Sha256,
    Sha512,
    Bcrypt,
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported algorithm '{0}': expected md5, sha256, sha512 or bcrypt")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "bcrypt" => Ok(Self::Bcrypt),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl HashAlgorithm {
    /// Whether this algorithm is an expensive salted one-way function.
    pub fn is_salted(self) -> bool {
        matches!(self, Self::Bcrypt)
    }
}

pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

pub fn sha512_hex(text: &str) -> String {
    hex::encode(Sha512::digest(text.as_bytes()))
}

/// Salted bcrypt hash. CPU-bound; call from a blocking context.
pub fn bcrypt_hash(text: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(text, cost)
}
