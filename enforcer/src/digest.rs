//! Message digest computation for artifact content.
//!
//! Provides a single entry point, [`digest`], that maps an algorithm name
//! to a one-shot digest function and returns the lowercase hex encoding
//! of the result. The algorithm registry is built once per process behind
//! a `OnceLock`, so availability is probed at most once per name and
//! concurrent first lookups are safe. Each call constructs a fresh hasher;
//! no hashing state is shared between calls.

use std::collections::HashMap;
use std::sync::OnceLock;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

/// A one-shot digest function producing lowercase hex output.
type DigestFn = fn(&[u8]) -> String;

/// Errors arising from digest computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// No digest primitive is registered under the requested name.
    #[error("digest algorithm {name} is not available")]
    UnsupportedAlgorithm {
        /// The algorithm name that failed to resolve.
        name: String,
    },
}

/// Compute the hex-encoded digest of `data` under the named algorithm.
///
/// Hex output is lowercase, two characters per byte, no separators.
/// Supported names are `SHA-512`, `SHA-256`, `SHA-1`, and `MD5`.
///
/// # Examples
///
/// ```
/// use p2_checksum_enforcer::digest::digest;
///
/// let hex = digest("MD5", b"").expect("MD5 is registered");
/// assert_eq!(hex, "d41d8cd98f00b204e9800998ecf8427e");
/// ```
///
/// # Errors
///
/// Returns [`DigestError::UnsupportedAlgorithm`] when no primitive is
/// registered under `algorithm`.
pub fn digest(algorithm: &str, data: &[u8]) -> Result<String, DigestError> {
    let hash = registry()
        .get(algorithm)
        .ok_or_else(|| DigestError::UnsupportedAlgorithm {
            name: algorithm.to_owned(),
        })?;
    Ok(hash(data))
}

/// The algorithm registry, keyed by conventional digest names.
fn registry() -> &'static HashMap<&'static str, DigestFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, DigestFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        HashMap::from([
            ("SHA-512", sha512_hex as DigestFn),
            ("SHA-256", sha256_hex as DigestFn),
            ("SHA-1", sha1_hex as DigestFn),
            ("MD5", md5_hex as DigestFn),
        ])
    })
}

fn sha512_hex(data: &[u8]) -> String {
    format!("{:x}", Sha512::digest(data))
}

fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

fn sha1_hex(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}
