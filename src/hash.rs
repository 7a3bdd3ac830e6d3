//! SHA-1 digests for name based identifiers.
//!
//! Only the one-shot form is needed: the namespace and the name are
//! concatenated by the caller and hashed in a single call.

use digest::Digest;

pub use sha1::Sha1;

/// The length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Represents a 20 byte SHA-1 digest.
pub type RawDigest = [u8; DIGEST_LEN];

/// Computes the SHA-1 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> RawDigest {
    Sha1::digest(bytes).into()
}

/// Renders a digest as lowercase hex, the form published test vectors use.
pub fn to_hex(digest: &RawDigest) -> String {
    hex::encode(digest)
}
