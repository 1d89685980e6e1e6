// src/core/transforms/hash.rs

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::core::models::{HashAlgorithm, ShaDigests};

/// Shown in place of a result when the MD5 tool is asked to "decode".
pub const MD5_IRREVERSIBLE: &str =
    "MD5 hashes cannot be decoded directly. Try the Hash Cracker tool instead.";

/// Hashes the UTF-8 bytes of `text` and renders the digest as lowercase hex.
pub fn digest(algorithm: HashAlgorithm, text: &str) -> String {
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(text),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(text),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(text),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(text),
    }
}

/// The SHA tool shows all three SHA variants for one input.
pub fn sha_digests(text: &str) -> ShaDigests {
    ShaDigests {
        sha1: digest(HashAlgorithm::Sha1, text),
        sha256: digest(HashAlgorithm::Sha256, text),
        sha512: digest(HashAlgorithm::Sha512, text),
    }
}

fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}
