// Opaque one-way password hash consumed by the account transformer
use sha2::{Digest, Sha256};

/// Hash a cleartext password with SHA-256 and return the lowercase hex digest.
pub fn simple_hash(cleartext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(cleartext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            simple_hash("pw"),
            "30c952fab122c3f9759f02a6d95c3758b246b4fee239957b2d4fee46e26170c4"
        );
    }

    #[test]
    fn empty_input_still_digests() {
        assert_eq!(
            simple_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(simple_hash("hunter2"), simple_hash("hunter3"));
    }
}
