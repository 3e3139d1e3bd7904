//! HMAC-signed URLs for the checkout receipt.
//!
//! Receipt links must be usable without a login, so the link itself carries
//! proof that the server generated it. The signature covers the canonical
//! request path and is appended as a query parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies receipt-link paths with HMAC-SHA256.
#[derive(Clone)]
pub struct UrlSigner {
    key: Vec<u8>,
}

impl UrlSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length.
        HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size")
    }

    /// Hex-encoded signature over a request path.
    pub fn signature(&self, path: &str) -> String {
        let mut mac = self.mac();
        mac.update(path.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Full signed URL for a path, e.g.
    /// `/checkout/receipt/1?signature=ab12…`.
    pub fn signed_url(&self, path: &str) -> String {
        format!("{path}?signature={}", self.signature(path))
    }

    /// Constant-time verification of a hex signature against a path.
    pub fn verify(&self, path: &str, signature: &str) -> bool {
        let Ok(raw) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac();
        mac.update(path.as_bytes());
        mac.verify_slice(&raw).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_its_own_signatures() {
        let signer = UrlSigner::new("top secret");
        let signature = signer.signature("/checkout/receipt/1");
        assert!(signer.verify("/checkout/receipt/1", &signature));
    }

    #[test]
    fn rejects_signatures_for_other_paths() {
        let signer = UrlSigner::new("top secret");
        let signature = signer.signature("/checkout/receipt/1");
        assert!(!signer.verify("/checkout/receipt/2", &signature));
    }

    #[test]
    fn rejects_signatures_from_other_keys() {
        let signer = UrlSigner::new("top secret");
        let other = UrlSigner::new("different secret");
        let signature = other.signature("/checkout/receipt/1");
        assert!(!signer.verify("/checkout/receipt/1", &signature));
    }

    #[test]
    fn rejects_garbage_signatures() {
        let signer = UrlSigner::new("top secret");
        assert!(!signer.verify("/checkout/receipt/1", "not-hex"));
        assert!(!signer.verify("/checkout/receipt/1", ""));
    }

    #[test]
    fn signed_url_embeds_the_signature() {
        let signer = UrlSigner::new("top secret");
        let url = signer.signed_url("/checkout/receipt/1");
        let signature = signer.signature("/checkout/receipt/1");
        assert_eq!(url, format!("/checkout/receipt/1?signature={signature}"));
    }
}
