//! Client certificate trust interface.

use crate::certificate::Certificate;

/// Decides which client certificate chains are trusted.
pub trait TrustStore: Send + Sync {
    /// Certificates of the issuers whose client certificates are accepted.
    ///
    /// Their subject names become the CertificateRequest authorities list.
    fn accepted_issuers(&self) -> Vec<Certificate>;

    /// Check if `chain` (leaf first) is trusted for `auth_type`
    /// (`"RSA"`, `"DSA"` or `"EC"`).
    fn is_client_trusted(&self, chain: &[Certificate], auth_type: &str) -> bool;
}
