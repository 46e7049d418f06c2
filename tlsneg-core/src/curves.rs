//! Elliptic curve selection for (EC)DHE key exchange.

use tlsneg_crypto::NamedCurve;

/// Picks the named curve for an ECDH/ECDHE key exchange.
///
/// Client preference wins: curves are scanned in the order the client listed
/// them in `supported_groups`. When the client sent no list, a fixed default
/// is used.
#[derive(Debug, Clone, Copy)]
pub struct CurveSelector<'a> {
    client_curves: Option<&'a [NamedCurve]>,
    restricted: bool,
}

impl<'a> CurveSelector<'a> {
    /// Create a selector over the client's curve list (`None` if the client
    /// sent no `supported_groups` extension).
    ///
    /// With `restricted` set, only [`NamedCurve::RESTRICTED`] curves qualify.
    pub fn new(client_curves: Option<&'a [NamedCurve]>, restricted: bool) -> Self {
        Self {
            client_curves,
            restricted,
        }
    }

    fn is_allowed(&self, curve: NamedCurve) -> bool {
        !self.restricted || curve.is_restricted_approved()
    }

    /// Largest curve size, in bits, that this handshake could negotiate.
    ///
    /// Returns 0 when the client listed curves but none passes the policy.
    pub fn max_negotiable_bits(&self) -> u16 {
        match self.client_curves {
            None if self.restricted => NamedCurve::max_restricted_bits(),
            None => NamedCurve::max_bits(),
            Some(curves) => curves
                .iter()
                .copied()
                .filter(|curve| self.is_allowed(*curve))
                .map(NamedCurve::bits)
                .max()
                .unwrap_or(0),
        }
    }

    /// Select a curve of at least `min_bits`.
    ///
    /// `None` means no acceptable curve exists; the caller must abort the
    /// handshake rather than fall back to an unapproved curve.
    pub fn select_curve(&self, min_bits: u16) -> Option<NamedCurve> {
        match self.client_curves {
            None => Self::default_curve(min_bits),
            Some(curves) => curves
                .iter()
                .copied()
                .find(|curve| curve.bits() >= min_bits && self.is_allowed(*curve)),
        }
    }

    /// Curve used when the client expressed no preference.
    ///
    /// Both candidates are in the restricted set, so this holds under either
    /// policy.
    fn default_curve(min_bits: u16) -> Option<NamedCurve> {
        if min_bits <= NamedCurve::Secp256r1.bits() {
            Some(NamedCurve::Secp256r1)
        } else if min_bits <= NamedCurve::Secp384r1.bits() {
            Some(NamedCurve::Secp384r1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_order_wins() {
        let offered = [NamedCurve::Secp521r1, NamedCurve::Secp256r1];
        let selector = CurveSelector::new(Some(&offered), false);
        assert_eq!(selector.select_curve(256), Some(NamedCurve::Secp521r1));
    }

    #[test]
    fn test_restricted_policy_skips_unapproved_curves() {
        let offered = [NamedCurve::X25519, NamedCurve::Secp521r1, NamedCurve::Secp384r1];
        let selector = CurveSelector::new(Some(&offered), true);
        assert_eq!(selector.select_curve(1), Some(NamedCurve::Secp384r1));
        assert_eq!(selector.max_negotiable_bits(), 384);
    }

    #[test]
    fn test_minimum_strength_is_honored() {
        let offered = [NamedCurve::Secp192r1, NamedCurve::Secp224r1];
        let selector = CurveSelector::new(Some(&offered), false);
        assert_eq!(selector.select_curve(256), None);
        assert_eq!(selector.select_curve(200), Some(NamedCurve::Secp224r1));
        assert_eq!(selector.max_negotiable_bits(), 224);
    }

    #[test]
    fn test_no_client_list_uses_default() {
        let selector = CurveSelector::new(None, false);
        assert_eq!(selector.select_curve(1), Some(NamedCurve::Secp256r1));
        assert_eq!(selector.select_curve(300), Some(NamedCurve::Secp384r1));
        assert_eq!(selector.select_curve(521), None);
        assert_eq!(selector.max_negotiable_bits(), 571);

        let restricted = CurveSelector::new(None, true);
        assert_eq!(restricted.max_negotiable_bits(), 384);
        assert_eq!(restricted.select_curve(384), Some(NamedCurve::Secp384r1));
    }

    #[test]
    fn test_nothing_passes_policy() {
        let offered = [NamedCurve::X25519, NamedCurve::X448];
        let selector = CurveSelector::new(Some(&offered), true);
        assert_eq!(selector.max_negotiable_bits(), 0);
        assert_eq!(selector.select_curve(1), None);
    }
}
