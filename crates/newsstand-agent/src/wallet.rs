//! Wallet generation - cosmetic addresses and illustrative scores
//!
//! The marketplace only inspects the shape of a wallet address, so the buyer
//! carries a placeholder: 0x plus 40 lowercase hex digits, no key material
//! behind it. Both the address and the metadata evaluation score come from
//! one seedable generator so demo runs can be made reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Source of wallet addresses and evaluation scores for a buyer
#[derive(Debug, Clone)]
pub struct WalletForge {
    rng: StdRng,
}

impl WalletForge {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Generator with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// A fresh pseudo-wallet address: 0x + 40 lowercase hex digits
    pub fn address(&mut self) -> String {
        let mut address = String::with_capacity(42);
        address.push_str("0x");
        for _ in 0..40 {
            address.push(HEX_DIGITS[self.rng.gen_range(0..HEX_DIGITS.len())] as char);
        }
        address
    }

    /// An illustrative evaluation score in [0.7, 1.0)
    pub fn evaluation_score(&mut self) -> f64 {
        self.rng.gen_range(0.7..1.0)
    }
}

impl Default for WalletForge {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shape() {
        let mut forge = WalletForge::from_entropy();
        let address = forge.address();

        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = WalletForge::seeded(7);
        let mut b = WalletForge::seeded(7);

        assert_eq!(a.address(), b.address());
        assert_eq!(a.evaluation_score(), b.evaluation_score());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = WalletForge::seeded(1);
        let mut b = WalletForge::seeded(2);
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_score_stays_in_range() {
        let mut forge = WalletForge::seeded(42);
        for _ in 0..1000 {
            let score = forge.evaluation_score();
            assert!((0.7..1.0).contains(&score));
        }
    }
}
