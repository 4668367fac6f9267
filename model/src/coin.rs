use core::fmt;

use serde::Serialize;

use crate::derivation_path::ChildIndex;

/// BIP purpose level of an HD derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Purpose {
    /// BIP44 - m/44'/{coin}'/{account}'/{change}/{index} - Pay-to-Pubkey Hash
    /// https://github.com/bitcoin/bips/blob/master/bip-0044.mediawiki
    BIP44,
    /// BIP49 - m/49'/{coin}'/{account}'/{change}/{index} - P2WPKH nested in P2SH
    /// https://github.com/bitcoin/bips/blob/master/bip-0049.mediawiki
    BIP49,
    /// BIP84 - m/84'/{coin}'/{account}'/{change}/{index} - native P2WPKH
    /// https://github.com/bitcoin/bips/blob/master/bip-0084.mediawiki
    BIP84,
    /// BIP86 - m/86'/{coin}'/{account}'/{change}/{index} - single key P2TR
    /// https://github.com/bitcoin/bips/blob/master/bip-0086.mediawiki
    BIP86,
}

impl Purpose {
    pub fn to_index(&self) -> ChildIndex {
        match self {
            Purpose::BIP44 => ChildIndex::Hardened(44),
            Purpose::BIP49 => ChildIndex::Hardened(49),
            Purpose::BIP84 => ChildIndex::Hardened(84),
            Purpose::BIP86 => ChildIndex::Hardened(86),
        }
    }

    pub fn from_index(index: ChildIndex) -> Option<Self> {
        match index {
            ChildIndex::Hardened(44) => Some(Purpose::BIP44),
            ChildIndex::Hardened(49) => Some(Purpose::BIP49),
            ChildIndex::Hardened(84) => Some(Purpose::BIP84),
            ChildIndex::Hardened(86) => Some(Purpose::BIP86),
            _ => None,
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purpose::BIP44 => write!(f, "BIP44"),
            Purpose::BIP49 => write!(f, "BIP49"),
            Purpose::BIP84 => write!(f, "BIP84"),
            Purpose::BIP86 => write!(f, "BIP86"),
        }
    }
}

/// A registered "coin type" for one BIP purpose, e.g. bitcoin mainnet under BIP84.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CoinDescriptor {
    pub name: &'static str,
    pub purpose: Purpose,
    pub coin_type: ChildIndex,
    pub testnet: bool,
}

impl CoinDescriptor {
    pub const fn new(name: &'static str, purpose: Purpose, coin_type: u32, testnet: bool) -> Self {
        Self {
            name,
            purpose,
            coin_type: ChildIndex::Hardened(coin_type),
            testnet,
        }
    }

    /// Returns the `purpose'/coin_type'` prefix shared by every account of this coin.
    pub fn to_vec(&self) -> Vec<ChildIndex> {
        vec![self.purpose.to_index(), self.coin_type]
    }

    pub fn matches(&self, path: &[ChildIndex]) -> bool {
        path.len() >= 2 && path[0] == self.purpose.to_index() && path[1] == self.coin_type
    }
}

impl fmt::Display for CoinDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (m/{}/{})",
            self.name,
            self.purpose.to_index(),
            self.coin_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITECOIN_BIP84: CoinDescriptor = CoinDescriptor::new("litecoin", Purpose::BIP84, 2, false);

    #[test]
    fn display() {
        assert_eq!("litecoin (m/84'/2')", LITECOIN_BIP84.to_string());
    }

    #[test]
    fn matches_path_prefix() {
        let path = vec![
            ChildIndex::Hardened(84),
            ChildIndex::Hardened(2),
            ChildIndex::Hardened(0),
        ];
        assert!(LITECOIN_BIP84.matches(&path));
        assert!(!LITECOIN_BIP84.matches(&path[..1]));
        assert!(!LITECOIN_BIP84.matches(&[ChildIndex::Hardened(44), ChildIndex::Hardened(2)]));
    }

    #[test]
    fn purpose_round_trip() {
        for purpose in &[Purpose::BIP44, Purpose::BIP49, Purpose::BIP84, Purpose::BIP86] {
            assert_eq!(Some(*purpose), Purpose::from_index(purpose.to_index()));
        }
        assert_eq!(None, Purpose::from_index(ChildIndex::Normal(44)));
    }
}
