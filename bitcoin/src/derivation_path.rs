use crate::network::BitcoinNetwork;
use gyu_model::coin::CoinDescriptor;
use gyu_model::derivation_path::{ChildIndex, DerivationPath, DerivationPathError};
use gyu_model::network::Network;

use core::{fmt, str::FromStr};

/// Represents a Bitcoin derivation path
#[derive(Clone, PartialEq, Eq)]
pub enum BitcoinDerivationPath {
    /// BIP32 - arbitrary path
    /// https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
    BIP32(Vec<ChildIndex>),
    /// m/{purpose}'/{coin}'/{account}'/{change}/{index} for a registered coin
    Account {
        coin: CoinDescriptor,
        path: [ChildIndex; 3],
    },
}

impl BitcoinDerivationPath {
    pub fn account(
        coin: &CoinDescriptor,
        account: u32,
        change: u32,
        index: u32,
    ) -> Result<Self, DerivationPathError> {
        Ok(BitcoinDerivationPath::Account {
            coin: *coin,
            path: [
                ChildIndex::hardened(account)?,
                ChildIndex::normal(change)?,
                ChildIndex::normal(index)?,
            ],
        })
    }

    /// Returns a derivation path given the child index vector.
    ///
    /// Paths under one of the network's coin registrations become `Account`
    /// paths, everything else is BIP32.
    pub fn from_vec(
        network: &BitcoinNetwork,
        path: &[ChildIndex],
    ) -> Result<Self, DerivationPathError> {
        if path.len() == 5 && path[2].is_hardened() && path[3].is_normal() && path[4].is_normal() {
            if let Some(coin) = network
                .coin_descriptors()
                .iter()
                .find(|coin| coin.matches(path))
            {
                return Ok(BitcoinDerivationPath::Account {
                    coin: *coin,
                    path: [path[2], path[3], path[4]],
                });
            }
        }
        match path.len() < 256 {
            true => Ok(BitcoinDerivationPath::BIP32(path.to_vec())),
            false => Err(DerivationPathError::ExpectedBIP32Path),
        }
    }

    // The indices as stored, without checking their hardening.
    fn indices(&self) -> Vec<ChildIndex> {
        match self {
            BitcoinDerivationPath::BIP32(path) => path.clone(),
            BitcoinDerivationPath::Account { coin, path } => {
                let mut indices = coin.to_vec();
                indices.extend_from_slice(path);
                indices
            }
        }
    }

    pub fn coin(&self) -> Option<&CoinDescriptor> {
        match self {
            BitcoinDerivationPath::BIP32(_) => None,
            BitcoinDerivationPath::Account { coin, .. } => Some(coin),
        }
    }
}

impl DerivationPath for BitcoinDerivationPath {
    /// Returns a child index vector given the derivation path.
    fn to_vec(&self) -> Result<Vec<ChildIndex>, DerivationPathError> {
        match self {
            BitcoinDerivationPath::BIP32(path) => match path.len() < 256 {
                true => Ok(path.clone()),
                false => Err(DerivationPathError::ExpectedBIP32Path),
            },
            BitcoinDerivationPath::Account { coin, path } => {
                match path[0].is_hardened() && path[1].is_normal() && path[2].is_normal() {
                    true => Ok(self.indices()),
                    false => Err(DerivationPathError::ExpectedAccountPath(coin.to_string())),
                }
            }
        }
    }
}

impl FromStr for BitcoinDerivationPath {
    type Err = DerivationPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut parts = path.split('/');

        if parts.next() != Some("m") {
            return Err(DerivationPathError::InvalidDerivationPath(path.to_string()));
        }

        let path: Result<Vec<ChildIndex>, Self::Err> = parts.map(str::parse).collect();
        Self::try_from(path?)
    }
}

impl TryFrom<Vec<ChildIndex>> for BitcoinDerivationPath {
    type Error = DerivationPathError;

    fn try_from(path: Vec<ChildIndex>) -> Result<Self, Self::Error> {
        match path.len() < 256 {
            true => Ok(BitcoinDerivationPath::BIP32(path)),
            false => Err(DerivationPathError::ExpectedBIP32Path),
        }
    }
}

impl fmt::Debug for BitcoinDerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for BitcoinDerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("m")?;
        for index in self.indices().iter() {
            f.write_str("/")?;
            fmt::Display::fmt(index, f)?;
        }
        Ok(())
    }
}
