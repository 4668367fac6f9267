use gyu_model::network::{Network, NetworkError};
use log::{debug, error};
use once_cell::sync::OnceCell;

use crate::conf::CoinConf;
use crate::network::{BitcoinNetwork, NetworkParams};

static REGISTRY: OnceCell<NetworkRegistry> = OnceCell::new();

// Declaration order, also the order of `NetworkRegistry::params`.
const NETWORKS: [BitcoinNetwork; 14] = [
    BitcoinNetwork::BitcoinMainnet,
    BitcoinNetwork::BitcoinTestnet,
    BitcoinNetwork::LitecoinMainnet,
    BitcoinNetwork::LitecoinTestnet,
    BitcoinNetwork::DashMainnet,
    BitcoinNetwork::DashTestnet,
    BitcoinNetwork::DogecoinMainnet,
    BitcoinNetwork::DogecoinTestnet,
    BitcoinNetwork::BitcoinCashMainnet,
    BitcoinNetwork::BitcoinCashTestnet,
    BitcoinNetwork::BitcoinSvMainnet,
    BitcoinNetwork::BitcoinSvTestnet,
    BitcoinNetwork::PepecoinMainnet,
    BitcoinNetwork::OmniXepMainnet,
];

/// The validated parameters of every supported network.
#[derive(Debug)]
pub struct NetworkRegistry {
    params: Vec<NetworkParams>,
}

impl NetworkRegistry {
    /// Returns every network in declaration order.
    pub fn all() -> &'static [BitcoinNetwork] {
        &NETWORKS
    }

    /// Returns the network whose identity is exactly `name`.
    pub fn by_identity(name: &str) -> Result<BitcoinNetwork, NetworkError> {
        NETWORKS
            .iter()
            .find(|network| network.identity() == name)
            .copied()
            .ok_or_else(|| NetworkError::NetworkNotFound(name.into()))
    }

    /// Returns the process-wide registry built from the compiled-in coin configuration.
    ///
    /// The registry is built on first use. A configuration defect is returned
    /// to every caller and never cached.
    pub fn global() -> Result<&'static NetworkRegistry, NetworkError> {
        REGISTRY.get_or_try_init(|| Self::load(|network| *network.conf()))
    }

    /// Builds a registry, reading each network's configuration from `conf_of`.
    pub fn load<F>(conf_of: F) -> Result<Self, NetworkError>
    where
        F: Fn(BitcoinNetwork) -> CoinConf,
    {
        let mut params = Vec::with_capacity(NETWORKS.len());
        for network in NETWORKS.iter() {
            let conf = conf_of(*network);
            match NetworkParams::from_conf(*network, &conf) {
                Ok(entry) => params.push(entry),
                Err(e) => {
                    error!("invalid coin configuration {}: {}", conf.coin_name, e);
                    return Err(e);
                }
            }
        }
        debug!("loaded parameters of {} networks", params.len());
        Ok(Self { params })
    }

    pub fn params(&self, network: BitcoinNetwork) -> &NetworkParams {
        &self.params[network as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkParams> {
        self.params.iter()
    }

    /// Returns every network whose segwit prefix is `hrp`.
    pub fn find_by_hrp(&self, hrp: &str) -> Vec<BitcoinNetwork> {
        let hrp = hrp.to_lowercase();
        self.iter()
            .filter(|params| params.hrp() == Some(hrp.as_str()))
            .map(NetworkParams::network)
            .collect()
    }

    pub fn find_by_cash_addr_prefix(&self, prefix: &str) -> Vec<BitcoinNetwork> {
        let prefix = prefix.to_lowercase();
        self.iter()
            .filter(|params| params.cash_addr_hrp() == Some(prefix.as_str()))
            .map(NetworkParams::network)
            .collect()
    }

    /// Returns every network using `prefix` as its P2PKH or P2SH version bytes.
    ///
    /// Several chains share prefixes, so more than one network may match.
    pub fn find_by_address_prefix(&self, prefix: &[u8]) -> Vec<BitcoinNetwork> {
        self.iter()
            .filter(|params| params.p2pkh_prefix() == prefix || params.p2sh_prefix() == prefix)
            .map(NetworkParams::network)
            .collect()
    }

    pub fn find_by_wif_prefix(&self, prefix: &[u8]) -> Vec<BitcoinNetwork> {
        self.iter()
            .filter(|params| params.wif_prefix() == prefix)
            .map(NetworkParams::network)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::CoinParams;
    use std::collections::HashSet;

    #[test]
    fn declaration_order_matches_discriminants() {
        for (i, network) in NetworkRegistry::all().iter().enumerate() {
            assert_eq!(i, *network as usize);
        }
    }

    #[test]
    fn identities_are_unique() {
        let identities: HashSet<_> = NetworkRegistry::all()
            .iter()
            .map(|network| network.identity())
            .collect();
        assert_eq!(NetworkRegistry::all().len(), identities.len());
    }

    #[test]
    fn by_identity_is_exact() {
        assert_eq!(
            Ok(BitcoinNetwork::DashTestnet),
            NetworkRegistry::by_identity("dashTestnet")
        );
        assert_eq!(
            Err(NetworkError::NetworkNotFound("DashTestnet".into())),
            NetworkRegistry::by_identity("DashTestnet")
        );
        assert_eq!(
            Err(NetworkError::NetworkNotFound("".into())),
            NetworkRegistry::by_identity("")
        );
    }

    #[test]
    fn global_registry_covers_every_network() {
        let registry = NetworkRegistry::global().unwrap();
        for network in NetworkRegistry::all() {
            assert_eq!(*network, registry.params(*network).network());
        }
        assert!(std::ptr::eq(registry, NetworkRegistry::global().unwrap()));
    }

    #[test]
    fn load_names_the_broken_network() {
        let result = NetworkRegistry::load(|network| match network {
            BitcoinNetwork::DogecoinTestnet => CoinConf {
                coin_name: "Dogecoin TestNet",
                params: CoinParams {
                    p2pkh_net_ver: None,
                    ..network.conf().params
                },
            },
            _ => *network.conf(),
        });
        assert_eq!(
            NetworkError::MissingParameter("dogecoinTestnet".into(), "p2pkh_net_ver"),
            result.unwrap_err()
        );
    }

    #[test]
    fn find_by_hrp() {
        let registry = NetworkRegistry::global().unwrap();
        assert_eq!(vec![BitcoinNetwork::LitecoinMainnet], registry.find_by_hrp("LTC"));
        assert!(registry.find_by_hrp("bchtest").is_empty());
        assert!(registry.find_by_hrp("xyz").is_empty());
    }

    #[test]
    fn find_by_cash_addr_prefix() {
        let registry = NetworkRegistry::global().unwrap();
        assert_eq!(
            vec![BitcoinNetwork::BitcoinCashTestnet],
            registry.find_by_cash_addr_prefix("bchtest")
        );
        assert!(registry.find_by_cash_addr_prefix("bc").is_empty());
    }

    #[test]
    fn find_by_address_prefix() {
        let registry = NetworkRegistry::global().unwrap();
        assert_eq!(
            vec![BitcoinNetwork::DashMainnet],
            registry.find_by_address_prefix(&[0x4c])
        );
        // shared by the testnets of bitcoin and its forks
        let matches = registry.find_by_address_prefix(&[0x6f]);
        assert!(matches.contains(&BitcoinNetwork::BitcoinTestnet));
        assert!(matches.contains(&BitcoinNetwork::LitecoinTestnet));
        assert!(matches.contains(&BitcoinNetwork::BitcoinCashTestnet));
        assert!(!matches.contains(&BitcoinNetwork::DogecoinTestnet));
    }

    #[test]
    fn find_by_wif_prefix() {
        let registry = NetworkRegistry::global().unwrap();
        assert_eq!(
            vec![
                BitcoinNetwork::DogecoinMainnet,
                BitcoinNetwork::PepecoinMainnet
            ],
            registry.find_by_wif_prefix(&[0x9e])
        );
    }
}
