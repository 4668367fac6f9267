pub mod chain;
pub mod params;
pub mod registry;

use core::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use gyu_model::{
    coin::CoinDescriptor,
    network::{Network, NetworkError},
};
use serde::Serialize;

use crate::conf::{self, CoinConf};
use crate::format::BitcoinFormat;

pub use self::chain::*;
pub use self::params::*;
pub use self::registry::*;

/// Every supported chain and network variant.
///
/// Values are singletons: the set is closed and each variant names exactly one
/// network. Prefixes are looked up in the validated [`NetworkRegistry`].
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BitcoinNetwork {
    BitcoinMainnet,
    BitcoinTestnet,
    LitecoinMainnet,
    LitecoinTestnet,
    DashMainnet,
    DashTestnet,
    DogecoinMainnet,
    DogecoinTestnet,
    BitcoinCashMainnet,
    BitcoinCashTestnet,
    BitcoinSvMainnet,
    BitcoinSvTestnet,
    PepecoinMainnet,
    OmniXepMainnet,
}

impl BitcoinNetwork {
    pub fn chain(&self) -> Chain {
        match self {
            BitcoinNetwork::BitcoinMainnet | BitcoinNetwork::BitcoinTestnet => Chain::Bitcoin,
            BitcoinNetwork::LitecoinMainnet | BitcoinNetwork::LitecoinTestnet => Chain::Litecoin,
            BitcoinNetwork::DashMainnet | BitcoinNetwork::DashTestnet => Chain::Dash,
            BitcoinNetwork::DogecoinMainnet | BitcoinNetwork::DogecoinTestnet => Chain::Dogecoin,
            BitcoinNetwork::BitcoinCashMainnet | BitcoinNetwork::BitcoinCashTestnet => {
                Chain::BitcoinCash
            }
            BitcoinNetwork::BitcoinSvMainnet | BitcoinNetwork::BitcoinSvTestnet => Chain::BitcoinSv,
            BitcoinNetwork::PepecoinMainnet => Chain::Pepecoin,
            BitcoinNetwork::OmniXepMainnet => Chain::OmniXep,
        }
    }

    /// Returns the raw coin configuration backing this network.
    pub fn conf(&self) -> &'static CoinConf {
        match self {
            BitcoinNetwork::BitcoinMainnet => &conf::BITCOIN_MAINNET,
            BitcoinNetwork::BitcoinTestnet => &conf::BITCOIN_TESTNET,
            BitcoinNetwork::LitecoinMainnet => &conf::LITECOIN_MAINNET,
            BitcoinNetwork::LitecoinTestnet => &conf::LITECOIN_TESTNET,
            BitcoinNetwork::DashMainnet => &conf::DASH_MAINNET,
            BitcoinNetwork::DashTestnet => &conf::DASH_TESTNET,
            BitcoinNetwork::DogecoinMainnet => &conf::DOGECOIN_MAINNET,
            BitcoinNetwork::DogecoinTestnet => &conf::DOGECOIN_TESTNET,
            BitcoinNetwork::BitcoinCashMainnet => &conf::BITCOIN_CASH_MAINNET,
            BitcoinNetwork::BitcoinCashTestnet => &conf::BITCOIN_CASH_TESTNET,
            BitcoinNetwork::BitcoinSvMainnet => &conf::BITCOIN_SV_MAINNET,
            BitcoinNetwork::BitcoinSvTestnet => &conf::BITCOIN_SV_TESTNET,
            BitcoinNetwork::PepecoinMainnet => &conf::PEPECOIN_MAINNET,
            BitcoinNetwork::OmniXepMainnet => &conf::OMNI_XEP_MAINNET,
        }
    }

    /// Returns the validated prefixes of this network.
    pub fn params(&self) -> Result<&'static NetworkParams, NetworkError> {
        Ok(NetworkRegistry::global()?.params(*self))
    }

    /// Returns the token-aware and 32-byte script hash prefixes of Bitcoin Cash.
    pub fn bitcoin_cash_prefixes(&self) -> Result<&'static BitcoinCashPrefixes, NetworkError> {
        match self.chain() {
            Chain::BitcoinCash => Ok(&BITCOIN_CASH_PREFIXES),
            _ => Err(NetworkError::UnsupportedFeature(
                self.to_string(),
                "bitcoin cash prefixes".into(),
            )),
        }
    }

    /// Returns the CashAddr prefix of Bitcoin Cash, e.g. `bitcoincash`.
    pub fn cash_addr_prefix(&self) -> Result<&'static str, NetworkError> {
        if self.chain().hrp_kind() != HrpKind::CashAddr {
            return Err(NetworkError::UnsupportedFeature(
                self.to_string(),
                "cashaddr".into(),
            ));
        }
        self.params()?
            .cash_addr_hrp()
            .ok_or_else(|| NetworkError::MissingParameter(self.to_string(), "p2pkh_std_hrp"))
    }

    /// Returns the prefix an address of the given format is stamped with.
    ///
    /// Base58 formats yield version bytes, segwit formats yield the HRP bytes.
    pub fn address_prefix(&self, format: &BitcoinFormat) -> Result<Vec<u8>, NetworkError> {
        if !self.supports(format) {
            return Err(NetworkError::UnsupportedFeature(
                self.to_string(),
                format.to_string(),
            ));
        }

        let prefix = match format {
            BitcoinFormat::P2PK | BitcoinFormat::P2PKH => self.p2pkh_prefix()?,
            BitcoinFormat::P2WPKH | BitcoinFormat::P2WSH | BitcoinFormat::P2TR => {
                self.hrp()?.as_bytes()
            }
            BitcoinFormat::P2WPKH_IN_P2SH
            | BitcoinFormat::P2WSH_IN_P2SH
            | BitcoinFormat::P2PKH_IN_P2SH
            | BitcoinFormat::P2PK_IN_P2SH => self.p2sh_prefix()?,
            BitcoinFormat::P2PKHWT => self.bitcoin_cash_prefixes()?.p2pkh_wt,
            BitcoinFormat::P2PKH_IN_P2SH_WT | BitcoinFormat::P2PK_IN_P2SH_WT => {
                self.bitcoin_cash_prefixes()?.p2sh20_wt
            }
            BitcoinFormat::P2PKH_IN_P2SH32 | BitcoinFormat::P2PK_IN_P2SH32 => {
                self.bitcoin_cash_prefixes()?.p2sh32
            }
            BitcoinFormat::P2PKH_IN_P2SH32_WT | BitcoinFormat::P2PK_IN_P2SH32_WT => {
                self.bitcoin_cash_prefixes()?.p2sh32_wt
            }
        };
        Ok(prefix.to_vec())
    }

    pub fn summary(&self) -> Result<NetworkSummary, NetworkError> {
        NetworkSummary::new(*self)
    }
}

impl Network for BitcoinNetwork {
    type Format = BitcoinFormat;

    fn identity(&self) -> &'static str {
        match self {
            BitcoinNetwork::BitcoinMainnet => "bitcoinMainnet",
            BitcoinNetwork::BitcoinTestnet => "bitcoinTestnet",
            BitcoinNetwork::LitecoinMainnet => "litecoinMainnet",
            BitcoinNetwork::LitecoinTestnet => "litecoinTestnet",
            BitcoinNetwork::DashMainnet => "dashMainnet",
            BitcoinNetwork::DashTestnet => "dashTestnet",
            BitcoinNetwork::DogecoinMainnet => "dogecoinMainnet",
            BitcoinNetwork::DogecoinTestnet => "dogecoinTestnet",
            BitcoinNetwork::BitcoinCashMainnet => "bitcoinCashMainnet",
            BitcoinNetwork::BitcoinCashTestnet => "bitcoinCashTestnet",
            BitcoinNetwork::BitcoinSvMainnet => "bitcoinSvMainnet",
            BitcoinNetwork::BitcoinSvTestnet => "bitcoinSvTestnet",
            BitcoinNetwork::PepecoinMainnet => "pepecoinMainnet",
            BitcoinNetwork::OmniXepMainnet => "omniXepMainnet",
        }
    }

    fn wif_prefix(&self) -> Result<&'static [u8], NetworkError> {
        Ok(self.params()?.wif_prefix())
    }

    fn p2pkh_prefix(&self) -> Result<&'static [u8], NetworkError> {
        Ok(self.params()?.p2pkh_prefix())
    }

    fn p2sh_prefix(&self) -> Result<&'static [u8], NetworkError> {
        Ok(self.params()?.p2sh_prefix())
    }

    fn hrp(&self) -> Result<&'static str, NetworkError> {
        if self.chain().hrp_kind() != HrpKind::Segwit {
            return Err(NetworkError::UnsupportedFeature(
                self.to_string(),
                "segwit".into(),
            ));
        }
        self.params()?
            .hrp()
            .ok_or_else(|| NetworkError::MissingParameter(self.to_string(), "hrp"))
    }

    fn supported_formats(&self) -> &'static [BitcoinFormat] {
        self.chain().supported_formats()
    }

    fn is_mainnet(&self) -> bool {
        *self == self.chain().mainnet()
    }

    fn coin_descriptors(&self) -> &'static [CoinDescriptor] {
        self.chain().coin_descriptors(self.is_mainnet())
    }
}

impl PartialEq for BitcoinNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.chain() == other.chain() && self.identity() == other.identity()
    }
}

impl Eq for BitcoinNetwork {}

impl Hash for BitcoinNetwork {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl FromStr for BitcoinNetwork {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkRegistry::by_identity(s)
    }
}

impl fmt::Display for BitcoinNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyu_model::derivation_path::ChildIndex;
    use std::collections::HashMap;

    #[test]
    fn identity_matches_serialization() {
        for network in NetworkRegistry::all() {
            assert_eq!(
                format!("\"{}\"", network.identity()),
                serde_json::to_string(network).unwrap()
            );
        }
    }

    #[test]
    fn bitcoin_prefixes() {
        let network = BitcoinNetwork::BitcoinMainnet;
        assert_eq!(&[0x80], network.wif_prefix().unwrap());
        assert_eq!(&[0x00], network.p2pkh_prefix().unwrap());
        assert_eq!(&[0x05], network.p2sh_prefix().unwrap());
        assert_eq!("bc", network.hrp().unwrap());
        assert_eq!("tb", BitcoinNetwork::BitcoinTestnet.hrp().unwrap());
    }

    #[test]
    fn hrp_unsupported_without_segwit() {
        for network in &[
            BitcoinNetwork::DashMainnet,
            BitcoinNetwork::DashTestnet,
            BitcoinNetwork::DogecoinMainnet,
            BitcoinNetwork::BitcoinCashMainnet,
            BitcoinNetwork::BitcoinCashTestnet,
            BitcoinNetwork::BitcoinSvMainnet,
            BitcoinNetwork::PepecoinMainnet,
        ] {
            assert_eq!(
                Err(NetworkError::UnsupportedFeature(
                    network.to_string(),
                    "segwit".into()
                )),
                network.hrp()
            );
        }
    }

    #[test]
    fn is_mainnet() {
        assert!(BitcoinNetwork::BitcoinMainnet.is_mainnet());
        assert!(!BitcoinNetwork::BitcoinTestnet.is_mainnet());
        assert!(BitcoinNetwork::PepecoinMainnet.is_mainnet());
        assert!(BitcoinNetwork::OmniXepMainnet.is_mainnet());
        assert!(!BitcoinNetwork::BitcoinSvTestnet.is_mainnet());
    }

    #[test]
    fn coin_descriptors_follow_branch() {
        let mainnet = BitcoinNetwork::BitcoinMainnet.coin_descriptors();
        let testnet = BitcoinNetwork::BitcoinTestnet.coin_descriptors();
        assert!(!mainnet.is_empty());
        assert!(!testnet.is_empty());
        assert_ne!(mainnet, testnet);
        assert!(mainnet
            .iter()
            .all(|coin| coin.coin_type == ChildIndex::Hardened(0)));
        assert!(testnet
            .iter()
            .all(|coin| coin.coin_type == ChildIndex::Hardened(1)));
    }

    #[test]
    fn usable_as_map_key() {
        let mut labels = HashMap::new();
        labels.insert(BitcoinNetwork::LitecoinMainnet, "ltc");
        labels.insert(BitcoinNetwork::LitecoinTestnet, "tltc");
        let copy = BitcoinNetwork::LitecoinMainnet;
        assert_eq!(Some(&"ltc"), labels.get(&copy));
        assert_eq!(2, labels.len());
    }

    #[test]
    fn address_prefix() {
        let bitcoin = BitcoinNetwork::BitcoinMainnet;
        assert_eq!(vec![0x00], bitcoin.address_prefix(&BitcoinFormat::P2PKH).unwrap());
        assert_eq!(
            vec![0x05],
            bitcoin
                .address_prefix(&BitcoinFormat::P2WPKH_IN_P2SH)
                .unwrap()
        );
        assert_eq!(
            b"bc".to_vec(),
            bitcoin.address_prefix(&BitcoinFormat::P2TR).unwrap()
        );
        assert_eq!(
            Err(NetworkError::UnsupportedFeature(
                "bitcoinMainnet".into(),
                "p2pkhwt".into()
            )),
            bitcoin.address_prefix(&BitcoinFormat::P2PKHWT)
        );

        let cash = BitcoinNetwork::BitcoinCashTestnet;
        assert_eq!(vec![0x6f], cash.address_prefix(&BitcoinFormat::P2PKH).unwrap());
        assert_eq!(vec![0x10], cash.address_prefix(&BitcoinFormat::P2PKHWT).unwrap());
        assert_eq!(
            vec![0x1b],
            cash.address_prefix(&BitcoinFormat::P2PK_IN_P2SH32_WT)
                .unwrap()
        );

        assert!(BitcoinNetwork::LitecoinMainnet
            .address_prefix(&BitcoinFormat::P2TR)
            .is_err());
    }

    #[test]
    fn bitcoin_cash_prefixes_only_on_bitcoin_cash() {
        assert!(BitcoinNetwork::BitcoinCashTestnet
            .bitcoin_cash_prefixes()
            .is_ok());
        assert!(BitcoinNetwork::BitcoinSvMainnet
            .bitcoin_cash_prefixes()
            .is_err());
    }

    #[test]
    fn cash_addr_prefix_only_on_bitcoin_cash() {
        assert_eq!(
            Ok("bitcoincash"),
            BitcoinNetwork::BitcoinCashMainnet.cash_addr_prefix()
        );
        assert_eq!(
            Ok("bchtest"),
            BitcoinNetwork::BitcoinCashTestnet.cash_addr_prefix()
        );
        assert_eq!(
            Err(NetworkError::UnsupportedFeature(
                "bitcoinMainnet".into(),
                "cashaddr".into()
            )),
            BitcoinNetwork::BitcoinMainnet.cash_addr_prefix()
        );
        assert!(BitcoinNetwork::DashMainnet.cash_addr_prefix().is_err());
    }

    #[test]
    fn summary() {
        let summary = BitcoinNetwork::BitcoinCashMainnet.summary().unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!("bitcoinCashMainnet", json["identity"]);
        assert_eq!("bitcoinCash", json["chain"]);
        assert_eq!(true, json["mainnet"]);
        assert_eq!(serde_json::Value::Null, json["hrp"]);
        assert_eq!("bitcoincash", json["cash_addr_hrp"]);
        assert_eq!("0b", json["bitcoin_cash"]["p2sh32"]);
        assert_eq!(11, json["formats"].as_array().unwrap().len());

        let json = serde_json::to_value(&BitcoinNetwork::DashMainnet.summary().unwrap()).unwrap();
        assert!(json.get("bitcoin_cash").is_none());
    }
}
