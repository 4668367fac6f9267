use bech32::{u5, Bech32};
use gyu_model::{
    coin::CoinDescriptor,
    network::{Network, NetworkError},
};
use serde::{Serialize, Serializer};

use crate::conf::CoinConf;
use crate::format::BitcoinFormat;
use crate::network::{chain::HrpKind, BitcoinNetwork, Chain};

fn to_hex<T: AsRef<[u8]>, S: Serializer>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

/// Validated prefixes of a single network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkParams {
    network: BitcoinNetwork,
    #[serde(serialize_with = "to_hex")]
    wif_prefix: &'static [u8],
    #[serde(serialize_with = "to_hex")]
    p2pkh_prefix: &'static [u8],
    #[serde(serialize_with = "to_hex")]
    p2sh_prefix: &'static [u8],
    hrp: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cash_addr_hrp: Option<&'static str>,
}

impl NetworkParams {
    /// Builds the parameters of `network` from its coin configuration.
    ///
    /// Every field the network requires must be present and non-empty.
    pub fn from_conf(network: BitcoinNetwork, conf: &CoinConf) -> Result<Self, NetworkError> {
        let chain = network.chain();
        let params = &conf.params;

        let (p2pkh, p2sh, p2pkh_field, p2sh_field) = match chain.uses_std_prefixes() {
            true => (
                params.p2pkh_std_net_ver,
                params.p2sh_std_net_ver,
                "p2pkh_std_net_ver",
                "p2sh_std_net_ver",
            ),
            false => (
                params.p2pkh_net_ver,
                params.p2sh_net_ver,
                "p2pkh_net_ver",
                "p2sh_net_ver",
            ),
        };

        let (hrp, cash_addr_hrp) = match chain.hrp_kind() {
            HrpKind::Segwit => (
                Some(validate_hrp(
                    network,
                    required(network, params.p2wpkh_hrp, "p2wpkh_hrp")?,
                    "p2wpkh_hrp",
                )?),
                None,
            ),
            HrpKind::CashAddr => (
                None,
                Some(validate_hrp(
                    network,
                    required(network, params.p2pkh_std_hrp, "p2pkh_std_hrp")?,
                    "p2pkh_std_hrp",
                )?),
            ),
            HrpKind::Unsupported => (None, None),
        };

        Ok(Self {
            network,
            wif_prefix: required(network, params.wif_net_ver, "wif_net_ver")?,
            p2pkh_prefix: required(network, p2pkh, p2pkh_field)?,
            p2sh_prefix: required(network, p2sh, p2sh_field)?,
            hrp,
            cash_addr_hrp,
        })
    }

    pub fn network(&self) -> BitcoinNetwork {
        self.network
    }

    pub fn wif_prefix(&self) -> &'static [u8] {
        self.wif_prefix
    }

    pub fn p2pkh_prefix(&self) -> &'static [u8] {
        self.p2pkh_prefix
    }

    pub fn p2sh_prefix(&self) -> &'static [u8] {
        self.p2sh_prefix
    }

    /// Segwit human-readable part, present only on segwit chains.
    pub fn hrp(&self) -> Option<&'static str> {
        self.hrp
    }

    pub fn cash_addr_hrp(&self) -> Option<&'static str> {
        self.cash_addr_hrp
    }
}

fn required<T: AsRef<[u8]> + ?Sized>(
    network: BitcoinNetwork,
    value: Option<&'static T>,
    field: &'static str,
) -> Result<&'static T, NetworkError> {
    match value {
        Some(value) if !AsRef::<[u8]>::as_ref(value).is_empty() => Ok(value),
        _ => Err(NetworkError::MissingParameter(network.to_string(), field)),
    }
}

fn validate_hrp(
    network: BitcoinNetwork,
    hrp: &'static str,
    field: &'static str,
) -> Result<&'static str, NetworkError> {
    Bech32::new(hrp.to_string(), Vec::<u5>::new())?;
    if hrp != hrp.to_lowercase() {
        return Err(NetworkError::InvalidParameter(
            network.to_string(),
            field,
            format!("{} is not lowercase", hrp),
        ));
    }
    Ok(hrp)
}

/// Token-aware and 32-byte script hash prefixes of Bitcoin Cash.
///
/// These are CashAddr version bytes and do not come from the coin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitcoinCashPrefixes {
    #[serde(serialize_with = "to_hex")]
    pub p2pkh_wt: &'static [u8],
    #[serde(serialize_with = "to_hex")]
    pub p2sh20_wt: &'static [u8],
    #[serde(serialize_with = "to_hex")]
    pub p2sh32: &'static [u8],
    #[serde(serialize_with = "to_hex")]
    pub p2sh32_wt: &'static [u8],
}

pub const BITCOIN_CASH_PREFIXES: BitcoinCashPrefixes = BitcoinCashPrefixes {
    p2pkh_wt: &[0x10],
    p2sh20_wt: &[0x18],
    p2sh32: &[0x0b],
    p2sh32_wt: &[0x1b],
};

/// Everything known about a network, flattened for display.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub identity: &'static str,
    pub chain: Chain,
    pub mainnet: bool,
    #[serde(flatten)]
    pub params: NetworkParams,
    pub formats: &'static [BitcoinFormat],
    pub coins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitcoin_cash: Option<BitcoinCashPrefixes>,
}

impl NetworkSummary {
    pub fn new(network: BitcoinNetwork) -> Result<Self, NetworkError> {
        Ok(Self {
            identity: network.identity(),
            chain: network.chain(),
            mainnet: network.is_mainnet(),
            params: network.params()?.clone(),
            formats: network.supported_formats(),
            coins: network
                .coin_descriptors()
                .iter()
                .map(CoinDescriptor::to_string)
                .collect(),
            bitcoin_cash: network.bitcoin_cash_prefixes().ok().copied(),
        })
    }
}
