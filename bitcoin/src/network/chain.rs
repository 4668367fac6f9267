use core::fmt;

use gyu_model::{
    coin::{CoinDescriptor, Purpose},
    network::NetworkError,
};
use serde::Serialize;

use crate::conf::CoinConf;
use crate::format::BitcoinFormat;
use crate::network::BitcoinNetwork;

/// Which human-readable part, if any, a chain's addresses carry.
///
/// Only `Segwit` chains answer `hrp()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrpKind {
    /// Bech32 segwit addresses, taken from `p2wpkh_hrp`.
    Segwit,
    /// CashAddr prefix, taken from `p2pkh_std_hrp` and exposed by `cash_addr_prefix()`.
    CashAddr,
    Unsupported,
}

/// A UTXO blockchain, independent of its network variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Chain {
    Bitcoin,
    Litecoin,
    Dash,
    Dogecoin,
    BitcoinCash,
    BitcoinSv,
    Pepecoin,
    OmniXep,
}

const BITCOIN_FORMATS: &[BitcoinFormat] = &[
    BitcoinFormat::P2PKH,
    BitcoinFormat::P2WPKH,
    BitcoinFormat::P2PK,
    BitcoinFormat::P2TR,
    BitcoinFormat::P2WSH,
    BitcoinFormat::P2WSH_IN_P2SH,
    BitcoinFormat::P2WPKH_IN_P2SH,
    BitcoinFormat::P2PKH_IN_P2SH,
    BitcoinFormat::P2PK_IN_P2SH,
];

// segwit v0 only, no taproot
const SEGWIT_V0_FORMATS: &[BitcoinFormat] = &[
    BitcoinFormat::P2PKH,
    BitcoinFormat::P2WPKH,
    BitcoinFormat::P2PK,
    BitcoinFormat::P2WSH,
    BitcoinFormat::P2WSH_IN_P2SH,
    BitcoinFormat::P2WPKH_IN_P2SH,
    BitcoinFormat::P2PKH_IN_P2SH,
    BitcoinFormat::P2PK_IN_P2SH,
];

const LEGACY_FORMATS: &[BitcoinFormat] = &[
    BitcoinFormat::P2PKH,
    BitcoinFormat::P2PK,
    BitcoinFormat::P2PKH_IN_P2SH,
    BitcoinFormat::P2PK_IN_P2SH,
];

const BITCOIN_CASH_FORMATS: &[BitcoinFormat] = &[
    BitcoinFormat::P2PKH,
    BitcoinFormat::P2PKHWT,
    BitcoinFormat::P2PK,
    BitcoinFormat::P2PKH_IN_P2SH,
    BitcoinFormat::P2PK_IN_P2SH,
    BitcoinFormat::P2PKH_IN_P2SH32,
    BitcoinFormat::P2PK_IN_P2SH32,
    BitcoinFormat::P2PKH_IN_P2SH32_WT,
    BitcoinFormat::P2PK_IN_P2SH32_WT,
    BitcoinFormat::P2PKH_IN_P2SH_WT,
    BitcoinFormat::P2PK_IN_P2SH_WT,
];

const BITCOIN_SV_FORMATS: &[BitcoinFormat] = &[BitcoinFormat::P2PKH, BitcoinFormat::P2PK];

/// Mainnet and testnet coin registrations of a chain.
struct CoinTable {
    mainnet: &'static [CoinDescriptor],
    testnet: &'static [CoinDescriptor],
}

const BITCOIN_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("bitcoin", Purpose::BIP44, 0, false),
        CoinDescriptor::new("bitcoin", Purpose::BIP49, 0, false),
        CoinDescriptor::new("bitcoin", Purpose::BIP84, 0, false),
        CoinDescriptor::new("bitcoin", Purpose::BIP86, 0, false),
    ],
    testnet: &[
        CoinDescriptor::new("bitcoinTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("bitcoinTestnet", Purpose::BIP49, 1, true),
        CoinDescriptor::new("bitcoinTestnet", Purpose::BIP84, 1, true),
        CoinDescriptor::new("bitcoinTestnet", Purpose::BIP86, 1, true),
    ],
};

const LITECOIN_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("litecoin", Purpose::BIP44, 2, false),
        CoinDescriptor::new("litecoin", Purpose::BIP49, 2, false),
        CoinDescriptor::new("litecoin", Purpose::BIP84, 2, false),
    ],
    testnet: &[
        CoinDescriptor::new("litecoinTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("litecoinTestnet", Purpose::BIP49, 1, true),
        CoinDescriptor::new("litecoinTestnet", Purpose::BIP84, 1, true),
    ],
};

const DASH_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("dash", Purpose::BIP44, 5, false),
        CoinDescriptor::new("dash", Purpose::BIP49, 5, false),
    ],
    testnet: &[
        CoinDescriptor::new("dashTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("dashTestnet", Purpose::BIP49, 1, true),
    ],
};

const DOGECOIN_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("dogecoin", Purpose::BIP44, 3, false),
        CoinDescriptor::new("dogecoin", Purpose::BIP49, 3, false),
    ],
    testnet: &[
        CoinDescriptor::new("dogecoinTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("dogecoinTestnet", Purpose::BIP49, 1, true),
    ],
};

const BITCOIN_CASH_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("bitcoinCash", Purpose::BIP44, 145, false),
        CoinDescriptor::new("bitcoinCash", Purpose::BIP49, 145, false),
    ],
    testnet: &[
        CoinDescriptor::new("bitcoinCashTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("bitcoinCashTestnet", Purpose::BIP49, 1, true),
    ],
};

const BITCOIN_SV_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("bitcoinSv", Purpose::BIP44, 236, false),
        CoinDescriptor::new("bitcoinSv", Purpose::BIP49, 236, false),
    ],
    testnet: &[
        CoinDescriptor::new("bitcoinSvTestnet", Purpose::BIP44, 1, true),
        CoinDescriptor::new("bitcoinSvTestnet", Purpose::BIP49, 1, true),
    ],
};

// Pepecoin keeps its testnet registration even though no testnet singleton is declared.
const PEPECOIN_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("pepecoin", Purpose::BIP44, 3434, false),
        CoinDescriptor::new("pepecoin", Purpose::BIP49, 3434, false),
    ],
    testnet: &[CoinDescriptor::new("pepecoinTestnet", Purpose::BIP44, 1, true)],
};

const OMNI_XEP_COINS: CoinTable = CoinTable {
    mainnet: &[
        CoinDescriptor::new("omniXep", Purpose::BIP44, 89, false),
        CoinDescriptor::new("omniXep", Purpose::BIP49, 89, false),
        CoinDescriptor::new("omniXep", Purpose::BIP84, 89, false),
    ],
    testnet: &[],
};

impl Chain {
    pub const ALL: [Chain; 8] = [
        Chain::Bitcoin,
        Chain::Litecoin,
        Chain::Dash,
        Chain::Dogecoin,
        Chain::BitcoinCash,
        Chain::BitcoinSv,
        Chain::Pepecoin,
        Chain::OmniXep,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Bitcoin => "bitcoin",
            Chain::Litecoin => "litecoin",
            Chain::Dash => "dash",
            Chain::Dogecoin => "dogecoin",
            Chain::BitcoinCash => "bitcoinCash",
            Chain::BitcoinSv => "bitcoinSv",
            Chain::Pepecoin => "pepecoin",
            Chain::OmniXep => "omniXep",
        }
    }

    /// Resolves a chain by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Chain, NetworkError> {
        Chain::ALL
            .iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| NetworkError::ChainNotFound(name.into()))
    }

    /// Returns the designated mainnet singleton of the chain.
    pub fn mainnet(&self) -> BitcoinNetwork {
        match self {
            Chain::Bitcoin => BitcoinNetwork::BitcoinMainnet,
            Chain::Litecoin => BitcoinNetwork::LitecoinMainnet,
            Chain::Dash => BitcoinNetwork::DashMainnet,
            Chain::Dogecoin => BitcoinNetwork::DogecoinMainnet,
            Chain::BitcoinCash => BitcoinNetwork::BitcoinCashMainnet,
            Chain::BitcoinSv => BitcoinNetwork::BitcoinSvMainnet,
            Chain::Pepecoin => BitcoinNetwork::PepecoinMainnet,
            Chain::OmniXep => BitcoinNetwork::OmniXepMainnet,
        }
    }

    pub fn testnet(&self) -> Option<BitcoinNetwork> {
        match self {
            Chain::Bitcoin => Some(BitcoinNetwork::BitcoinTestnet),
            Chain::Litecoin => Some(BitcoinNetwork::LitecoinTestnet),
            Chain::Dash => Some(BitcoinNetwork::DashTestnet),
            Chain::Dogecoin => Some(BitcoinNetwork::DogecoinTestnet),
            Chain::BitcoinCash => Some(BitcoinNetwork::BitcoinCashTestnet),
            Chain::BitcoinSv => Some(BitcoinNetwork::BitcoinSvTestnet),
            Chain::Pepecoin | Chain::OmniXep => None,
        }
    }

    /// Returns the address formats the chain can encode, in display order.
    pub fn supported_formats(&self) -> &'static [BitcoinFormat] {
        match self {
            Chain::Bitcoin => BITCOIN_FORMATS,
            Chain::Litecoin | Chain::OmniXep => SEGWIT_V0_FORMATS,
            Chain::Dash | Chain::Dogecoin | Chain::Pepecoin => LEGACY_FORMATS,
            Chain::BitcoinCash => BITCOIN_CASH_FORMATS,
            Chain::BitcoinSv => BITCOIN_SV_FORMATS,
        }
    }

    pub fn hrp_kind(&self) -> HrpKind {
        match self {
            Chain::Bitcoin | Chain::Litecoin | Chain::OmniXep => HrpKind::Segwit,
            Chain::BitcoinCash => HrpKind::CashAddr,
            Chain::Dash | Chain::Dogecoin | Chain::BitcoinSv | Chain::Pepecoin => {
                HrpKind::Unsupported
            }
        }
    }

    /// Whether P2PKH/P2SH prefixes come from the `*_std_net_ver` fields.
    pub(crate) fn uses_std_prefixes(&self) -> bool {
        *self == Chain::BitcoinCash
    }

    /// Returns the coin registrations of the mainnet or testnet branch.
    ///
    /// A branch without a registration yields an empty slice.
    pub fn coin_descriptors(&self, mainnet: bool) -> &'static [CoinDescriptor] {
        let table = match self {
            Chain::Bitcoin => &BITCOIN_COINS,
            Chain::Litecoin => &LITECOIN_COINS,
            Chain::Dash => &DASH_COINS,
            Chain::Dogecoin => &DOGECOIN_COINS,
            Chain::BitcoinCash => &BITCOIN_CASH_COINS,
            Chain::BitcoinSv => &BITCOIN_SV_COINS,
            Chain::Pepecoin => &PEPECOIN_COINS,
            Chain::OmniXep => &OMNI_XEP_COINS,
        };
        match mainnet {
            true => table.mainnet,
            false => table.testnet,
        }
    }

    pub fn conf(&self, mainnet: bool) -> Option<&'static CoinConf> {
        match mainnet {
            true => Some(self.mainnet().conf()),
            false => self.testnet().map(|network| network.conf()),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
