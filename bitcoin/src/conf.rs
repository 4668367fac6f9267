//! Raw coin parameters, one entry per chain and network variant.
//!
//! Fields are optional because not every coin defines every prefix. Which of
//! them a network actually requires is decided when the registry validates
//! the table (see [`crate::network::NetworkParams::from_conf`]).

/// Version bytes and human-readable parts of a single coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinParams {
    pub wif_net_ver: Option<&'static [u8]>,
    pub p2pkh_net_ver: Option<&'static [u8]>,
    pub p2sh_net_ver: Option<&'static [u8]>,
    /// Legacy base58 prefixes of chains that also define a second address encoding.
    pub p2pkh_std_net_ver: Option<&'static [u8]>,
    pub p2sh_std_net_ver: Option<&'static [u8]>,
    pub p2wpkh_hrp: Option<&'static str>,
    /// CashAddr prefix.
    pub p2pkh_std_hrp: Option<&'static str>,
}

impl CoinParams {
    const EMPTY: CoinParams = CoinParams {
        wif_net_ver: None,
        p2pkh_net_ver: None,
        p2sh_net_ver: None,
        p2pkh_std_net_ver: None,
        p2sh_std_net_ver: None,
        p2wpkh_hrp: None,
        p2pkh_std_hrp: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinConf {
    pub coin_name: &'static str,
    pub params: CoinParams,
}

pub const BITCOIN_MAINNET: CoinConf = CoinConf {
    coin_name: "Bitcoin",
    params: CoinParams {
        wif_net_ver: Some(&[0x80]),
        p2pkh_net_ver: Some(&[0x00]),
        p2sh_net_ver: Some(&[0x05]),
        p2wpkh_hrp: Some("bc"),
        ..CoinParams::EMPTY
    },
};

pub const BITCOIN_TESTNET: CoinConf = CoinConf {
    coin_name: "Bitcoin TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xef]),
        p2pkh_net_ver: Some(&[0x6f]),
        p2sh_net_ver: Some(&[0xc4]),
        p2wpkh_hrp: Some("tb"),
        ..CoinParams::EMPTY
    },
};

pub const LITECOIN_MAINNET: CoinConf = CoinConf {
    coin_name: "Litecoin",
    params: CoinParams {
        wif_net_ver: Some(&[0xb0]),
        p2pkh_net_ver: Some(&[0x30]),
        p2sh_net_ver: Some(&[0x32]),
        p2pkh_std_net_ver: Some(&[0x00]),
        p2sh_std_net_ver: Some(&[0x05]),
        p2wpkh_hrp: Some("ltc"),
        ..CoinParams::EMPTY
    },
};

pub const LITECOIN_TESTNET: CoinConf = CoinConf {
    coin_name: "Litecoin TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xef]),
        p2pkh_net_ver: Some(&[0x6f]),
        p2sh_net_ver: Some(&[0x3a]),
        p2pkh_std_net_ver: Some(&[0x6f]),
        p2sh_std_net_ver: Some(&[0xc4]),
        p2wpkh_hrp: Some("tltc"),
        ..CoinParams::EMPTY
    },
};

pub const DASH_MAINNET: CoinConf = CoinConf {
    coin_name: "Dash",
    params: CoinParams {
        wif_net_ver: Some(&[0xcc]),
        p2pkh_net_ver: Some(&[0x4c]),
        p2sh_net_ver: Some(&[0x10]),
        ..CoinParams::EMPTY
    },
};

pub const DASH_TESTNET: CoinConf = CoinConf {
    coin_name: "Dash TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xef]),
        p2pkh_net_ver: Some(&[0x8c]),
        p2sh_net_ver: Some(&[0x13]),
        ..CoinParams::EMPTY
    },
};

pub const DOGECOIN_MAINNET: CoinConf = CoinConf {
    coin_name: "Dogecoin",
    params: CoinParams {
        wif_net_ver: Some(&[0x9e]),
        p2pkh_net_ver: Some(&[0x1e]),
        p2sh_net_ver: Some(&[0x16]),
        ..CoinParams::EMPTY
    },
};

pub const DOGECOIN_TESTNET: CoinConf = CoinConf {
    coin_name: "Dogecoin TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xf1]),
        p2pkh_net_ver: Some(&[0x71]),
        p2sh_net_ver: Some(&[0xc4]),
        ..CoinParams::EMPTY
    },
};

pub const BITCOIN_CASH_MAINNET: CoinConf = CoinConf {
    coin_name: "Bitcoin Cash",
    params: CoinParams {
        wif_net_ver: Some(&[0x80]),
        p2pkh_net_ver: Some(&[0x00]),
        p2sh_net_ver: Some(&[0x08]),
        p2pkh_std_net_ver: Some(&[0x00]),
        p2sh_std_net_ver: Some(&[0x05]),
        p2pkh_std_hrp: Some("bitcoincash"),
        ..CoinParams::EMPTY
    },
};

pub const BITCOIN_CASH_TESTNET: CoinConf = CoinConf {
    coin_name: "Bitcoin Cash TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xef]),
        p2pkh_net_ver: Some(&[0x00]),
        p2sh_net_ver: Some(&[0x08]),
        p2pkh_std_net_ver: Some(&[0x6f]),
        p2sh_std_net_ver: Some(&[0xc4]),
        p2pkh_std_hrp: Some("bchtest"),
        ..CoinParams::EMPTY
    },
};

pub const BITCOIN_SV_MAINNET: CoinConf = CoinConf {
    coin_name: "BitcoinSV",
    params: CoinParams {
        wif_net_ver: Some(&[0x80]),
        p2pkh_net_ver: Some(&[0x00]),
        p2sh_net_ver: Some(&[0x05]),
        ..CoinParams::EMPTY
    },
};

pub const BITCOIN_SV_TESTNET: CoinConf = CoinConf {
    coin_name: "BitcoinSV TestNet",
    params: CoinParams {
        wif_net_ver: Some(&[0xef]),
        p2pkh_net_ver: Some(&[0x6f]),
        p2sh_net_ver: Some(&[0xc4]),
        ..CoinParams::EMPTY
    },
};

pub const PEPECOIN_MAINNET: CoinConf = CoinConf {
    coin_name: "Pepecoin",
    params: CoinParams {
        wif_net_ver: Some(&[0x9e]),
        p2pkh_net_ver: Some(&[0x38]),
        p2sh_net_ver: Some(&[0x16]),
        ..CoinParams::EMPTY
    },
};

pub const OMNI_XEP_MAINNET: CoinConf = CoinConf {
    coin_name: "OmniXEP",
    params: CoinParams {
        wif_net_ver: Some(&[0xb7]),
        p2pkh_net_ver: Some(&[0x37]),
        p2sh_net_ver: Some(&[0x38]),
        p2wpkh_hrp: Some("ep"),
        ..CoinParams::EMPTY
    },
};
