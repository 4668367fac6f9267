use core::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

use crate::coin::CoinDescriptor;
use crate::format::Format;

/// The read-only parameter surface of a UTXO network.
///
/// Implementors are closed sets of singleton networks. Two values are equal
/// iff they name the same network, so they are cheap to compare and usable as
/// map keys.
pub trait Network:
    Copy + Clone + Debug + Display + FromStr + Send + Sync + 'static + Eq + Hash + Sized
{
    type Format: Format;

    /// Unique name of the network, e.g. `bitcoinMainnet`.
    fn identity(&self) -> &'static str;

    /// Returns the WIF private key prefix.
    fn wif_prefix(&self) -> Result<&'static [u8], NetworkError>;

    /// Returns the pay-to-pubkey-hash address prefix.
    fn p2pkh_prefix(&self) -> Result<&'static [u8], NetworkError>;

    /// Returns the pay-to-script-hash address prefix.
    fn p2sh_prefix(&self) -> Result<&'static [u8], NetworkError>;

    /// Returns the human-readable part of segwit addresses.
    ///
    /// Fails with [`NetworkError::UnsupportedFeature`] on chains without segwit.
    fn hrp(&self) -> Result<&'static str, NetworkError>;

    fn supported_formats(&self) -> &'static [Self::Format];

    fn is_mainnet(&self) -> bool;

    fn coin_descriptors(&self) -> &'static [CoinDescriptor];

    fn supports(&self, format: &Self::Format) -> bool {
        self.supported_formats().contains(format)
    }
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[fail(display = "{} : {}", _0, _1)]
    Crate(&'static str, String),

    #[fail(display = "invalid {} for {}: {}", _1, _0, _2)]
    InvalidParameter(String, &'static str, String),

    #[fail(display = "missing {} in the configuration of {}", _1, _0)]
    MissingParameter(String, &'static str),

    #[fail(display = "unknown chain: {}", _0)]
    ChainNotFound(String),

    #[fail(display = "unknown network: {}", _0)]
    NetworkNotFound(String),

    #[fail(display = "{} does not support {}", _0, _1)]
    UnsupportedFeature(String, String),
}

impl From<bech32::Error> for NetworkError {
    fn from(error: bech32::Error) -> Self {
        NetworkError::Crate("bech32", format!("{:?}", error))
    }
}

impl From<hex::FromHexError> for NetworkError {
    fn from(error: hex::FromHexError) -> Self {
        NetworkError::Crate("hex", format!("{:?}", error))
    }
}
