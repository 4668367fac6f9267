//! Network parameters of Bitcoin and the UTXO chains derived from it.
//!
//! Every supported chain and network variant is a [`BitcoinNetwork`]; its
//! prefixes come from the [`conf`] table, validated once by the
//! [`NetworkRegistry`].

pub mod conf;
pub mod derivation_path;
pub mod format;
pub mod network;

pub use self::derivation_path::BitcoinDerivationPath;
pub use self::format::BitcoinFormat;
pub use self::network::{BitcoinNetwork, Chain, NetworkParams, NetworkRegistry};
