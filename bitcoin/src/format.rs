use core::fmt;
use std::str::FromStr;

use gyu_model::format::{Format, FormatError};
use serde::Serialize;

/// Address encoding schemes a UTXO network may support.
///
/// `_WT` variants are Bitcoin Cash token-aware addresses, `P2SH32` variants
/// use a 32-byte script hash.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinFormat {
    P2PK,
    P2PKH,
    P2PKHWT,
    P2WPKH,
    P2WSH,
    P2TR,
    P2WPKH_IN_P2SH,
    P2WSH_IN_P2SH,
    P2PKH_IN_P2SH,
    P2PK_IN_P2SH,
    P2PKH_IN_P2SH_WT,
    P2PK_IN_P2SH_WT,
    P2PKH_IN_P2SH32,
    P2PK_IN_P2SH32,
    P2PKH_IN_P2SH32_WT,
    P2PK_IN_P2SH32_WT,
}

impl Format for BitcoinFormat {}

impl BitcoinFormat {
    pub const ALL: [BitcoinFormat; 16] = [
        BitcoinFormat::P2PK,
        BitcoinFormat::P2PKH,
        BitcoinFormat::P2PKHWT,
        BitcoinFormat::P2WPKH,
        BitcoinFormat::P2WSH,
        BitcoinFormat::P2TR,
        BitcoinFormat::P2WPKH_IN_P2SH,
        BitcoinFormat::P2WSH_IN_P2SH,
        BitcoinFormat::P2PKH_IN_P2SH,
        BitcoinFormat::P2PK_IN_P2SH,
        BitcoinFormat::P2PKH_IN_P2SH_WT,
        BitcoinFormat::P2PK_IN_P2SH_WT,
        BitcoinFormat::P2PKH_IN_P2SH32,
        BitcoinFormat::P2PK_IN_P2SH32,
        BitcoinFormat::P2PKH_IN_P2SH32_WT,
        BitcoinFormat::P2PK_IN_P2SH32_WT,
    ];

    /// Native witness programs, encoded with the network HRP.
    pub fn is_segwit(&self) -> bool {
        matches!(
            self,
            BitcoinFormat::P2WPKH | BitcoinFormat::P2WSH | BitcoinFormat::P2TR
        )
    }

    /// Formats whose output script is a pay-to-script-hash.
    pub fn is_script_hash(&self) -> bool {
        matches!(
            self,
            BitcoinFormat::P2WPKH_IN_P2SH
                | BitcoinFormat::P2WSH_IN_P2SH
                | BitcoinFormat::P2PKH_IN_P2SH
                | BitcoinFormat::P2PK_IN_P2SH
                | BitcoinFormat::P2PKH_IN_P2SH_WT
                | BitcoinFormat::P2PK_IN_P2SH_WT
                | BitcoinFormat::P2PKH_IN_P2SH32
                | BitcoinFormat::P2PK_IN_P2SH32
                | BitcoinFormat::P2PKH_IN_P2SH32_WT
                | BitcoinFormat::P2PK_IN_P2SH32_WT
        )
    }

    pub fn is_token_aware(&self) -> bool {
        matches!(
            self,
            BitcoinFormat::P2PKHWT
                | BitcoinFormat::P2PKH_IN_P2SH_WT
                | BitcoinFormat::P2PK_IN_P2SH_WT
                | BitcoinFormat::P2PKH_IN_P2SH32_WT
                | BitcoinFormat::P2PK_IN_P2SH32_WT
        )
    }

    /// Length in bytes of the hash committed to by the address.
    pub fn hash_length(&self) -> usize {
        match self {
            BitcoinFormat::P2WSH
            | BitcoinFormat::P2TR
            | BitcoinFormat::P2PKH_IN_P2SH32
            | BitcoinFormat::P2PK_IN_P2SH32
            | BitcoinFormat::P2PKH_IN_P2SH32_WT
            | BitcoinFormat::P2PK_IN_P2SH32_WT => 32,
            _ => 20,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BitcoinFormat::P2PK => "p2pk",
            BitcoinFormat::P2PKH => "p2pkh",
            BitcoinFormat::P2PKHWT => "p2pkhwt",
            BitcoinFormat::P2WPKH => "p2wpkh",
            BitcoinFormat::P2WSH => "p2wsh",
            BitcoinFormat::P2TR => "p2tr",
            BitcoinFormat::P2WPKH_IN_P2SH => "p2wpkh_in_p2sh",
            BitcoinFormat::P2WSH_IN_P2SH => "p2wsh_in_p2sh",
            BitcoinFormat::P2PKH_IN_P2SH => "p2pkh_in_p2sh",
            BitcoinFormat::P2PK_IN_P2SH => "p2pk_in_p2sh",
            BitcoinFormat::P2PKH_IN_P2SH_WT => "p2pkh_in_p2sh_wt",
            BitcoinFormat::P2PK_IN_P2SH_WT => "p2pk_in_p2sh_wt",
            BitcoinFormat::P2PKH_IN_P2SH32 => "p2pkh_in_p2sh32",
            BitcoinFormat::P2PK_IN_P2SH32 => "p2pk_in_p2sh32",
            BitcoinFormat::P2PKH_IN_P2SH32_WT => "p2pkh_in_p2sh32_wt",
            BitcoinFormat::P2PK_IN_P2SH32_WT => "p2pk_in_p2sh32_wt",
        }
    }
}

impl FromStr for BitcoinFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        BitcoinFormat::ALL
            .iter()
            .find(|format| format.name() == name)
            .copied()
            .ok_or_else(|| FormatError::UnsupportedFormat(s.into()))
    }
}

impl fmt::Display for BitcoinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!(
            BitcoinFormat::P2WPKH_IN_P2SH,
            "p2wpkh_in_p2sh".parse().unwrap()
        );
        assert_eq!(BitcoinFormat::P2TR, "P2TR".parse().unwrap());
        assert_eq!(
            Err(FormatError::UnsupportedFormat("p2mr".into())),
            "p2mr".parse::<BitcoinFormat>()
        );
    }

    #[test]
    fn serializes_like_display() {
        for format in BitcoinFormat::ALL.iter() {
            assert_eq!(
                format!("\"{}\"", format),
                serde_json::to_string(format).unwrap()
            );
        }
    }

    #[test]
    fn classification() {
        assert!(BitcoinFormat::P2TR.is_segwit());
        assert!(!BitcoinFormat::P2WPKH_IN_P2SH.is_segwit());
        assert!(BitcoinFormat::P2WPKH_IN_P2SH.is_script_hash());
        assert!(!BitcoinFormat::P2PKHWT.is_script_hash());
        assert!(BitcoinFormat::P2PKHWT.is_token_aware());
        assert!(!BitcoinFormat::P2PKH_IN_P2SH32.is_token_aware());
        assert_eq!(32, BitcoinFormat::P2PK_IN_P2SH32_WT.hash_length());
        assert_eq!(20, BitcoinFormat::P2PKH_IN_P2SH_WT.hash_length());
    }
}
