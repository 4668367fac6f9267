//! Command-line inspection of the network registry.

use std::io::Write;

use clap::{Parser, Subcommand};
use failure::Error;
use gyu_bitcoin::{BitcoinFormat, BitcoinNetwork, Chain, NetworkRegistry};
use gyu_model::network::{Network, NetworkError};
use log::debug;

#[derive(Debug, Parser)]
#[command(name = "gyu", about = "Inspect UTXO network parameters")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "List every supported network")]
    List {
        #[arg(long, help = "Only list networks of this chain")]
        chain: Option<String>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Show the parameters of a network")]
    Show {
        #[arg(env = "GYU_NETWORK", help = "Network identity, e.g. bitcoinMainnet")]
        network: String,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Print the prefix an address format is stamped with, in hex")]
    Prefix {
        #[arg(env = "GYU_NETWORK")]
        network: String,
        format: String,
    },
    #[command(about = "Find the networks using an HRP, a CashAddr prefix or version bytes")]
    Find {
        #[arg(long, conflicts_with_all = ["cash_addr", "address", "wif"])]
        hrp: Option<String>,
        #[arg(long, conflicts_with_all = ["address", "wif"])]
        cash_addr: Option<String>,
        #[arg(long, help = "P2PKH or P2SH version bytes in hex")]
        address: Option<String>,
        #[arg(long, help = "WIF version bytes in hex")]
        wif: Option<String>,
    },
}

pub fn run<W: Write>(command: Command, out: &mut W) -> Result<(), Error> {
    debug!("running {:?}", command);
    match command {
        Command::List { chain, json } => {
            let networks: Vec<BitcoinNetwork> = match chain {
                Some(name) => {
                    let chain = Chain::from_name(&name)?;
                    NetworkRegistry::all()
                        .iter()
                        .filter(|network| network.chain() == chain)
                        .copied()
                        .collect()
                }
                None => NetworkRegistry::all().to_vec(),
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&networks)?)?;
            } else {
                for network in networks {
                    let kind = if network.is_mainnet() { "mainnet" } else { "testnet" };
                    writeln!(
                        out,
                        "{:<20} {:<12} {}",
                        network.identity(),
                        network.chain().name(),
                        kind
                    )?;
                }
            }
        }
        Command::Show { network, json } => {
            let summary = NetworkRegistry::by_identity(&network)?.summary()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                let params = &summary.params;
                writeln!(out, "network: {}", summary.identity)?;
                writeln!(out, "chain:   {}", summary.chain)?;
                writeln!(out, "mainnet: {}", summary.mainnet)?;
                writeln!(out, "wif:     {}", hex::encode(params.wif_prefix()))?;
                writeln!(out, "p2pkh:   {}", hex::encode(params.p2pkh_prefix()))?;
                writeln!(out, "p2sh:    {}", hex::encode(params.p2sh_prefix()))?;
                if let Some(hrp) = params.hrp() {
                    writeln!(out, "hrp:     {}", hrp)?;
                }
                if let Some(prefix) = params.cash_addr_hrp() {
                    writeln!(out, "cashaddr: {}", prefix)?;
                }
                let formats: Vec<String> = summary.formats.iter().map(|f| f.to_string()).collect();
                writeln!(out, "formats: {}", formats.join(", "))?;
                for coin in &summary.coins {
                    writeln!(out, "coin:    {}", coin)?;
                }
            }
        }
        Command::Prefix { network, format } => {
            let network = NetworkRegistry::by_identity(&network)?;
            let format: BitcoinFormat = format.parse()?;
            writeln!(out, "{}", hex::encode(network.address_prefix(&format)?))?;
        }
        Command::Find {
            hrp,
            cash_addr,
            address,
            wif,
        } => {
            let registry = NetworkRegistry::global()?;
            let networks = match (hrp, cash_addr, address, wif) {
                (Some(hrp), _, _, _) => registry.find_by_hrp(&hrp),
                (None, Some(prefix), _, _) => registry.find_by_cash_addr_prefix(&prefix),
                (None, None, Some(prefix), _) => registry
                    .find_by_address_prefix(&hex::decode(prefix).map_err(NetworkError::from)?),
                (None, None, None, Some(prefix)) => {
                    registry.find_by_wif_prefix(&hex::decode(prefix).map_err(NetworkError::from)?)
                }
                (None, None, None, None) => {
                    return Err(format_err!(
                        "one of --hrp, --cash-addr, --address or --wif is required"
                    ))
                }
            };
            for network in networks {
                writeln!(out, "{}", network)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(args: &[&str]) -> Result<String, Error> {
        let opt = Opt::try_parse_from(args)?;
        let mut out = Vec::new();
        run(opt.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn list_chain() {
        let listed = output(&["gyu", "list", "--chain", "litecoin"]).unwrap();
        let lines: Vec<&str> = listed.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("litecoinMainnet"));
        assert!(lines[1].ends_with("testnet"));
    }

    #[test]
    fn list_unknown_chain() {
        let error = output(&["gyu", "list", "--chain", "zcash"]).unwrap_err();
        assert_eq!("unknown chain: zcash", error.to_string());
    }

    #[test]
    fn list_json() {
        let listed = output(&["gyu", "list", "--json"]).unwrap();
        let identities: Vec<String> = serde_json::from_str(&listed).unwrap();
        assert_eq!(NetworkRegistry::all().len(), identities.len());
        assert_eq!("bitcoinMainnet", identities[0]);
    }

    #[test]
    fn show() {
        let shown = output(&["gyu", "show", "dogecoinMainnet"]).unwrap();
        assert!(shown.contains("p2pkh:   1e"));
        assert!(!shown.contains("hrp:"));
        assert!(output(&["gyu", "show", "dogecoin"]).is_err());

        let shown = output(&["gyu", "show", "bitcoinCashMainnet"]).unwrap();
        assert!(shown.contains("cashaddr: bitcoincash"));
        assert!(!shown.contains("hrp:"));
    }

    #[test]
    fn prefix() {
        assert_eq!(
            "0b\n",
            output(&["gyu", "prefix", "bitcoinCashMainnet", "p2pkh_in_p2sh32"]).unwrap()
        );
        assert_eq!(
            "746c7463\n",
            output(&["gyu", "prefix", "litecoinTestnet", "p2wpkh"]).unwrap()
        );
        assert!(output(&["gyu", "prefix", "dashMainnet", "p2wpkh"]).is_err());
    }

    #[test]
    fn find() {
        assert_eq!(
            "omniXepMainnet\n",
            output(&["gyu", "find", "--hrp", "ep"]).unwrap()
        );
        assert_eq!(
            "dashTestnet\n",
            output(&["gyu", "find", "--address", "8c"]).unwrap()
        );
        assert_eq!("", output(&["gyu", "find", "--hrp", "bitcoincash"]).unwrap());
        assert_eq!(
            "bitcoinCashMainnet\n",
            output(&["gyu", "find", "--cash-addr", "bitcoincash"]).unwrap()
        );
        assert!(output(&["gyu", "find", "--wif", "zz"]).is_err());
        assert!(output(&["gyu", "find"]).is_err());
    }
}
