use clap::Parser;
use gyu::bitcoin::NetworkRegistry;
use gyu::cli::{self, Opt};
use log::{error, LevelFilter};
use std::{io, process};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let opt = Opt::parse();
    if let Err(e) = NetworkRegistry::global() {
        error!("{}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    if let Err(e) = cli::run(opt.command, &mut stdout.lock()) {
        error!("{}", e);
        process::exit(1);
    }
}
