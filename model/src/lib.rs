#[macro_use]
extern crate failure;

pub mod coin;

pub mod derivation_path;

pub mod format;

pub mod network;
