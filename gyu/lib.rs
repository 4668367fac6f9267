#[macro_use]
extern crate failure;

pub mod cli;

pub use gyu_bitcoin as bitcoin;
pub use gyu_model as model;
