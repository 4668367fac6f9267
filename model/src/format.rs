use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

pub trait Format:
    Clone + Debug + Display + Send + Sync + 'static + Eq + Ord + Sized + Hash
{
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum FormatError {
    #[fail(display = "{} : {}", _0, _1)]
    Crate(&'static str, String),

    #[fail(display = "unsupported format: {}", _0)]
    UnsupportedFormat(String),
}
