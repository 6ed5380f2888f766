use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} alphabet became empty after excluding bad characters")]
    EmptyAlphabet(&'static str),

    #[error("query hex string must have even length, got {0} digit(s)")]
    OddHexLength(usize),

    #[error("invalid hex byte: '{0}'")]
    InvalidHexByte(String),

    #[error("invalid escape sequence: '{0}'")]
    InvalidEscape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
