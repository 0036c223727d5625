#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod parsed;
pub mod decode;

pub use crate::decode::parser::Parser;
pub use crate::decode::validation::{AllowList, KeyPolicy, Permissive, Policy};
pub use crate::error::{Error, ErrorKind, ParseError, Result};
pub use crate::options::{CaseSensitivity, Options};
pub use crate::parsed::Parsed;

use std::io::Read;

#[cfg(feature = "json")]
use serde::de::DeserializeOwned;

/// Parses `input` accepting any grammatically valid key.
pub fn parse(input: &str) -> core::result::Result<Parsed, ParseError> {
    Parser::new().parse(input)
}

pub fn parse_with_options(input: &str, options: &Options) -> core::result::Result<Parsed, ParseError> {
    Parser::from_options(options).parse(input)
}

/// Reads all of `reader` as UTF-8 and parses it.
pub fn parse_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Parsed> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    Ok(parse_with_options(&s, options)?)
}

/// Parses `s` and deserializes the resulting string map into `T`.
#[cfg(feature = "json")]
pub fn decode_from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let parsed = parse_with_options(s, options)?;
    let t = serde_json::from_value(parsed.to_json_value())?;
    Ok(t)
}

#[cfg(feature = "json")]
pub fn decode_from_reader<R: Read, T: DeserializeOwned>(mut reader: R, options: &Options) -> Result<T> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_from_str(&s, options)
}
