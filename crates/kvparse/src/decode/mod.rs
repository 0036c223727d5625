//! Decoding pipeline: key grammar, commit-time policies, scanner and the
//! parser handle built on top of them

pub mod grammar;
pub mod parser;
pub mod scanner;
pub mod validation;
