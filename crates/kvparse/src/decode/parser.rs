use crate::decode::scanner::Scanner;
use crate::decode::validation::{AllowList, KeyPolicy, Permissive, Policy};
use crate::error::ParseError;
use crate::options::{CaseSensitivity, Options};
use crate::parsed::Parsed;

/// Reusable parser. The grammar is fixed; `P` decides at commit time which
/// keys are accepted.
///
/// Every call to [`Parser::parse`] builds its own scan state, so a parser can
/// be shared between threads whenever its policy can.
#[derive(Debug, Clone, Default)]
pub struct Parser<P = Permissive> {
    policy: P,
}

impl Parser<Permissive> {
    /// Parser accepting any grammatically valid key.
    pub fn new() -> Self {
        Self { policy: Permissive }
    }
}

impl Parser<AllowList> {
    /// Parser accepting only `allowed_keys`. With no keys, every pair is
    /// rejected.
    pub fn strict<I, S>(allowed_keys: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            policy: AllowList::new(allowed_keys, CaseSensitivity::from(case_sensitive)),
        }
    }
}

impl Parser<Policy> {
    pub fn from_options(options: &Options) -> Self {
        Self {
            policy: options.policy(),
        }
    }
}

impl<P: KeyPolicy> Parser<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn parse(&self, input: &str) -> Result<Parsed, ParseError> {
        Scanner::new(input, &self.policy).run()
    }
}
