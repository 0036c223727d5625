use crate::decode::validation::{AllowList, Permissive, Policy};

/// How strict mode compares a parsed key against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Exact string equality
    #[default]
    Sensitive,
    /// Equality after lowercasing both sides
    Insensitive,
}

impl From<bool> for CaseSensitivity {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Reject keys missing from `allowed_keys`
    pub strict: bool,
    /// Permitted key spellings; only consulted in strict mode.
    /// Strict mode with no entries accepts nothing.
    pub allowed_keys: Vec<String>,
    pub case_sensitivity: CaseSensitivity,
}

impl Options {
    /// Strict options accepting only `keys`, compared case-sensitively.
    pub fn strict<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strict: true,
            allowed_keys: keys.into_iter().map(Into::into).collect(),
            case_sensitivity: CaseSensitivity::Sensitive,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitivity = CaseSensitivity::Insensitive;
        self
    }

    /// Commit-time key policy described by these options.
    pub fn policy(&self) -> Policy {
        if self.strict {
            Policy::AllowList(AllowList::new(
                self.allowed_keys.iter().cloned(),
                self.case_sensitivity,
            ))
        } else {
            Policy::Permissive(Permissive)
        }
    }
}
