//! Commit-time key validation
//!
//! Every key reaching a policy already satisfies the key grammar; a policy
//! only decides whether the key is acceptable.

use crate::options::CaseSensitivity;

/// Decides, once per pair, whether a grammatically valid key is accepted.
pub trait KeyPolicy {
    fn accepts(&self, key: &str) -> bool;
}

impl<F> KeyPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, key: &str) -> bool {
        self(key)
    }
}

/// Accepts every key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissive;

impl KeyPolicy for Permissive {
    #[inline]
    fn accepts(&self, _key: &str) -> bool {
        true
    }
}

/// Accepts only keys matching one of a fixed set of spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    keys: Vec<String>,
    case_sensitivity: CaseSensitivity,
    // lowercased `keys`, filled only for case-insensitive lists
    folded: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(keys: I, case_sensitivity: impl Into<CaseSensitivity>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let case_sensitivity = case_sensitivity.into();
        let folded = match case_sensitivity {
            CaseSensitivity::Sensitive => Vec::new(),
            CaseSensitivity::Insensitive => keys.iter().map(|k| k.to_lowercase()).collect(),
        };
        Self {
            keys,
            case_sensitivity,
            folded,
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn contains(&self, key: &str) -> bool {
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => self.keys.iter().any(|k| k == key),
            CaseSensitivity::Insensitive => {
                let key = key.to_lowercase();
                self.folded.iter().any(|k| *k == key)
            }
        }
    }
}

impl KeyPolicy for AllowList {
    fn accepts(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Runtime choice between the built-in policies, as produced by
/// [`Options::policy`](crate::Options::policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Permissive(Permissive),
    AllowList(AllowList),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Permissive(Permissive)
    }
}

impl KeyPolicy for Policy {
    fn accepts(&self, key: &str) -> bool {
        match self {
            Policy::Permissive(p) => p.accepts(key),
            Policy::AllowList(list) => list.accepts(key),
        }
    }
}
