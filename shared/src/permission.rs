//! Permission Definitions
//!
//! Closed vocabulary of scopes carried in the `permissions` claim of an
//! access token.
//!
//! - 8 capability scopes, one per (action, resource) pair
//! - `no:perms` sentinel: held when the token grants nothing, grants nothing

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Sentinel scope string for a token without any known permission
pub const NO_PERMS: &str = "no:perms";

/// A permission scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "read:movies")]
    ReadMovies,
    #[serde(rename = "read:actors")]
    ReadActors,
    #[serde(rename = "create:movies")]
    CreateMovies,
    #[serde(rename = "create:actors")]
    CreateActors,
    #[serde(rename = "update:movies")]
    UpdateMovies,
    #[serde(rename = "update:actors")]
    UpdateActors,
    #[serde(rename = "delete:movies")]
    DeleteMovies,
    #[serde(rename = "delete:actors")]
    DeleteActors,
    #[serde(rename = "no:perms")]
    NoPerms,
}

impl Scope {
    /// Every scope of the vocabulary, sentinel last
    pub const ALL: [Scope; 9] = [
        Scope::ReadMovies,
        Scope::ReadActors,
        Scope::CreateMovies,
        Scope::CreateActors,
        Scope::UpdateMovies,
        Scope::UpdateActors,
        Scope::DeleteMovies,
        Scope::DeleteActors,
        Scope::NoPerms,
    ];

    /// Wire string of the scope
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadMovies => "read:movies",
            Self::ReadActors => "read:actors",
            Self::CreateMovies => "create:movies",
            Self::CreateActors => "create:actors",
            Self::UpdateMovies => "update:movies",
            Self::UpdateActors => "update:actors",
            Self::DeleteMovies => "delete:movies",
            Self::DeleteActors => "delete:actors",
            Self::NoPerms => NO_PERMS,
        }
    }

    /// Whether this is the `no:perms` sentinel
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NoPerms)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| ScopeError::UnknownScope(s.to_string()))
    }
}

/// Set of scopes held by the current session.
///
/// Never empty: a set without any known scope collapses to `{no:perms}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(BTreeSet<Scope>);

impl PermissionSet {
    /// The empty grant, `{no:perms}`
    pub fn none() -> Self {
        Self(BTreeSet::from([Scope::NoPerms]))
    }

    /// Build from raw claim strings. Unknown scopes are skipped.
    pub fn from_claims<'a, I>(claims: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_scopes(claims.into_iter().filter_map(|s| s.parse().ok()))
    }

    /// Build from typed scopes
    pub fn from_scopes<I>(scopes: I) -> Self
    where
        I: IntoIterator<Item = Scope>,
    {
        let mut set: BTreeSet<Scope> = scopes.into_iter().collect();
        // the sentinel only stands in for an otherwise empty grant
        if set.len() > 1 {
            set.remove(&Scope::NoPerms);
        }
        if set.is_empty() {
            return Self::none();
        }
        Self(set)
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.0.contains(&scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = Scope> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true, the set holds at least the sentinel
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when only the sentinel is held
    pub fn grants_nothing(&self) -> bool {
        self.0.iter().all(Scope::is_sentinel)
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::none()
    }
}
