//! Catalog resources

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::permission::Scope;

/// A paged resource of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    #[serde(rename = "/movies")]
    Movies,
    #[serde(rename = "/actors")]
    Actors,
}

impl Resource {
    /// Client-side route, e.g. `/movies`
    pub fn route(&self) -> &'static str {
        match self {
            Self::Movies => "/movies",
            Self::Actors => "/actors",
        }
    }

    /// Backend collection path relative to the API base URL
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Movies => "api/movies",
            Self::Actors => "api/actors",
        }
    }

    /// Singular display name
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Movies => "Movie",
            Self::Actors => "Actor",
        }
    }

    /// Name of the free-text cross-reference field on this resource's form
    pub fn reference_field(&self) -> &'static str {
        match self {
            Self::Movies => "actors",
            Self::Actors => "movies",
        }
    }

    pub fn read_scope(&self) -> Scope {
        match self {
            Self::Movies => Scope::ReadMovies,
            Self::Actors => Scope::ReadActors,
        }
    }

    pub fn create_scope(&self) -> Scope {
        match self {
            Self::Movies => Scope::CreateMovies,
            Self::Actors => Scope::CreateActors,
        }
    }

    pub fn update_scope(&self) -> Scope {
        match self {
            Self::Movies => Scope::UpdateMovies,
            Self::Actors => Scope::UpdateActors,
        }
    }

    pub fn delete_scope(&self) -> Scope {
        match self {
            Self::Movies => Scope::DeleteMovies,
            Self::Actors => Scope::DeleteActors,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Resource {
    type Err = RouteError;

    /// Accepts the route (`/movies`) or the bare name (`movies`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/') {
            "movies" => Ok(Self::Movies),
            "actors" => Ok(Self::Actors),
            _ => Err(RouteError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!("/movies".parse::<Resource>().unwrap(), Resource::Movies);
        assert_eq!("actors".parse::<Resource>().unwrap(), Resource::Actors);
        assert!("/directors".parse::<Resource>().is_err());
    }

    #[test]
    fn test_scopes_per_resource() {
        assert_eq!(Resource::Movies.create_scope(), Scope::CreateMovies);
        assert_eq!(Resource::Actors.delete_scope(), Scope::DeleteActors);
        assert_eq!(Resource::Actors.read_scope().as_str(), "read:actors");
    }

    #[test]
    fn test_serialize_as_route() {
        let json = serde_json::to_string(&Resource::Actors).unwrap();
        assert_eq!(json, "\"/actors\"");
    }
}
