//! API Response types
//!
//! Every backend response carries a `success` flag. Listings add the page
//! of records and the collection total; mutations report the affected id
//! and the record before/after the change.

use serde::{Deserialize, Serialize};

use crate::models::{Actor, Movie};

/// Items per listing page, fixed by the backend
pub const PAGE_SIZE: u32 = 25;

/// Number of pages needed for `total_items` (ceil division).
///
/// Zero items, or a zero page size, yields zero pages.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: total_pages(total, per_page),
        }
    }
}

/// `GET /api/movies?page=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieList {
    pub success: bool,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub total_movies: u64,
}

/// `GET /api/actors?page=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorList {
    pub success: bool,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub total_actors: u64,
}

/// `POST`, `PATCH` or `DELETE` on `/api/movies`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMutation {
    pub success: bool,
    #[serde(default)]
    pub created_movie_id: Option<i64>,
    #[serde(default)]
    pub updated_movie_id: Option<i64>,
    #[serde(default)]
    pub deleted_movie_id: Option<i64>,
    #[serde(default)]
    pub old_movie: Option<Movie>,
    #[serde(default)]
    pub new_movie: Option<Movie>,
}

/// `POST`, `PATCH` or `DELETE` on `/api/actors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorMutation {
    pub success: bool,
    #[serde(default)]
    pub created_actor_id: Option<i64>,
    #[serde(default)]
    pub updated_actor_id: Option<i64>,
    #[serde(default)]
    pub deleted_actor_id: Option<i64>,
    #[serde(default)]
    pub old_actor: Option<Actor>,
    #[serde(default)]
    pub new_actor: Option<Actor>,
}

/// Error body returned with a non-2xx status or `success: false`
///
/// ```json
/// { "success": false, "error_code": "not_found", "description": "..." }
/// ```
///
/// Authorization failures use `code` instead of `error_code`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "code")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Known backend error codes
pub mod codes {
    pub const BAD_REQUEST: &str = "bad_request";
    pub const NOT_FOUND: &str = "not_found";
    pub const METHOD_NOT_ALLOWED: &str = "method_not_allowed";
    pub const UNPROCESSABLE_ENTITY: &str = "unprocessable_entity";
    pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";
}
