//! Headless view layer
//!
//! View models for the movie and actor flows, the pagination control, the
//! in-memory history and the page document.

pub mod actors;
pub mod document;
pub mod form;
pub mod history;
pub mod movies;
pub mod notice;
pub mod pagination;

pub use actors::{ActorCard, ActorDetail, ActorForm, ActorsView};
pub use document::{Document, Element};
pub use form::{FormOutcome, parse_reference_list};
pub use history::{BrowserHistory, HistoryEntry, NavigationState};
pub use movies::{MovieCard, MovieDetail, MovieForm, MoviesView};
pub use notice::{Notice, ToastCategory};
pub use pagination::{LinkTarget, PageLink, PaginationControl};

use shared::{Actor, Movie, PAGE_SIZE, Pagination, Resource};

use crate::ClientError;
use crate::session::Session;

/// One rendered listing page
///
/// `records` keeps the fetched items so detail modals and edit forms are
/// built without another request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<C, R> {
    pub resource: Resource,
    pub cards: Vec<C>,
    pub records: Vec<R>,
    pub pagination: PaginationControl,
    /// Whether the "create new" button is shown
    pub create_visible: bool,
    pub meta: Pagination,
}

pub type MovieListing = ListingPage<MovieCard, Movie>;
pub type ActorListing = ListingPage<ActorCard, Actor>;

impl<C, R> ListingPage<C, R> {
    pub fn page(&self) -> u32 {
        self.pagination.current_page()
    }
}

/// Assemble a listing page from fetched records
pub(crate) fn listing<C, R>(
    resource: Resource,
    page: u32,
    total_items: u64,
    records: Vec<R>,
    card: impl Fn(&R) -> C,
    session: &Session,
) -> Result<ListingPage<C, R>, Notice> {
    let meta = Pagination::new(page, PAGE_SIZE, total_items);
    let pagination = PaginationControl::render(meta.total_pages, meta.page).map_err(|e| {
        tracing::warn!(resource = %resource, error = %e, "Listing page out of range");
        Notice::unknown_error()
    })?;

    Ok(ListingPage {
        resource,
        cards: records.iter().map(card).collect(),
        records,
        pagination,
        create_visible: session.can(resource.create_scope()),
        meta,
    })
}

/// Toast for a failed fetch or delete
pub(crate) fn failure_toast(resource: Resource, action: &str, err: &ClientError) -> Notice {
    tracing::warn!(resource = %resource, action, error = %err, "Request failed");
    Notice::unknown_error()
}

/// "Movie successfully created!" and friends
pub(crate) fn success_message(resource: Resource, verb: &str) -> String {
    format!("{} successfully {verb}!", resource.singular())
}
