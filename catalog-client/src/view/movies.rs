//! Movie views
//!
//! Cards for the listing, a detail modal built from the already fetched
//! record, and the create/update form.

use std::fmt;

use shared::{Movie, MoviePayload, Resource};

use super::form::{FormOutcome, parse_reference_list, submit_failure};
use super::notice::Notice;
use super::{MovieListing, failure_toast, listing, success_message};
use crate::api::CatalogApi;
use crate::session::Session;

pub const CREATE_HEADER: &str = "Create New Movie";
pub const CREATE_BUTTON: &str = "✚ CREATE NEW MOVIE";

/// Listing card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub year: Option<String>,
    pub poster: Option<String>,
}

impl MovieCard {
    pub fn new(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.display_title().to_string(),
            year: movie.year().map(String::from),
            poster: movie.poster.clone(),
        }
    }
}

impl fmt::Display for MovieCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.year {
            Some(year) => write!(f, "{} ({year})", self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// Detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster: Option<String>,
    pub actors: Vec<String>,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Create/update form state, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieForm {
    pub header: String,
    pub title: String,
    pub release_date: String,
    /// Free text, one actor name per line or comma separated
    pub actors: String,
    pub poster: String,
}

impl MovieForm {
    /// Empty creation form
    pub fn blank() -> Self {
        Self {
            header: CREATE_HEADER.to_string(),
            title: String::new(),
            release_date: String::new(),
            actors: String::new(),
            poster: String::new(),
        }
    }

    /// Update form pre-filled from `movie`
    pub fn for_movie(movie: &Movie) -> Self {
        Self {
            header: format!("Editing: {}", movie.display_title()),
            title: movie.display_title().to_string(),
            release_date: movie.release_date.clone().unwrap_or_default(),
            actors: movie
                .actors
                .iter()
                .map(|actor| actor.name.as_str())
                .collect::<Vec<_>>()
                .join(",\n"),
            poster: movie.poster.clone().unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> MoviePayload {
        MoviePayload::new(
            &self.title,
            &self.release_date,
            parse_reference_list(&self.actors),
            &self.poster,
        )
    }
}

/// Movie flows over a [`CatalogApi`]
pub struct MoviesView<'a, A> {
    api: &'a A,
}

impl<'a, A: CatalogApi> MoviesView<'a, A> {
    const RESOURCE: Resource = Resource::Movies;

    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetch and render one listing page
    pub async fn show(&self, page: u32, session: &Session) -> Result<MovieListing, Notice> {
        let list = self
            .api
            .list_movies(page)
            .await
            .map_err(|e| failure_toast(Self::RESOURCE, "list", &e))?;

        listing(
            Self::RESOURCE,
            page,
            list.total_movies,
            list.movies,
            MovieCard::new,
            session,
        )
    }

    /// Detail modal; no request is made
    pub fn detail(&self, movie: &Movie, session: &Session) -> MovieDetail {
        MovieDetail {
            id: movie.id,
            title: movie.display_title().to_string(),
            release_date: movie.release_date.clone(),
            poster: movie.poster.clone(),
            actors: movie.actors.iter().map(|a| a.name.clone()).collect(),
            can_edit: session.can(Self::RESOURCE.update_scope()),
            can_delete: session.can(Self::RESOURCE.delete_scope()),
        }
    }

    pub async fn create(&self, form: &MovieForm, current_page: u32) -> FormOutcome {
        match self.api.create_movie(&form.payload()).await {
            Ok(result) => {
                tracing::debug!(id = ?result.created_movie_id, "Movie created");
                FormOutcome::Saved {
                    notice: Notice::success(success_message(Self::RESOURCE, "created")),
                    reload_page: current_page,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create movie failed");
                submit_failure(&e, Self::RESOURCE.reference_field())
            }
        }
    }

    pub async fn update(&self, id: i64, form: &MovieForm, current_page: u32) -> FormOutcome {
        match self.api.update_movie(id, &form.payload()).await {
            Ok(_) => FormOutcome::Saved {
                notice: Notice::success(success_message(Self::RESOURCE, "updated")),
                reload_page: current_page,
            },
            Err(e) => {
                tracing::warn!(id, error = %e, "Update movie failed");
                submit_failure(&e, Self::RESOURCE.reference_field())
            }
        }
    }

    /// Delete, then reload `current_page` on success
    pub async fn delete(&self, id: i64, current_page: u32) -> Result<(Notice, u32), Notice> {
        self.api
            .delete_movie(id)
            .await
            .map_err(|e| failure_toast(Self::RESOURCE, "delete", &e))?;
        Ok((
            Notice::success(success_message(Self::RESOURCE, "deleted")),
            current_page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ActorRef;

    fn heat() -> Movie {
        Movie {
            id: 7,
            title: Some("Heat".into()),
            release_date: Some("1995-12-15".into()),
            poster: None,
            actors: vec![
                ActorRef {
                    id: 1,
                    name: "Al Pacino".into(),
                },
                ActorRef {
                    id: 2,
                    name: "Robert De Niro".into(),
                },
            ],
        }
    }

    #[test]
    fn test_card() {
        let card = MovieCard::new(&heat());
        assert_eq!(card.year.as_deref(), Some("1995"));
        assert_eq!(card.to_string(), "Heat (1995)");
    }

    #[test]
    fn test_update_form_prefill() {
        let form = MovieForm::for_movie(&heat());
        assert_eq!(form.header, "Editing: Heat");
        assert_eq!(form.actors, "Al Pacino,\nRobert De Niro");
        assert_eq!(form.poster, "");
    }

    #[test]
    fn test_form_payload_round_trips_actor_names() {
        let payload = MovieForm::for_movie(&heat()).payload();
        assert_eq!(payload.actors, vec!["Al Pacino", "Robert De Niro"]);
        assert_eq!(payload.poster, None);
        assert_eq!(MovieForm::blank().header, CREATE_HEADER);
        assert_eq!(MovieForm::blank().payload().title, None);
    }
}
