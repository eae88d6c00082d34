//! Actor views

use std::fmt;

use chrono::{Local, NaiveDate};
use shared::{Actor, ActorPayload, Gender, Resource};

use super::form::{FormOutcome, parse_reference_list, submit_failure};
use super::notice::Notice;
use super::{ActorListing, failure_toast, listing, success_message};
use crate::api::CatalogApi;
use crate::session::Session;

pub const CREATE_HEADER: &str = "Create New Actor";
pub const CREATE_BUTTON: &str = "✚ CREATE NEW ACTOR";

/// Listing card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorCard {
    pub id: i64,
    pub name: String,
    /// Whole years at render time
    pub age: Option<u32>,
    /// Capitalized, e.g. `Female`
    pub gender: Option<String>,
    pub image: Option<String>,
}

impl ActorCard {
    pub fn new(actor: &Actor, today: NaiveDate) -> Self {
        Self {
            id: actor.id,
            name: actor.display_name().to_string(),
            age: actor.age_on(today),
            gender: actor.gender.map(|g| g.label().to_string()),
            image: actor.image.clone(),
        }
    }
}

impl fmt::Display for ActorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(age) = self.age {
            write!(f, ", {age}")?;
        }
        if let Some(gender) = &self.gender {
            write!(f, ", {gender}")?;
        }
        Ok(())
    }
}

/// Detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorDetail {
    pub id: i64,
    pub name: String,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub movies: Vec<String>,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Create/update form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorForm {
    pub header: String,
    pub name: String,
    pub birthdate: String,
    /// Selected option of the gender select
    pub gender: Option<Gender>,
    /// Free text, one movie title per line or comma separated
    pub movies: String,
    pub image: String,
}

impl ActorForm {
    pub fn blank() -> Self {
        Self {
            header: CREATE_HEADER.to_string(),
            name: String::new(),
            birthdate: String::new(),
            gender: None,
            movies: String::new(),
            image: String::new(),
        }
    }

    pub fn for_actor(actor: &Actor) -> Self {
        Self {
            header: format!("Editing: {}", actor.display_name()),
            name: actor.display_name().to_string(),
            birthdate: actor.birthdate.clone().unwrap_or_default(),
            gender: actor.gender,
            movies: actor
                .movies
                .iter()
                .map(|movie| movie.title.as_str())
                .collect::<Vec<_>>()
                .join(",\n"),
            image: actor.image.clone().unwrap_or_default(),
        }
    }

    /// Whether `option` is the selected gender
    pub fn is_selected(&self, option: Gender) -> bool {
        self.gender == Some(option)
    }

    pub fn payload(&self) -> ActorPayload {
        ActorPayload::new(
            &self.name,
            &self.birthdate,
            self.gender,
            parse_reference_list(&self.movies),
            &self.image,
        )
    }
}

/// Actor flows over a [`CatalogApi`]
pub struct ActorsView<'a, A> {
    api: &'a A,
    today: NaiveDate,
}

impl<'a, A: CatalogApi> ActorsView<'a, A> {
    const RESOURCE: Resource = Resource::Actors;

    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            today: Local::now().date_naive(),
        }
    }

    /// Date ages are computed against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn show(&self, page: u32, session: &Session) -> Result<ActorListing, Notice> {
        let list = self
            .api
            .list_actors(page)
            .await
            .map_err(|e| failure_toast(Self::RESOURCE, "list", &e))?;

        listing(
            Self::RESOURCE,
            page,
            list.total_actors,
            list.actors,
            |actor| ActorCard::new(actor, self.today),
            session,
        )
    }

    pub fn detail(&self, actor: &Actor, session: &Session) -> ActorDetail {
        ActorDetail {
            id: actor.id,
            name: actor.display_name().to_string(),
            birthdate: actor.birthdate.clone(),
            gender: actor.gender.map(|g| g.label().to_string()),
            image: actor.image.clone(),
            movies: actor.movies.iter().map(|m| m.title.clone()).collect(),
            can_edit: session.can(Self::RESOURCE.update_scope()),
            can_delete: session.can(Self::RESOURCE.delete_scope()),
        }
    }

    pub async fn create(&self, form: &ActorForm, current_page: u32) -> FormOutcome {
        match self.api.create_actor(&form.payload()).await {
            Ok(result) => {
                tracing::debug!(id = ?result.created_actor_id, "Actor created");
                FormOutcome::Saved {
                    notice: Notice::success(success_message(Self::RESOURCE, "created")),
                    reload_page: current_page,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create actor failed");
                submit_failure(&e, Self::RESOURCE.reference_field())
            }
        }
    }

    pub async fn update(&self, id: i64, form: &ActorForm, current_page: u32) -> FormOutcome {
        match self.api.update_actor(id, &form.payload()).await {
            Ok(_) => FormOutcome::Saved {
                notice: Notice::success(success_message(Self::RESOURCE, "updated")),
                reload_page: current_page,
            },
            Err(e) => {
                tracing::warn!(id, error = %e, "Update actor failed");
                submit_failure(&e, Self::RESOURCE.reference_field())
            }
        }
    }

    pub async fn delete(&self, id: i64, current_page: u32) -> Result<(Notice, u32), Notice> {
        self.api
            .delete_actor(id)
            .await
            .map_err(|e| failure_toast(Self::RESOURCE, "delete", &e))?;
        Ok((
            Notice::success(success_message(Self::RESOURCE, "deleted")),
            current_page,
        ))
    }
}
