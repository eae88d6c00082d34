//! Top-level controller
//!
//! Wires the session store, the catalog API and the view layer together
//! the way the page does: load, navigate, paginate, react to history
//! moves, submit forms.
//!
//! Listing requests are not cancelled or sequenced. Each `show` renders
//! whatever response it gets, so with overlapping requests the last to
//! resolve wins. The request sequence number is logged at `debug`.

use chrono::NaiveDate;
use shared::{Resource, Scope};

use crate::ClientResult;
use crate::api::CatalogApi;
use crate::config::ClientConfig;
use crate::error::ValidationError;
use crate::identity::{IdentityProvider, Navigation};
use crate::session::{Session, SessionStore};
use crate::view::{
    ActorDetail, ActorForm, ActorListing, ActorsView, BrowserHistory, Document, FormOutcome,
    LinkTarget, MovieDetail, MovieForm, MovieListing, MoviesView, NavigationState, Notice,
    PaginationControl,
};
use crate::visibility::apply_visibility;

/// What the content area currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    #[default]
    Blank,
    Movies(MovieListing),
    Actors(ActorListing),
}

impl Screen {
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::Blank => None,
            Self::Movies(_) => Some(Resource::Movies),
            Self::Actors(_) => Some(Resource::Actors),
        }
    }

    pub fn pagination(&self) -> Option<&PaginationControl> {
        match self {
            Self::Blank => None,
            Self::Movies(listing) => Some(&listing.pagination),
            Self::Actors(listing) => Some(&listing.pagination),
        }
    }

    /// Active page, 1 when nothing is shown
    pub fn current_page(&self) -> u32 {
        self.pagination().map_or(1, PaginationControl::current_page)
    }

    /// Whether `page` of `resource` is what is on screen
    pub fn shows(&self, resource: Resource, page: u32) -> bool {
        self.resource() == Some(resource) && self.current_page() == page
    }
}

/// Detail modal of a record on the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Movie(MovieDetail),
    Actor(ActorDetail),
}

pub struct CatalogApp<P, A> {
    store: SessionStore<P>,
    api: A,
    config: ClientConfig,
    document: Document,
    history: BrowserHistory,
    screen: Screen,
    notices: Vec<Notice>,
    request_seq: u64,
    today: Option<NaiveDate>,
}

impl<P: IdentityProvider, A: CatalogApi> CatalogApp<P, A> {
    pub fn new(provider: P, api: A, config: ClientConfig) -> Self {
        Self {
            store: SessionStore::new(provider),
            api,
            config,
            document: Document::standard(),
            history: BrowserHistory::default(),
            screen: Screen::Blank,
            notices: Vec::new(),
            request_seq: 0,
            today: None,
        }
    }

    /// Fix the date actor ages are computed against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &BrowserHistory {
        &self.history
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Toasts raised so far, oldest first
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Page load at `url`
    pub async fn on_load(&mut self, url: &str) -> ClientResult<()> {
        self.history.replace_state(None, url);

        let change = match self.store.initialize(url).await {
            Ok(change) => change,
            Err(e) => {
                self.refresh_chrome();
                return Err(e);
            }
        };
        if let Some(rewrite) = change.rewrite_url {
            self.history.replace_state(None, rewrite);
        }
        self.refresh_chrome();

        if self.session().can(Scope::ReadMovies) {
            self.open(Resource::Movies, 1).await;
        }
        Ok(())
    }

    /// Nav link click: page 1 of `resource`
    pub async fn navigate(&mut self, resource: Resource) -> bool {
        self.open(resource, 1).await
    }

    /// Push `{route, page}` and show that page
    pub async fn open(&mut self, resource: Resource, page: u32) -> bool {
        let state = NavigationState::new(resource, page);
        self.history.push_state(state, state.url());
        self.show(resource, page).await
    }

    /// Fetch and render `page` of `resource`.
    ///
    /// On failure the previous screen stays and an error toast is queued.
    pub async fn show(&mut self, resource: Resource, page: u32) -> bool {
        self.request_seq += 1;
        let seq = self.request_seq;
        tracing::debug!(seq, route = %resource, page, "Loading listing page");

        let session = self.store.session();
        let result = match resource {
            Resource::Movies => MoviesView::new(&self.api)
                .show(page, session)
                .await
                .map(Screen::Movies),
            Resource::Actors => self
                .actors_view()
                .show(page, session)
                .await
                .map(Screen::Actors),
        };

        match result {
            Ok(screen) => {
                tracing::debug!(seq, route = %resource, page, "Rendered listing page");
                self.screen = screen;
                true
            }
            Err(notice) => {
                self.notices.push(notice);
                false
            }
        }
    }

    /// Click a link of the current pagination control
    pub async fn click_page(&mut self, target: LinkTarget) -> ClientResult<Option<u32>> {
        let (Some(resource), Some(control)) = (self.screen.resource(), self.screen.pagination())
        else {
            return Err(ValidationError::NoSuchLink(target.to_string()).into());
        };
        let control = control.clone();

        let mut requested = None;
        control.click_target(target, resource, &mut self.history, |page| {
            requested = Some(page)
        })?;

        if let Some(page) = requested {
            self.show(resource, page).await;
        }
        Ok(requested)
    }

    /// `popstate`: re-show the state's page without a new history entry
    pub async fn on_popstate(&mut self, state: Option<NavigationState>) {
        if let Some(state) = state {
            self.show(state.route, state.page).await;
        }
    }

    pub async fn back(&mut self) -> bool {
        match self.history.back() {
            Some(state) => {
                self.on_popstate(state).await;
                true
            }
            None => false,
        }
    }

    pub async fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(state) => {
                self.on_popstate(state).await;
                true
            }
            None => false,
        }
    }

    pub async fn login(&self) -> ClientResult<Navigation> {
        self.store.login(&self.config.redirect_uri).await
    }

    /// Log out, clear the screen and hide everything gated
    pub async fn logout(&mut self) -> Option<Navigation> {
        let (notice, navigation) = self.store.logout(&self.config.redirect_uri).await;
        self.notices.push(notice);
        self.screen = Screen::Blank;
        self.refresh_chrome();
        navigation
    }

    /// Detail modal for record `id` of the current screen
    pub fn detail(&self, id: i64) -> Option<Detail> {
        let session = self.store.session();
        match &self.screen {
            Screen::Blank => None,
            Screen::Movies(listing) => {
                let movie = listing.records.iter().find(|m| m.id == id)?;
                Some(Detail::Movie(MoviesView::new(&self.api).detail(movie, session)))
            }
            Screen::Actors(listing) => {
                let actor = listing.records.iter().find(|a| a.id == id)?;
                Some(Detail::Actor(self.actors_view().detail(actor, session)))
            }
        }
    }

    /// Pre-filled edit form for movie `id` on the current screen
    pub fn edit_movie_form(&self, id: i64) -> Option<MovieForm> {
        match &self.screen {
            Screen::Movies(listing) => listing
                .records
                .iter()
                .find(|m| m.id == id)
                .map(MovieForm::for_movie),
            _ => None,
        }
    }

    pub fn edit_actor_form(&self, id: i64) -> Option<ActorForm> {
        match &self.screen {
            Screen::Actors(listing) => listing
                .records
                .iter()
                .find(|a| a.id == id)
                .map(ActorForm::for_actor),
            _ => None,
        }
    }

    /// Submit a movie form; `id` selects update over create
    pub async fn submit_movie(&mut self, id: Option<i64>, form: &MovieForm) -> FormOutcome {
        let page = self.screen.current_page();
        let view = MoviesView::new(&self.api);
        let outcome = match id {
            Some(id) => view.update(id, form, page).await,
            None => view.create(form, page).await,
        };
        self.settle(Resource::Movies, outcome).await
    }

    pub async fn submit_actor(&mut self, id: Option<i64>, form: &ActorForm) -> FormOutcome {
        let page = self.screen.current_page();
        let view = self.actors_view();
        let outcome = match id {
            Some(id) => view.update(id, form, page).await,
            None => view.create(form, page).await,
        };
        self.settle(Resource::Actors, outcome).await
    }

    /// Delete record `id` of the current screen and reload its page
    pub async fn delete(&mut self, id: i64) -> bool {
        let Some(resource) = self.screen.resource() else {
            tracing::warn!(id, "Delete requested with no listing shown");
            return false;
        };
        let page = self.screen.current_page();

        let result = match resource {
            Resource::Movies => MoviesView::new(&self.api).delete(id, page).await,
            Resource::Actors => self.actors_view().delete(id, page).await,
        };
        match result {
            Ok((notice, reload)) => {
                self.notices.push(notice);
                self.show(resource, reload).await;
                true
            }
            Err(notice) => {
                self.notices.push(notice);
                false
            }
        }
    }

    async fn settle(&mut self, resource: Resource, outcome: FormOutcome) -> FormOutcome {
        match &outcome {
            FormOutcome::Saved {
                notice,
                reload_page,
            } => {
                self.notices.push(notice.clone());
                self.show(resource, *reload_page).await;
            }
            FormOutcome::Failed(notice) => self.notices.push(notice.clone()),
            // the form stays open with the field marked
            FormOutcome::Invalid(_) => {}
        }
        outcome
    }

    /// Username, login/logout toggles, gated affordances and the bearer token
    fn refresh_chrome(&mut self) {
        let session = self.store.session();
        self.document
            .set_logged_in(session.is_authenticated(), session.username());
        apply_visibility(&mut self.document, session.permissions());
        self.api.set_token(session.token().map(String::from));
    }

    fn actors_view(&self) -> ActorsView<'_, A> {
        let view = ActorsView::new(&self.api);
        match self.today {
            Some(today) => view.with_today(today),
            None => view,
        }
    }
}
