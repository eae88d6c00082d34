//! Paged collection controls
//!
//! A control lists `previous`, one link per page `1..=total_pages`, then
//! `next`. Clicking an enabled, inactive link pushes `{route, page}` onto
//! the history and hands the target page to the reload callback.

use std::fmt;

use shared::Resource;

use crate::error::ValidationError;
use crate::view::history::{BrowserHistory, NavigationState};

/// What a pagination link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Previous,
    Page(u32),
    Next,
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => f.write_str("previous"),
            Self::Page(page) => write!(f, "page {page}"),
            Self::Next => f.write_str("next"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub target: LinkTarget,
    pub disabled: bool,
    pub active: bool,
}

impl PageLink {
    /// Whether a click on this link navigates
    pub fn is_clickable(&self) -> bool {
        !self.disabled && !self.active
    }
}

/// Rendered pagination control for one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    links: Vec<PageLink>,
    current: u32,
    total_pages: u32,
}

impl PaginationControl {
    /// Render for `current_page` of `total_pages`.
    ///
    /// `current_page` must lie in `1..=max(total_pages, 1)`.
    pub fn render(total_pages: u32, current_page: u32) -> Result<Self, ValidationError> {
        if current_page < 1 || current_page > total_pages.max(1) {
            return Err(ValidationError::PageOutOfRange {
                page: current_page,
                total_pages,
            });
        }

        let mut links = Vec::with_capacity(total_pages as usize + 2);
        links.push(PageLink {
            target: LinkTarget::Previous,
            disabled: current_page == 1,
            active: false,
        });
        links.extend((1..=total_pages).map(|page| PageLink {
            target: LinkTarget::Page(page),
            disabled: false,
            active: page == current_page,
        }));
        links.push(PageLink {
            target: LinkTarget::Next,
            disabled: total_pages == 0 || current_page == total_pages,
            active: false,
        });

        Ok(Self {
            links,
            current: current_page,
            total_pages,
        })
    }

    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    pub fn current_page(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page numbers of the numeric links, in order
    pub fn page_numbers(&self) -> Vec<u32> {
        self.links
            .iter()
            .filter_map(|link| match link.target {
                LinkTarget::Page(page) => Some(page),
                _ => None,
            })
            .collect()
    }

    /// Page of the active link, `None` when there are no pages
    pub fn active_page(&self) -> Option<u32> {
        self.links.iter().find_map(|link| match link.target {
            LinkTarget::Page(page) if link.active => Some(page),
            _ => None,
        })
    }

    pub fn previous(&self) -> &PageLink {
        &self.links[0]
    }

    pub fn next(&self) -> &PageLink {
        &self.links[self.links.len() - 1]
    }

    /// Page a click on `link` would load; `None` for disabled or active links
    fn resolve(&self, link: &PageLink) -> Option<u32> {
        if !link.is_clickable() {
            return None;
        }
        Some(match link.target {
            LinkTarget::Previous => self.current - 1,
            LinkTarget::Next => self.current + 1,
            LinkTarget::Page(page) => page,
        })
    }

    /// Click the link at `index`.
    ///
    /// Pushes `{route, page}` with URL `<route>/<page>` and calls
    /// `on_navigate` once. Disabled and active links do nothing and
    /// return `Ok(None)`.
    pub fn click<F>(
        &self,
        index: usize,
        route: Resource,
        history: &mut BrowserHistory,
        on_navigate: F,
    ) -> Result<Option<u32>, ValidationError>
    where
        F: FnOnce(u32),
    {
        let link = self
            .links
            .get(index)
            .ok_or_else(|| ValidationError::NoSuchLink(format!("at index {index}")))?;

        let Some(page) = self.resolve(link) else {
            return Ok(None);
        };

        let state = NavigationState::new(route, page);
        history.push_state(state, state.url());
        tracing::debug!(route = %route, page, "Pagination click");
        on_navigate(page);
        Ok(Some(page))
    }

    /// Click the link pointing at `target`
    pub fn click_target<F>(
        &self,
        target: LinkTarget,
        route: Resource,
        history: &mut BrowserHistory,
        on_navigate: F,
    ) -> Result<Option<u32>, ValidationError>
    where
        F: FnOnce(u32),
    {
        let index = self
            .links
            .iter()
            .position(|link| link.target == target)
            .ok_or_else(|| ValidationError::NoSuchLink(target.to_string()))?;
        self.click(index, route, history, on_navigate)
    }

    /// Textual form, e.g. `« 1 [2] 3 »`
    pub fn labels(&self) -> String {
        self.links
            .iter()
            .map(|link| match link.target {
                LinkTarget::Previous => "«".to_string(),
                LinkTarget::Next => "»".to_string(),
                LinkTarget::Page(page) if link.active => format!("[{page}]"),
                LinkTarget::Page(page) => page.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_middle_page() {
        let control = PaginationControl::render(3, 2).unwrap();
        assert_eq!(control.page_numbers(), vec![1, 2, 3]);
        assert_eq!(control.active_page(), Some(2));
        assert!(!control.previous().disabled);
        assert!(!control.next().disabled);
        assert_eq!(control.labels(), "« 1 [2] 3 »");
    }

    #[test]
    fn test_render_edges() {
        let first = PaginationControl::render(4, 1).unwrap();
        assert!(first.previous().disabled);
        assert!(!first.next().disabled);

        let last = PaginationControl::render(4, 4).unwrap();
        assert!(!last.previous().disabled);
        assert!(last.next().disabled);

        let single = PaginationControl::render(1, 1).unwrap();
        assert!(single.previous().disabled && single.next().disabled);
    }

    #[test]
    fn test_render_empty() {
        let control = PaginationControl::render(0, 1).unwrap();
        assert!(control.page_numbers().is_empty());
        assert_eq!(control.active_page(), None);
        assert!(control.previous().disabled);
        assert!(control.next().disabled);
        assert_eq!(control.labels(), "« »");
    }

    #[test]
    fn test_render_rejects_out_of_range() {
        assert_eq!(
            PaginationControl::render(3, 4).unwrap_err(),
            ValidationError::PageOutOfRange {
                page: 4,
                total_pages: 3
            }
        );
        assert!(PaginationControl::render(3, 0).is_err());
        assert!(PaginationControl::render(0, 2).is_err());
    }

    #[test]
    fn test_exactly_one_active_link() {
        for total in 1..=12 {
            for current in 1..=total {
                let control = PaginationControl::render(total, current).unwrap();
                let active: Vec<_> = control.links().iter().filter(|l| l.active).collect();
                assert_eq!(active.len(), 1);
                assert_eq!(active[0].target, LinkTarget::Page(current));
                assert_eq!(control.previous().disabled, current == 1);
                assert_eq!(control.next().disabled, current == total);
            }
        }
    }

    #[test]
    fn test_click_previous_and_next() {
        let control = PaginationControl::render(9, 5).unwrap();
        let mut history = BrowserHistory::default();

        let mut loaded = Vec::new();
        control
            .click_target(LinkTarget::Previous, Resource::Movies, &mut history, |p| {
                loaded.push(p)
            })
            .unwrap();
        control
            .click_target(LinkTarget::Next, Resource::Movies, &mut history, |p| {
                loaded.push(p)
            })
            .unwrap();
        assert_eq!(loaded, vec![4, 6]);
        assert_eq!(history.current().url, "/movies/6");
    }

    #[test]
    fn test_click_numeric_pushes_state_once() {
        let control = PaginationControl::render(3, 1).unwrap();
        let mut history = BrowserHistory::default();
        let mut calls = 0;
        let page = control
            .click_target(LinkTarget::Page(3), Resource::Actors, &mut history, |p| {
                assert_eq!(p, 3);
                calls += 1;
            })
            .unwrap();
        assert_eq!(page, Some(3));
        assert_eq!(calls, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current().state,
            Some(NavigationState::new(Resource::Actors, 3))
        );
    }

    #[test]
    fn test_click_active_or_disabled_is_noop() {
        let control = PaginationControl::render(3, 1).unwrap();
        let mut history = BrowserHistory::default();
        let mut called = false;
        let active = control
            .click_target(LinkTarget::Page(1), Resource::Movies, &mut history, |_| {
                called = true
            })
            .unwrap();
        let disabled = control
            .click(0, Resource::Movies, &mut history, |_| called = true)
            .unwrap();
        assert_eq!((active, disabled), (None, None));
        assert!(!called);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_click_unknown_link() {
        let control = PaginationControl::render(2, 1).unwrap();
        let mut history = BrowserHistory::default();
        assert!(matches!(
            control.click(9, Resource::Movies, &mut history, |_| {}),
            Err(ValidationError::NoSuchLink(_))
        ));
        assert!(matches!(
            control.click_target(LinkTarget::Page(7), Resource::Movies, &mut history, |_| {}),
            Err(ValidationError::NoSuchLink(_))
        ));
    }
}
