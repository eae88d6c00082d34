//! Headless page model
//!
//! Elements carry marker classes and a hidden flag. Visibility rules and
//! the login chrome act on this model instead of a live DOM.

use std::collections::{BTreeMap, BTreeSet};

pub const NAV_MOVIES: &str = "nav-movies";
pub const NAV_ACTORS: &str = "nav-actors";
pub const CREATE_MOVIE: &str = "create-movie";
pub const CREATE_ACTOR: &str = "create-actor";
pub const EDIT_MOVIE: &str = "edit-movie";
pub const DELETE_MOVIE: &str = "delete-movie";
pub const EDIT_ACTOR: &str = "edit-actor";
pub const DELETE_ACTOR: &str = "delete-actor";
pub const LOGIN_BUTTON: &str = "login-button";
pub const LOGOUT_BUTTON: &str = "logout-button";
pub const LOGGED_OUT_BANNER: &str = "logged-out";
pub const USERNAME: &str = "username";

/// One page element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub classes: BTreeSet<String>,
    pub hidden: bool,
    pub text: String,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: BTreeSet::new(),
            hidden: false,
            text: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Elements keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed chrome of the catalog page, everything gated starts hidden
    pub fn standard() -> Self {
        let mut doc = Self::new();
        let gated = [
            (NAV_MOVIES, "read:movies"),
            (NAV_ACTORS, "read:actors"),
            (CREATE_MOVIE, "create:movies"),
            (CREATE_ACTOR, "create:actors"),
            (EDIT_MOVIE, "update:movies"),
            (EDIT_ACTOR, "update:actors"),
            (DELETE_MOVIE, "delete:movies"),
            (DELETE_ACTOR, "delete:actors"),
        ];
        for (id, class) in gated {
            doc.insert(Element::new(id).with_class(class).hidden());
        }
        doc.insert(Element::new(LOGIN_BUTTON));
        doc.insert(Element::new(LOGOUT_BUTTON).hidden());
        doc.insert(Element::new(LOGGED_OUT_BANNER));
        doc.insert(Element::new(USERNAME));
        doc
    }

    /// Insert or replace by id
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Set the hidden flag on every element tagged `class`; returns how many
    pub fn set_hidden_by_class(&mut self, class: &str, hidden: bool) -> usize {
        let mut count = 0;
        for element in self.elements.values_mut().filter(|e| e.has_class(class)) {
            element.hidden = hidden;
            count += 1;
        }
        count
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.hidden = hidden;
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| !e.hidden)
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.elements
            .values()
            .filter(|e| !e.hidden)
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Toggle login/logout buttons, the logged-out banner and the username
    pub fn set_logged_in(&mut self, logged_in: bool, username: &str) {
        self.set_hidden(LOGIN_BUTTON, logged_in);
        self.set_hidden(LOGOUT_BUTTON, !logged_in);
        self.set_hidden(LOGGED_OUT_BANNER, logged_in);
        if let Some(name) = self.elements.get_mut(USERNAME) {
            name.text = if logged_in {
                username.to_string()
            } else {
                String::new()
            };
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_hides_gated_elements() {
        let doc = Document::standard();
        assert!(!doc.is_visible(NAV_MOVIES));
        assert!(!doc.is_visible(DELETE_ACTOR));
        assert!(doc.is_visible(LOGIN_BUTTON));
        assert!(!doc.is_visible(LOGOUT_BUTTON));
    }

    #[test]
    fn test_set_hidden_by_class() {
        let mut doc = Document::new();
        doc.insert(Element::new("a").with_class("x"));
        doc.insert(Element::new("b").with_class("x").with_class("y"));
        doc.insert(Element::new("c"));
        assert_eq!(doc.set_hidden_by_class("x", true), 2);
        assert_eq!(doc.visible_ids(), vec!["c"]);
        assert_eq!(doc.set_hidden_by_class("missing", true), 0);
    }

    #[test]
    fn test_set_logged_in() {
        let mut doc = Document::standard();
        doc.set_logged_in(true, "Ada");
        assert!(doc.is_visible(LOGOUT_BUTTON));
        assert!(!doc.is_visible(LOGIN_BUTTON));
        assert!(!doc.is_visible(LOGGED_OUT_BANNER));
        assert_eq!(doc.get(USERNAME).unwrap().text, "Ada");

        doc.set_logged_in(false, "Ada");
        assert!(doc.is_visible(LOGIN_BUTTON));
        assert_eq!(doc.get(USERNAME).unwrap().text, "");
    }
}
